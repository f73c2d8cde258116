use crate::cli::Output;
use crate::config::Config;
use crate::scan::PatternSet;
use anyhow::Result;

pub fn show(config: &Config) -> Result<()> {
    if config.files.is_empty() {
        Output::warning("No files configured");
        return Ok(());
    }

    println!();
    Output::list("Files:", &config.files);
    println!();
    Output::list("Flagged substrings:", PatternSet::sensitive().patterns());
    println!();
    Ok(())
}

pub fn init(force: bool) -> Result<()> {
    let path = Config::config_path();

    if path.exists() && !force {
        Output::warning(&format!("{} already exists", path.display()));
        Output::info("Use --force to overwrite it");
        return Ok(());
    }

    Config::default().save_to(&path)?;
    Output::success(&format!("Wrote {}", path.display()));
    Ok(())
}
