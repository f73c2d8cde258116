use clap::Parser;
use envpeek::cli::{Cli, Output};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        Output::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
