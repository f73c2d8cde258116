mod config;
mod scan;

use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envpeek")]
#[command(about = "Peek at local env files and flag lines that look like credentials", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file listing the files to look at (defaults to ./envpeek.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the full contents of each file
    Read {
        /// Files to read (overrides config)
        files: Vec<String>,
    },

    /// Print lines mentioning PASSWORD, SECRET or KEY
    #[command(alias = "filter")]
    Grep {
        /// Files to scan (overrides config)
        files: Vec<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the files that will be looked at
    Show,
    /// Write a default envpeek.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => {
                let files = self.targets(&[])?;
                scan::grep(&files)?;
                scan::read(&files)
            }
            Some(Commands::Read { files }) => scan::read(&self.targets(files)?),
            Some(Commands::Grep { files }) => scan::grep(&self.targets(files)?),
            Some(Commands::Config { action }) => match action {
                ConfigAction::Show => config::show(&self.load_config()?),
                ConfigAction::Init { force } => config::init(*force),
            },
        }
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::discover(),
        }
    }

    /// Explicit file arguments win over whatever the config says.
    fn targets(&self, files: &[String]) -> Result<Vec<String>> {
        if !files.is_empty() {
            return Ok(files.to_vec());
        }
        Ok(self.load_config()?.files)
    }
}
