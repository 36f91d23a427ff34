//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// File name used when neither the CLI nor the config names a destination
pub(crate) const DEFAULT_FILE_NAME: &str = "applications.csv";

#[derive(Debug, Parser)]
#[command(name = "apptrack")]
#[command(about = "Append application records to a CSV file.", version)]
pub(crate) struct Cli {
    /// Path to output CSV file (default: ./applications.csv)
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Run non-interactive demo that writes two example records
    #[arg(long)]
    pub(crate) demo: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.output.is_none() {
            self.output = config.output.clone();
        }
        self
    }

    /// Destination file: explicit path, else `applications.csv` beside the executable.
    pub(crate) fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
}
