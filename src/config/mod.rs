pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::stats::StatisticsMode;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "data-filter", version)]
#[command(about = "Sort lines of text files into integers, floats and strings")]
pub struct CliConfig {
    /// Input files, read in the order given
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Directory for the result files (default: current directory)
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Prefix for the result file names
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,

    /// Append to existing result files instead of overwriting them
    #[arg(short = 'a', long)]
    pub append: bool,

    /// Print short statistics
    #[arg(short = 's', long = "short-stats")]
    pub short_stats: bool,

    /// Print full statistics (takes precedence over --short-stats)
    #[arg(short = 'f', long = "full-stats")]
    pub full_stats: bool,

    /// TOML file with default settings
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short = 'v', long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_files(&self) -> &[PathBuf] {
        &self.files
    }

    fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }

    fn append(&self) -> bool {
        self.append
    }

    fn statistics(&self) -> StatisticsMode {
        StatisticsMode::from_flags(self.short_stats, self.full_stats)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_file_name_prefix("prefix", self.prefix())?;

        if let Some(dir) = &self.output_dir {
            validation::validate_directory("output", dir)?;
        }

        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }

        Ok(())
    }
}
