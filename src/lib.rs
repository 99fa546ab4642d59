pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::{
    etl::{FilterEngine, RunSummary},
    pipeline::FilterPipeline,
};
pub use domain::model::{LineKind, OutputLayout, Partition};
pub use domain::stats::{render, Statistics, StatisticsMode};
pub use utils::error::{FilterError, Result};
