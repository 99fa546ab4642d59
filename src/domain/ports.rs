use crate::domain::model::{OutputLayout, Partition};
use crate::domain::stats::StatisticsMode;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Appends lines to `lines` as they are read, so whatever was read before
    /// a failure stays there. Returns the number of lines read.
    fn read_lines(
        &self,
        path: &Path,
        lines: &mut Vec<String>,
    ) -> impl std::future::Future<Output = Result<usize>> + Send;

    fn write_lines(
        &self,
        path: &Path,
        lines: &[&str],
        append: bool,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_files(&self) -> &[PathBuf];
    fn output_dir(&self) -> Option<&Path>;
    fn prefix(&self) -> &str;
    fn append(&self) -> bool;
    fn statistics(&self) -> StatisticsMode;

    fn output_layout(&self) -> OutputLayout {
        OutputLayout::new(self.output_dir().map(Path::to_path_buf), self.prefix())
    }
}

/// Outcome of the load phase. Write failures are collected here instead of
/// aborting, so the remaining kinds still get written.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn ensure_complete(&self) -> Result<()> {
        if self.is_complete() {
            return Ok(());
        }
        Err(crate::utils::error::FilterError::PartialOutput {
            failed: self.failed.len(),
            total: self.failed.len() + self.written.len(),
        })
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<Partition>;
    async fn load(&self, partition: &Partition) -> Result<LoadReport>;
}
