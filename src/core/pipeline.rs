use crate::core::{ConfigProvider, LineKind, LoadReport, Partition, Pipeline, Storage};
use crate::utils::error::Result;

pub struct FilterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilterPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        if self.config.input_files().is_empty() {
            tracing::warn!("No input files given");
        }

        for path in self.config.input_files() {
            tracing::debug!("Reading {}", path.display());
            match self.storage.read_lines(path, &mut lines).await {
                Ok(count) => tracing::debug!("Read {} lines from {}", count, path.display()),
                // a bad file is skipped; lines read before the failure are kept
                Err(e) => tracing::warn!("{}", e),
            }
        }

        Ok(lines)
    }

    async fn transform(&self, lines: Vec<String>) -> Result<Partition> {
        let partition = Partition::from_lines(lines);

        tracing::debug!(
            "Classified {} integers, {} floats, {} strings",
            partition.count(LineKind::Integer),
            partition.count(LineKind::Float),
            partition.count(LineKind::Text)
        );

        Ok(partition)
    }

    async fn load(&self, partition: &Partition) -> Result<LoadReport> {
        let layout = self.config.output_layout();
        let append = self.config.append();
        let mut report = LoadReport::default();

        for kind in LineKind::ALL {
            let lines = partition.lines(kind);
            if lines.is_empty() {
                tracing::debug!("No {} found, leaving output untouched", kind);
                continue;
            }

            let path = layout.path_for(kind);
            tracing::debug!(
                "Writing {} lines to {} (append: {})",
                lines.len(),
                path.display(),
                append
            );

            match self.storage.write_lines(&path, &lines, append).await {
                Ok(()) => report.written.push(path),
                Err(e) => {
                    tracing::error!("{}", e);
                    report.failed.push((path, e.to_string()));
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OutputLayout;
    use crate::domain::stats::StatisticsMode;
    use crate::utils::error::FilterError;
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        inputs: Arc<Mutex<HashMap<PathBuf, Vec<String>>>>,
        // inputs that fail after yielding their lines
        broken_inputs: Arc<Mutex<HashSet<PathBuf>>>,
        outputs: Arc<Mutex<HashMap<PathBuf, Vec<String>>>>,
        read_only: Arc<Mutex<HashSet<PathBuf>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self::default()
        }

        async fn add_input(&self, path: &str, lines: &[&str]) {
            let mut inputs = self.inputs.lock().await;
            inputs.insert(
                PathBuf::from(path),
                lines.iter().map(|s| s.to_string()).collect(),
            );
        }

        async fn break_input(&self, path: &str) {
            self.broken_inputs.lock().await.insert(PathBuf::from(path));
        }

        async fn deny_write(&self, path: &str) {
            self.read_only.lock().await.insert(PathBuf::from(path));
        }

        async fn set_output(&self, path: &str, lines: &[&str]) {
            let mut outputs = self.outputs.lock().await;
            outputs.insert(
                PathBuf::from(path),
                lines.iter().map(|s| s.to_string()).collect(),
            );
        }

        async fn get_output(&self, path: &str) -> Option<Vec<String>> {
            let outputs = self.outputs.lock().await;
            outputs.get(Path::new(path)).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_lines(&self, path: &Path, lines: &mut Vec<String>) -> Result<usize> {
            let inputs = self.inputs.lock().await;
            let content = inputs.get(path).ok_or_else(|| FilterError::InputNotFound {
                path: path.to_path_buf(),
            })?;
            lines.extend(content.iter().cloned());

            if self.broken_inputs.lock().await.contains(path) {
                return Err(FilterError::InputError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::Other,
                        "device read failed",
                    ),
                });
            }

            Ok(content.len())
        }

        async fn write_lines(&self, path: &Path, lines: &[&str], append: bool) -> Result<()> {
            if self.read_only.lock().await.contains(path) {
                return Err(FilterError::OutputError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::PermissionDenied,
                        "permission denied",
                    ),
                });
            }

            let mut outputs = self.outputs.lock().await;
            let entry = outputs.entry(path.to_path_buf()).or_default();
            if !append {
                entry.clear();
            }
            entry.extend(lines.iter().map(|s| s.to_string()));
            Ok(())
        }
    }

    struct MockConfig {
        input_files: Vec<PathBuf>,
        output_dir: Option<PathBuf>,
        prefix: String,
        append: bool,
    }

    impl MockConfig {
        fn new(files: &[&str]) -> Self {
            Self {
                input_files: files.iter().map(PathBuf::from).collect(),
                output_dir: None,
                prefix: String::new(),
                append: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_files(&self) -> &[PathBuf] {
            &self.input_files
        }

        fn output_dir(&self) -> Option<&Path> {
            self.output_dir.as_deref()
        }

        fn prefix(&self) -> &str {
            &self.prefix
        }

        fn append(&self) -> bool {
            self.append
        }

        fn statistics(&self) -> StatisticsMode {
            StatisticsMode::None
        }
    }

    #[tokio::test]
    async fn test_extract_reads_files_in_order() {
        let storage = MockStorage::new();
        storage.add_input("in1.txt", &["Lorem ipsum", "45"]).await;
        storage.add_input("in2.txt", &["1.5", "text"]).await;

        let pipeline = FilterPipeline::new(storage, MockConfig::new(&["in2.txt", "in1.txt"]));
        let lines = pipeline.extract().await.unwrap();

        assert_eq!(lines, vec!["1.5", "text", "Lorem ipsum", "45"]);
    }

    #[tokio::test]
    async fn test_extract_skips_missing_file() {
        let storage = MockStorage::new();
        storage.add_input("present.txt", &["1", "2"]).await;

        let pipeline =
            FilterPipeline::new(storage, MockConfig::new(&["missing.txt", "present.txt"]));
        let lines = pipeline.extract().await.unwrap();

        assert_eq!(lines, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_extract_keeps_lines_before_read_error() {
        let storage = MockStorage::new();
        storage.add_input("broken.txt", &["partial"]).await;
        storage.break_input("broken.txt").await;
        storage.add_input("next.txt", &["after"]).await;

        let pipeline =
            FilterPipeline::new(storage, MockConfig::new(&["broken.txt", "next.txt"]));
        let lines = pipeline.extract().await.unwrap();

        assert_eq!(lines, vec!["partial", "after"]);
    }

    #[tokio::test]
    async fn test_extract_without_inputs() {
        let pipeline = FilterPipeline::new(MockStorage::new(), MockConfig::new(&[]));
        assert!(pipeline.extract().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transform_partitions_lines() {
        let pipeline = FilterPipeline::new(MockStorage::new(), MockConfig::new(&[]));
        let partition = pipeline
            .transform(vec!["1".to_string(), "x".to_string(), "2.0".to_string()])
            .await
            .unwrap();

        assert_eq!(partition.lines(LineKind::Integer), vec!["1"]);
        assert_eq!(partition.lines(LineKind::Float), vec!["2.0"]);
        assert_eq!(partition.lines(LineKind::Text), vec!["x"]);
    }

    #[tokio::test]
    async fn test_load_skips_empty_kinds() {
        let storage = MockStorage::new();
        storage.set_output("floats.txt", &["old"]).await;

        let pipeline = FilterPipeline::new(storage.clone(), MockConfig::new(&[]));
        let partition = Partition::from_lines(vec!["7".to_string(), "seven".to_string()]);
        let report = pipeline.load(&partition).await.unwrap();

        assert!(report.is_complete());
        assert_eq!(
            report.written,
            vec![PathBuf::from("integers.txt"), PathBuf::from("strings.txt")]
        );
        assert_eq!(storage.get_output("integers.txt").await.unwrap(), vec!["7"]);
        assert_eq!(storage.get_output("strings.txt").await.unwrap(), vec!["seven"]);
        // no floats this run, so the old file is left alone
        assert_eq!(storage.get_output("floats.txt").await.unwrap(), vec!["old"]);
    }

    #[tokio::test]
    async fn test_load_uses_layout_and_append() {
        let storage = MockStorage::new();
        storage.set_output("out/pre_integers.txt", &["1"]).await;

        let mut config = MockConfig::new(&[]);
        config.output_dir = Some(PathBuf::from("out"));
        config.prefix = "pre_".to_string();
        config.append = true;
        assert_eq!(
            config.output_layout(),
            OutputLayout::new(Some(PathBuf::from("out")), "pre_")
        );

        let pipeline = FilterPipeline::new(storage.clone(), config);
        let partition = Partition::from_lines(vec!["2".to_string(), "3".to_string()]);
        pipeline.load(&partition).await.unwrap();

        assert_eq!(
            storage.get_output("out/pre_integers.txt").await.unwrap(),
            vec!["1", "2", "3"]
        );
    }

    #[tokio::test]
    async fn test_load_continues_after_write_failure() {
        let storage = MockStorage::new();
        storage.deny_write("integers.txt").await;

        let pipeline = FilterPipeline::new(storage.clone(), MockConfig::new(&[]));
        let partition = Partition::from_lines(vec!["1".to_string(), "1.5".to_string()]);
        let report = pipeline.load(&partition).await.unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, PathBuf::from("integers.txt"));
        assert_eq!(report.written, vec![PathBuf::from("floats.txt")]);
        assert_eq!(storage.get_output("floats.txt").await.unwrap(), vec!["1.5"]);

        let err = report.ensure_complete().unwrap_err();
        assert!(matches!(
            err,
            FilterError::PartialOutput {
                failed: 1,
                total: 2
            }
        ));
    }
}
