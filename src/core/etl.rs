use crate::core::{LineKind, LoadReport, Partition, Pipeline};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub partition: Partition,
    pub load: LoadReport,
}

pub struct FilterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FilterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting filter run");

        // Extract
        let lines = self.pipeline.extract().await?;
        tracing::info!("Extracted {} lines", lines.len());

        // Transform
        let partition = self.pipeline.transform(lines).await?;
        tracing::info!(
            "Classified {} integers, {} floats, {} strings",
            partition.count(LineKind::Integer),
            partition.count(LineKind::Float),
            partition.count(LineKind::Text)
        );

        // Load
        let load = self.pipeline.load(&partition).await?;
        for path in &load.written {
            tracing::info!("Output saved to: {}", path.display());
        }

        Ok(RunSummary { partition, load })
    }
}
