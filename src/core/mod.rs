pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{LineKind, OutputLayout, Partition};
pub use crate::domain::ports::{ConfigProvider, LoadReport, Pipeline, Storage};
pub use crate::utils::error::Result;
