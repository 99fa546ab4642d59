// Domain layer: line classification, numeric types, statistics and the ports
// the pipeline is built on. No I/O happens in here.

pub mod classify;
pub mod decimal;
pub mod model;
pub mod ports;
pub mod stats;
