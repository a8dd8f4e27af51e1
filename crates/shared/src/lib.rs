pub mod ethrpc;
pub mod tracing;
