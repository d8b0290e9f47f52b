use thiserror::Error;

/// Errors surfaced by the benchmark programs.
///
/// The workloads themselves never fail; only reporting and workload
/// selection can.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Writing the report failed.
    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),

    /// No workload is registered under this name.
    #[error("unknown workload `{0}`")]
    UnknownWorkload(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
