//! Benchmark setup error type.
//!
//! Lets setup functions propagate generator failures with `?` instead of
//! using `.expect()`.

use netgen_core::{IndexSetError, NetgenError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Network generation rejected the workload.
    #[error("network generation failed: {0}")]
    Netgen(#[from] NetgenError),
    /// The index set could not be built or sampled.
    #[error("index set operation failed: {0}")]
    IndexSet(#[from] IndexSetError),
}
