//! Benchmark support crate for netgen.
//!
//! Provides parameter types and the setup error used by the Criterion
//! benchmarks for network generation and the weighted index set.

pub mod error;
pub mod params;
