//! Shared test utilities used across netgen crates.
//!
//! Kept free of a `netgen-core` dependency so the core crate can use it as a
//! dev-dependency; parameter fixtures are therefore raw ordered arrays.

pub mod fixtures;
pub mod proptest_profile;
pub mod tracing;
