//! Shared test utilities for `netgen-core`.

use netgen_test_support::proptest_profile::PropertyProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a proptest configuration sized by `NETGEN_PBT_CASES`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: PropertyProfile::load(default_cases).cases(),
        ..ProptestConfig::default()
    }
}
