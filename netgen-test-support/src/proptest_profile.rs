//! Environment-driven property-test sizing shared by every suite.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const NETGEN_PBT_CASES_ENV_KEY: &str = "NETGEN_PBT_CASES";

/// Case count for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyProfile {
    cases: u32,
}

impl PropertyProfile {
    /// Loads the profile, falling back to `default_cases` when the override
    /// is unset or invalid.
    ///
    /// # Examples
    /// ```
    /// use netgen_test_support::proptest_profile::PropertyProfile;
    ///
    /// let profile = PropertyProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let cases = match env::var(NETGEN_PBT_CASES_ENV_KEY) {
            Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
                ::tracing::warn!(
                    env = NETGEN_PBT_CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            }),
            Err(_) => default_cases,
        };
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }
}

/// Shorthand for `PropertyProfile::load(default_cases).cases()`.
#[must_use]
pub fn cases_from_env(default_cases: u32) -> u32 {
    PropertyProfile::load(default_cases).cases()
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvGuard {
        original: Option<String>,
    }

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let original = env::var(NETGEN_PBT_CASES_ENV_KEY).ok();
            // SAFETY: tests serialise access with ENV_LOCK.
            unsafe {
                match value {
                    Some(value) => env::set_var(NETGEN_PBT_CASES_ENV_KEY, value),
                    None => env::remove_var(NETGEN_PBT_CASES_ENV_KEY),
                }
            }
            Self { original }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: tests serialise access with ENV_LOCK.
            unsafe {
                match &self.original {
                    Some(value) => env::set_var(NETGEN_PBT_CASES_ENV_KEY, value),
                    None => env::remove_var(NETGEN_PBT_CASES_ENV_KEY),
                }
            }
        }
    }

    #[rstest]
    #[case::unset(None, 64)]
    #[case::one(Some("1"), 1)]
    #[case::padded(Some(" 250 "), 250)]
    #[case::zero(Some("0"), 64)]
    #[case::negative(Some("-1"), 64)]
    #[case::garbage(Some("abc"), 64)]
    fn load_applies_valid_overrides_only(#[case] raw: Option<&str>, #[case] expected: u32) {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _guard = EnvGuard::set(raw);
        assert_eq!(PropertyProfile::load(64).cases(), expected);
        assert_eq!(cases_from_env(64), expected);
    }
}
