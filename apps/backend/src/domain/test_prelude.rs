//! Shared proptest configuration for domain property tests.
//!
//! Env knobs:
//! - PROPTEST_CASES: number of cases per property (default 64).
//! - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    let base = ProptestConfig::default();

    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    let max_shrink_time = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // Unit tests do not keep regression files
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
