//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a plausible SDL release version string
    pub fn sdl_version() -> impl Strategy<Value = String> {
        (1u32..10, 0u32..20, 0u32..50)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_sdl_version_generator(version in sdl_version()) {
            let parts: Vec<&str> = version.split('.').collect();
            prop_assert_eq!(parts.len(), 3);
            for part in parts {
                prop_assert!(part.parse::<u32>().is_ok());
            }
        }
    }
}
