//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    const KIB: u64 = 1024;
    const GIB: u64 = 1024 * 1024 * KIB;

    /// Generate a non-zero total memory in bytes
    ///
    /// Biased toward realistic kB-granular sizes from 256 MiB to 64 GiB,
    /// with the full `u64` range mixed in.
    pub fn total_memory() -> impl Strategy<Value = u64> {
        prop_oneof![
            3 => (256 * KIB..=64 * GIB / KIB).prop_map(|kib| kib * KIB),
            1 => 1..=u64::MAX,
        ]
    }

    /// Generate meminfo text with a `MemTotal` line somewhere in it
    pub fn meminfo_with_total() -> impl Strategy<Value = (String, u64)> {
        (
            prop::collection::vec(("[A-Z][A-Za-z]{2,12}", 0u64..10_000_000), 0..6),
            1u64..100_000_000,
            "[ \t]{1,8}",
        )
            .prop_map(|(rows, kib, pad)| {
                let mut text = String::new();
                for (name, value) in &rows {
                    if name != "MemTotal" {
                        text.push_str(&format!("{name}:{pad}{value} kB\n"));
                    }
                }
                text.push_str(&format!("MemTotal:{pad}{kib} kB\n"));
                (text, kib)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::infra::probe::parse_mem_total;
    use proptest::prelude::*;
    use std::path::Path;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_total_memory_generator(total in total_memory()) {
            prop_assert!(total > 0);
        }

        #[test]
        fn test_mem_total_found_anywhere((text, kib) in meminfo_with_total()) {
            prop_assert_eq!(parse_mem_total(&text, Path::new("meminfo")).unwrap(), kib * 1024);
        }
    }
}
