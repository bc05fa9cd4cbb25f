//! Pure budget math deriving character limits from ratios.
//!
//! Every function in this module is deterministic, side-effect free, and
//! total over its documented inputs: malformed or degenerate values
//! (zero ratios, missing target) degrade to neutral results instead of
//! failing.

use crate::section::{Section, SectionStore};

/// Sums content lengths (in characters) across all sections, in order.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::{SectionStore, budget};
///
/// let mut store = SectionStore::new();
/// store.add("A");
/// store.set_content("A", "hello");
/// assert_eq!(budget::total_content_length(&store), 5);
/// ```
#[must_use]
pub fn total_content_length(store: &SectionStore) -> usize {
    store.iter().map(Section::content_length).sum()
}

/// Sums ratios across all sections.
///
/// Returns `None` when the sum is exactly zero, signaling "no valid
/// distribution key" rather than an arithmetic sum of zero. An empty
/// store therefore yields `None`.
#[must_use]
pub fn total_ratio(store: &SectionStore) -> Option<u64> {
    let sum: u64 = store.iter().map(|s| u64::from(s.ratio)).sum();
    if sum == 0 { None } else { Some(sum) }
}

/// Returns the target count only when it is present and strictly positive.
///
/// A present-but-zero target is treated as absent for budget math,
/// though callers may still display it.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::budget;
///
/// assert_eq!(budget::valid_target_count(Some(100)), Some(100));
/// assert_eq!(budget::valid_target_count(Some(0)), None);
/// assert_eq!(budget::valid_target_count(None), None);
/// ```
#[must_use]
pub fn valid_target_count(target_count: Option<u64>) -> Option<u64> {
    target_count.filter(|&count| count > 0)
}

/// Computes the number of characters allotted per unit of ratio.
///
/// When both a valid target and a non-zero ratio sum exist, this is
/// their quotient. Otherwise `1.0` is returned as a neutral fallback so
/// downstream multiplication degenerates to "limit = ratio" rather than
/// crashing or propagating absence.
#[must_use]
pub fn unit_per_ratio(target_count: Option<u64>, store: &SectionStore) -> f64 {
    match (valid_target_count(target_count), total_ratio(store)) {
        (Some(target), Some(ratio_sum)) => target as f64 / ratio_sum as f64,
        _ => 1.0,
    }
}

/// Computes a section's character limit: `floor(unit * ratio)`.
///
/// Truncation, not rounding. A ratio of 0 always yields a limit of 0,
/// independent of the unit.
#[must_use]
pub fn section_limit(unit_per_ratio: f64, section: &Section) -> u64 {
    (unit_per_ratio * f64::from(section.ratio)).floor() as u64
}

/// Formats `current - limit` with an explicit leading `+` when positive.
///
/// Negative and zero deltas keep their natural sign. Used both for the
/// per-section over/under display and the whole-draft total-vs-target
/// display.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::budget;
///
/// assert_eq!(budget::signed_delta(120, 100), "+20");
/// assert_eq!(budget::signed_delta(80, 100), "-20");
/// assert_eq!(budget::signed_delta(100, 100), "0");
/// ```
#[must_use]
pub fn signed_delta(current: u64, limit: u64) -> String {
    let delta = current as i64 - limit as i64;
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_ratios(ratios: &[u32]) -> SectionStore {
        let sections = ratios
            .iter()
            .enumerate()
            .map(|(i, &ratio)| Section::with_ratio(format!("S{i}"), ratio))
            .collect();
        SectionStore::from_sections(sections)
    }

    #[test]
    fn total_ratio_of_empty_store_is_none() {
        assert_eq!(total_ratio(&SectionStore::new()), None);
    }

    #[test]
    fn total_ratio_of_all_zero_ratios_is_none() {
        assert_eq!(total_ratio(&store_with_ratios(&[0, 0, 0])), None);
    }

    #[test]
    fn total_ratio_sums_nonzero_ratios() {
        assert_eq!(total_ratio(&store_with_ratios(&[35, 15, 35, 15])), Some(100));
    }

    #[test]
    fn unit_per_ratio_is_neutral_without_distribution_key() {
        // Empty store: no ratio sum, so the unit falls back to 1.0
        // regardless of the target.
        assert_eq!(unit_per_ratio(Some(5000), &SectionStore::new()), 1.0);
        assert_eq!(unit_per_ratio(None, &SectionStore::new()), 1.0);
    }

    #[test]
    fn unit_per_ratio_is_neutral_without_valid_target() {
        let store = store_with_ratios(&[50, 50]);
        assert_eq!(unit_per_ratio(None, &store), 1.0);
        assert_eq!(unit_per_ratio(Some(0), &store), 1.0);
    }

    #[test]
    fn unit_per_ratio_divides_target_by_ratio_sum() {
        let store = store_with_ratios(&[50, 50]);
        assert_eq!(unit_per_ratio(Some(100), &store), 1.0);
        assert_eq!(unit_per_ratio(Some(300), &store), 3.0);
    }

    #[test]
    fn section_limit_floors_the_product() {
        let section = Section::with_ratio("A", 3);
        assert_eq!(section_limit(1.5, &section), 4);
    }

    #[test]
    fn section_limit_with_zero_ratio_is_always_zero() {
        let section = Section::with_ratio("A", 0);
        assert_eq!(section_limit(0.0, &section), 0);
        assert_eq!(section_limit(1.0, &section), 0);
        assert_eq!(section_limit(123.456, &section), 0);
    }

    #[test]
    fn signed_delta_formats_explicit_plus() {
        assert_eq!(signed_delta(150, 100), "+50");
    }

    #[test]
    fn signed_delta_keeps_natural_sign_for_negative_and_zero() {
        assert_eq!(signed_delta(50, 100), "-50");
        assert_eq!(signed_delta(0, 0), "0");
    }

    #[test]
    fn reference_scenario_two_equal_sections() {
        // target=100, ratios 50/50, no content.
        let store = store_with_ratios(&[50, 50]);
        let unit = unit_per_ratio(Some(100), &store);
        assert_eq!(unit, 1.0);

        let limits: Vec<_> = store.iter().map(|s| section_limit(unit, s)).collect();
        assert_eq!(limits, vec![50, 50]);

        let first = store.iter().next().unwrap();
        assert_eq!(signed_delta(first.content_length() as u64, limits[0]), "-50");
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Floor truncation may under-allocate, but the sum of limits
        /// never exceeds the target and falls short by at most one
        /// character per section.
        #[test]
        fn limit_sum_within_rounding_slack(
            ratios in prop::collection::vec(0u32..1000, 1..20),
            target in 1u64..1_000_000,
        ) {
            let sections: Vec<_> = ratios
                .iter()
                .enumerate()
                .map(|(i, &r)| Section::with_ratio(format!("S{i}"), r))
                .collect();
            let n = sections.len() as u64;
            let store = SectionStore::from_sections(sections);

            // Only meaningful when a distribution key exists.
            prop_assume!(total_ratio(&store).is_some());

            let unit = unit_per_ratio(Some(target), &store);
            let limit_sum: u64 = store.iter().map(|s| section_limit(unit, s)).sum();

            prop_assert!(limit_sum <= target, "allocated {limit_sum} over target {target}");
            prop_assert!(
                limit_sum + n >= target,
                "allocated {limit_sum}, more than {n} below target {target}"
            );
        }

        /// A zero ratio yields a zero limit for any unit.
        #[test]
        fn zero_ratio_always_yields_zero_limit(unit in 0.0f64..10_000.0) {
            let section = Section::with_ratio("A", 0);
            prop_assert_eq!(section_limit(unit, &section), 0);
        }

        /// The formatted delta always parses back to `current - limit`.
        #[test]
        fn signed_delta_roundtrips_numerically(current in 0u64..1_000_000, limit in 0u64..1_000_000) {
            let text = signed_delta(current, limit);
            let parsed: i64 = text.trim_start_matches('+').parse().expect("numeric delta");
            prop_assert_eq!(parsed, current as i64 - limit as i64);
        }
    }
}
