//! Accessibility preference probes
//!
//! Individually low-entropy, but unusual combinations are highly
//! identifying, hence the high static risk tier for this group.

use super::media_query_matches;
use crate::record::AccessibilityPrefs;

pub fn collect() -> AccessibilityPrefs {
    AccessibilityPrefs {
        reduced_motion: media_query_matches("(prefers-reduced-motion: reduce)"),
        high_contrast: media_query_matches("(prefers-contrast: more)"),
        reduced_data: media_query_matches("(prefers-reduced-data: reduce)"),
    }
}
