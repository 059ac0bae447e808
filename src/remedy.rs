//! Risk classification and remediation rules
//!
//! Two independent lookup mechanisms over the record:
//!
//! - a static per-attribute risk tier table, independent of observed values
//!   and of the uniqueness score;
//! - an ordered list of `(guard, fix template)` rules evaluated in fixed
//!   priority order. Guards are total: an unavailable field makes the guard
//!   false, never an error.

use serde::Serialize;
use std::fmt;

use crate::record::FingerprintRecord;

/// Coarse, statically assigned identifying power of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

/// One row of the static risk table handed to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeRisk {
    pub attribute: &'static str,
    pub tier: RiskTier,
    pub note: &'static str,
}

/// Static attribute-to-tier assignment. Not derived from the score.
pub static RISK_TABLE: [AttributeRisk; 14] = [
    AttributeRisk {
        attribute: "audio",
        tier: RiskTier::High,
        note: "The hash generated by the audio compressor can determine audio stacks.",
    },
    AttributeRisk {
        attribute: "fonts",
        tier: RiskTier::High,
        note: "Font combinations are often highly unique and stable.",
    },
    AttributeRisk {
        attribute: "canvas",
        tier: RiskTier::High,
        note: "The hash generated by a high-entropy canvas can reveal GPU drivers and OS graphics stacks.",
    },
    AttributeRisk {
        attribute: "accessibility",
        tier: RiskTier::High,
        note: "Accessibility preferences can be very unique when viewed in combination.",
    },
    AttributeRisk {
        attribute: "css supports",
        tier: RiskTier::High,
        note: "CSS supports can reveal browser information when viewed in combination.",
    },
    AttributeRisk {
        attribute: "screen",
        tier: RiskTier::Medium,
        note: "Unusual screen setups can increase fingerprint uniqueness.",
    },
    AttributeRisk {
        attribute: "colour",
        tier: RiskTier::Medium,
        note: "Unusual colour setups can reveal device characteristics.",
    },
    AttributeRisk {
        attribute: "mime types",
        tier: RiskTier::Medium,
        note: "Supported MIME types can reveal browser version information and personal preferences.",
    },
    AttributeRisk {
        attribute: "gpu",
        tier: RiskTier::Medium,
        note: "Graphics hardware helps distinguish devices.",
    },
    AttributeRisk {
        attribute: "cpu threads",
        tier: RiskTier::Medium,
        note: "CPU thread count can narrow device types.",
    },
    AttributeRisk {
        attribute: "ram count",
        tier: RiskTier::Medium,
        note: "Unusual RAM counts can often distinguish devices.",
    },
    AttributeRisk {
        attribute: "languages",
        tier: RiskTier::Low,
        note: "Installed languages are rarely changed, but may still be a factor.",
    },
    AttributeRisk {
        attribute: "touchscreen",
        tier: RiskTier::Low,
        note: "The number of touchpoints can differentiate device types.",
    },
    AttributeRisk {
        attribute: "locale",
        tier: RiskTier::Low,
        note: "Common locales offer little uniqueness but still contribute.",
    },
];

/// Look up the static tier for a displayed attribute key.
pub fn tier_for(attribute: &str) -> Option<RiskTier> {
    RISK_TABLE
        .iter()
        .find(|row| row.attribute == attribute)
        .map(|row| row.tier)
}

/// Difficulty tier of a remediation suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FixEase {
    #[serde(rename = "Easy Fix")]
    Easy,
    #[serde(rename = "Medium Fix")]
    Medium,
    #[serde(rename = "Hard Fix")]
    Hard,
    #[serde(rename = "")]
    None,
}

impl fmt::Display for FixEase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FixEase::Easy => "Easy Fix",
            FixEase::Medium => "Medium Fix",
            FixEase::Hard => "Hard Fix",
            FixEase::None => "",
        };
        f.write_str(label)
    }
}

/// One remediation suggestion, cross-referenced to a displayed attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixEntry {
    pub issue: String,
    pub fix: String,
    pub related: String,
    pub ease: FixEase,
}

struct FixRule {
    related: &'static str,
    ease: FixEase,
    issue: &'static str,
    fix: &'static str,
    guard: fn(&FingerprintRecord) -> bool,
}

impl FixRule {
    fn entry(&self) -> FixEntry {
        FixEntry {
            issue: self.issue.into(),
            fix: self.fix.into(),
            related: self.related.into(),
            ease: self.ease,
        }
    }
}

/// Resolutions common enough to carry no weight, as (width, height).
const COMMON_RESOLUTIONS: [(u32, u32); 3] = [(1920, 1080), (1366, 768), (1536, 864)];

/// Device memory values (GiB) common enough to carry no weight.
const COMMON_MEMORY: [u32; 3] = [4, 8, 16];

fn primary_base_subtag(record: &FingerprintRecord) -> Option<String> {
    let languages = record.languages.available()?;
    let primary = languages.first()?;
    let base = primary.split('-').next()?.trim().to_ascii_lowercase();
    if base.is_empty() {
        None
    } else {
        Some(base)
    }
}

/// Ordered rule set. Priority is the slice order; evaluation never reorders.
static FIX_RULES: [FixRule; 16] = [
    FixRule {
        related: "gpu",
        ease: FixEase::Easy,
        issue: "GPU reveals hardware details",
        fix: "Use a privacy focused browser to obscure GPU information.",
        guard: |r| r.webgl.renderer.is_available(),
    },
    FixRule {
        related: "cpu threads",
        ease: FixEase::Easy,
        issue: "Unusual number of CPU threads",
        fix: "Consider using a privacy focused browser to obfuscate CPU threads.",
        guard: |r| r.hardware_concurrency.available().is_some_and(|c| c % 2 != 0),
    },
    FixRule {
        related: "audio",
        ease: FixEase::Easy,
        issue: "Audio stack is measurable",
        fix: "Use a browser that blocks or adds noise to offline audio rendering.",
        guard: |r| r.audio.is_available(),
    },
    FixRule {
        related: "canvas",
        ease: FixEase::Easy,
        issue: "Canvas rendering is readable",
        fix: "Enable canvas fingerprint protection so rendered pixels cannot be read back.",
        guard: |r| r.canvas.is_available(),
    },
    FixRule {
        related: "css supports",
        ease: FixEase::Easy,
        issue: "CSS feature support narrows your browser",
        fix: "Keep your browser up to date so its feature set matches the mainstream.",
        guard: |r| r.supports.any_supported(),
    },
    FixRule {
        related: "mime types",
        ease: FixEase::Medium,
        issue: "Large set of registered MIME types",
        fix: "Remove unused plugins and handlers to shrink the advertised MIME list.",
        guard: |r| {
            r.mime
                .available()
                .is_some_and(|m| m.split(',').filter(|s| !s.trim().is_empty()).count() > 5)
        },
    },
    FixRule {
        related: "languages",
        ease: FixEase::Medium,
        issue: "High quantity of installed languages",
        fix: "Consider deleting unnecessary languages.",
        guard: |r| r.languages.available().is_some_and(|l| l.len() > 2),
    },
    FixRule {
        related: "locale",
        ease: FixEase::Medium,
        issue: "Language and timezone do not match",
        fix: "Align your primary language with your timezone, or mask one of them.",
        // Known-weak heuristic, preserved as specified: a bare substring
        // check of the primary base subtag against the timezone identifier.
        guard: |r| match (primary_base_subtag(r), r.timezone.available()) {
            (Some(base), Some(tz)) => !tz.to_ascii_lowercase().contains(&base),
            _ => false,
        },
    },
    FixRule {
        related: "fonts",
        ease: FixEase::Medium,
        issue: "High font uniqueness",
        fix: "Remove uncommon developer fonts like Fira Code, or use a privacy focused browser.",
        guard: |r| r.fonts.available().is_some_and(|f| f.len() > 3),
    },
    FixRule {
        related: "touchscreen",
        ease: FixEase::Hard,
        issue: "Unusual touchpoint count",
        fix: "Devices with atypical touch support stand out; use a standard input profile.",
        guard: |r| r.touch.available().is_some_and(|t| *t > 0 && *t != 5),
    },
    FixRule {
        related: "accessibility",
        ease: FixEase::Hard,
        issue: "Accessibility preferences are exposed",
        fix: "Accessibility overrides are rare in combination; disable any you do not rely on.",
        guard: |r| r.accessibility.any_enabled(),
    },
    FixRule {
        related: "screen",
        ease: FixEase::Hard,
        issue: "Non-standard display scaling",
        fix: "Use 100% or 200% display scaling to blend in with common setups.",
        guard: |r| {
            r.screen
                .dpr
                .available()
                .is_some_and(|dpr| *dpr != 1.0 && *dpr != 2.0)
        },
    },
    FixRule {
        related: "colour",
        ease: FixEase::Hard,
        issue: "Unusual colour depth",
        fix: "Use a standard 24-bit display profile.",
        guard: |r| r.screen.color_depth.available().is_some_and(|d| *d != 24),
    },
    FixRule {
        related: "colour",
        ease: FixEase::Hard,
        issue: "Wide colour gamut display",
        fix: "A non-sRGB gamut marks out premium displays; an sRGB profile blends in better.",
        guard: |r| {
            r.screen
                .gamut
                .available()
                .is_some_and(|g| *g != crate::record::ColorGamut::Srgb)
        },
    },
    FixRule {
        related: "screen",
        ease: FixEase::Hard,
        issue: "Uncommon screen resolution",
        fix: "Use more common window sizes like 1920x1080 or 1366x768 to blend in with typical users.",
        guard: |r| match (r.screen.width.available(), r.screen.height.available()) {
            (Some(w), Some(h)) => !COMMON_RESOLUTIONS.contains(&(*w, *h)),
            _ => false,
        },
    },
    FixRule {
        related: "ram count",
        ease: FixEase::Hard,
        issue: "Unusual reported device memory",
        fix: "Common devices report 4, 8 or 16 GiB of memory; other values stand out.",
        guard: |r| r.memory.available().is_some_and(|m| !COMMON_MEMORY.contains(m)),
    },
];

/// Sentinel entry emitted when no rule fires.
pub fn no_risk_entry() -> FixEntry {
    FixEntry {
        issue: "No major fingerprinting risks detected".into(),
        fix: "Good job.".into(),
        related: String::new(),
        ease: FixEase::None,
    }
}

/// Evaluate every remediation rule against the record, in priority order.
///
/// Pure and total: guards never throw and unavailable fields fail them.
pub fn evaluate_fixes(record: &FingerprintRecord) -> Vec<FixEntry> {
    let fixes: Vec<FixEntry> = FIX_RULES
        .iter()
        .filter(|rule| (rule.guard)(record))
        .map(FixRule::entry)
        .collect();

    if fixes.is_empty() {
        vec![no_risk_entry()]
    } else {
        fixes
    }
}
