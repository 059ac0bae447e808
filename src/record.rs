//! Fingerprint record schema
//!
//! One acquisition pass produces exactly one [`FingerprintRecord`]. Every
//! leaf is a [`Probed`] value: either the observed signal or the
//! `"unavailable"` sentinel, so the serialized schema is total and hashing
//! never has to branch on missing keys.

use serde::{Serialize, Serializer};

/// Sentinel string emitted for any signal a probe could not observe.
pub const UNAVAILABLE: &str = "unavailable";

/// A probed browser signal: the observed value, or the sentinel.
///
/// Probes never propagate errors; every failure mode (missing API,
/// permission denial, unsupported feature) collapses to `Unavailable`.
/// Serializes as the inner value or the JSON string `"unavailable"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probed<T> {
    Available(T),
    Unavailable,
}

impl<T> Probed<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Probed::Available(_))
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Probed::Available(value) => Some(value),
            Probed::Unavailable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Probed<U> {
        match self {
            Probed::Available(value) => Probed::Available(f(value)),
            Probed::Unavailable => Probed::Unavailable,
        }
    }
}

impl<T> Default for Probed<T> {
    fn default() -> Self {
        Probed::Unavailable
    }
}

impl<T> From<Option<T>> for Probed<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Probed::Available(v),
            None => Probed::Unavailable,
        }
    }
}

impl<T: Serialize> Serialize for Probed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Probed::Available(value) => value.serialize(serializer),
            Probed::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

/// Colour gamut reported by the `color-gamut` media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorGamut {
    Srgb,
    P3,
    Rec2020,
}

/// Dynamic range reported by the `dynamic-range` media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DynamicRange {
    #[serde(rename = "SDR")]
    Sdr,
    #[serde(rename = "HDR")]
    Hdr,
}

/// Display metrics and colour capabilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInfo {
    pub width: Probed<u32>,
    pub height: Probed<u32>,
    pub color_depth: Probed<u32>,
    pub dpr: Probed<f64>,
    pub gamut: Probed<ColorGamut>,
    pub range: Probed<DynamicRange>,
}

/// Accessibility media-query preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityPrefs {
    pub reduced_motion: Probed<bool>,
    pub high_contrast: Probed<bool>,
    pub reduced_data: Probed<bool>,
}

impl AccessibilityPrefs {
    /// True when any preference is observed as enabled.
    pub fn any_enabled(&self) -> bool {
        [self.reduced_motion, self.high_contrast, self.reduced_data]
            .iter()
            .any(|p| matches!(p, Probed::Available(true)))
    }
}

/// CSS feature support flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssSupport {
    pub filter: Probed<bool>,
    pub container: Probed<bool>,
    pub tech: Probed<bool>,
    pub accent: Probed<bool>,
}

impl CssSupport {
    /// True when any feature is observed as supported.
    pub fn any_supported(&self) -> bool {
        [self.filter, self.container, self.tech, self.accent]
            .iter()
            .any(|p| matches!(p, Probed::Available(true)))
    }
}

/// Unmasked WebGL vendor/renderer strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebGlInfo {
    pub vendor: Probed<String>,
    pub renderer: Probed<String>,
}

/// The canonical output of one acquisition pass.
///
/// Immutable once assembled; hashing, scoring and remediation only read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintRecord {
    pub screen: ScreenInfo,
    pub accessibility: AccessibilityPrefs,
    pub supports: CssSupport,
    pub timezone: Probed<String>,
    /// Locale tags in user preference order. The order matters for the
    /// locale/timezone remediation rule, not for hashing.
    pub languages: Probed<Vec<String>>,
    pub hardware_concurrency: Probed<u32>,
    /// Approximate device memory in GiB.
    pub memory: Probed<u32>,
    pub touch: Probed<u32>,
    /// Data-URI serialization of the rendered canvas scene.
    pub canvas: Probed<String>,
    /// Decimal string of the summed offline-audio sample magnitudes.
    pub audio: Probed<String>,
    /// Comma-joined supported MIME type identifiers.
    pub mime: Probed<String>,
    /// Candidate fonts that tested positive, in candidate-list order.
    pub fonts: Probed<Vec<String>>,
    pub webgl: WebGlInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probed_serializes_value_or_sentinel() {
        let available: Probed<u32> = Probed::Available(42);
        assert_eq!(serde_json::to_string(&available).unwrap(), "42");

        let unavailable: Probed<u32> = Probed::Unavailable;
        assert_eq!(
            serde_json::to_string(&unavailable).unwrap(),
            "\"unavailable\""
        );
    }

    #[test]
    fn enums_use_wire_names() {
        assert_eq!(serde_json::to_string(&ColorGamut::P3).unwrap(), "\"p3\"");
        assert_eq!(
            serde_json::to_string(&ColorGamut::Rec2020).unwrap(),
            "\"rec2020\""
        );
        assert_eq!(serde_json::to_string(&DynamicRange::Hdr).unwrap(), "\"HDR\"");
        assert_eq!(serde_json::to_string(&DynamicRange::Sdr).unwrap(), "\"SDR\"");
    }

    #[test]
    fn default_record_is_fully_unavailable() {
        let record = FingerprintRecord::default();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["timezone"], "unavailable");
        assert_eq!(json["hardwareConcurrency"], "unavailable");
        assert_eq!(json["screen"]["colorDepth"], "unavailable");
        assert_eq!(json["accessibility"]["reducedMotion"], "unavailable");
        assert_eq!(json["webgl"]["renderer"], "unavailable");
    }

    #[test]
    fn camel_case_keys_on_the_wire() {
        let json = serde_json::to_value(FingerprintRecord::default()).unwrap();
        let screen = json["screen"].as_object().unwrap();
        assert!(screen.contains_key("colorDepth"));
        assert!(!screen.contains_key("color_depth"));

        let accessibility = json["accessibility"].as_object().unwrap();
        assert!(accessibility.contains_key("highContrast"));
    }

    #[test]
    fn helper_predicates() {
        let prefs = AccessibilityPrefs {
            reduced_motion: Probed::Available(false),
            high_contrast: Probed::Unavailable,
            reduced_data: Probed::Available(true),
        };
        assert!(prefs.any_enabled());
        assert!(!AccessibilityPrefs::default().any_enabled());

        let supports = CssSupport {
            filter: Probed::Available(true),
            ..Default::default()
        };
        assert!(supports.any_supported());
        assert!(!CssSupport::default().any_supported());
    }
}
