//! Display metrics and colour capability probes

use super::{media_query_matches, window};
use crate::record::{ColorGamut, DynamicRange, Probed, ScreenInfo};

pub fn collect() -> ScreenInfo {
    let screen = window().and_then(|w| w.screen().ok());

    ScreenInfo {
        width: screen
            .as_ref()
            .and_then(|s| s.width().ok())
            .and_then(|w| u32::try_from(w).ok())
            .into(),
        height: screen
            .as_ref()
            .and_then(|s| s.height().ok())
            .and_then(|h| u32::try_from(h).ok())
            .into(),
        color_depth: screen
            .as_ref()
            .and_then(|s| s.color_depth().ok())
            .and_then(|d| u32::try_from(d).ok())
            .into(),
        dpr: window().map(|w| w.device_pixel_ratio()).into(),
        gamut: color_gamut(),
        range: dynamic_range(),
    }
}

/// Widest matching gamut wins; no match at all degrades to unavailable.
fn color_gamut() -> Probed<ColorGamut> {
    let queries = [
        ("(color-gamut: rec2020)", ColorGamut::Rec2020),
        ("(color-gamut: p3)", ColorGamut::P3),
        ("(color-gamut: srgb)", ColorGamut::Srgb),
    ];

    for (query, gamut) in queries {
        match media_query_matches(query) {
            Probed::Available(true) => return Probed::Available(gamut),
            Probed::Available(false) => continue,
            Probed::Unavailable => return Probed::Unavailable,
        }
    }
    Probed::Unavailable
}

fn dynamic_range() -> Probed<DynamicRange> {
    media_query_matches("(dynamic-range: high)").map(|high| {
        if high {
            DynamicRange::Hdr
        } else {
            DynamicRange::Sdr
        }
    })
}
