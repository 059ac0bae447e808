//! Installed-font probe
//!
//! Measures a fixed test string against each generic base family, then
//! re-measures with a candidate font requested ahead of the fallback. A
//! width difference against any baseline means the candidate is installed.

use web_sys::CanvasRenderingContext2d;

use super::{context_2d, offscreen_canvas};
use crate::record::Probed;

/// Candidate list; detection output preserves this order.
pub const FONT_CANDIDATES: [&str; 10] = [
    "Arial",
    "Times New Roman",
    "Courier New",
    "Roboto",
    "Georgia",
    "Verdana",
    "Trebuchet MS",
    "Fira Code",
    "JetBrains Mono",
    "Comic Sans MS",
];

const BASE_FAMILIES: [&str; 3] = ["monospace", "sans-serif", "serif"];

// Wide glyphs plus narrow ones amplify per-font width differences.
const TEST_STRING: &str = "mmmmmmmmmmlli";
const TEST_SIZE: &str = "72px";

pub fn collect() -> Probed<Vec<String>> {
    let Some(canvas) = offscreen_canvas() else {
        return Probed::Unavailable;
    };
    let Some(ctx) = context_2d(&canvas) else {
        return Probed::Unavailable;
    };

    let mut baselines = [0.0f64; BASE_FAMILIES.len()];
    for (i, base) in BASE_FAMILIES.iter().enumerate() {
        ctx.set_font(&format!("{TEST_SIZE} {base}"));
        match text_width(&ctx) {
            Some(width) => baselines[i] = width,
            None => return Probed::Unavailable,
        }
    }

    let detected = FONT_CANDIDATES
        .iter()
        .filter(|font| {
            BASE_FAMILIES.iter().enumerate().any(|(i, base)| {
                ctx.set_font(&format!("{TEST_SIZE} '{font}', {base}"));
                text_width(&ctx).is_some_and(|width| width != baselines[i])
            })
        })
        .map(|font| font.to_string())
        .collect();

    Probed::Available(detected)
}

fn text_width(ctx: &CanvasRenderingContext2d) -> Option<f64> {
    ctx.measure_text(TEST_STRING).ok().map(|m| m.width())
}
