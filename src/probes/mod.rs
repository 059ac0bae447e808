//! Browser signal probes
//!
//! One module per observed capability. Every probe upholds the same
//! contract: it never throws across the boundary — any missing API,
//! rejected permission or unsupported feature collapses into
//! [`Probed::Unavailable`](crate::record::Probed) so the assembled record
//! keeps its full schema.
//!
//! Only the audio probe suspends (offline rendering); everything else runs
//! synchronously against the DOM.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::record::Probed;

pub mod accessibility;
pub mod audio;
pub mod canvas;
pub mod css;
pub mod devices;
pub mod fonts;
pub mod locale;
pub mod screen;
pub mod webgl;

pub(crate) fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

/// Transient off-screen canvas, never attached to the document.
pub(crate) fn offscreen_canvas() -> Option<HtmlCanvasElement> {
    let document = window()?.document()?;
    document
        .create_element("canvas")
        .ok()?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Evaluate a media query; unavailable if matchMedia is missing or rejects
/// the query.
pub(crate) fn media_query_matches(query: &str) -> Probed<bool> {
    let Some(win) = window() else {
        return Probed::Unavailable;
    };
    match win.match_media(query) {
        Ok(Some(list)) => Probed::Available(list.matches()),
        _ => Probed::Unavailable,
    }
}
