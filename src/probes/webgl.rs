//! WebGL renderer identification probe
//!
//! Reads the unmasked vendor/renderer strings through the
//! `WEBGL_debug_renderer_info` extension. A missing context or extension
//! yields an all-unavailable pair.

use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext, WebglDebugRendererInfo};

use super::offscreen_canvas;
use crate::record::{Probed, WebGlInfo};

pub fn collect() -> WebGlInfo {
    probe().unwrap_or_default()
}

fn probe() -> Option<WebGlInfo> {
    let canvas = offscreen_canvas()?;
    let gl = webgl_context(&canvas)?;

    // The extension object carries no methods; obtaining it is what unlocks
    // the unmasked parameter queries.
    gl.get_extension("WEBGL_debug_renderer_info").ok()??;

    Some(WebGlInfo {
        vendor: unmasked_parameter(&gl, WebglDebugRendererInfo::UNMASKED_VENDOR_WEBGL),
        renderer: unmasked_parameter(&gl, WebglDebugRendererInfo::UNMASKED_RENDERER_WEBGL),
    })
}

fn webgl_context(canvas: &HtmlCanvasElement) -> Option<WebGlRenderingContext> {
    for name in ["webgl", "experimental-webgl"] {
        if let Ok(Some(ctx)) = canvas.get_context(name) {
            if let Ok(gl) = ctx.dyn_into::<WebGlRenderingContext>() {
                return Some(gl);
            }
        }
    }
    None
}

fn unmasked_parameter(gl: &WebGlRenderingContext, pname: u32) -> Probed<String> {
    gl.get_parameter(pname)
        .ok()
        .and_then(|v| v.as_string())
        .into()
}
