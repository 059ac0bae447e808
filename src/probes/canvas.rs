//! Canvas raster probe
//!
//! Draws a fixed scene — gradient fill, two text labels in distinct fonts,
//! a stroked circle, a translucent rectangle — onto a 300x150 off-screen
//! raster. The scene is deterministic; the pixel serialization varies by
//! rendering stack, which is exactly the signal.

use web_sys::HtmlCanvasElement;

use super::{context_2d, offscreen_canvas};
use crate::record::Probed;

const WIDTH: u32 = 300;
const HEIGHT: u32 = 150;

pub fn collect() -> Probed<String> {
    render().into()
}

fn render() -> Option<String> {
    let canvas = offscreen_canvas()?;
    canvas.set_width(WIDTH);
    canvas.set_height(HEIGHT);
    let ctx = context_2d(&canvas)?;

    let gradient = ctx.create_linear_gradient(0.0, 0.0, WIDTH as f64, HEIGHT as f64);
    gradient.add_color_stop(0.0, "#ff00ff").ok()?;
    gradient.add_color_stop(1.0, "#00ffff").ok()?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, WIDTH as f64, HEIGHT as f64);

    ctx.set_text_baseline("top");
    ctx.set_font("16px 'Arial'");
    ctx.set_fill_style_str("#000");
    ctx.fill_text("Fingerprint Test 123!", 10.0, 10.0).ok()?;

    ctx.set_font("18px 'Times New Roman'");
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
    ctx.fill_text("Canvas entropy", 10.0, 40.0).ok()?;

    ctx.set_stroke_style_str("#ff9900");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.arc(200.0, 75.0, 40.0, 0.0, std::f64::consts::TAU).ok()?;
    ctx.stroke();

    ctx.set_fill_style_str("rgba(102, 204, 0, 0.6)");
    ctx.fill_rect(220.0, 20.0, 50.0, 60.0);

    data_url(&canvas)
}

fn data_url(canvas: &HtmlCanvasElement) -> Option<String> {
    canvas.to_data_url().ok()
}
