//! Offline audio probe
//!
//! Renders a triangle oscillator at 10 kHz through a dynamics compressor
//! with fixed parameters into an offline (non-realtime) context, then sums
//! the absolute sample magnitudes over a fixed window. The compressor's
//! floating-point behaviour differs per audio stack. No audible output is
//! produced, and this is the pipeline's only suspension point.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioBuffer, OfflineAudioContext, OscillatorType};

use crate::record::Probed;

const CHANNELS: u32 = 1;
const SAMPLE_RATE: f32 = 44_100.0;
const SAMPLE_COUNT: u32 = 44_100;

// Sample indices summed after rendering.
const WINDOW_START: usize = 4_500;
const WINDOW_END: usize = 5_000;

pub async fn collect() -> Probed<String> {
    render().await.into()
}

async fn render() -> Option<String> {
    let ctx = OfflineAudioContext::new_with_number_of_channels_and_length_and_sample_rate(
        CHANNELS,
        SAMPLE_COUNT,
        SAMPLE_RATE,
    )
    .ok()?;

    let oscillator = ctx.create_oscillator().ok()?;
    oscillator.set_type(OscillatorType::Triangle);
    oscillator.frequency().set_value(10_000.0);

    let compressor = ctx.create_dynamics_compressor().ok()?;
    compressor.threshold().set_value(-50.0);
    compressor.knee().set_value(40.0);
    compressor.ratio().set_value(12.0);
    compressor.attack().set_value(0.0);
    compressor.release().set_value(0.25);

    oscillator.connect_with_audio_node(&compressor).ok()?;
    compressor.connect_with_audio_node(&ctx.destination()).ok()?;
    oscillator.start().ok()?;

    let rendered = JsFuture::from(ctx.start_rendering().ok()?).await.ok()?;
    let buffer: AudioBuffer = rendered.dyn_into().ok()?;
    let samples = buffer.get_channel_data(0).ok()?;

    let sum: f64 = samples
        .get(WINDOW_START..WINDOW_END)?
        .iter()
        .map(|s| f64::from(*s).abs())
        .sum();

    Some(sum.to_string())
}
