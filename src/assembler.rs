//! Fingerprint assembler
//!
//! Runs every probe and merges the results into one immutable
//! [`FingerprintRecord`]. Synchronous probes execute eagerly; only the
//! offline audio render suspends. A partially built record is never
//! observable — construction completes before anything is handed out.

use crate::probes;
use crate::record::FingerprintRecord;

pub async fn collect() -> FingerprintRecord {
    log::debug!("starting fingerprint acquisition");

    let screen = probes::screen::collect();
    let accessibility = probes::accessibility::collect();
    let supports = probes::css::collect();
    let timezone = probes::locale::timezone();
    let languages = probes::locale::languages();
    let hardware_concurrency = probes::locale::hardware_concurrency();
    let memory = probes::locale::device_memory();
    let touch = probes::locale::touch_points();
    let canvas = probes::canvas::collect();
    let mime = probes::locale::mime_types();
    let fonts = probes::fonts::collect();
    let webgl = probes::webgl::collect();

    // The only suspension point in the pipeline.
    let audio = probes::audio::collect().await;

    let record = FingerprintRecord {
        screen,
        accessibility,
        supports,
        timezone,
        languages,
        hardware_concurrency,
        memory,
        touch,
        canvas,
        audio,
        mime,
        fonts,
        webgl,
    };

    log::debug!("fingerprint acquisition complete");
    record
}
