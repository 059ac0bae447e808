//! Probe and pipeline WASM integration tests
//!
//! Run with: wasm-pack test --headless --chrome
//! (or --firefox, --safari)

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use fingerprint_wasm::probes;
use fingerprint_wasm::{FingerprintScanner, Probed};

wasm_bindgen_test_configure!(run_in_browser);

// ===== Individual probes: never throw, well-formed on success =====

#[wasm_bindgen_test]
fn canvas_probe_yields_data_uri_or_sentinel() {
    match probes::canvas::collect() {
        Probed::Available(data) => {
            assert!(data.starts_with("data:image/"), "unexpected encoding: {data}");
        }
        Probed::Unavailable => {}
    }
}

#[wasm_bindgen_test]
fn font_probe_preserves_candidate_order() {
    let Probed::Available(detected) = probes::fonts::collect() else {
        return;
    };

    let candidates: Vec<&str> = probes::fonts::FONT_CANDIDATES.to_vec();
    let mut positions = Vec::new();
    for font in &detected {
        let pos = candidates
            .iter()
            .position(|c| c == font)
            .expect("detected font not in candidate list");
        positions.push(pos);
    }
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "detection order must follow the candidate list");
}

#[wasm_bindgen_test]
async fn audio_probe_yields_decimal_string_or_sentinel() {
    match probes::audio::collect().await {
        Probed::Available(sum) => {
            assert!(sum.parse::<f64>().is_ok(), "not a decimal string: {sum}");
        }
        Probed::Unavailable => {}
    }
}

#[wasm_bindgen_test]
fn webgl_probe_yields_nonempty_strings_when_unmasked() {
    let info = probes::webgl::collect();
    if let Probed::Available(renderer) = &info.renderer {
        assert!(!renderer.is_empty());
    }
    if let Probed::Available(vendor) = &info.vendor {
        assert!(!vendor.is_empty());
    }
}

#[wasm_bindgen_test]
fn screen_probe_reports_positive_metrics() {
    let screen = probes::screen::collect();
    if let Probed::Available(width) = screen.width {
        assert!(width > 0);
    }
    if let Probed::Available(dpr) = screen.dpr {
        assert!(dpr > 0.0);
    }
}

#[wasm_bindgen_test]
fn locale_probes_degrade_cleanly() {
    if let Probed::Available(tz) = probes::locale::timezone() {
        assert!(tz.contains('/') || !tz.is_empty());
    }
    if let Probed::Available(langs) = probes::locale::languages() {
        assert!(!langs.is_empty());
    }
    if let Probed::Available(threads) = probes::locale::hardware_concurrency() {
        assert!(threads > 0);
    }
}

// ===== Full pipeline =====

#[wasm_bindgen_test]
async fn analyse_produces_complete_report() {
    let scanner = FingerprintScanner::new();
    let report = scanner.analyse().await.expect("analyse should succeed");

    let hash = js_sys::Reflect::get(&report, &"hash".into())
        .unwrap()
        .as_string()
        .unwrap();
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    let score = js_sys::Reflect::get(&report, &"score".into())
        .unwrap()
        .as_f64()
        .unwrap();
    assert!((0.0..=100.0).contains(&score));

    let fixes = js_sys::Reflect::get(&report, &"fixes".into()).unwrap();
    let fixes = js_sys::Array::from(&fixes);
    assert!(fixes.length() >= 1, "at least the sentinel entry is emitted");
}

#[wasm_bindgen_test]
async fn scanner_accessors_reflect_last_run() {
    let scanner = FingerprintScanner::new();
    assert!(scanner.hash().is_none());
    assert!(scanner.export_json().is_none(), "export is a no-op before any run");

    scanner.analyse().await.expect("analyse should succeed");

    let hash = scanner.hash().expect("hash available after a run");
    assert_eq!(hash.len(), 64);
    assert!(scanner.score().is_some());
    assert!(scanner.band().is_some());

    let exported = scanner.export_json().expect("export available after a run");
    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert!(value.get("screen").is_some());
    assert!(value.get("webgl").is_some());
}

#[wasm_bindgen_test]
async fn repeated_runs_are_deterministic_in_shape() {
    let scanner = FingerprintScanner::new();
    scanner.analyse().await.expect("first run");
    let first = scanner.hash().unwrap();

    scanner.analyse().await.expect("second run");
    let second = scanner.hash().unwrap();

    assert_eq!(first.len(), second.len());
}

#[wasm_bindgen_test]
async fn media_device_census_is_well_formed() {
    let counts = fingerprint_wasm::probe_media_devices().await;
    // Either the sentinel string or an object with the three counters.
    if let Some(sentinel) = counts.as_string() {
        assert_eq!(sentinel, "unavailable");
    } else {
        let audioinput = js_sys::Reflect::get(&counts, &"audioinput".into()).unwrap();
        assert!(audioinput.as_f64().is_some());
    }
}
