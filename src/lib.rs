//! # Browser Fingerprint Demonstrator (WASM)
//!
//! Collects passively and actively observable browser/device signals,
//! combines them into a canonical fingerprint record, derives a stable
//! SHA-256 identity and a heuristic uniqueness score, and maps the record
//! to risk tiers and prioritized remediation advice.
//!
//! ## Architecture
//!
//! ```text
//! Signal Probes (canvas, audio, WebGL, fonts, CSS, locale, screen, ...)
//!   ↓
//! Assembler  →  FingerprintRecord (immutable, schema-total)
//!   ↓                    ↓                ↓
//! Canonicalizer → Hasher   Scorer   Remediation Engine
//!   ↓                    ↓                ↓
//!            AnalysisReport  →  presentation layer
//! ```
//!
//! Data flows strictly one way; the presentation layer only re-triggers the
//! whole pipeline. Every probe fails soft: a missing capability becomes the
//! `"unavailable"` sentinel, never an error, so canonicalization and
//! hashing are total over the schema.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod assembler;
pub mod canonical;
mod error;
pub mod hashing;
pub mod probes;
pub mod record;
pub mod remedy;
pub mod report;
pub mod score;
pub mod slot;

pub use error::{FingerprintError, Result};
pub use record::{
    AccessibilityPrefs, ColorGamut, CssSupport, DynamicRange, FingerprintRecord, Probed,
    ScreenInfo, WebGlInfo, UNAVAILABLE,
};
pub use remedy::{AttributeRisk, FixEase, FixEntry, RiskTier, RISK_TABLE};
pub use report::AnalysisReport;
pub use score::UniquenessBand;
pub use slot::RecordSlot;

/// Initialize logging once the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("fingerprint-wasm initialized");
}

/// Pipeline orchestrator exposed to JavaScript.
///
/// Owns the single current-analysis slot. Overlapping `analyse()` calls are
/// resolved last-initiated-wins: a stale in-flight run can never overwrite
/// a newer run's published result, and its awaiter receives the newer
/// report instead of the stale one.
#[wasm_bindgen]
pub struct FingerprintScanner {
    slot: Rc<RefCell<RecordSlot>>,
}

#[wasm_bindgen]
impl FingerprintScanner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FingerprintScanner {
        FingerprintScanner {
            slot: Rc::new(RefCell::new(RecordSlot::new())),
        }
    }

    /// Run the full acquisition pipeline and return the analysis report
    /// (`{fingerprint, hash, score, band, fixes, risks}`).
    pub async fn analyse(&self) -> std::result::Result<JsValue, JsValue> {
        let run = self.slot.borrow_mut().begin_run();
        log::info!("acquisition run {run} started");

        let record = assembler::collect().await;
        let report = AnalysisReport::from_record(record).map_err(JsValue::from)?;

        // A run that lost the last-initiated-wins race resolves with the
        // newest published report rather than its own stale one.
        let resolved = self.slot.borrow_mut().resolve(run, report);

        serde_wasm_bindgen::to_value(&resolved).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The most recently published report, or `undefined` before the first
    /// completed acquisition.
    pub fn current(&self) -> JsValue {
        match self.slot.borrow().current() {
            Some(report) => serde_wasm_bindgen::to_value(report).unwrap_or(JsValue::UNDEFINED),
            None => JsValue::UNDEFINED,
        }
    }

    /// Current fingerprint identity (64 lowercase hex characters).
    pub fn hash(&self) -> Option<String> {
        self.slot.borrow().current().map(|r| r.hash.clone())
    }

    /// Current uniqueness score in 0..=100.
    pub fn score(&self) -> Option<u8> {
        self.slot.borrow().current().map(|r| r.score)
    }

    /// Current uniqueness band label ("High", "Moderate" or "Low").
    pub fn band(&self) -> Option<String> {
        self.slot.borrow().current().map(|r| r.band.to_string())
    }

    /// Pretty-printed canonical JSON of the current record, with stable
    /// alphabetical key order at every level — the downloadable artifact.
    /// `None` (caller no-op) before the first completed acquisition.
    pub fn export_json(&self) -> Option<String> {
        let slot = self.slot.borrow();
        let report = slot.current()?;
        canonical::to_canonical_json_pretty(&report.fingerprint).ok()
    }
}

impl Default for FingerprintScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Media-device census diagnostic: `{audioinput, audiooutput, videoinput}`
/// counts, or the `"unavailable"` sentinel.
#[wasm_bindgen]
pub async fn probe_media_devices() -> JsValue {
    let counts = probes::devices::media_device_counts().await;
    serde_wasm_bindgen::to_value(&counts).unwrap_or(JsValue::UNDEFINED)
}

/// Navigator hardware-API capability flags (usb, bluetooth, hid, serial,
/// share), or the `"unavailable"` sentinel.
#[wasm_bindgen]
pub fn probe_feature_support() -> JsValue {
    let features = probes::devices::feature_support();
    serde_wasm_bindgen::to_value(&features).unwrap_or(JsValue::UNDEFINED)
}
