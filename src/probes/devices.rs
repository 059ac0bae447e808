//! Device census diagnostics
//!
//! Media-device counts and navigator capability flags. Exposed over the
//! wasm boundary for display, but deliberately kept out of the
//! [`FingerprintRecord`](crate::record::FingerprintRecord): enumerating
//! devices can prompt for permission and the counts are unstable across
//! sessions.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaDeviceInfo, MediaDeviceKind};

use super::window;
use crate::record::Probed;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaDeviceCounts {
    pub audioinput: u32,
    pub audiooutput: u32,
    pub videoinput: u32,
}

pub async fn media_device_counts() -> Probed<MediaDeviceCounts> {
    census().await.into()
}

async fn census() -> Option<MediaDeviceCounts> {
    let devices = window()?.navigator().media_devices().ok()?;
    let listing = JsFuture::from(devices.enumerate_devices().ok()?).await.ok()?;
    let entries: js_sys::Array = listing.dyn_into().ok()?;

    let mut counts = MediaDeviceCounts::default();
    for entry in entries.iter() {
        let Ok(info) = entry.dyn_into::<MediaDeviceInfo>() else {
            continue;
        };
        match info.kind() {
            MediaDeviceKind::Audioinput => counts.audioinput += 1,
            MediaDeviceKind::Audiooutput => counts.audiooutput += 1,
            MediaDeviceKind::Videoinput => counts.videoinput += 1,
            _ => {}
        }
    }
    Some(counts)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigatorFeatures {
    pub usb: bool,
    pub bluetooth: bool,
    pub hid: bool,
    pub serial: bool,
    pub share: bool,
}

/// Presence checks for hardware-access APIs on the navigator object.
pub fn feature_support() -> Probed<NavigatorFeatures> {
    let Some(win) = window() else {
        return Probed::Unavailable;
    };
    let nav: JsValue = win.navigator().into();
    let has = |name: &str| Reflect::has(&nav, &JsValue::from_str(name)).unwrap_or(false);

    Probed::Available(NavigatorFeatures {
        usb: has("usb"),
        bluetooth: has("bluetooth"),
        hid: has("hid"),
        serial: has("serial"),
        share: has("share"),
    })
}
