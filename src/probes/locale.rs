//! Locale, hardware and navigator probes
//!
//! Timezone via `Intl.DateTimeFormat`, language preference order, thread
//! count, approximate device memory, touch points and the advertised MIME
//! type list.

use js_sys::{Array, Intl, Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::Navigator;

use super::window;
use crate::record::Probed;

fn navigator() -> Option<Navigator> {
    window().map(|w| w.navigator())
}

/// IANA timezone identifier of the environment's default locale.
pub fn timezone() -> Probed<String> {
    let options = Intl::DateTimeFormat::new(&Array::new(), &Object::new()).resolved_options();
    Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|v| v.as_string())
        .into()
}

/// Locale tags in user preference order; the order is semantic.
pub fn languages() -> Probed<Vec<String>> {
    let Some(nav) = navigator() else {
        return Probed::Unavailable;
    };
    let tags: Vec<String> = nav.languages().iter().filter_map(|v| v.as_string()).collect();
    if tags.is_empty() {
        // Some engines leave the list empty but still expose `language`.
        return nav.language().map(|primary| vec![primary]).into();
    }
    Probed::Available(tags)
}

pub fn hardware_concurrency() -> Probed<u32> {
    navigator()
        .map(|nav| nav.hardware_concurrency())
        .filter(|c| c.is_finite() && *c > 0.0)
        .map(|c| c as u32)
        .into()
}

/// Approximate device memory in GiB. Not exposed by web-sys, so read via
/// Reflect; Firefox and Safari do not implement it at all.
pub fn device_memory() -> Probed<u32> {
    let Some(nav) = navigator() else {
        return Probed::Unavailable;
    };
    let nav_obj: &JsValue = nav.as_ref();
    Reflect::get(nav_obj, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|m| m.is_finite() && *m > 0.0)
        .map(|m| m as u32)
        .into()
}

pub fn touch_points() -> Probed<u32> {
    navigator()
        .and_then(|nav| u32::try_from(nav.max_touch_points()).ok())
        .into()
}

/// Comma-joined supported MIME type identifiers; an empty list degrades to
/// unavailable, matching the displayed artifact.
pub fn mime_types() -> Probed<String> {
    let Some(nav) = navigator() else {
        return Probed::Unavailable;
    };
    let Ok(mimes) = nav.mime_types() else {
        return Probed::Unavailable;
    };

    let types: Vec<String> = (0..mimes.length())
        .filter_map(|i| mimes.item(i))
        .map(|m| m.type_())
        .filter(|t| !t.is_empty())
        .collect();

    if types.is_empty() {
        Probed::Unavailable
    } else {
        Probed::Available(types.join(", "))
    }
}
