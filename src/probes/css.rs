//! CSS feature support probes
//!
//! Queries the global `CSS.supports` through Reflect so a missing CSS
//! object (workers, ancient engines) degrades instead of throwing.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::record::{CssSupport, Probed};

pub fn collect() -> CssSupport {
    CssSupport {
        filter: supports_value("backdrop-filter", "blur(10px)"),
        container: supports_value("container-type", "inline-size"),
        tech: supports_condition("font-tech(color-COLRv1)"),
        accent: supports_value("accent-color", "auto"),
    }
}

fn supports_fn() -> Option<(JsValue, Function)> {
    let css = Reflect::get(&js_sys::global(), &JsValue::from_str("CSS")).ok()?;
    if css.is_undefined() || css.is_null() {
        return None;
    }
    let supports = Reflect::get(&css, &JsValue::from_str("supports"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((css, supports))
}

/// Two-argument form: `CSS.supports(property, value)`.
fn supports_value(property: &str, value: &str) -> Probed<bool> {
    let Some((css, supports)) = supports_fn() else {
        return Probed::Unavailable;
    };
    supports
        .call2(
            &css,
            &JsValue::from_str(property),
            &JsValue::from_str(value),
        )
        .ok()
        .and_then(|v| v.as_bool())
        .into()
}

/// One-argument form: `CSS.supports(conditionText)`.
fn supports_condition(condition: &str) -> Probed<bool> {
    let Some((css, supports)) = supports_fn() else {
        return Probed::Unavailable;
    };
    supports
        .call1(&css, &JsValue::from_str(condition))
        .ok()
        .and_then(|v| v.as_bool())
        .into()
}
