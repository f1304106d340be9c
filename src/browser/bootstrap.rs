//! Calls into the `window.bootstrap` global.
//!
//! Bootstrap is loaded by the page, not bundled, so every lookup goes
//! through `Reflect` and a missing component is reported, not assumed.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

use crate::error::UiError;
use crate::widgets::Component;

/// Constructor for `component`, if Bootstrap exposes it.
pub fn component(window: &Window, component: Component) -> Option<JsValue> {
    let bootstrap = js_sys::Reflect::get(window, &"bootstrap".into()).unwrap_or(JsValue::UNDEFINED);
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return None;
    }
    match js_sys::Reflect::get(&bootstrap, &component.global_name().into()) {
        Ok(ctor) if !ctor.is_undefined() && !ctor.is_null() => Some(ctor),
        _ => None,
    }
}

/// `Component.getOrCreateInstance(el)`.
pub fn get_or_create_instance(ctor: &JsValue, el: &Element) -> Result<JsValue, UiError> {
    let el: &JsValue = el.as_ref();
    call_method(ctor, "getOrCreateInstance", Some(el))
}

/// Call `target[name](arg?)`.
pub fn call_method(target: &JsValue, name: &str, arg: Option<&JsValue>) -> Result<JsValue, UiError> {
    let method = js_sys::Reflect::get(target, &name.into())?;
    let Some(func) = method.dyn_ref::<js_sys::Function>() else {
        return Err(UiError::Js(format!("{name} is not a function")));
    };
    Ok(match arg {
        Some(arg) => func.call1(target, arg)?,
        None => func.call0(target)?,
    })
}
