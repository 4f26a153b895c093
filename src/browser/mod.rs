//! Browser Bindings
//!
//! Async wrappers over the browser APIs the photo field needs, organized by
//! acquisition path.

mod camera;
mod file_reader;

use wasm_bindgen::{JsCast, JsValue};

pub use camera::capture_still;
pub use file_reader::read_as_data_url;

/// Best-effort human text for a thrown JS value
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}
