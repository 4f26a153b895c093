//! File Reading
//!
//! Reads a user-picked file into a base64 data URL via `FileReader`.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

use super::describe_js;
use crate::error::PhotoError;
use crate::models::PhotoData;

fn read_error(err: JsValue) -> PhotoError {
    PhotoError::Read(describe_js(&err))
}

pub async fn read_as_data_url(file: &File) -> Result<PhotoData, PhotoError> {
    let reader = FileReader::new().map_err(read_error)?;

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file).map_err(read_error)?;

    let outcome = JsFuture::from(loaded).await;
    reader.set_onload(None);
    reader.set_onerror(None);

    if outcome.is_err() {
        let detail = reader
            .error()
            .map(|e| format!("{}: {}", e.name(), e.message()))
            .unwrap_or_else(|| format!("{} could not be read", file.name()));
        return Err(PhotoError::Read(detail));
    }

    let data_url = reader
        .result()
        .map_err(read_error)?
        .as_string()
        .ok_or_else(|| PhotoError::Read(format!("{} produced no data", file.name())))?;
    PhotoData::parse(data_url)
}
