//! Frontend Models
//!
//! Complaint records and the encoded photo they may carry.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PhotoError;

pub use leptos_leaflet::LatLng;

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Base64 data URL of an image, e.g. `data:image/png;base64,iVBOR...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhotoData(String);

impl PhotoData {
    pub fn parse(data_url: impl Into<String>) -> Result<Self, PhotoError> {
        let data_url = data_url.into();
        let Some(rest) = data_url.strip_prefix(DATA_URL_PREFIX) else {
            return Err(PhotoError::Malformed("missing data: prefix".to_string()));
        };
        if !rest.contains(BASE64_MARKER) {
            return Err(PhotoError::Malformed("missing base64 payload".to_string()));
        }
        Ok(Self(data_url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type declared by the data URL (empty when the URL omits it)
    pub fn mime_type(&self) -> &str {
        let rest = &self.0[DATA_URL_PREFIX.len()..];
        rest.split([';', ',']).next().unwrap_or_default()
    }

    /// Encoded payload size in bytes, excluding the header
    pub fn encoded_len(&self) -> usize {
        self.0
            .split_once(BASE64_MARKER)
            .map(|(_, payload)| payload.len())
            .unwrap_or_default()
    }
}

impl TryFrom<String> for PhotoData {
    type Error = PhotoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PhotoData> for String {
    fn from(photo: PhotoData) -> Self {
        photo.0
    }
}

/// A submitted complaint. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub title: String,
    pub description: String,
    pub location: LatLng,
    pub photo: Option<PhotoData>,
    /// ISO-8601, UTC, millisecond precision
    pub timestamp: String,
}

impl Complaint {
    /// Creation time in the viewer's locale
    pub fn display_timestamp(&self) -> String {
        locale_string(&self.timestamp)
    }
}

/// Format an instant the way `Date.toISOString` does
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(target_arch = "wasm32")]
fn locale_string(iso: &str) -> String {
    use wasm_bindgen::JsValue;

    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string());
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    String::from(date.to_locale_string(&locale, &JsValue::UNDEFINED))
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_string(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|t| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_photo_parse_accepts_data_url() {
        let photo = PhotoData::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(photo.mime_type(), "image/png");
        assert_eq!(photo.encoded_len(), "iVBORw0KGgo=".len());
        assert!(photo.as_str().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_photo_parse_rejects_plain_text() {
        assert!(matches!(
            PhotoData::parse("https://example.com/cat.png"),
            Err(PhotoError::Malformed(_))
        ));
        assert!(matches!(
            PhotoData::parse("data:text/plain,hello"),
            Err(PhotoError::Malformed(_))
        ));
    }

    #[test]
    fn test_jpeg_snapshot_mime() {
        let photo = PhotoData::parse("data:image/jpeg;base64,/9j/4AAQ").unwrap();
        assert_eq!(photo.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_iso_timestamp_matches_js_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(iso_timestamp(at), "2024-03-09T14:05:07.000Z");
    }

    #[test]
    fn test_complaint_serializes_location_as_pair() {
        let complaint = Complaint {
            title: "Pothole".to_string(),
            description: "Large pothole on Main St".to_string(),
            location: LatLng::new(51.505, -0.09),
            photo: None,
            timestamp: "2024-03-09T14:05:07.000Z".to_string(),
        };
        let json = serde_json::to_value(&complaint).unwrap();
        assert_eq!(json["location"], serde_json::json!([51.505, -0.09]));
        assert!(json["photo"].is_null());
    }

    #[test]
    fn test_display_timestamp_falls_back_to_raw_text() {
        let complaint = Complaint {
            title: "t".to_string(),
            description: "d".to_string(),
            location: LatLng::new(0.0, 0.0),
            photo: None,
            timestamp: "not a time".to_string(),
        };
        assert_eq!(complaint.display_timestamp(), "not a time");
    }
}
