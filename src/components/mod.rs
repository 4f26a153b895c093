//! UI Components
//!
//! Leptos components for the complaint form and gallery.

mod complaint_form;
mod complaint_gallery;
mod location_picker;
mod photo_capture;
mod recent_log;

pub use complaint_form::ComplaintForm;
pub use complaint_gallery::ComplaintGallery;
pub use location_picker::LocationPicker;
pub use photo_capture::PhotoCapture;
pub use recent_log::RecentLog;
