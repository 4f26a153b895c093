//! Complaint Draft
//!
//! The in-progress form state and the rules for turning it into a
//! [`Complaint`]. All mutation goes through the methods here.

use chrono::{DateTime, Utc};
use reactive_stores::Store;
use thiserror::Error;

use crate::models::{iso_timestamp, Complaint, LatLng, PhotoData};

/// Map position used before the user picks one
pub const DEFAULT_POSITION: LatLng = LatLng::new(51.505, -0.09);

/// Identity of one successful submission. Only the latest one may reset the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,

    #[error("description is required")]
    MissingDescription,
}

#[derive(Debug, Clone, PartialEq, Store)]
pub struct Draft {
    title: String,
    description: String,
    position: LatLng,
    photo: Option<PhotoData>,
    submitted: bool,
    generation: u64,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION)
    }
}

impl Draft {
    pub fn new(position: LatLng) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            position,
            photo: None,
            submitted: false,
            generation: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn photo(&self) -> Option<&PhotoData> {
        self.photo.as_ref()
    }

    /// Whether the success acknowledgment is showing
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    /// Replace the photo; `None` clears it
    pub fn set_photo(&mut self, photo: Option<PhotoData>) {
        self.photo = photo;
    }

    /// Build a complaint from the current fields and raise the acknowledgment.
    ///
    /// An empty title or description is rejected and leaves the draft
    /// untouched. Whitespace counts as filled, as with `required`.
    pub fn submit(&mut self, at: DateTime<Utc>) -> Result<(Complaint, SubmissionId), DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.description.is_empty() {
            return Err(DraftError::MissingDescription);
        }

        let complaint = Complaint {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.position,
            photo: self.photo.clone(),
            timestamp: iso_timestamp(at),
        };
        self.submitted = true;
        self.generation += 1;
        Ok((complaint, SubmissionId(self.generation)))
    }

    /// Clear text, photo and acknowledgment if `id` is still the latest
    /// submission. Position is kept. Returns whether anything was reset.
    pub fn reset(&mut self, id: SubmissionId) -> bool {
        if id.0 != self.generation {
            return false;
        }
        self.title.clear();
        self.description.clear();
        self.photo = None;
        self.submitted = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(title: &str, description: &str) -> Draft {
        let mut draft = Draft::default();
        draft.set_title(title.to_string());
        draft.set_description(description.to_string());
        draft
    }

    #[test]
    fn test_submit_builds_complaint_from_draft() {
        let mut draft = filled("Pothole", "Large pothole on Main St");
        let now = Utc::now();

        let (complaint, _) = draft.submit(now).unwrap();

        assert_eq!(complaint.title, "Pothole");
        assert_eq!(complaint.description, "Large pothole on Main St");
        assert_eq!(complaint.location, DEFAULT_POSITION);
        assert!(complaint.photo.is_none());
        assert!(draft.is_submitted());

        let stamped = DateTime::parse_from_rfc3339(&complaint.timestamp).unwrap();
        let skew = (Utc::now() - stamped.with_timezone(&Utc)).num_milliseconds().abs();
        assert!(skew < 1000, "timestamp {} too far from now", complaint.timestamp);
    }

    #[test]
    fn test_submit_carries_position_and_photo() {
        let mut draft = filled("Graffiti", "Tagged wall");
        let photo = PhotoData::parse("data:image/png;base64,AAAA").unwrap();
        draft.set_position(LatLng::new(40.7128, -74.006));
        draft.set_photo(Some(photo.clone()));

        let (complaint, _) = draft.submit(Utc::now()).unwrap();

        assert_eq!(complaint.location, LatLng::new(40.7128, -74.006));
        assert_eq!(complaint.photo, Some(photo));
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let mut draft = filled("", "something");
        assert_eq!(draft.submit(Utc::now()), Err(DraftError::MissingTitle));

        let mut draft = filled("Title", "");
        assert_eq!(draft.submit(Utc::now()), Err(DraftError::MissingDescription));
        assert!(!draft.is_submitted());
        assert_eq!(draft.title(), "Title");
    }

    #[test]
    fn test_whitespace_only_fields_are_accepted() {
        let mut draft = filled("   ", " ");

        let (complaint, _) = draft.submit(Utc::now()).unwrap();

        assert_eq!(complaint.title, "   ");
        assert_eq!(complaint.description, " ");
        assert!(draft.is_submitted());
    }

    #[test]
    fn test_reset_clears_fields_but_keeps_position() {
        let mut draft = filled("Pothole", "Deep");
        draft.set_position(LatLng::new(1.5, 2.5));
        draft.set_photo(Some(PhotoData::parse("data:image/jpeg;base64,/9j/").unwrap()));
        let (_, id) = draft.submit(Utc::now()).unwrap();

        assert!(draft.reset(id));

        assert_eq!(draft.title(), "");
        assert_eq!(draft.description(), "");
        assert!(draft.photo().is_none());
        assert!(!draft.is_submitted());
        assert_eq!(draft.position(), LatLng::new(1.5, 2.5));
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut draft = filled("First", "one");
        let (_, first) = draft.submit(Utc::now()).unwrap();

        draft.set_title("Second".to_string());
        draft.set_description("two".to_string());
        let (_, second) = draft.submit(Utc::now()).unwrap();
        draft.set_title("Third in progress".to_string());

        assert!(!draft.reset(first));
        assert_eq!(draft.title(), "Third in progress");
        assert!(draft.is_submitted());

        assert!(draft.reset(second));
        assert_eq!(draft.title(), "");
    }

    #[test]
    fn test_clear_photo_then_submit_has_no_image() {
        let mut draft = filled("Litter", "Bags on the corner");
        draft.set_photo(Some(PhotoData::parse("data:image/png;base64,AAAA").unwrap()));
        draft.set_photo(None);

        let (complaint, _) = draft.submit(Utc::now()).unwrap();
        assert!(complaint.photo.is_none());
    }

    #[test]
    fn test_every_submission_appends_one_complaint() {
        let mut draft = Draft::default();
        let mut complaints = Vec::new();

        for n in 1..=5 {
            draft.set_title(format!("Complaint {}", n));
            draft.set_description("Streetlight out".to_string());
            let (complaint, id) = draft.submit(Utc::now()).unwrap();
            complaints.push(complaint);
            draft.reset(id);
            assert_eq!(complaints.len(), n);
        }

        assert_eq!(complaints[0].title, "Complaint 1");
        assert_eq!(complaints[4].title, "Complaint 5");
    }

    #[test]
    fn test_clicking_same_point_twice_is_idempotent() {
        let mut draft = Draft::default();
        let point = LatLng::new(48.8566, 2.3522);
        draft.set_position(point);
        draft.set_position(point);
        assert_eq!(draft.position(), point);
    }
}
