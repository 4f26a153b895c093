//! Portal State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity over the draft and
//! the complaint list. Draft edits run through [`Draft`]'s mutators and then
//! notify only the field they touched, so typing in the title does not wake
//! readers of the photo or the map position.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::draft::{Draft, DraftStoreFields};
use crate::models::{Complaint, LatLng, PhotoData};

/// Session state: the form draft and every complaint submitted so far
#[derive(Clone, Debug, Default, Store)]
pub struct PortalState {
    /// In-progress form fields
    pub draft: Draft,
    /// Submitted complaints, oldest first. Append-only.
    pub complaints: Vec<Complaint>,
}

impl PortalState {
    pub fn new(start: LatLng) -> Self {
        Self {
            draft: Draft::new(start),
            complaints: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type PortalStore = Store<PortalState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_title(store: &PortalStore, title: String) {
    store.draft().write_untracked().set_title(title);
    store.draft().title().notify();
}

pub fn store_set_description(store: &PortalStore, description: String) {
    store.draft().write_untracked().set_description(description);
    store.draft().description().notify();
}

pub fn store_set_position(store: &PortalStore, position: LatLng) {
    store.draft().write_untracked().set_position(position);
    store.draft().position().notify();
}

pub fn store_set_photo(store: &PortalStore, photo: Option<PhotoData>) {
    store.draft().write_untracked().set_photo(photo);
    store.draft().photo().notify();
}

/// Append a complaint to the gallery list
pub fn store_push_complaint(store: &PortalStore, complaint: Complaint) {
    store.complaints().write().push(complaint);
}

/// Number of complaints submitted this session
pub fn store_complaint_count(store: &PortalStore) -> usize {
    store.complaints().read().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn watch<T, F>(read: F) -> (Memo<T>, Arc<AtomicUsize>)
    where
        T: PartialEq + Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let memo = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            read()
        });
        (memo, runs)
    }

    #[test]
    fn test_title_edit_does_not_wake_photo_or_position() {
        Owner::new().with(|| {
            let store = Store::new(PortalState::default());
            let (photo, photo_runs) = watch(move || store.draft().photo().get());
            let (position, position_runs) = watch(move || store.draft().position().get());
            photo.get();
            position.get();

            store_set_title(&store, "Pothole".to_string());
            store_set_description(&store, "Large pothole on Main St".to_string());
            photo.get();
            position.get();

            assert_eq!(photo_runs.load(Ordering::SeqCst), 1);
            assert_eq!(position_runs.load(Ordering::SeqCst), 1);
            assert_eq!(store.draft().title().get_untracked(), "Pothole");
        });
    }

    #[test]
    fn test_field_edit_wakes_its_own_readers() {
        Owner::new().with(|| {
            let store = Store::new(PortalState::default());
            let (position, runs) = watch(move || store.draft().position().get());
            position.get();

            store_set_position(&store, LatLng::new(40.7128, -74.006));

            assert_eq!(position.get(), LatLng::new(40.7128, -74.006));
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_push_complaint_grows_list() {
        Owner::new().with(|| {
            let store = Store::new(PortalState::default());
            let mut draft = Draft::default();
            for n in 1..=3 {
                draft.set_title(format!("Complaint {}", n));
                draft.set_description("Broken bench".to_string());
                let (complaint, _) = draft.submit(chrono::Utc::now()).unwrap();
                store_push_complaint(&store, complaint);
                assert_eq!(store_complaint_count(&store), n);
            }
        });
    }
}
