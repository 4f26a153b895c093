//! Portal Context
//!
//! The single controller over form state, provided via Leptos Context API.
//! Components read through the accessors and write only through the
//! mutators below.

use chrono::Utc;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::draft::{DraftError, DraftStoreFields, SubmissionId};
use crate::models::{Complaint, LatLng, PhotoData};
use crate::store::{
    store_complaint_count, store_push_complaint, store_set_description, store_set_photo,
    store_set_position, store_set_title, PortalStateStoreFields, PortalStore,
};

/// A scheduled callback that can be called off before it fires
pub trait Cancel {
    fn cancel(self);
}

impl Cancel for Timeout {
    fn cancel(self) {
        // The returned closure is dropped with the cancelled timer
        let _ = Timeout::cancel(self);
    }
}

/// Holds at most one pending task. Installing a new one cancels the old.
pub struct PendingTask<T: Cancel> {
    slot: Option<T>,
}

impl<T: Cancel> Default for PendingTask<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T: Cancel> PendingTask<T> {
    /// Install `task`, cancelling whatever was pending. Returns whether a
    /// previous task was cancelled.
    pub fn replace(&mut self, task: T) -> bool {
        match self.slot.replace(task) {
            Some(previous) => {
                previous.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

#[derive(Clone, Copy)]
pub struct PortalContext {
    store: PortalStore,
    /// Pending post-submit reset; replacing it cancels the previous timer
    reset_task: StoredValue<PendingTask<Timeout>, LocalStorage>,
    reset_delay_ms: u32,
}

impl PortalContext {
    pub fn new(store: PortalStore, reset_delay_ms: u32) -> Self {
        Self {
            store,
            reset_task: StoredValue::new_local(PendingTask::default()),
            reset_delay_ms,
        }
    }

    pub fn title(&self) -> String {
        self.store.draft().title().get()
    }

    pub fn description(&self) -> String {
        self.store.draft().description().get()
    }

    pub fn position(&self) -> LatLng {
        self.store.draft().position().get()
    }

    pub fn photo(&self) -> Option<PhotoData> {
        self.store.draft().photo().get()
    }

    pub fn is_submitted(&self) -> bool {
        self.store.draft().submitted().get()
    }

    pub fn complaints(&self) -> Vec<Complaint> {
        self.store.complaints().get()
    }

    pub fn complaint_count(&self) -> usize {
        store_complaint_count(&self.store)
    }

    pub fn set_title(&self, title: String) {
        store_set_title(&self.store, title);
    }

    pub fn set_description(&self, description: String) {
        store_set_description(&self.store, description);
    }

    pub fn set_position(&self, position: LatLng) {
        store_set_position(&self.store, position);
    }

    pub fn set_photo(&self, photo: Option<PhotoData>) {
        store_set_photo(&self.store, photo);
    }

    pub fn clear_photo(&self) {
        self.set_photo(None);
    }

    /// Append the draft as a complaint and schedule the form reset
    pub fn submit(&self) -> Result<SubmissionId, DraftError> {
        let (complaint, id) = self.store.draft().write().submit(Utc::now())?;
        log::info!(
            "[Portal] Complaint '{}' at {:.5}, {:.5} (photo: {})",
            complaint.title,
            complaint.location.lat,
            complaint.location.lng,
            complaint.photo.as_ref().map(|p| p.mime_type()).unwrap_or("none"),
        );
        store_push_complaint(&self.store, complaint);
        self.schedule_reset(id);
        Ok(id)
    }

    fn schedule_reset(&self, id: SubmissionId) {
        let store = self.store;
        let task = Timeout::new(self.reset_delay_ms, move || {
            let applied = store
                .draft()
                .try_write()
                .map(|mut draft| draft.reset(id))
                .unwrap_or(false);
            if applied {
                log::debug!("[Portal] Draft reset after {:?}", id);
            }
        });

        self.reset_task.update_value(|pending| {
            if pending.replace(task) {
                log::debug!("[Portal] Replaced pending reset timer");
            }
        });
    }
}

/// Get the portal controller from context
pub fn use_portal() -> PortalContext {
    expect_context::<PortalContext>()
}
