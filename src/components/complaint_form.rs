//! Complaint Form Component
//!
//! Title, description, location and photo fields. Submitting appends the
//! draft to the gallery and shows an acknowledgment until the form resets.

use leptos::prelude::*;

use crate::components::{LocationPicker, PhotoCapture};
use crate::context::use_portal;
use crate::error::PhotoError;
use crate::models::{LatLng, PhotoData};

#[component]
pub fn ComplaintForm() -> impl IntoView {
    let ctx = use_portal();
    let (photo_error, set_photo_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = ctx.submit() {
            log::warn!("[ComplaintForm] Submission rejected: {}", e);
        }
    };

    let on_position = Callback::new(move |latlng: LatLng| ctx.set_position(latlng));

    let on_photo = Callback::new(move |photo: Option<PhotoData>| {
        set_photo_error.set(None);
        match photo {
            Some(photo) => ctx.set_photo(Some(photo)),
            None => ctx.clear_photo(),
        }
    });

    let on_photo_error = Callback::new(move |err: PhotoError| {
        log::error!("[ComplaintForm] Photo not updated: {}", err);
        set_photo_error.set(Some(err.to_string()));
    });

    view! {
        <form class="complaint-form" on:submit=submit>
            <div class="form-fields">
                <div class="form-field">
                    <label for="title">"Complaint Title"</label>
                    <input
                        type="text"
                        id="title"
                        required=true
                        placeholder="Brief title of your complaint"
                        prop:value=move || ctx.title()
                        on:input=move |ev| ctx.set_title(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        required=true
                        rows=4
                        placeholder="Detailed description of the issue..."
                        prop:value=move || ctx.description()
                        on:input=move |ev| ctx.set_description(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Location"</label>
                    <LocationPicker
                        position=Signal::derive(move || ctx.position())
                        on_change=on_position
                    />
                </div>

                <div class="form-field">
                    <label>"Photo Evidence"</label>
                    <PhotoCapture
                        photo=Signal::derive(move || ctx.photo())
                        on_change=on_photo
                        on_error=on_photo_error
                    />
                    {move || photo_error.get().map(|message| view! {
                        <p class="photo-error">{message}</p>
                    })}
                </div>
            </div>

            <div class="form-actions">
                <Show when=move || ctx.is_submitted()>
                    <p class="submit-ack">"Complaint submitted successfully!"</p>
                </Show>
                <button type="submit" class="submit-btn">"Submit Complaint"</button>
            </div>
        </form>
    }
}
