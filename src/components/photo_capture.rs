//! Photo Capture Component
//!
//! Upload or camera snapshot, with preview and clear. The photo itself lives
//! in the form; this component only reports new values and failures.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::browser;
use crate::error::PhotoError;
use crate::models::PhotoData;

#[component]
pub fn PhotoCapture(
    #[prop(into)] photo: Signal<Option<PhotoData>>,
    /// New photo, or `None` to clear
    #[prop(into)] on_change: Callback<Option<PhotoData>>,
    #[prop(into)] on_error: Callback<PhotoError>,
) -> impl IntoView {
    let file_input = NodeRef::<leptos::html::Input>::new();
    let (capturing, set_capturing) = signal(false);

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_selected = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        // Allow picking the same file again
        input.set_value("");
        let Some(file) = file else { return };

        log::debug!("[PhotoCapture] Reading {} ({} bytes, {})", file.name(), file.size(), file.type_());
        spawn_local(async move {
            match browser::read_as_data_url(&file).await {
                Ok(data) => on_change.run(Some(data)),
                Err(e) => on_error.run(e),
            }
        });
    };

    let take_photo = move |_| {
        if capturing.get_untracked() {
            return;
        }
        set_capturing.set(true);
        spawn_local(async move {
            let result = browser::capture_still().await;
            set_capturing.set(false);
            match result {
                Ok(data) => {
                    log::debug!("[PhotoCapture] Captured {} bytes", data.encoded_len());
                    on_change.run(Some(data));
                }
                Err(e) => on_error.run(e.into()),
            }
        });
    };

    view! {
        <div class="photo-capture">
            <div class="photo-actions">
                <button type="button" class="photo-btn" on:click=open_picker>
                    <span class="photo-btn-icon">"⤒"</span>
                    <span>"Upload Photo"</span>
                </button>
                <button
                    type="button"
                    class="photo-btn"
                    disabled=move || capturing.get()
                    on:click=take_photo
                >
                    <span class="photo-btn-icon">"📷"</span>
                    <span>{move || if capturing.get() { "Capturing..." } else { "Take Photo" }}</span>
                </button>
            </div>

            <input
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=file_input
                on:change=on_file_selected
            />

            {move || match photo.get() {
                Some(data) => view! {
                    <div class="photo-preview">
                        <img src=String::from(data) alt="Complaint evidence" />
                        <button
                            type="button"
                            class="photo-clear-btn"
                            on:click=move |_| on_change.run(None)
                        >
                            "×"
                        </button>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="photo-placeholder">
                        <span class="photo-placeholder-icon">"🖼"</span>
                        <p>"No photo uploaded yet"</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
