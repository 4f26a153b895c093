//! Location Picker Component
//!
//! Leaflet map that sets the complaint position on click.

use leptos::prelude::*;
use leptos_leaflet::{LeafletMap, MapError};

use crate::config::AppConfig;
use crate::models::LatLng;

#[component]
pub fn LocationPicker(
    /// Current complaint position (marker location)
    #[prop(into)] position: Signal<LatLng>,
    /// Called with the clicked coordinate
    #[prop(into)] on_change: Callback<LatLng>,
) -> impl IntoView {
    let options = expect_context::<AppConfig>().map.map_options();
    let (map_failed, set_map_failed) = signal(false);

    let on_click = move |latlng: LatLng| {
        log::debug!("[LocationPicker] Clicked {:.5}, {:.5}", latlng.lat, latlng.lng);
        on_change.run(latlng);
    };

    let on_error = move |err: MapError| {
        log::error!("[LocationPicker] {}", err);
        set_map_failed.set(true);
    };

    view! {
        <div class="location-picker">
            <div class="map-hint">
                <span class="map-hint-icon">"📍"</span>
                <span>"Click to set location"</span>
            </div>
            <LeafletMap
                options=options
                position=position
                on_click=on_click
                on_error=on_error
                class="map-surface"
            />
            <Show when=move || map_failed.get()>
                <p class="map-error">"Map unavailable"</p>
            </Show>
            <p class="map-coords">
                {move || {
                    let current = position.get();
                    format!("{:.5}, {:.5}", current.lat, current.lng)
                }}
            </p>
        </div>
    }
}
