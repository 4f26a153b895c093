//! Leptos Leaflet Utilities
//!
//! A single-marker Leaflet map for Leptos. The map is created once its
//! container is mounted, the marker follows a position signal, and clicks
//! on the map surface are reported as [`LatLng`] values.

pub mod sys;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Geographic coordinate. Crosses into JS as Leaflet's `[lat, lng]` literal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(position: LatLng) -> Self {
        [position.lat, position.lng]
    }
}

/// Options for `L.icon`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconOptions {
    pub icon_url: String,
    pub shadow_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
}

/// Options for `L.tileLayer`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileLayerOptions {
    pub attribution: String,
}

/// Everything needed to build the map besides its center.
#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub zoom: f64,
    pub tile_url: String,
    pub tile_layer: TileLayerOptions,
    pub icon: IconOptions,
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Leaflet is not available: {0}")]
    Unavailable(String),

    #[error("Could not encode map options: {0}")]
    Options(String),
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| MapError::Options(e.to_string()))
}

fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

/// A live Leaflet map with one marker and a click listener.
///
/// Dropping the handle unbinds the listener and tears the map down.
pub struct MapHandle {
    map: sys::Map,
    marker: sys::Marker,
    on_click: Closure<dyn FnMut(sys::MouseEvent)>,
}

impl MapHandle {
    pub fn mount<F>(
        element: &web_sys::HtmlElement,
        center: LatLng,
        options: &MapOptions,
        handler: F,
    ) -> Result<Self, MapError>
    where
        F: Fn(LatLng) + 'static,
    {
        let center_js = to_js(&center)?;
        let tile_options = to_js(&options.tile_layer)?;
        let icon_options = to_js(&options.icon)?;

        let map = sys::create_map(element).map_err(|e| MapError::Unavailable(describe(&e)))?;
        map.set_view(&center_js, options.zoom);
        sys::create_tile_layer(&options.tile_url, &tile_options).add_to(&map);

        let marker = sys::create_marker(&center_js);
        marker.set_icon(&sys::create_icon(&icon_options));
        marker.add_to(&map);

        let on_click = Closure::<dyn FnMut(sys::MouseEvent)>::new(move |ev: sys::MouseEvent| {
            let latlng = ev.latlng();
            handler(LatLng::new(latlng.lat(), latlng.lng()));
        });
        map.on("click", on_click.as_ref().unchecked_ref());

        Ok(Self { map, marker, on_click })
    }

    /// Move the single marker
    pub fn set_marker(&self, position: LatLng) -> Result<(), MapError> {
        self.marker.set_lat_lng(&to_js(&position)?);
        Ok(())
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        self.map.off("click", self.on_click.as_ref().unchecked_ref());
        self.map.remove();
    }
}

/// Map surface bound to a position signal.
///
/// The map is centered on the position it has when the container mounts;
/// later position changes only move the marker.
#[component]
pub fn LeafletMap(
    options: MapOptions,
    #[prop(into)] position: Signal<LatLng>,
    #[prop(into)] on_click: Callback<LatLng>,
    #[prop(into)] on_error: Callback<MapError>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let handle = StoredValue::new_local(None::<MapHandle>);

    Effect::new(move |_| {
        let Some(element) = container.get() else { return };
        if handle.with_value(Option::is_some) {
            return;
        }
        let center = position.get_untracked();
        match MapHandle::mount(&element, center, &options, move |latlng| on_click.run(latlng)) {
            Ok(mounted) => handle.set_value(Some(mounted)),
            Err(e) => on_error.run(e),
        }
    });

    Effect::new(move |_| {
        let current = position.get();
        let moved = handle.with_value(|mounted| match mounted {
            Some(map) => map.set_marker(current),
            None => Ok(()),
        });
        if let Err(e) = moved {
            on_error.run(e);
        }
    });

    on_cleanup(move || {
        handle.update_value(|mounted| {
            mounted.take();
        });
    });

    view! { <div node_ref=container class=class /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latlng_uses_leaflet_array_form() {
        let position = LatLng::new(51.505, -0.09);
        assert_eq!(serde_json::to_string(&position).unwrap(), "[51.505,-0.09]");

        let parsed: LatLng = serde_json::from_str("[40.7128,-74.006]").unwrap();
        assert_eq!(parsed, LatLng::new(40.7128, -74.006));
    }

    #[test]
    fn icon_options_use_leaflet_keys() {
        let icon = IconOptions {
            icon_url: "marker-icon.png".to_string(),
            shadow_url: "marker-shadow.png".to_string(),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
        };
        let json = serde_json::to_value(&icon).unwrap();
        assert_eq!(json["iconUrl"], "marker-icon.png");
        assert_eq!(json["shadowUrl"], "marker-shadow.png");
        assert_eq!(json["iconSize"], serde_json::json!([25, 41]));
        assert_eq!(json["iconAnchor"], serde_json::json!([12, 41]));
    }

    #[test]
    fn tile_layer_options_carry_attribution() {
        let options = TileLayerOptions { attribution: "OpenStreetMap contributors".to_string() };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json, serde_json::json!({ "attribution": "OpenStreetMap contributors" }));
    }
}
