//! Raw Leaflet Bindings
//!
//! Imports from the global `L` namespace loaded by the page's `<script>` tag.
//! Only the handful of calls the map surface needs are bound here.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    pub type Map;

    /// `L.map(element)`. Throws when Leaflet is not loaded.
    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn create_map(element: &web_sys::HtmlElement) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, kind: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method)]
    pub fn off(this: &Map, kind: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map) -> Map;
}

#[wasm_bindgen]
extern "C" {
    /// `L.TileLayer`
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn create_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    /// `L.Icon`
    pub type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    pub fn create_icon(options: &JsValue) -> Icon;
}

#[wasm_bindgen]
extern "C" {
    /// `L.Marker`
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn create_marker(latlng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &Marker, icon: &Icon) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, latlng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    /// `L.LeafletMouseEvent`
    pub type MouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MouseEvent) -> EventLatLng;

    /// `L.LatLng` as carried by map events
    pub type EventLatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &EventLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &EventLatLng) -> f64;
}
