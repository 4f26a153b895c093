//! Portal Configuration
//!
//! Map, timing and logging settings. Defaults match the public OpenStreetMap
//! tile server; a page can override any subset through a JSON
//! `<script id="portal-config" type="application/json">` element.

use leptos_leaflet::{IconOptions, MapOptions, TileLayerOptions};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::draft::DEFAULT_POSITION;
use crate::models::LatLng;

/// Id of the optional inline config element
pub const CONFIG_ELEMENT_ID: &str = "portal-config";

const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
const MARKER_ICON_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";
const MARKER_SHADOW_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid portal config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub map: MapConfig,
    /// Delay before the form clears after a submission
    pub reset_delay_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            reset_delay_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub zoom: f64,
    pub default_center: LatLng,
    pub icon: MarkerIconConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            zoom: 13.0,
            default_center: DEFAULT_POSITION,
            icon: MarkerIconConfig::default(),
        }
    }
}

impl MapConfig {
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            zoom: self.zoom,
            tile_url: self.tile_url.clone(),
            tile_layer: TileLayerOptions {
                attribution: self.attribution.clone(),
            },
            icon: IconOptions {
                icon_url: self.icon.icon_url.clone(),
                shadow_url: self.icon.shadow_url.clone(),
                icon_size: self.icon.size,
                icon_anchor: self.icon.anchor,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerIconConfig {
    pub icon_url: String,
    pub shadow_url: String,
    pub size: [u32; 2],
    pub anchor: [i32; 2],
}

impl Default for MarkerIconConfig {
    fn default() -> Self {
        Self {
            icon_url: MARKER_ICON_URL.to_string(),
            shadow_url: MARKER_SHADOW_URL.to_string(),
            size: [25, 41],
            anchor: [12, 41],
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override. Missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.parse_log_level()?;
        Ok(config)
    }

    /// Read the inline config element, if the page has one
    pub fn from_document() -> Result<Self, ConfigError> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID));
        match element {
            Some(element) => Self::from_json(&element.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    pub fn parse_log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.parse_log_level().unwrap_or(LevelFilter::Info)
    }
}
