use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/4.5_month.geojson";
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Clone, Debug)]
pub struct Config {
    /// GeoJSON FeatureCollection fetched once per run.
    pub feed_url: String,
    /// Raster tile template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub tile_url: String,
    pub tile_attribution: String,
    /// Initial map center as (lat, lon).
    pub center: (f64, f64),
    pub zoom: u8,
    /// Circle radius in meters per unit of magnitude.
    pub radius_scale: f64,
    pub fill_opacity: f64,
    pub stroke_weight: f64,
    /// Where the rendered page is written.
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            center: (40.58, -103.46),
            zoom: 3,
            radius_scale: 50_000.0,
            fill_opacity: 0.5,
            stroke_weight: 2.0,
            output_path: "quakemap.html".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            feed_url: std::env::var("FEED_URL").unwrap_or(d.feed_url),
            tile_url: std::env::var("TILE_URL").unwrap_or(d.tile_url),
            tile_attribution: std::env::var("TILE_ATTRIBUTION").unwrap_or(d.tile_attribution),
            center: (
                std::env::var("MAP_CENTER_LAT").ok().and_then(|v| v.parse().ok()).unwrap_or(d.center.0),
                std::env::var("MAP_CENTER_LON").ok().and_then(|v| v.parse().ok()).unwrap_or(d.center.1),
            ),
            zoom: std::env::var("MAP_ZOOM").ok().and_then(|v| v.parse().ok()).unwrap_or(d.zoom),
            radius_scale: std::env::var("RADIUS_SCALE").ok().and_then(|v| v.parse().ok()).unwrap_or(d.radius_scale),
            fill_opacity: std::env::var("FILL_OPACITY").ok().and_then(|v| v.parse().ok()).unwrap_or(d.fill_opacity),
            stroke_weight: std::env::var("STROKE_WEIGHT").ok().and_then(|v| v.parse().ok()).unwrap_or(d.stroke_weight),
            output_path: std::env::var("OUTPUT_PATH").unwrap_or(d.output_path),
        }
    }

    /// Parsed feed URL; rejects anything that is not an absolute http(s) URL.
    pub fn feed_url(&self) -> Result<Url> {
        let url = Url::parse(&self.feed_url)
            .with_context(|| format!("invalid feed url {:?}", self.feed_url))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => anyhow::bail!("unsupported feed url scheme {:?}", other),
        }
    }
}
