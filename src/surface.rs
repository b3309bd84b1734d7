//! Map surface abstraction and its Leaflet page implementation.
//!
//! The interactive widget lives in the browser. `LeafletPage` records what
//! the renderers add and writes a standalone HTML document that replays it
//! through Leaflet.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::classify::StyleResult;
use crate::config::Config;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarker {
    /// (lat, lon)
    pub center: (f64, f64),
    /// Meters.
    pub radius: f64,
    pub style: StyleResult,
    pub fill_opacity: f64,
    pub weight: f64,
    pub popup_html: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPanel {
    pub position: ControlPosition,
    pub class_name: String,
    pub inner_html: String,
}

/// The host map widget.
pub trait MapSurface {
    fn add_circle(&mut self, marker: CircleMarker);
    fn add_control(&mut self, control: ControlPanel);
}

#[derive(Debug, Clone)]
pub struct LeafletPage {
    view: MapView,
    tiles: TileLayer,
    circles: Vec<CircleMarker>,
    controls: Vec<ControlPanel>,
}

impl LeafletPage {
    pub fn new(view: MapView, tiles: TileLayer) -> Self {
        Self {
            view,
            tiles,
            circles: Vec::new(),
            controls: Vec::new(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            MapView {
                center: cfg.center,
                zoom: cfg.zoom,
            },
            TileLayer {
                url_template: cfg.tile_url.clone(),
                attribution: cfg.tile_attribution.clone(),
            },
        )
    }

    pub fn circles(&self) -> &[CircleMarker] {
        &self.circles
    }

    pub fn controls(&self) -> &[ControlPanel] {
        &self.controls
    }

    pub fn render_html(&self) -> Result<String> {
        let view = script_json(&self.view)?;
        let tiles = script_json(&self.tiles)?;
        let circles = script_json(&self.circles)?;
        let controls = script_json(&self.controls)?;
        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Earthquakes</title>
<link rel="stylesheet" href="{css}">
<style>
html, body, #map {{ height: 100%; margin: 0; }}
.info.legend {{ background: white; padding: 6px 10px; border-radius: 4px; box-shadow: 0 0 15px rgba(0,0,0,0.2); }}
.info.legend h4 {{ margin: 0 0 6px; }}
.info.legend .labels {{ display: flex; justify-content: space-between; gap: 12px; }}
.info.legend ul {{ list-style: none; padding: 0; margin: 6px 0 0; }}
.info.legend li {{ padding: 2px 6px; margin-bottom: 2px; }}
</style>
</head>
<body>
<div id="map"></div>
<script src="{js}"></script>
<script>
const view = {view};
const tiles = {tiles};
const circles = {circles};
const controls = {controls};

const street = L.tileLayer(tiles.url_template, {{ attribution: tiles.attribution }});
const map = L.map("map", {{ center: view.center, zoom: view.zoom, layers: [street] }});

circles.forEach(c => {{
    L.circle(c.center, {{
        radius: c.radius,
        color: c.style.color,
        fillColor: c.style.fillColor,
        fillOpacity: c.fillOpacity,
        weight: c.weight
    }}).addTo(map).bindPopup(c.popupHtml);
}});

controls.forEach(p => {{
    const control = L.control({{ position: p.position }});
    control.onAdd = function() {{
        const div = L.DomUtil.create("div", p.className);
        div.innerHTML = p.innerHtml;
        return div;
    }};
    control.addTo(map);
}});
</script>
</body>
</html>
"#,
            css = LEAFLET_CSS,
            js = LEAFLET_JS,
        ))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let html = self.render_html()?;
        std::fs::write(path, html).with_context(|| format!("writing {}", path.display()))
    }
}

impl MapSurface for LeafletPage {
    fn add_circle(&mut self, marker: CircleMarker) {
        self.circles.push(marker);
    }

    fn add_control(&mut self, control: ControlPanel) {
        self.controls.push(control);
    }
}

/// JSON safe to inline inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}
