use crate::classify::classify;
use crate::config::Config;
use crate::feed::{Feature, FeedDocument};
use crate::logging::{info, obj, v_num, v_str, warn, Domain};
use crate::surface::{CircleMarker, MapSurface};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerStats {
    pub drawn: usize,
    pub skipped: usize,
}

/// Linear magnitude scaling, unclamped: zero or negative magnitudes give a
/// degenerate circle rather than an error.
pub fn marker_radius(magnitude: f64, radius_scale: f64) -> f64 {
    magnitude * radius_scale
}

pub fn popup_html(feature: &Feature) -> String {
    let (lat, lon) = feature.lat_lon();
    let mut html = format!(
        "<h1>Magnitude: {}</h1> <hr> Depth: {} km<hr>Location: ({}, {})",
        feature.magnitude, feature.depth_km, lat, lon
    );
    if let Some(url) = &feature.detail_url {
        html.push_str(&format!(
            "<hr>Learn more <a href=\"{}\" target=\"_blank\">here</a>",
            escape_attr(url)
        ));
    }
    html
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn build_marker(feature: &Feature, cfg: &Config) -> CircleMarker {
    CircleMarker {
        center: feature.lat_lon(),
        radius: marker_radius(feature.magnitude, cfg.radius_scale),
        style: classify(feature.depth_km),
        fill_opacity: cfg.fill_opacity,
        weight: cfg.stroke_weight,
        popup_html: popup_html(feature),
    }
}

/// Draw one circle per feature in document order. Records that do not
/// validate are logged and skipped; the rest still render.
pub fn render_markers(doc: &FeedDocument, cfg: &Config, surface: &mut dyn MapSurface) -> MarkerStats {
    let mut stats = MarkerStats::default();
    for (index, record) in doc.features.iter().enumerate() {
        match Feature::from_record(record) {
            Ok(feature) => {
                surface.add_circle(build_marker(&feature, cfg));
                stats.drawn += 1;
            }
            Err(err) => {
                warn(
                    Domain::Render,
                    "feature_skipped",
                    obj(&[
                        ("msg", v_str(&err.to_string())),
                        ("index", v_num(index as f64)),
                        ("id", record.id().cloned().unwrap_or_default()),
                    ]),
                );
                stats.skipped += 1;
            }
        }
    }
    info(
        Domain::Render,
        "markers_drawn",
        obj(&[
            ("drawn", v_num(stats.drawn as f64)),
            ("skipped", v_num(stats.skipped as f64)),
        ]),
    );
    stats
}
