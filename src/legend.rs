use crate::classify::{DepthColor, DEPTH_BANDS, DEPTH_LIMITS};
use crate::logging::{info, obj, v_num, Domain};
use crate::surface::{ControlPanel, ControlPosition, MapSurface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub lower: f64,
    pub upper: f64,
    pub color: DepthColor,
}

impl LegendEntry {
    pub fn label(&self) -> String {
        format!("{} km - {} km", self.lower, self.upper)
    }
}

/// The six contiguous bands, shallowest first.
pub fn legend_entries() -> Vec<LegendEntry> {
    DEPTH_LIMITS
        .windows(2)
        .zip(DEPTH_BANDS)
        .map(|(pair, color)| LegendEntry {
            lower: pair[0],
            upper: pair[1],
            color,
        })
        .collect()
}

pub fn legend_html() -> String {
    let min = DEPTH_LIMITS[0];
    let max = DEPTH_LIMITS[DEPTH_LIMITS.len() - 1];
    let mut html = format!(
        "<h4>Depth (km)</h4><div class=\"labels\"><div class=\"min\">Minimum: {}</div><div class=\"max\">Maximum: {}</div></div>",
        min, max
    );
    html.push_str("<ul>");
    for entry in legend_entries() {
        html.push_str(&format!(
            "<li style=\"background-color:{}\">{}</li>",
            entry.color,
            entry.label()
        ));
    }
    html.push_str("</ul>");
    html
}

/// Attach the legend bottom-right. Does not depend on the loaded data and
/// does not guard against being added twice.
pub fn render_legend(surface: &mut dyn MapSurface) -> usize {
    let entries = legend_entries().len();
    surface.add_control(ControlPanel {
        position: ControlPosition::BottomRight,
        class_name: "info legend".to_string(),
        inner_html: legend_html(),
    });
    info(Domain::Legend, "legend_added", obj(&[("entries", v_num(entries as f64))]));
    entries
}
