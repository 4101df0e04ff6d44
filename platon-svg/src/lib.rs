//! SVG view layer
//!
//! Turns a depth-ordered [`Frame`] into an SVG document. SVG has no
//! z-index, so document child order is the draw order: polygons are
//! written farthest first and later siblings paint over earlier ones.

use nalgebra::Point2;
use platon_core::{is_progressed, Frame};

/// Styling applied to the emitted document. Everything here is opaque to
/// the pipeline; it only decorates the polygons the frame dictates.
#[derive(Debug, Clone)]
pub struct SvgStyle {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub edge_color: String,
    pub edge_width: String,
    pub face_fill: String,
    pub progressed_fill: String,
    pub container_class: String,
    pub face_class: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            background: "inherit".to_string(),
            edge_color: "#6E777C".to_string(),
            edge_width: "1px".to_string(),
            face_fill: "rgba(215,230,244, 0.8)".to_string(),
            progressed_fill: "rgba(0,0,0,0.6)".to_string(),
            container_class: "platonic-svg".to_string(),
            face_class: "platonic-face".to_string(),
        }
    }
}

/// Formats one coordinate for an SVG attribute: three decimals, trailing
/// zeros trimmed.
fn fmt_coord(value: f64) -> String {
    let s = format!("{value:.3}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// The `points` attribute for a projected polygon outline.
pub fn points_attr(points: &[Point2<f64>]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_coord(p.x), fmt_coord(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a complete SVG document for one frame.
///
/// `scale` is the display scale the solid was built with; the viewBox is
/// the matching `[-scale, scale]` square. The first `progressed` faces
/// (original face order, not draw order) get the progressed fill and a
/// `progressed` class for external styling.
pub fn render_document(frame: &Frame, style: &SvgStyle, scale: f64, progressed: usize) -> String {
    let extent = fmt_coord(2.0 * scale);
    let origin = fmt_coord(-scale);

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"{origin} {origin} {extent} {extent}\" \
         style=\"background-color:{};\" class=\"{}\">\n",
        style.width, style.height, style.background, style.container_class,
    ));

    for face in &frame.faces {
        let (fill, class) = if is_progressed(face.index, progressed) {
            (
                style.progressed_fill.as_str(),
                format!("{} progressed", style.face_class),
            )
        } else {
            (style.face_fill.as_str(), style.face_class.clone())
        };
        out.push_str(&format!(
            "  <polygon class=\"{class}\" stroke=\"{}\" stroke-width=\"{}\" \
             fill=\"{fill}\" points=\"{}\"/>\n",
            style.edge_color,
            style.edge_width,
            points_attr(&face.points),
        ));
    }

    out.push_str("</svg>\n");
    out
}
