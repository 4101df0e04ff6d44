//! WASM/DOM view layer
//!
//! Owns one `<svg>` container with a `<polygon>` child per face and
//! updates it in place each tick. SVG has no z-index, so after rewriting
//! the `points` attributes the polygons are re-appended in depth order:
//! re-appending an attached node moves it, leaving the children sorted
//! back to front.
//!
//! The host page drives the cadence (setInterval/requestAnimationFrame
//! calling [`PlatonicSvg::tick`]); dropping the component simply stops
//! the updates.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use platon_core::{is_progressed, progressed_count, Frame, RenderConfig, Scene, SolidKind};
use platon_svg::{points_attr, SvgStyle};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A rotating-solid SVG component bound to the page's DOM.
#[wasm_bindgen]
pub struct PlatonicSvg {
    scene: Scene,
    deltas: [f64; 3],
    progress_max: u32,
    style: SvgStyle,
    container: Element,
    polygons: Vec<Element>,
}

#[wasm_bindgen]
impl PlatonicSvg {
    /// Builds the component and its (detached) SVG subtree. Fails on an
    /// unknown solid identifier or invalid configuration values.
    #[wasm_bindgen(constructor)]
    pub fn new(
        solid: &str,
        dx: f64,
        dy: f64,
        dz: f64,
        scale: f64,
        progress_max: u32,
    ) -> Result<PlatonicSvg, JsValue> {
        let kind: SolidKind = solid.parse().map_err(to_js)?;
        let config = RenderConfig {
            kind,
            dx,
            dy,
            dz,
            scale,
            progress_max,
            ..RenderConfig::default()
        };
        let deltas = config.deltas();
        let scale = config.scale;
        let progress_max = config.progress_max;
        let scene = config.into_scene().map_err(to_js)?;

        let document = dom_document()?;
        let style = SvgStyle::default();

        let container = document.create_element_ns(Some(SVG_NS), "svg")?;
        container.set_attribute("width", &style.width.to_string())?;
        container.set_attribute("height", &style.height.to_string())?;
        container.set_attribute(
            "viewBox",
            &format!("{} {} {} {}", -scale, -scale, 2.0 * scale, 2.0 * scale),
        )?;
        container.set_attribute("style", &format!("background-color:{};", style.background))?;
        container.set_attribute("class", &style.container_class)?;

        let mut polygons = Vec::with_capacity(scene.solid().face_count());
        for _ in 0..scene.solid().face_count() {
            let polygon = document.create_element_ns(Some(SVG_NS), "polygon")?;
            polygon.set_attribute("stroke-width", &style.edge_width)?;
            polygon.set_attribute("stroke", &style.edge_color)?;
            polygon.set_attribute("fill", &style.face_fill)?;
            polygon.set_attribute("class", &style.face_class)?;
            polygons.push(polygon);
        }

        let component = Self {
            scene,
            deltas,
            progress_max,
            style,
            container,
            polygons,
        };
        component.apply_frame(&component.scene.frame())?;
        Ok(component)
    }

    /// Attaches the SVG container under the element with `parent_id`.
    pub fn mount(&self, parent_id: &str) -> Result<(), JsValue> {
        let parent = dom_document()?
            .get_element_by_id(parent_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id `{parent_id}`")))?;
        parent.append_child(&self.container)?;
        Ok(())
    }

    /// Advances the rotation by one tick and updates the polygons.
    pub fn tick(&mut self) -> Result<(), JsValue> {
        let [dx, dy, dz] = self.deltas;
        self.scene.advance(dx, dy, dz);
        let frame = self.scene.frame();
        self.apply_frame(&frame)
    }

    /// Recolors the progressed share of faces for `value` out of the
    /// configured maximum. Progress follows original face order, not the
    /// current draw order.
    pub fn set_progress(&self, value: u32) -> Result<(), JsValue> {
        let count = progressed_count(value, self.progress_max, self.polygons.len());
        for (index, polygon) in self.polygons.iter().enumerate() {
            if is_progressed(index, count) {
                polygon.set_attribute("fill", &self.style.progressed_fill)?;
                polygon.set_attribute(
                    "class",
                    &format!("{} progressed", self.style.face_class),
                )?;
            } else {
                polygon.set_attribute("fill", &self.style.face_fill)?;
                polygon.set_attribute("class", &self.style.face_class)?;
            }
        }
        Ok(())
    }

    pub fn face_count(&self) -> usize {
        self.polygons.len()
    }

    fn apply_frame(&self, frame: &Frame) -> Result<(), JsValue> {
        for face in &frame.faces {
            let polygon = &self.polygons[face.index];
            polygon.set_attribute("points", &points_attr(&face.points))?;
            self.container.append_child(polygon)?;
        }
        Ok(())
    }
}

fn dom_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no DOM document available"))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
