use crate::constants::POLAR_CANVAS_ID;
use crate::core::{draw_polar_diagram, AppState, PolarSurface, POLAR_HALF_EXTENT, POLAR_SIZE};
use crate::dom;
use crate::url;
use glam::Vec2;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STROKE_COLOR: &str = "white";
const BACKGROUND_COLOR: &str = "black";

/// `PolarSurface` over a Canvas 2D context.
struct CanvasSurface<'a>(&'a web::CanvasRenderingContext2d);

impl PolarSurface for CanvasSurface<'_> {
    fn save(&mut self) {
        self.0.save();
    }
    fn restore(&mut self) {
        self.0.restore();
    }
    fn fill_background(&mut self, half_extent: f32) {
        let h = half_extent as f64;
        self.0.set_fill_style_str(BACKGROUND_COLOR);
        self.0.fill_rect(-h, -h, 2.0 * h, 2.0 * h);
    }
    fn set_stroke(&mut self, alpha: f32, line_width: f32) {
        self.0.set_stroke_style_str(STROKE_COLOR);
        self.0.set_global_alpha(alpha as f64);
        self.0.set_line_width(line_width as f64);
    }
    fn begin_path(&mut self) {
        self.0.begin_path();
    }
    fn circle(&mut self, radius: f32) {
        let r = radius as f64;
        self.0.move_to(r, 0.0);
        _ = self.0.arc(0.0, 0.0, r, 0.0, TAU);
    }
    fn move_to(&mut self, p: Vec2) {
        self.0.move_to(p.x as f64, p.y as f64);
    }
    fn line_to(&mut self, p: Vec2) {
        self.0.line_to(p.x as f64, p.y as f64);
    }
    fn close_path(&mut self) {
        self.0.close_path();
    }
    fn stroke(&mut self) {
        self.0.stroke();
    }
}

#[derive(Clone)]
pub struct PolarPanel {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl PolarPanel {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, POLAR_CANVAS_ID)?;
        canvas.set_width(POLAR_SIZE as u32);
        canvas.set_height(POLAR_SIZE as u32);
        _ = canvas.style().set_property("cursor", "pointer");
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    pub fn redraw(&self, state: &AppState) {
        // origin at the center, both axes flipped
        let h = POLAR_HALF_EXTENT as f64;
        _ = self.ctx.set_transform(-1.0, 0.0, 0.0, -1.0, h, h);
        draw_polar_diagram(&mut CanvasSurface(&self.ctx), &state.polar_view());
    }

    /// Wheel steers, click toggles the pattern, hover highlights the curve.
    pub fn wire(&self, state: Rc<RefCell<AppState>>) {
        {
            let panel = self.clone();
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
                let pairs = {
                    let mut s = state.borrow_mut();
                    if let Err(e) = s.steer_by_wheel(ev.delta_y()) {
                        log::warn!("[polar] {}", e);
                        return;
                    }
                    panel.redraw(&s);
                    s.query_pairs()
                };
                url::sync(&pairs);
            }) as Box<dyn FnMut(_)>);
            _ = self
                .canvas
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let panel = self.clone();
            let state = state.clone();
            dom::add_listener(&self.canvas, event, move || {
                let mut s = state.borrow_mut();
                s.scene.polar_hover = hovered;
                panel.redraw(&s);
            });
        }

        let panel = self.clone();
        dom::add_listener(&self.canvas, "click", move || {
            let pairs = {
                let mut s = state.borrow_mut();
                match s.toggle_directivity() {
                    Ok(kind) => log::info!("[polar] pattern {}", kind.name()),
                    Err(e) => {
                        log::warn!("[polar] {}", e);
                        return;
                    }
                }
                panel.redraw(&s);
                s.query_pairs()
            };
            url::sync(&pairs);
        });
    }
}
