use crate::constants::{COLORS_ATTR, LUT_LIST_ID, OPEN_CLASS, RAMP_CANVAS_ID};
use crate::core::{AppState, ColorStops, LutRaster, LUT_PRESETS, LUT_RAMP_HEIGHT, LUT_WIDTH};
use crate::dom;
use crate::url;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct PresetItem {
    item: web::Element,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    stops: ColorStops,
}

/// The active ramp preview plus one clickable preview per preset.
#[derive(Clone)]
pub struct LutPanel {
    ramp: web::HtmlCanvasElement,
    ramp_ctx: web::CanvasRenderingContext2d,
    presets: Rc<Vec<PresetItem>>,
}

impl LutPanel {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let ramp: web::HtmlCanvasElement = dom::element_by_id(document, RAMP_CANVAS_ID)?;
        let ramp_ctx = dom::context_2d(&ramp)?;
        let list = document.get_element_by_id(LUT_LIST_ID);
        if list.is_none() {
            log::warn!("[lut] missing #{}, presets disabled", LUT_LIST_ID);
        }
        let mut presets = Vec::new();
        if let Some(list) = list {
            for preset in LUT_PRESETS {
                let stops = match preset.stops() {
                    Ok(s) => s,
                    Err(e) => {
                        log::warn!("[lut] preset {}: {}", preset.name, e);
                        continue;
                    }
                };
                let item = document
                    .create_element("li")
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                _ = item.set_attribute("title", preset.name);
                let canvas = document
                    .create_element("canvas")
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?
                    .dyn_into::<web::HtmlCanvasElement>()
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                _ = canvas.set_attribute(COLORS_ATTR, &stops.to_list_string());
                _ = item.append_child(&canvas);
                _ = list.append_child(&item);
                let ctx = dom::context_2d(&canvas)?;
                presets.push(PresetItem {
                    item,
                    canvas,
                    ctx,
                    stops,
                });
            }
        }
        Ok(Self {
            ramp,
            ramp_ctx,
            presets: Rc::new(presets),
        })
    }

    pub fn redraw_ramp(&self, state: &AppState) {
        let raster = state.lut_raster(LUT_WIDTH, LUT_RAMP_HEIGHT);
        _ = self.ramp.set_attribute(COLORS_ATTR, &state.stops().to_list_string());
        dom::put_lut_raster(&self.ramp, &self.ramp_ctx, &raster);
    }

    /// Ramp and every preset preview, at the current step count.
    pub fn redraw_all(&self, state: &AppState) {
        self.redraw_ramp(state);
        let steps = state.lut_steps();
        for p in self.presets.iter() {
            let raster = LutRaster::build(&p.stops, LUT_WIDTH, LUT_RAMP_HEIGHT, steps);
            dom::put_lut_raster(&p.canvas, &p.ctx, &raster);
        }
    }

    /// Clicking the ramp's container opens the preset list; clicking a
    /// preset makes it the active LUT.
    pub fn wire(&self, state: Rc<RefCell<AppState>>) {
        if let Some(container) = self.ramp.parent_element() {
            let target = container.clone();
            dom::add_listener(&container, "click", move || {
                dom::toggle_class(&target, OPEN_CLASS);
            });
        }
        for p in self.presets.iter() {
            let panel = self.clone();
            let state = state.clone();
            let stops = p.stops.clone();
            dom::add_listener(&p.item, "click", move || {
                let pairs = {
                    let mut s = state.borrow_mut();
                    log::info!("[lut] selected {}", stops.to_list_string());
                    s.select_stops(stops.clone());
                    panel.redraw_ramp(&s);
                    s.query_pairs()
                };
                url::sync(&pairs);
            });
        }
    }
}
