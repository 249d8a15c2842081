#![cfg(target_arch = "wasm32")]
use crate::core::field::LUT_STEPS;
use crate::core::{AppState, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod lut_panel;
mod overlay;
mod polar_panel;
mod render;
mod url;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("phasedarray-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn read_query() -> Vec<(String, String)> {
    match url::initial_query_pairs() {
        Ok(pairs) => {
            log::info!("initial params:");
            for (k, v) in &pairs {
                log::info!("  {} = {}", k, v);
            }
            pairs
        }
        Err(e) => {
            log::warn!("cannot read query string: {:?}", e);
            Vec::new()
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement =
        dom::element_by_id(&document, constants::FIELD_CANVAS_ID)?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let state = Rc::new(RefCell::new(AppState::from_query(
        read_query(),
        SceneState::new(width, height),
    )));

    let lut_panel = lut_panel::LutPanel::new(&document)?;
    let polar_panel = polar_panel::PolarPanel::new(&document)?;
    {
        let panel = lut_panel.clone();
        let state_for_change = state.clone();
        let on_change: Rc<dyn Fn(&str)> = Rc::new(move |name: &str| {
            if name == LUT_STEPS {
                panel.redraw_all(&state_for_change.borrow());
            }
        });
        controls::bind_field_params(&document, &state, on_change);
    }
    {
        let s = state.borrow();
        lut_panel.redraw_all(&s);
        polar_panel.redraw(&s);
        // normalize the address bar to the full parameter set
        url::sync(&s.query_pairs());
    }
    lut_panel.wire(state.clone());
    polar_panel.wire(state.clone());
    overlay::wire_options_toggle(&document);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        state: state.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(state, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
