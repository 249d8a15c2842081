use crate::constants::TIME_WRAP_SECS;
use crate::core::{AppState, LUT_WIDTH};
use crate::input;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<AppState>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
    /// `AppState::lut_revision` last pushed to the GPU, `None` before the
    /// first upload.
    pub uploaded_lut: Option<u64>,
}

impl<'a> FrameContext<'a> {
    pub fn new(state: Rc<RefCell<AppState>>, gpu: Option<render::GpuState<'a>>) -> Self {
        Self {
            state,
            gpu,
            started: Instant::now(),
            uploaded_lut: None,
        }
    }

    /// One animation frame: read the state, push the LUT if it changed,
    /// then draw the field.
    pub fn frame(&mut self) {
        let Some(g) = &mut self.gpu else {
            return;
        };
        let time = input::shader_time(self.started.elapsed().as_secs_f64(), TIME_WRAP_SECS);
        let state = self.state.borrow();

        let revision = state.lut_revision();
        if self.uploaded_lut != Some(revision) {
            g.set_lut(&state.lut_raster(LUT_WIDTH, 1));
            self.uploaded_lut = Some(revision);
        }

        let [width, height] = state.scene.canvas_size;
        g.resize_if_needed(width, height);
        let uniforms = state.field_uniforms(time);
        drop(state);

        if let Err(e) = g.render(&uniforms) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
