#![cfg(target_arch = "wasm32")]
//! Canvas 2D front end: wires browser events into the simulation, runs the
//! frame loop, and performs the clipboard side effect.

mod clipboard;
mod dom;
mod events;
mod frame;
mod palette;
mod render;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bubbles_core::{InputIntent, Simulation, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A mounted visualizer. `stop` (or dropping the handle) ends the frame loop
/// and detaches every listener that was registered at mount time.
#[wasm_bindgen]
pub struct BubblesHandle {
    running: Rc<Cell<bool>>,
    listeners: Vec<events::ListenerGuard>,
}

#[wasm_bindgen]
impl BubblesHandle {
    pub fn stop(&mut self) {
        self.running.set(false);
        self.listeners.clear();
        log::info!("bubbles-web stopped");
    }
}

/// Mounts the visualizer on the canvas with the given element id.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<BubblesHandle, JsValue> {
    init(canvas_id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bubbles-web starting");

    match init("bubbles-canvas") {
        // Auto-mounted instance lives for the lifetime of the page.
        Ok(handle) => std::mem::forget(handle),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

fn init(canvas_id: &str) -> anyhow::Result<BubblesHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let ctx = dom::context_2d(&canvas)?;

    let mut sim = Simulation::new(
        palette::default_palette(),
        Surface::new(width, height),
        rand::random(),
    );
    if let Some(dark) = events::prefers_dark() {
        sim.queue(InputIntent::ThemeChanged { dark });
    }
    let sim = Rc::new(RefCell::new(sim));

    let mut listeners = Vec::new();
    events::wire_input_handlers(&canvas, &sim, &mut listeners);
    events::wire_resize(&canvas, &sim, &mut listeners);
    events::wire_theme(&sim, &mut listeners);

    let running = Rc::new(Cell::new(true));
    frame::start_loop(frame::FrameContext::new(sim, ctx), running.clone());

    Ok(BubblesHandle { running, listeners })
}
