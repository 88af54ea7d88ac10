//! requestAnimationFrame loop with a fixed-timestep accumulator, so the
//! per-tick physics constants behave the same at any display refresh rate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bubbles_core::{Effect, Simulation};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{clipboard, dom, render};

/// Simulation tick length; the physics constants assume this cadence.
const TICK_SECONDS: f32 = 1.0 / 60.0;
/// Catch-up bound after a stall (background tab, long GC pause).
const MAX_TICKS_PER_FRAME: u32 = 5;
/// How long the pill reads "Copied" after a successful copy (~1.2 s).
const COPIED_LABEL_TICKS: u32 = 72;

pub struct FrameContext {
    sim: Rc<RefCell<Simulation>>,
    ctx: web::CanvasRenderingContext2d,
    last_instant: Instant,
    accumulator: f32,
    copied_ticks: u32,
    effects: Vec<Effect>,
}

impl FrameContext {
    pub fn new(sim: Rc<RefCell<Simulation>>, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            sim,
            ctx,
            last_instant: Instant::now(),
            accumulator: 0.0,
            copied_ticks: 0,
            effects: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.accumulator = (self.accumulator + dt).min(TICK_SECONDS * MAX_TICKS_PER_FRAME as f32);

        let mut sim = self.sim.borrow_mut();
        while self.accumulator >= TICK_SECONDS {
            self.accumulator -= TICK_SECONDS;
            sim.tick(&mut self.effects);
            self.copied_ticks = self.copied_ticks.saturating_sub(1);
        }

        for effect in self.effects.drain(..) {
            match effect {
                Effect::CopyText(text) => {
                    clipboard::write_text(&text);
                    self.copied_ticks = COPIED_LABEL_TICKS;
                }
            }
        }

        let region = render::draw(&self.ctx, &sim, dom::device_pixel_ratio(), self.copied_ticks > 0);
        sim.set_copy_region(region);
    }
}

pub fn start_loop(frame_ctx: FrameContext, running: Rc<Cell<bool>>) {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            // Cooperative stop: simply do not reschedule.
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
