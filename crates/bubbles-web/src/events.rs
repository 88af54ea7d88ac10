//! Listener wiring. Handlers never mutate simulation state directly; they
//! enqueue intents the frame loop drains once per tick.

use std::cell::RefCell;
use std::rc::Rc;

use bubbles_core::{InputIntent, Simulation, Surface};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub type SharedSim = Rc<RefCell<Simulation>>;

/// A registered listener that detaches itself when dropped, so teardown is
/// the mirror image of wiring.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn attach(
        target: web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("failed to attach {event} listener: {:?}", e);
        }
        Self {
            target,
            event,
            closure,
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Client coordinates (CSS px, viewport origin) → logical canvas pixels
/// (CSS px, canvas origin).
#[inline]
pub fn client_to_logical(canvas: &web::HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(client_x - rect.left() as f32, client_y - rect.top() as f32)
}

pub fn wire_input_handlers(
    canvas: &web::HtmlCanvasElement,
    sim: &SharedSim,
    guards: &mut Vec<ListenerGuard>,
) {
    {
        let sim = sim.clone();
        let canvas_m = canvas.clone();
        guards.push(ListenerGuard::attach(
            canvas.clone().into(),
            "pointermove",
            move |ev| {
                if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                    let p = client_to_logical(&canvas_m, ev.client_x() as f32, ev.client_y() as f32);
                    sim.borrow_mut()
                        .queue(InputIntent::PointerMove { x: p.x, y: p.y });
                }
            },
        ));
    }
    {
        let sim = sim.clone();
        guards.push(ListenerGuard::attach(
            canvas.clone().into(),
            "pointerleave",
            move |_| sim.borrow_mut().queue(InputIntent::PointerLeave),
        ));
    }
    {
        let sim = sim.clone();
        let canvas_u = canvas.clone();
        guards.push(ListenerGuard::attach(
            canvas.clone().into(),
            "pointerup",
            move |ev| {
                if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                    let p = client_to_logical(&canvas_u, ev.client_x() as f32, ev.client_y() as f32);
                    sim.borrow_mut().queue(InputIntent::Click { x: p.x, y: p.y });
                }
            },
        ));
    }
    if let Some(window) = web::window() {
        let sim = sim.clone();
        guards.push(ListenerGuard::attach(window.into(), "keydown", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
                if ev.key() == "Escape" {
                    sim.borrow_mut().queue(InputIntent::EscapePressed);
                }
            }
        }));
    }
}

/// Window resize → backing-store sync → reseed intent (only when the logical
/// size actually changed; browsers fire streams of resize events).
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    sim: &SharedSim,
    guards: &mut Vec<ListenerGuard>,
) {
    let Some(window) = web::window() else { return };
    let sim = sim.clone();
    let canvas = canvas.clone();
    guards.push(ListenerGuard::attach(window.into(), "resize", move |_| {
        let (width, height) = dom::sync_canvas_backing_size(&canvas);
        let mut sim = sim.borrow_mut();
        if sim.surface != Surface::new(width, height) {
            log::info!("[resize] {width:.0}x{height:.0}");
            sim.queue(InputIntent::Resize { width, height });
        }
    }));
}

pub fn prefers_dark() -> Option<bool> {
    web::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
}

pub fn wire_theme(sim: &SharedSim, guards: &mut Vec<ListenerGuard>) {
    let Some(window) = web::window() else { return };
    let Ok(Some(mql)) = window.match_media("(prefers-color-scheme: dark)") else {
        return;
    };
    let sim = sim.clone();
    guards.push(ListenerGuard::attach(mql.into(), "change", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MediaQueryListEvent>() {
            sim.borrow_mut()
                .queue(InputIntent::ThemeChanged { dark: ev.matches() });
        }
    }));
}
