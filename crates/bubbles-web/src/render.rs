//! Canvas 2D paint pass. Draws in logical (CSS pixel) units under a
//! devicePixelRatio transform, and reports the copy-pill bounds back to the
//! simulation as the next frame's hit-region.

use bubbles_core::color;
use bubbles_core::{Bubble, CopyRegion, Rect, Simulation};
use web_sys as web;

const BG_LIGHT: &str = "#FFFFFF";
const BG_DARK: &str = "#0B1220";
const SHADOW_ON_LIGHT: &str = "rgba(0,0,0,0.08)";
const SHADOW_ON_DARK: &str = "rgba(0,0,0,0.45)";
const STROKE_ON_LIGHT: &str = "rgba(0,0,0,0.10)";
const STROKE_ON_DARK: &str = "rgba(255,255,255,0.12)";
const TEXT_DARK: &str = "rgba(0,0,0,0.72)";
const TEXT_LIGHT: &str = "rgba(255,255,255,0.85)";
const PILL_DARK: &str = "rgba(0,0,0,0.78)";
const PILL_LIGHT: &str = "rgba(255,255,255,0.92)";

/// Paints one frame and returns the copy hit-region when a bubble is
/// selected. The caller stores it on the simulation, replacing last frame's.
pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    sim: &Simulation,
    dpr: f64,
    copied: bool,
) -> Option<CopyRegion> {
    // Canvas resets its state when the backing store is resized, so the
    // logical-unit transform is re-applied every frame.
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

    let w = sim.surface.width as f64;
    let h = sim.surface.height as f64;
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str(if sim.dark { BG_DARK } else { BG_LIGHT });
    ctx.fill_rect(0.0, 0.0, w, h);

    for b in &sim.bubbles {
        draw_bubble(ctx, b, sim.dark);
    }

    let focus = sim
        .selected
        .as_ref()
        .or(sim.hovered.as_ref())
        .and_then(|id| sim.bubbles.iter().find(|b| &b.id == id));
    focus.and_then(|b| {
        let selected = sim.selected.as_ref() == Some(&b.id);
        draw_overlay(ctx, b, selected, copied)
    })
}

fn draw_bubble(ctx: &web::CanvasRenderingContext2d, b: &Bubble, dark: bool) {
    let x = b.pos.x as f64;
    let y = b.pos.y as f64;
    let r = b.r.max(0.0) as f64;

    ctx.save();
    ctx.begin_path();
    let _ = ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
    ctx.close_path();

    // Heavier shadow for entries flagged light so they read on white.
    let shadow_scale = if b.is_light { 1.5 } else { 1.0 };
    ctx.set_shadow_blur(18.0 * shadow_scale);
    ctx.set_shadow_color(if dark { SHADOW_ON_DARK } else { SHADOW_ON_LIGHT });
    ctx.set_fill_style_str(&b.hex);
    ctx.fill();
    ctx.set_shadow_blur(0.0);

    if b.is_light || color::is_light_color(b.rgb) {
        let weight = if b.is_light { 1.6 } else { 1.0 };
        ctx.set_line_width(1.25 * weight);
        ctx.set_stroke_style_str(if dark { STROKE_ON_DARK } else { STROKE_ON_LIGHT });
        ctx.stroke();
    }
    ctx.restore();
}

/// Hover/selection overlay, clipped to the bubble's circle: hex code,
/// description line when present, and the Copy pill for the selection.
fn draw_overlay(
    ctx: &web::CanvasRenderingContext2d,
    b: &Bubble,
    selected: bool,
    copied: bool,
) -> Option<CopyRegion> {
    let light = b.is_light || color::is_light_color(b.rgb);
    let x = b.pos.x as f64;
    let y = b.pos.y as f64;
    let r = b.r.max(0.0) as f64;

    ctx.save();
    ctx.begin_path();
    let _ = ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
    ctx.close_path();
    ctx.clip();

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(if light { TEXT_DARK } else { TEXT_LIGHT });

    let code_y = if selected { y - r * 0.30 } else { y };
    ctx.set_font("600 12px ui-sans-serif, system-ui, sans-serif");
    let _ = ctx.fill_text(&b.hex, x, code_y);
    if let Some(desc) = &b.description {
        ctx.set_font("10px ui-sans-serif, system-ui, sans-serif");
        let _ = ctx.fill_text(desc, x, code_y + 14.0);
    }

    let mut region = None;
    if selected {
        let label = if copied { "Copied" } else { "Copy" };
        ctx.set_font("500 11px ui-sans-serif, system-ui, sans-serif");
        let text_w = ctx
            .measure_text(label)
            .map(|m| m.width())
            .unwrap_or(34.0);
        let pill_w = text_w + 20.0;
        let pill_h = 20.0;
        let px = x - pill_w * 0.5;
        let py = y + r * 0.32 - pill_h * 0.5;

        round_rect(ctx, px, py, pill_w, pill_h, pill_h * 0.5);
        ctx.set_fill_style_str(if light { PILL_DARK } else { PILL_LIGHT });
        ctx.fill();
        ctx.set_fill_style_str(if light { TEXT_LIGHT } else { TEXT_DARK });
        let _ = ctx.fill_text(label, x, py + pill_h * 0.5);

        region = Some(CopyRegion {
            owner: b.id.clone(),
            rect: Rect {
                x: px as f32,
                y: py as f32,
                w: pill_w as f32,
                h: pill_h as f32,
            },
        });
    }

    ctx.restore();
    region
}

fn round_rect(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let radius = r.min(w * 0.5).min(h * 0.5);
    ctx.begin_path();
    ctx.move_to(x + radius, y);
    let _ = ctx.arc_to(x + w, y, x + w, y + h, radius);
    let _ = ctx.arc_to(x + w, y + h, x, y + h, radius);
    let _ = ctx.arc_to(x, y + h, x, y, radius);
    let _ = ctx.arc_to(x, y, x + w, y, radius);
    ctx.close_path();
}
