//! Pointer state, hit-testing and the copy hit-region contract.

use glam::Vec2;

use crate::bubble::{Bubble, BubbleId};
use crate::constants::CLICK_PICK_BOOST;

/// Pointer position in logical canvas pixels plus an inside/outside flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub pos: Vec2,
    pub inside: bool,
}

/// Axis-aligned rectangle in logical canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Bounds of the rendered Copy affordance, produced by the render pipeline
/// and valid for exactly one frame.
#[derive(Clone, Debug)]
pub struct CopyRegion {
    pub owner: BubbleId,
    pub rect: Rect,
}

#[inline]
pub fn hits_circle(p: Vec2, center: Vec2, r: f32) -> bool {
    p.distance_squared(center) <= r * r
}

/// Hover pick: topmost bubble is drawn last, so scan in reverse insertion
/// order and take the first hit.
pub fn hover_target<'a>(bubbles: &'a [Bubble], p: Vec2) -> Option<&'a BubbleId> {
    bubbles
        .iter()
        .rev()
        .find(|b| hits_circle(p, b.pos, b.r))
        .map(|b| &b.id)
}

/// Click pick, same order as hover but with a more forgiving radius.
pub fn click_target<'a>(bubbles: &'a [Bubble], p: Vec2) -> Option<&'a BubbleId> {
    bubbles
        .iter()
        .rev()
        .find(|b| hits_circle(p, b.pos, b.r * CLICK_PICK_BOOST))
        .map(|b| &b.id)
}
