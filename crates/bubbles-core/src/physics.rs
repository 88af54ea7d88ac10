//! Per-tick kinematics: pairwise separation, centering drift, integration,
//! boundary handling, radius interpolation and pulse decay.

use glam::Vec2;

use crate::bubble::{Bubble, BubbleId};
use crate::constants::*;

/// Logical drawing surface. All positions and radii live in these units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Radius used for collisions, hit-testing and wall clearance: the current
/// radius, boosted when the bubble is the hover or selection target.
#[inline]
pub fn effective_radius(b: &Bubble, hovered: Option<&BubbleId>, selected: Option<&BubbleId>) -> f32 {
    if selected == Some(&b.id) {
        b.r * SELECT_BOOST
    } else if hovered == Some(&b.id) {
        b.r * HOVER_BOOST
    } else {
        b.r
    }
}

/// Advances the whole set by one tick.
pub fn step(
    bubbles: &mut [Bubble],
    surface: Surface,
    hovered: Option<&BubbleId>,
    selected: Option<&BubbleId>,
) {
    assign_targets(bubbles, hovered, selected);
    resolve_collisions(bubbles, hovered, selected);
    integrate(bubbles, surface, hovered, selected);
    relax_radii(bubbles, selected);
    decay_pulses(bubbles);
}

/// Target radius policy, computed once per tick before integration. The
/// selected bubble squishes slightly in proportion to its copy pulse.
fn assign_targets(bubbles: &mut [Bubble], hovered: Option<&BubbleId>, selected: Option<&BubbleId>) {
    for b in bubbles {
        b.r_target = if selected == Some(&b.id) {
            b.rest_r * SELECT_BOOST * (1.0 - PULSE_SQUISH * b.pulse)
        } else if hovered == Some(&b.id) {
            b.rest_r * HOVER_BOOST
        } else {
            b.rest_r
        };
    }
}

/// Separates every overlapping pair along the center-to-center normal with a
/// position push plus a smaller velocity impulse. Forces are equal and
/// opposite, so the result does not depend on pair enumeration order.
pub fn resolve_collisions(
    bubbles: &mut [Bubble],
    hovered: Option<&BubbleId>,
    selected: Option<&BubbleId>,
) {
    let len = bubbles.len();
    for i in 0..len {
        for j in (i + 1)..len {
            let (head, tail) = bubbles.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let min_dist = effective_radius(a, hovered, selected)
                + effective_radius(b, hovered, selected);
            let delta = b.pos - a.pos;
            let dist = delta.length().max(MIN_SEPARATION);
            if dist >= min_dist {
                continue;
            }

            // Coincident centers give no usable normal; fall back to +x.
            let normal = if delta.length_squared() < MIN_SEPARATION * MIN_SEPARATION {
                Vec2::X
            } else {
                delta / dist
            };

            let overlap = min_dist - dist;
            let push = normal * (overlap * REPULSE_PUSH * 0.5);
            a.pos -= push;
            b.pos += push;
            let impulse = normal * (overlap * REPULSE_IMPULSE);
            a.vel -= impulse;
            b.vel += impulse;
        }
    }
}

fn integrate(
    bubbles: &mut [Bubble],
    surface: Surface,
    hovered: Option<&BubbleId>,
    selected: Option<&BubbleId>,
) {
    let center = surface.center();
    for b in bubbles.iter_mut() {
        // Gentle drift toward the center keeps the cluster composed.
        b.vel += (center - b.pos) * CENTER_PULL;
        b.pos += b.vel;
        b.vel *= DAMPING;

        let r = effective_radius(b, hovered, selected);
        contain(b, r, surface);
    }
}

/// Boundary policy: clamp the position to `[r, dim - r]` and replace the
/// offending velocity component with its magnitude pointed inward, damped by
/// the restitution factor. An axis smaller than the diameter pins to the
/// surface midpoint.
pub fn contain(b: &mut Bubble, r: f32, surface: Surface) {
    if surface.width <= r * 2.0 {
        b.pos.x = surface.width * 0.5;
        b.vel.x = 0.0;
    } else if b.pos.x - r < 0.0 {
        b.pos.x = r;
        b.vel.x = b.vel.x.abs() * BOUNDARY_RESTITUTION;
    } else if b.pos.x + r > surface.width {
        b.pos.x = surface.width - r;
        b.vel.x = -b.vel.x.abs() * BOUNDARY_RESTITUTION;
    }

    if surface.height <= r * 2.0 {
        b.pos.y = surface.height * 0.5;
        b.vel.y = 0.0;
    } else if b.pos.y - r < 0.0 {
        b.pos.y = r;
        b.vel.y = b.vel.y.abs() * BOUNDARY_RESTITUTION;
    } else if b.pos.y + r > surface.height {
        b.pos.y = surface.height - r;
        b.vel.y = -b.vel.y.abs() * BOUNDARY_RESTITUTION;
    }
}

fn relax_radii(bubbles: &mut [Bubble], selected: Option<&BubbleId>) {
    for b in bubbles {
        let rate = if selected == Some(&b.id) {
            RADIUS_LERP_SELECTED
        } else {
            RADIUS_LERP
        };
        b.r += (b.r_target - b.r) * rate;
        b.r = b.r.max(0.0);
    }
}

fn decay_pulses(bubbles: &mut [Bubble]) {
    for b in bubbles {
        b.pulse *= PULSE_DECAY;
        if b.pulse < PULSE_FLOOR {
            b.pulse = 0.0;
        }
    }
}
