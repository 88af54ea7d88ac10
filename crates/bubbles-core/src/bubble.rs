//! Bubble entities and bulk (re)seeding.

use glam::Vec2;
use rand::Rng;

use crate::color::{self, PaletteEntry};
use crate::constants::*;
use crate::physics::Surface;

/// Stable bubble identity, derived from group + canonical hex + ordinal.
/// Reassigned wholesale on reseed, never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BubbleId(String);

impl BubbleId {
    pub fn derive(group: &str, hex: &str, ordinal: usize) -> Self {
        Self(format!("{group}-{hex}-{ordinal}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BubbleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Bubble {
    pub id: BubbleId,
    /// Canonical uppercase `#RRGGBB`.
    pub hex: String,
    pub rgb: [u8; 3],
    pub group: String,
    pub description: Option<String>,
    pub is_light: bool,
    /// Position and velocity in logical canvas pixels.
    pub pos: Vec2,
    pub vel: Vec2,
    pub r: f32,
    pub r_target: f32,
    /// Seed-time base radius the hover/selection targets derive from.
    pub rest_r: f32,
    /// Copy feedback, 1.0 right after a copy, decays geometrically to 0.
    pub pulse: f32,
}

/// Creates one bubble per palette entry, placed on a ring around the surface
/// center with jitter and a small random velocity. Entries that fail hex
/// canonicalization are skipped with a warning; the palette is expected to
/// be validated upstream.
pub fn seed_bubbles(entries: &[PaletteEntry], surface: Surface, rng: &mut impl Rng) -> Vec<Bubble> {
    let min_dim = surface.width.min(surface.height).max(1.0);
    let base_r = (min_dim * BASE_RADIUS_FRACTION).clamp(MIN_REST_RADIUS, MAX_REST_RADIUS);
    let spread = min_dim * SEED_SPREAD_FRACTION;
    let count = entries.len().max(1) as f32;

    let mut bubbles = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let (hex, rgb) = match color::canonicalize(&entry.hex) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("[seed] skipping palette entry: {e}");
                continue;
            }
        };

        let angle = idx as f32 / count * std::f32::consts::TAU;
        let ring = Vec2::new(
            surface.width * 0.5 + angle.cos() * spread,
            surface.height * SEED_CENTER_Y_FRACTION + angle.sin() * spread,
        );
        let jitter = Vec2::new(
            (rng.gen::<f32>() - 0.5) * spread * SEED_JITTER,
            (rng.gen::<f32>() - 0.5) * spread * SEED_JITTER,
        );
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * SEED_SPEED,
            (rng.gen::<f32>() - 0.5) * SEED_SPEED,
        );
        let rest_r = base_r * (RADIUS_VARIATION_BASE + (idx % 7) as f32 * RADIUS_VARIATION_STEP);

        let mut bubble = Bubble {
            id: BubbleId::derive(&entry.group, &hex, idx),
            hex,
            rgb,
            group: entry.group.clone(),
            description: entry.description.clone(),
            is_light: entry.is_light,
            pos: ring + jitter,
            vel,
            r: rest_r,
            r_target: rest_r,
            rest_r,
            pulse: 0.0,
        };
        crate::physics::contain(&mut bubble, rest_r, surface);
        bubbles.push(bubble);
    }
    bubbles
}
