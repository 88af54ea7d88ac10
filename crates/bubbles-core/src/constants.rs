//! Tuning constants for seeding, physics and interaction emphasis.
//!
//! Physics constants are per-tick; the frontend runs ticks on a fixed 60 Hz
//! grid so these behave the same on any display.

// Seeding
pub const BASE_RADIUS_FRACTION: f32 = 0.045; // rest radius as a fraction of min(w, h)
pub const MIN_REST_RADIUS: f32 = 18.0;
pub const MAX_REST_RADIUS: f32 = 42.0;
pub const SEED_SPREAD_FRACTION: f32 = 0.18; // ring radius as a fraction of min(w, h)
pub const SEED_CENTER_Y_FRACTION: f32 = 0.45; // ring sits slightly above center
pub const SEED_JITTER: f32 = 0.35; // position jitter relative to the spread
pub const SEED_SPEED: f32 = 0.6; // max initial velocity per axis
pub const RADIUS_VARIATION_BASE: f32 = 0.85;
pub const RADIUS_VARIATION_STEP: f32 = 0.04; // ordinal-based size variation, period 7

// Physics
pub const DAMPING: f32 = 0.985; // velocity retained per tick
pub const REPULSE_PUSH: f32 = 0.75; // fraction of overlap removed per tick
pub const REPULSE_IMPULSE: f32 = 0.02; // velocity impulse per unit of overlap
pub const CENTER_PULL: f32 = 0.0008; // gentle drift toward the surface center
pub const BOUNDARY_RESTITUTION: f32 = 0.8; // damped inward push at the walls
pub const MIN_SEPARATION: f32 = 1e-4; // distance floor, keeps the pair normal finite

// Hover / selection emphasis
pub const HOVER_BOOST: f32 = 1.12;
pub const SELECT_BOOST: f32 = 1.28;
pub const CLICK_PICK_BOOST: f32 = 1.10; // clicks are more forgiving than hover
pub const PULSE_SQUISH: f32 = 0.12; // selected target contracts with pulse

// Radius interpolation
pub const RADIUS_LERP: f32 = 0.18;
pub const RADIUS_LERP_SELECTED: f32 = 0.32; // selection snaps faster

// Copy pulse
pub const PULSE_DECAY: f32 = 0.92;
pub const PULSE_FLOOR: f32 = 0.01; // below this the pulse clamps to zero

// Contrast
pub const LIGHT_LUMINANCE_THRESHOLD: f32 = 0.72;
