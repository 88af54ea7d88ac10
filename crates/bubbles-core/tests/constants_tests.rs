// Sanity bounds on the tuning constants. These guard against edits that
// would make the integrator diverge or invert the emphasis ordering.

use bubbles_core::constants::*;

#[test]
fn damping_factors_shrink_velocity_and_pulse() {
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert!(PULSE_DECAY > 0.0 && PULSE_DECAY < 1.0);
    assert!(BOUNDARY_RESTITUTION > 0.0 && BOUNDARY_RESTITUTION < 1.0);
    assert!(PULSE_FLOOR > 0.0 && PULSE_FLOOR < 1.0);
}

#[test]
fn emphasis_boosts_are_ordered() {
    assert!(SELECT_BOOST > HOVER_BOOST);
    assert!(HOVER_BOOST > 1.0);
    assert!(CLICK_PICK_BOOST > 1.0);
    assert!(PULSE_SQUISH > 0.0 && PULSE_SQUISH < 1.0);
}

#[test]
fn radius_interpolation_favors_the_selection() {
    assert!(RADIUS_LERP > 0.0 && RADIUS_LERP < 1.0);
    assert!(RADIUS_LERP_SELECTED > RADIUS_LERP);
    assert!(RADIUS_LERP_SELECTED < 1.0);
}

#[test]
fn rest_radius_range_is_well_formed() {
    assert!(MIN_REST_RADIUS > 0.0);
    assert!(MIN_REST_RADIUS < MAX_REST_RADIUS);
    assert!(BASE_RADIUS_FRACTION > 0.0 && BASE_RADIUS_FRACTION < 0.5);
    assert!(RADIUS_VARIATION_BASE > 0.0);
    assert!(RADIUS_VARIATION_STEP >= 0.0);
}

#[test]
fn seed_layout_keeps_the_ring_on_screen() {
    assert!(SEED_SPREAD_FRACTION > 0.0 && SEED_SPREAD_FRACTION < 0.5);
    assert!(SEED_CENTER_Y_FRACTION > 0.0 && SEED_CENTER_Y_FRACTION < 1.0);
    assert!(SEED_JITTER >= 0.0 && SEED_JITTER < 1.0);
    assert!(SEED_SPEED >= 0.0);
}

#[test]
fn luminance_threshold_is_a_valid_fraction() {
    assert!(LIGHT_LUMINANCE_THRESHOLD > 0.0 && LIGHT_LUMINANCE_THRESHOLD < 1.0);
}
