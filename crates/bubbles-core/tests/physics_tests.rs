// Integrator properties: penetration resolution, containment, boundary
// behavior, radius interpolation and pulse decay.

use bubbles_core::bubble::{Bubble, BubbleId};
use bubbles_core::constants::*;
use bubbles_core::physics::{self, Surface};
use bubbles_core::seed_bubbles;
use bubbles_core::PaletteEntry;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bubble(ordinal: usize, x: f32, y: f32, r: f32) -> Bubble {
    Bubble {
        id: BubbleId::derive("test", "#FF0000", ordinal),
        hex: "#FF0000".into(),
        rgb: [255, 0, 0],
        group: "test".into(),
        description: None,
        is_light: false,
        pos: Vec2::new(x, y),
        vel: Vec2::ZERO,
        r,
        r_target: r,
        rest_r: r,
        pulse: 0.0,
    }
}

fn assert_finite(bubbles: &[Bubble]) {
    for b in bubbles {
        assert!(b.pos.is_finite(), "position went non-finite: {:?}", b.pos);
        assert!(b.vel.is_finite(), "velocity went non-finite: {:?}", b.vel);
        assert!(b.r.is_finite() && b.r >= 0.0, "bad radius: {}", b.r);
    }
}

#[test]
fn overlapping_pair_separates_to_contact_distance() {
    // Two radius-40 bubbles 10 units apart (70 units of overlap).
    let surface = Surface::new(800.0, 600.0);
    let mut bubbles = vec![bubble(0, 395.0, 300.0, 40.0), bubble(1, 405.0, 300.0, 40.0)];

    for _ in 0..600 {
        physics::step(&mut bubbles, surface, None, None);
        assert_finite(&bubbles);
    }

    let dist = bubbles[0].pos.distance(bubbles[1].pos);
    assert!(
        (dist - 80.0).abs() <= 2.0,
        "expected contact distance near 80, got {dist}"
    );
}

#[test]
fn penetration_resolves_from_coincident_centers() {
    // Exactly coincident centers have no usable normal; the integrator must
    // still pull the pair apart without producing NaN.
    let surface = Surface::new(800.0, 600.0);
    let mut bubbles = vec![bubble(0, 400.0, 300.0, 30.0), bubble(1, 400.0, 300.0, 30.0)];

    for _ in 0..400 {
        physics::step(&mut bubbles, surface, None, None);
        assert_finite(&bubbles);
    }

    let dist = bubbles[0].pos.distance(bubbles[1].pos);
    assert!(dist > 30.0, "coincident bubbles never separated: {dist}");
}

#[test]
fn bubbles_stay_inside_the_surface_every_tick() {
    let surface = Surface::new(400.0, 300.0);
    let palette: Vec<PaletteEntry> = (0..12)
        .map(|i| PaletteEntry::new("#2A68B2", format!("g{i}")))
        .collect();
    let mut rng = StdRng::seed_from_u64(7);
    let mut bubbles = seed_bubbles(&palette, surface, &mut rng);

    let eps = 1e-3;
    for _ in 0..300 {
        physics::step(&mut bubbles, surface, None, None);
        for b in &bubbles {
            assert!(b.pos.x >= b.r - eps && b.pos.x <= surface.width - b.r + eps);
            assert!(b.pos.y >= b.r - eps && b.pos.y <= surface.height - b.r + eps);
        }
    }
}

#[test]
fn hovered_bubble_is_contained_with_its_boosted_radius() {
    let surface = Surface::new(200.0, 200.0);
    let mut bubbles = vec![bubble(0, 190.0, 100.0, 30.0)];
    let hovered = bubbles[0].id.clone();

    // Enough ticks for the radius to settle on its hover target.
    for _ in 0..100 {
        physics::step(&mut bubbles, surface, Some(&hovered), None);
    }

    let r_eff = bubbles[0].r * HOVER_BOOST;
    assert!((bubbles[0].r - 30.0 * HOVER_BOOST).abs() < 0.1);
    assert!(bubbles[0].pos.x <= surface.width - r_eff + 0.1);
}

#[test]
fn wall_contact_clamps_and_redirects_inward() {
    let surface = Surface::new(800.0, 600.0);
    let mut bubbles = vec![bubble(0, 795.0, 300.0, 20.0)];
    bubbles[0].vel = Vec2::new(5.0, 0.0);

    physics::step(&mut bubbles, surface, None, None);

    assert!(bubbles[0].pos.x <= 780.0 + 1e-3);
    assert!(bubbles[0].vel.x <= 0.0, "velocity still points outward");
}

#[test]
fn degenerate_surface_pins_to_midpoint_without_nan() {
    let surface = Surface::new(10.0, 10.0);
    let mut bubbles = vec![bubble(0, 3.0, 8.0, 20.0)];

    for _ in 0..50 {
        physics::step(&mut bubbles, surface, None, None);
        assert_finite(&bubbles);
    }
    assert_eq!(bubbles[0].pos, Vec2::new(5.0, 5.0));
}

#[test]
fn radius_gap_is_non_increasing_under_constant_target() {
    let surface = Surface::new(800.0, 600.0);
    let mut bubbles = vec![bubble(0, 400.0, 300.0, 30.0)];
    bubbles[0].r = 10.0;

    let mut prev_gap = (bubbles[0].r - bubbles[0].rest_r).abs();
    for _ in 0..100 {
        physics::step(&mut bubbles, surface, None, None);
        let gap = (bubbles[0].r - bubbles[0].rest_r).abs();
        assert!(gap <= prev_gap + 1e-6, "gap grew: {prev_gap} -> {gap}");
        prev_gap = gap;
    }
    assert!(prev_gap < 0.5, "radius never converged: gap {prev_gap}");
}

#[test]
fn selected_target_is_enlarged_and_squished_by_pulse() {
    let surface = Surface::new(800.0, 600.0);
    let mut bubbles = vec![bubble(0, 400.0, 300.0, 30.0)];
    bubbles[0].pulse = 1.0;
    let selected = bubbles[0].id.clone();

    physics::step(&mut bubbles, surface, None, Some(&selected));

    let expected = 30.0 * SELECT_BOOST * (1.0 - PULSE_SQUISH);
    assert!((bubbles[0].r_target - expected).abs() < 1e-4);
}

#[test]
fn hovered_target_is_medium_enlarged() {
    let surface = Surface::new(800.0, 600.0);
    let mut bubbles = vec![bubble(0, 400.0, 300.0, 30.0)];
    let hovered = bubbles[0].id.clone();

    physics::step(&mut bubbles, surface, Some(&hovered), None);

    assert!((bubbles[0].r_target - 30.0 * HOVER_BOOST).abs() < 1e-4);
}

#[test]
fn pulse_decays_to_zero_within_a_bounded_tick_count() {
    let surface = Surface::new(800.0, 600.0);
    let mut bubbles = vec![bubble(0, 400.0, 300.0, 30.0)];
    bubbles[0].pulse = 1.0;

    // Geometric decay: ln(floor) / ln(decay) ticks, ~56 with the current
    // constants. Allow a little slack but insist on a hard bound.
    let mut zero_at = None;
    for tick in 1..=80 {
        physics::step(&mut bubbles, surface, None, None);
        assert!(bubbles[0].pulse >= 0.0);
        if bubbles[0].pulse == 0.0 {
            zero_at = Some(tick);
            break;
        }
    }
    let zero_at = zero_at.expect("pulse never reached zero");
    assert!(zero_at <= 60, "pulse took {zero_at} ticks to clear");

    // And it stays at zero.
    physics::step(&mut bubbles, surface, None, None);
    assert_eq!(bubbles[0].pulse, 0.0);
}
