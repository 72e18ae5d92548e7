// Host-side tests for the sparkle/orb physics and the particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod random {
    include!("../src/random.rs");
}
mod surface {
    include!("../src/surface.rs");
}
mod sparkle {
    include!("../src/sparkle.rs");
}
mod orb {
    include!("../src/orb.rs");
}
mod field {
    include!("../src/field.rs");
}
mod support;

use config::ParticleConfig;
use constants::*;
use field::ParticleField;
use glam::DVec2;
use orb::{LightOrb, ORB_GLOW_STOPS};
use random::SeededRandom;
use sparkle::Sparkle;
use support::{approx, DrawCall, RecordingSurface, ScriptedRandom};

const W: f64 = 800.0;
const H: f64 = 600.0;

fn quiet_config() -> ParticleConfig {
    ParticleConfig {
        orb_count: 0,
        ..ParticleConfig::default()
    }
}

#[test]
fn sparkle_update_applies_gravity_after_moving() {
    // size = 1/3 * 3 + 1 = 2, dx = dy = 0, gold, no rotation
    let mut rng = ScriptedRandom::new(vec![1.0 / 3.0, 0.5, 0.5, 0.0, 0.0, 0.5]);
    let mut s = Sparkle::new(DVec2::new(100.0, 100.0), SPARKLE_MAX_LIFE, &mut rng);
    assert!(approx(s.size, 2.0));
    assert_eq!(s.vel, DVec2::ZERO);
    assert_eq!(s.color, SPARKLE_PALETTE[0]);
    assert_eq!(s.life, 100);

    s.update(SPARKLE_GRAVITY);

    assert_eq!(s.pos, DVec2::new(100.0, 100.0));
    assert!(approx(s.vel.y, 0.05));
    assert!(approx(s.vel.x, 0.0));
    assert_eq!(s.life, 99);
    assert!(approx(s.opacity, 0.99));
}

#[test]
fn sparkle_creation_draws_within_ranges() {
    let mut rng = SeededRandom::from_seed(11);
    for _ in 0..500 {
        let s = Sparkle::new(DVec2::ZERO, SPARKLE_MAX_LIFE, &mut rng);
        assert!(s.size >= 1.0 && s.size < 4.0);
        assert!(s.vel.x >= -1.0 && s.vel.x < 1.0);
        assert!(s.vel.y >= -1.0 && s.vel.y < 1.0);
        assert!(s.rotation_deg >= 0.0 && s.rotation_deg < 360.0);
        assert!(s.rotation_speed_deg >= -5.0 && s.rotation_speed_deg < 5.0);
        assert!(SPARKLE_PALETTE.contains(&s.color));
        assert_eq!(s.opacity, 1.0);
    }
}

#[test]
fn sparkle_opacity_tracks_remaining_life() {
    let mut rng = SeededRandom::from_seed(3);
    let mut s = Sparkle::new(DVec2::new(400.0, 0.0), SPARKLE_MAX_LIFE, &mut rng);
    let mut prev = s.opacity;
    while s.life > 0 {
        s.update(SPARKLE_GRAVITY);
        assert!(approx(s.opacity, s.life as f64 / s.max_life as f64));
        assert!(s.opacity <= prev);
        assert!((0.0..=1.0).contains(&s.opacity));
        prev = s.opacity;
    }
    // The counter never wraps once exhausted.
    s.update(SPARKLE_GRAVITY);
    assert_eq!(s.life, 0);
    assert_eq!(s.opacity, 0.0);
}

#[test]
fn sparkle_expiry_checks_life_and_bottom_edge() {
    let mut rng = ScriptedRandom::constant(0.5);
    let mut s = Sparkle::new(DVec2::new(10.0, 50.0), 10, &mut rng);
    assert!(!s.is_expired(100.0));
    s.pos.y = 100.0;
    assert!(!s.is_expired(100.0), "on the edge is still visible");
    s.pos.y = 100.5;
    assert!(s.is_expired(100.0));
    s.pos.y = 50.0;
    s.life = 0;
    assert!(s.is_expired(100.0));
}

#[test]
fn sparkle_outline_alternates_outer_and_inner_radius() {
    let mut rng = ScriptedRandom::new(vec![1.0 / 3.0, 0.5, 0.5, 0.0, 0.0, 0.5]);
    let mut s = Sparkle::new(DVec2::new(100.0, 100.0), SPARKLE_MAX_LIFE, &mut rng);
    let points = s.outline();
    assert_eq!(points.len(), 8);
    for (i, p) in points.iter().enumerate() {
        let r = p.distance(s.pos);
        let expected = if i % 2 == 0 { 2.0 } else { 1.0 };
        assert!((r - expected).abs() < 1e-9, "vertex {i} at radius {r}");
    }
    assert!(points[0].distance(DVec2::new(102.0, 100.0)) < 1e-9);
    assert!(points[2].distance(DVec2::new(100.0, 102.0)) < 1e-9);

    s.rotation_deg = 90.0;
    let rotated = s.outline();
    assert!(rotated[0].distance(DVec2::new(100.0, 102.0)) < 1e-9);
    assert!(rotated[2].distance(DVec2::new(98.0, 100.0)) < 1e-9);
}

#[test]
fn sparkle_style_fades_fill_and_keeps_glow() {
    let mut rng = ScriptedRandom::new(vec![0.0, 0.5, 0.5, 0.9, 0.0, 0.5]);
    let mut s = Sparkle::new(DVec2::ZERO, 4, &mut rng);
    s.update(0.0);
    let style = s.style();
    assert!(approx(style.alpha, 0.75));
    assert_eq!(style.fill.a, 0.75);
    assert_eq!([style.fill.r, style.fill.g, style.fill.b], SPARKLE_PALETTE[4]);
    let glow = style.glow.expect("sparkles always glow");
    assert_eq!(glow.blur, SPARKLE_GLOW_BLUR);
    assert_eq!(glow.color.a, SPARKLE_GLOW_ALPHA);
    assert_eq!(glow.color.to_css(), "rgba(255, 248, 220, 0.8)");
}

#[test]
fn orb_spawns_below_bottom_edge_within_ranges() {
    let mut rng = SeededRandom::from_seed(5);
    for _ in 0..200 {
        let orb = LightOrb::spawn(W, H, &mut rng);
        assert_eq!(orb.pos.y, H + ORB_MARGIN);
        assert!(orb.pos.x >= 0.0 && orb.pos.x < W);
        assert!(orb.radius >= 2.0 && orb.radius < 5.0);
        assert!(orb.vel.y <= -0.3 && orb.vel.y > -0.8);
        assert!(orb.vel.x >= -0.25 && orb.vel.x < 0.25);
        assert!(orb.opacity >= 0.2 && orb.opacity < 0.5);
        assert!(orb.pulse_speed >= 0.01 && orb.pulse_speed < 0.03);
        assert!(orb.pulse_phase >= 0.0 && orb.pulse_phase < std::f64::consts::TAU);
    }
}

#[test]
fn orb_respawns_when_leaving_any_edge() {
    let mut rng = ScriptedRandom::constant(0.5);
    let cases = [
        DVec2::new(100.0, -60.0),
        DVec2::new(-60.0, 100.0),
        DVec2::new(W + 60.0, 100.0),
    ];
    for start in cases {
        let mut orb = LightOrb::spawn(W, H, &mut rng);
        orb.pos = start;
        let mut resample = ScriptedRandom::constant(0.25);
        assert!(orb.update(W, H, &mut resample), "{start:?} should respawn");
        assert_eq!(orb.pos, DVec2::new(0.25 * W, H + ORB_MARGIN));
        assert!(approx(orb.radius, 2.75));
        assert!(approx(orb.vel.y, -0.425));
        assert!(approx(orb.vel.x, -0.125));
        assert!(approx(orb.opacity, 0.275));
        assert!(approx(orb.pulse_speed, 0.015));
    }
}

#[test]
fn orb_inside_margins_keeps_drifting() {
    let mut rng = ScriptedRandom::constant(0.5);
    let mut orb = LightOrb::spawn(W, H, &mut rng);
    orb.pos = DVec2::new(-49.0, -49.0);
    orb.vel = DVec2::ZERO;
    let phase = orb.pulse_phase;
    assert!(!orb.update(W, H, &mut rng));
    assert_eq!(orb.pos, DVec2::new(-49.0, -49.0));
    assert!(approx(orb.pulse_phase, phase + orb.pulse_speed));
}

#[test]
fn orb_pulse_stays_between_sixty_and_hundred_percent() {
    let mut orb = LightOrb::default();
    for i in 0..100 {
        orb.pulse_phase = i as f64 * 0.1;
        let p = orb.pulse();
        assert!(p >= 0.6 - 1e-12 && p <= 1.0 + 1e-12);
    }
}

#[test]
fn click_appends_burst_at_click_position() {
    let mut field = ParticleField::new(ParticleConfig::default(), ScriptedRandom::constant(0.5), W, H);
    field.clicked(DVec2::new(50.0, 60.0));
    assert_eq!(field.sparkles().len(), 8);
    assert!(field
        .sparkles()
        .iter()
        .all(|s| s.pos == DVec2::new(50.0, 60.0)));
}

#[test]
fn pointer_move_spawns_with_configured_odds() {
    let mut field = ParticleField::new(quiet_config(), ScriptedRandom::new(vec![0.4]), W, H);
    assert!(field.pointer_moved(DVec2::new(1.0, 2.0)));
    assert_eq!(field.sparkles().len(), 1);
    assert_eq!(field.sparkles()[0].pos, DVec2::new(1.0, 2.0));

    let mut field = ParticleField::new(quiet_config(), ScriptedRandom::new(vec![0.6]), W, H);
    assert!(!field.pointer_moved(DVec2::new(1.0, 2.0)));
    assert!(field.sparkles().is_empty());
}

#[test]
fn render_pass_truncates_to_most_recent_sparkles() {
    let mut field = ParticleField::new(ParticleConfig::default(), ScriptedRandom::constant(0.5), W, H);
    for i in 0..200 {
        field.spawn_sparkle(DVec2::new(i as f64, 100.0));
    }
    let mut surface = RecordingSurface::default();
    let summary = field.frame(&mut surface);

    assert_eq!(field.sparkles().len(), SPARKLE_CEILING);
    assert_eq!(summary.sparkles_truncated, 50);
    assert_eq!(summary.sparkles_expired, 0);
    assert!(!summary.ambient_spawned);
    for (k, s) in field.sparkles().iter().enumerate() {
        assert_eq!(s.pos.x, (50 + k) as f64);
    }
}

#[test]
fn seeded_field_caps_spawn_flood_in_one_frame() {
    let mut field = ParticleField::new(ParticleConfig::default(), SeededRandom::from_seed(9), W, H);
    for i in 0..200 {
        field.spawn_sparkle(DVec2::new(i as f64 * 2.0, 300.0));
    }
    let mut surface = RecordingSurface::default();
    field.frame(&mut surface);
    assert_eq!(field.sparkles().len(), SPARKLE_CEILING);
    assert_eq!(field.orbs().len(), ORB_COUNT);
}

#[test]
fn sparkles_leave_when_life_runs_out() {
    let config = ParticleConfig {
        gravity: 0.0,
        ..quiet_config()
    };
    let mut field = ParticleField::new(config, ScriptedRandom::constant(0.5), W, H);
    field.spawn_sparkle(DVec2::new(10.0, 10.0));
    let mut surface = RecordingSurface::default();
    for _ in 0..99 {
        field.frame(&mut surface);
    }
    assert_eq!(field.sparkles().len(), 1);
    assert_eq!(field.sparkles()[0].life, 1);

    let summary = field.frame(&mut surface);
    assert_eq!(summary.sparkles_expired, 1);
    assert!(field.sparkles().is_empty());
}

#[test]
fn sparkles_leave_when_falling_past_bottom() {
    let mut field = ParticleField::new(quiet_config(), ScriptedRandom::constant(0.5), W, 101.0);
    field.spawn_sparkle(DVec2::new(10.0, 100.0));
    let mut surface = RecordingSurface::default();
    // y after k frames = 100 + 0.025 * k * (k - 1)
    for _ in 0..6 {
        field.frame(&mut surface);
    }
    assert_eq!(field.sparkles().len(), 1);
    assert!(field.sparkles()[0].life > 0);

    field.frame(&mut surface);
    assert!(field.sparkles().is_empty());
}

#[test]
fn ambient_spawn_lands_inside_surface() {
    let config = ParticleConfig {
        ambient_spawn_chance: 1.0,
        gravity: 0.0,
        ..quiet_config()
    };
    let mut field = ParticleField::new(config, ScriptedRandom::constant(0.5), W, H);
    let mut surface = RecordingSurface::default();
    let summary = field.frame(&mut surface);
    assert!(summary.ambient_spawned);
    assert_eq!(field.sparkles().len(), 1);
    // Spawned at (W/2, H/2) and updated once with zero velocity.
    assert_eq!(field.sparkles()[0].pos, DVec2::new(W / 2.0, H / 2.0));
    assert_eq!(field.sparkles()[0].life, SPARKLE_MAX_LIFE - 1);
}

#[test]
fn frame_clears_then_draws_orbs_then_sparkles() {
    let mut field = ParticleField::new(ParticleConfig::default(), ScriptedRandom::constant(0.5), W, H);
    for i in 0..3 {
        field.spawn_sparkle(DVec2::new(100.0 * (i + 1) as f64, 100.0));
    }
    let mut surface = RecordingSurface::default();
    field.frame(&mut surface);

    assert_eq!(surface.calls.len(), 1 + ORB_COUNT + 3);
    assert_eq!(surface.calls[0], DrawCall::Clear { width: W, height: H });
    assert_eq!(surface.glow_count(), ORB_COUNT);

    for (call, orb) in surface.calls[1..=ORB_COUNT].iter().zip(field.orbs()) {
        let DrawCall::Glow {
            center,
            radius,
            alpha,
            stops,
        } = call
        else {
            panic!("expected orb glow, got {call:?}");
        };
        let pulse = orb.pulse();
        assert_eq!(*center, orb.pos);
        assert!(approx(*radius, orb.radius * pulse * 3.0));
        assert!(approx(*alpha, orb.opacity * pulse));
        assert_eq!(stops.as_slice(), &ORB_GLOW_STOPS);
    }

    // Sparkles are visited newest first.
    let centers: Vec<f64> = surface
        .polygons()
        .map(|(points, _)| points.iter().map(|p| p.x).sum::<f64>() / points.len() as f64)
        .collect();
    assert_eq!(centers.len(), 3);
    assert!(centers[0] > centers[1] && centers[1] > centers[2]);
    for (points, style) in surface.polygons() {
        assert_eq!(points.len(), 8);
        assert!(approx(style.alpha, 0.99));
    }
}

#[test]
fn orb_pool_size_and_sparkle_ceiling_hold_over_time() {
    let mut field = ParticleField::new(ParticleConfig::default(), SeededRandom::from_seed(42), W, H);
    let mut surface = RecordingSurface::default();
    for frame in 0..2000 {
        for k in 0..30 {
            field.pointer_moved(DVec2::new((frame * 7 + k) as f64 % W, 300.0));
        }
        if frame % 10 == 0 {
            field.clicked(DVec2::new(400.0, 300.0));
        }
        surface.calls.clear();
        field.frame(&mut surface);
        assert_eq!(field.orbs().len(), ORB_COUNT);
        assert!(field.sparkles().len() <= SPARKLE_CEILING);
        for s in field.sparkles() {
            assert!(s.life > 0 && s.pos.y <= H);
            assert!(approx(s.opacity, s.life as f64 / s.max_life as f64));
        }
    }
}

#[test]
fn resize_keeps_particles_and_moves_bounds() {
    let mut field = ParticleField::new(ParticleConfig::default(), ScriptedRandom::constant(0.5), W, H);
    field.clicked(DVec2::new(700.0, 500.0));
    field.resize(320.0, 240.0);
    assert_eq!(field.size(), (320.0, 240.0));
    assert_eq!(field.sparkles().len(), CLICK_BURST_COUNT);
    assert_eq!(field.orbs().len(), ORB_COUNT);

    // The burst now sits below the new bottom edge and is pruned next frame.
    let mut surface = RecordingSurface::default();
    field.frame(&mut surface);
    assert!(field.sparkles().is_empty());
    assert_eq!(surface.calls[0], DrawCall::Clear { width: 320.0, height: 240.0 });
}
