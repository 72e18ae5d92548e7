use crate::constants::*;
use crate::random::RandomSource;
use crate::surface::{ColorStop, DrawSurface, Rgba};
use glam::DVec2;
use std::f64::consts::TAU;

pub const ORB_GLOW_STOPS: [ColorStop; 3] = [
    ColorStop {
        offset: 0.0,
        color: Rgba::new(255, 255, 255, 1.0),
    },
    ColorStop {
        offset: 0.3,
        color: Rgba::new(255, 215, 0, 0.6),
    },
    ColorStop {
        offset: 1.0,
        color: Rgba::new(212, 175, 55, 0.0),
    },
];

/// Long-lived glow that rises from below the surface and respawns there once
/// it leaves the top or drifts past a side.
#[derive(Clone, Debug, Default)]
pub struct LightOrb {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub opacity: f64,
    pub pulse_phase: f64,
    pub pulse_speed: f64,
}

impl LightOrb {
    pub fn spawn(width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
        let mut orb = Self::default();
        orb.reset(width, height, rng);
        orb
    }

    /// Reassign every field to a fresh state just below the bottom edge.
    pub fn reset(&mut self, width: f64, height: f64, rng: &mut impl RandomSource) {
        self.pos = DVec2::new(rng.span_from(0.0, width), height + ORB_MARGIN);
        self.radius = rng.span_from(ORB_RADIUS_MIN, ORB_RADIUS_SPAN);
        let vy = -rng.span_from(ORB_RISE_MIN, ORB_RISE_SPAN);
        let vx = rng.centered(ORB_DRIFT_SPAN);
        self.vel = DVec2::new(vx, vy);
        self.opacity = rng.span_from(ORB_OPACITY_MIN, ORB_OPACITY_SPAN);
        self.pulse_speed = rng.span_from(ORB_PULSE_SPEED_MIN, ORB_PULSE_SPEED_SPAN);
        self.pulse_phase = rng.span_from(0.0, TAU);
    }

    #[inline]
    pub fn is_out_of_bounds(&self, width: f64) -> bool {
        self.pos.y < -ORB_MARGIN || self.pos.x < -ORB_MARGIN || self.pos.x > width + ORB_MARGIN
    }

    /// Advance one frame; returns `true` when the orb was respawned.
    pub fn update(&mut self, width: f64, height: f64, rng: &mut impl RandomSource) -> bool {
        self.pos += self.vel;
        self.pulse_phase += self.pulse_speed;
        if self.is_out_of_bounds(width) {
            self.reset(width, height, rng);
            return true;
        }
        false
    }

    #[inline]
    pub fn pulse(&self) -> f64 {
        self.pulse_phase.sin() * ORB_PULSE_DEPTH + (1.0 - ORB_PULSE_DEPTH)
    }

    pub fn draw(&self, surface: &mut impl DrawSurface) {
        let pulse = self.pulse();
        let glow_radius = self.radius * pulse * ORB_GLOW_SCALE;
        surface.fill_radial_glow(self.pos, glow_radius, self.opacity * pulse, &ORB_GLOW_STOPS);
    }
}
