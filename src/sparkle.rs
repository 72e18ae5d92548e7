use crate::constants::*;
use crate::random::RandomSource;
use crate::surface::{DrawSurface, Glow, PolygonStyle, Rgba};
use glam::DVec2;
use std::f64::consts::PI;

/// Short-lived four-pointed star that falls under gravity and fades out.
#[derive(Clone, Debug)]
pub struct Sparkle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub life: u32,
    pub max_life: u32,
    pub color: [u8; 3],
    pub rotation_deg: f64,
    pub rotation_speed_deg: f64,
    pub opacity: f64,
}

impl Sparkle {
    pub fn new(pos: DVec2, max_life: u32, rng: &mut impl RandomSource) -> Self {
        let size = rng.span_from(SPARKLE_SIZE_MIN, SPARKLE_SIZE_SPAN);
        let vx = rng.centered(SPARKLE_SPEED_SPAN);
        let vy = rng.centered(SPARKLE_SPEED_SPAN);
        let color = SPARKLE_PALETTE[rng.index(SPARKLE_PALETTE.len())];
        let rotation_deg = rng.span_from(0.0, 360.0);
        let rotation_speed_deg = rng.centered(SPARKLE_ROTATION_SPEED_SPAN);
        Self {
            pos,
            vel: DVec2::new(vx, vy),
            size,
            life: max_life,
            max_life,
            color,
            rotation_deg,
            rotation_speed_deg,
            opacity: 1.0,
        }
    }

    /// One frame of motion. Gravity is applied after the position step, so it
    /// only shows up in the position from the next frame on.
    pub fn update(&mut self, gravity: f64) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
        self.rotation_deg += self.rotation_speed_deg;
        self.opacity = if self.max_life == 0 {
            0.0
        } else {
            self.life as f64 / self.max_life as f64
        };
        self.vel.y += gravity;
    }

    #[inline]
    pub fn is_expired(&self, surface_height: f64) -> bool {
        self.life == 0 || self.pos.y > surface_height
    }

    /// Star outline in surface coordinates: outer and inner vertices
    /// alternate, rotated about the center by the current rotation.
    pub fn outline(&self) -> [DVec2; SPARKLE_SPIKES * 2] {
        let rot = DVec2::from_angle(self.rotation_deg.to_radians());
        let outer = self.size;
        let inner = self.size / 2.0;
        let mut points = [DVec2::ZERO; SPARKLE_SPIKES * 2];
        for (i, p) in points.iter_mut().enumerate() {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = i as f64 * PI / SPARKLE_SPIKES as f64;
            let local = DVec2::from_angle(angle) * radius;
            *p = self.pos + rot.rotate(local);
        }
        points
    }

    pub fn style(&self) -> PolygonStyle {
        PolygonStyle {
            alpha: self.opacity,
            fill: Rgba::from_rgb(self.color, self.opacity),
            glow: Some(Glow {
                blur: SPARKLE_GLOW_BLUR,
                color: Rgba::from_rgb(self.color, SPARKLE_GLOW_ALPHA),
            }),
        }
    }

    pub fn draw(&self, surface: &mut impl DrawSurface) {
        surface.fill_polygon(&self.outline(), &self.style());
    }
}
