// Test doubles shared by the host-side particle tests.

use crate::random::RandomSource;
use crate::surface::{ColorStop, DrawSurface, PolygonStyle};
use glam::DVec2;

/// Replays a fixed list of samples, wrapping around at the end.
pub struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "script needs at least one value");
        Self { values, next: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear {
        width: f64,
        height: f64,
    },
    Polygon {
        points: Vec<DVec2>,
        style: PolygonStyle,
    },
    Glow {
        center: DVec2,
        radius: f64,
        alpha: f64,
        stops: Vec<ColorStop>,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn polygons(&self) -> impl Iterator<Item = (&Vec<DVec2>, &PolygonStyle)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Polygon { points, style } => Some((points, style)),
            _ => None,
        })
    }

    pub fn glow_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Glow { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_polygon(&mut self, points: &[DVec2], style: &PolygonStyle) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            style: *style,
        });
    }

    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, alpha: f64, stops: &[ColorStop]) {
        self.calls.push(DrawCall::Glow {
            center,
            radius,
            alpha,
            stops: stops.to_vec(),
        });
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
