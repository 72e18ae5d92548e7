// Drawing capability used by the particle field.
//
// The physics in `sparkle`, `orb` and `field` only ever talk to a
// `DrawSurface`. The browser backend lives in `canvas.rs`; host tests
// record the calls instead.

use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(rgb: [u8; 3], a: f64) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Soft shadow painted around a filled shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f64,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonStyle {
    /// Global alpha applied on top of the fill color's own alpha.
    pub alpha: f64,
    pub fill: Rgba,
    pub glow: Option<Glow>,
}

pub trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64);

    /// Fill a closed polygon given in surface coordinates.
    fn fill_polygon(&mut self, points: &[DVec2], style: &PolygonStyle);

    /// Fill a disc of `radius` around `center` with a radial gradient running
    /// from the center (offset 0) to the rim (offset 1).
    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, alpha: f64, stops: &[ColorStop]);
}
