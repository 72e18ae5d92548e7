use crate::surface::{ColorStop, DrawSurface, PolygonStyle};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`DrawSurface`] backed by a `CanvasRenderingContext2d`.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    fn trace_polygon(&self, points: &[DVec2]) {
        self.ctx.begin_path();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(p.x, p.y);
            } else {
                self.ctx.line_to(p.x, p.y);
            }
        }
        self.ctx.close_path();
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_polygon(&mut self, points: &[DVec2], style: &PolygonStyle) {
        if points.is_empty() {
            return;
        }
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(style.alpha);
        ctx.set_fill_style_str(&style.fill.to_css());
        self.trace_polygon(points);
        ctx.fill();
        // Second pass paints the glow under the same path.
        if let Some(glow) = style.glow {
            ctx.set_shadow_blur(glow.blur);
            ctx.set_shadow_color(&glow.color.to_css());
            ctx.fill();
        }
        ctx.restore();
    }

    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, alpha: f64, stops: &[ColorStop]) {
        let ctx = &self.ctx;
        let Ok(gradient) =
            ctx.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        else {
            // Negative radii are rejected by the browser.
            return;
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.to_css());
        }
        ctx.save();
        ctx.set_global_alpha(alpha);
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }
}
