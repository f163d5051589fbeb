use glam::DVec2;
use hang_core::{BackdropError, Color, Glow, Painter, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replays composed frames onto a 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Result<Self, BackdropError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(BackdropError::MissingContext)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::MissingContext)?;
        Ok(Self { ctx })
    }

    fn set_glow(&self, glow: Option<&Glow>) {
        match glow {
            Some(g) => {
                self.ctx.set_shadow_color(&g.color.to_css());
                self.ctx.set_shadow_blur(g.blur);
            }
            None => {
                self.ctx.set_shadow_color("#0000");
                self.ctx.set_shadow_blur(0.0);
            }
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, alpha: f64, fill: &Color, glow: &Glow) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha);
        ctx.begin_path();
        // a negative radius throws; the orb radius never drops below 50px
        _ = ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        ctx.close_path();
        ctx.set_fill_style_str(&fill.to_css());
        self.set_glow(Some(glow));
        ctx.fill();
        ctx.restore();
    }

    fn fill_polygon(&mut self, vertices: &[DVec2], fill: &Color, glow: Option<&Glow>) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(&fill.to_css());
        ctx.begin_path();
        for v in vertices {
            ctx.line_to(v.x, v.y);
        }
        ctx.close_path();
        self.set_glow(glow);
        ctx.fill();
        ctx.restore();
    }
}
