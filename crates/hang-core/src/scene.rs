//! Frame composition for the animated backdrop.
//!
//! A frame is computed as a small display list (`Frame`) from the timestamp,
//! the active `MoodProfile`, the session seed and the canvas size, and is then
//! replayed onto any `Painter`. Composition holds no state between frames, so
//! fixing `t` and the seed reproduces the same output.

use crate::color::{Color, Glow};
use crate::constants::*;
use crate::mood::MoodProfile;
use glam::DVec2;
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Polygon vertex storage; inline up to the largest shape in the table (zen).
pub type Vertices = SmallVec<[DVec2; 32]>;

/// Canvas extent in pixels, captured once when the view mounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Pulsing background orb (zen only).
#[derive(Clone, Debug, PartialEq)]
pub struct Orb {
    pub center: DVec2,
    pub radius: f64,
    /// Global alpha applied while filling.
    pub alpha: f64,
    pub fill: Color,
    pub glow: Glow,
}

/// One jittered polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub center: DVec2,
    pub size: f64,
    pub vertices: Vertices,
    pub fill: Color,
    pub glow: Option<Glow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub t: f64,
    pub viewport: Viewport,
    pub orbs: Vec<Orb>,
    pub particles: Vec<Particle>,
}

/// Drawing surface the frame is replayed onto.
pub trait Painter {
    fn clear(&mut self, viewport: Viewport);
    fn fill_circle(&mut self, center: DVec2, radius: f64, alpha: f64, fill: &Color, glow: &Glow);
    fn fill_polygon(&mut self, vertices: &[DVec2], fill: &Color, glow: Option<&Glow>);
}

pub fn orb_at(k: usize, t: f64, viewport: Viewport) -> Orb {
    let kf = k as f64;
    let c = viewport.center();
    let center = DVec2::new(
        c.x + (t * 0.00012 + kf).sin() * viewport.width * ORB_SPREAD
            + (t * 0.0002 + kf).cos() * ORB_WOBBLE_PX,
        c.y + (t * 0.00014 + kf).cos() * viewport.height * ORB_SPREAD
            + (t * 0.00018 + kf).sin() * ORB_WOBBLE_PX,
    );
    let hue = ORB_BASE_HUE + kf * ORB_HUE_STEP;
    Orb {
        center,
        radius: ORB_RADIUS_BASE + (t * 0.0003 + kf).sin() * ORB_RADIUS_SWING,
        alpha: ORB_ALPHA_BASE + ORB_ALPHA_SWING * (t * 0.0002 + kf).sin(),
        fill: Color::hsla(hue, 60.0, 80.0, 0.25),
        glow: Glow {
            color: Color::hsla(hue, 60.0, 80.0, 0.7),
            blur: ORB_GLOW_BLUR,
        },
    }
}

pub fn particle_at(
    i: usize,
    t: f64,
    profile: &MoodProfile,
    seed: f64,
    viewport: Viewport,
) -> Particle {
    let fi = i as f64;
    let c = viewport.center();
    let center = DVec2::new(
        c.x + (profile.position_x)(i, t) * viewport.width * PARTICLE_SPREAD,
        c.y + (profile.position_y)(i, t) * viewport.height * PARTICLE_SPREAD,
    );
    let swing = (t * PARTICLE_SIZE_FREQ + fi).sin() * PARTICLE_SIZE_AMPLITUDE;
    let size = (PARTICLE_SIZE_BASE + swing) * profile.size_factor;

    let n = profile.shape_point_count;
    let vertices = (0..n)
        .map(|j| {
            let angle = TAU / n as f64 * j as f64;
            let radius = size + (t * VERTEX_JITTER_FREQ + j as f64 + fi).sin() * VERTEX_JITTER_PX;
            center + DVec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();

    Particle {
        center,
        size,
        vertices,
        fill: (profile.color)(i, t, seed, profile.base_opacity),
        glow: profile.glow,
    }
}

/// Compute the display list for timestamp `t` (milliseconds).
pub fn compose_frame(t: f64, profile: &MoodProfile, seed: f64, viewport: Viewport) -> Frame {
    let orbs = if profile.orbs {
        (0..ORB_COUNT).map(|k| orb_at(k, t, viewport)).collect()
    } else {
        Vec::new()
    };
    let particles = (0..profile.particle_count)
        .map(|i| particle_at(i, t, profile, seed, viewport))
        .collect();
    Frame {
        t,
        viewport,
        orbs,
        particles,
    }
}

impl Frame {
    /// Clear the surface, then draw orbs beneath particles.
    pub fn paint<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.viewport);
        for orb in &self.orbs {
            painter.fill_circle(orb.center, orb.radius, orb.alpha, &orb.fill, &orb.glow);
        }
        for p in &self.particles {
            painter.fill_polygon(&p.vertices, &p.fill, p.glow.as_ref());
        }
    }
}

pub fn render_frame<P: Painter + ?Sized>(
    painter: &mut P,
    t: f64,
    profile: &MoodProfile,
    seed: f64,
    viewport: Viewport,
) {
    compose_frame(t, profile, seed, viewport).paint(painter);
}

/// Operation recorded by `RecordingPainter`.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Viewport),
    Circle {
        center: DVec2,
        radius: f64,
        alpha: f64,
        fill: Color,
        glow: Glow,
    },
    Polygon {
        vertices: Vec<DVec2>,
        fill: Color,
        glow: Option<Glow>,
    },
}

/// A `Painter` that records draw operations instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    ops: Vec<DrawOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of `Clear` operations, i.e. frames painted.
    pub fn frames_painted(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear(_)))
            .count()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, viewport: Viewport) {
        self.ops.push(DrawOp::Clear(viewport));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, alpha: f64, fill: &Color, glow: &Glow) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            alpha,
            fill: *fill,
            glow: *glow,
        });
    }

    fn fill_polygon(&mut self, vertices: &[DVec2], fill: &Color, glow: Option<&Glow>) {
        self.ops.push(DrawOp::Polygon {
            vertices: vertices.to_vec(),
            fill: *fill,
            glow: glow.copied(),
        });
    }
}
