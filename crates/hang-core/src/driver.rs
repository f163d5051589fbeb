//! Frame scheduling for the backdrop animation.
//!
//! The driver is either Running (exactly one frame request pending with the
//! host) or Stopped (none). Every painted frame immediately requests the next
//! one; `stop` cancels the pending request so nothing fires afterwards.

use crate::constants::SEED_SCALE;
use crate::mood::{Mood, MoodProfile};
use crate::scene::{render_frame, Painter, Viewport};
use instant::Instant;
use rand::Rng;
use std::fmt;

/// Host primitive that calls back once at the next display refresh
/// (`requestAnimationFrame` in the browser).
pub trait FrameScheduler {
    type Handle: Copy + fmt::Debug;

    fn request_frame(&mut self) -> Self::Handle;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Everything one animation session renders from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub viewport: Viewport,
    pub seed: f64,
    pub mood: Mood,
}

impl AnimationState {
    pub fn profile(&self) -> &'static MoodProfile {
        self.mood.profile()
    }
}

/// Per-session seed in `[0, 1000)`; scales the cubist and post-impressionist hue drift.
pub fn draw_seed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * SEED_SCALE
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState<H> {
    Stopped,
    Running { pending: H },
}

pub struct AnimationDriver<S: FrameScheduler> {
    scheduler: S,
    state: DriverState<S::Handle>,
    session: Option<AnimationState>,
    last_t: Option<f64>,
    frames: u64,
    started_at: Option<Instant>,
}

impl<S: FrameScheduler> AnimationDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: DriverState::Stopped,
            session: None,
            last_t: None,
            frames: 0,
            started_at: None,
        }
    }

    /// Begin a session, cancelling any frame still pending from the previous one.
    pub fn start(&mut self, session: AnimationState) {
        self.stop();
        log::info!(
            "[driver] start mood={} seed={:.3} size={}x{}",
            session.mood.id(),
            session.seed,
            session.viewport.width,
            session.viewport.height
        );
        self.session = Some(session);
        self.last_t = None;
        self.frames = 0;
        self.started_at = Some(Instant::now());
        let pending = self.scheduler.request_frame();
        self.state = DriverState::Running { pending };
    }

    /// Cancel the pending frame. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        let DriverState::Running { pending } = self.state else {
            return false;
        };
        self.scheduler.cancel_frame(pending);
        self.state = DriverState::Stopped;
        if let Some(session) = &self.session {
            let elapsed = self
                .started_at
                .map(|s| s.elapsed().as_secs_f32())
                .unwrap_or_default();
            log::debug!(
                "[driver] stop mood={} frames={} after {:.1}s",
                session.mood.id(),
                self.frames,
                elapsed
            );
        }
        true
    }

    /// Host callback for the pending frame request; `t` is the refresh
    /// timestamp in milliseconds. Returns whether a frame was painted.
    pub fn on_frame<P: Painter + ?Sized>(&mut self, t: f64, painter: &mut P) -> bool {
        if !self.is_running() {
            log::trace!("[driver] frame at {:.1} after stop ignored", t);
            return false;
        }
        let Some(session) = self.session else {
            return false;
        };

        // timestamps must strictly increase within a session
        let fresh = self.last_t.map_or(true, |last| t > last);
        if fresh {
            render_frame(painter, t, session.profile(), session.seed, session.viewport);
            self.last_t = Some(t);
            self.frames += 1;
        } else {
            log::trace!("[driver] stale timestamp {:.1} skipped", t);
        }

        let pending = self.scheduler.request_frame();
        self.state = DriverState::Running { pending };
        fresh
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    pub fn state(&self) -> DriverState<S::Handle> {
        self.state
    }

    pub fn session(&self) -> Option<&AnimationState> {
        self.session.as_ref()
    }

    pub fn frames_painted(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
