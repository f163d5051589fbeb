//! Mood-driven backdrop: the animation driver and the ambient track switched
//! together by a single transition handler.

use crate::audio::{AmbientAudio, AudioSink};
use crate::driver::{AnimationDriver, AnimationState, FrameScheduler};
use crate::error::BackdropError;
use crate::mood::Mood;
use crate::scene::{Painter, Viewport};

struct Animation<S: FrameScheduler> {
    driver: AnimationDriver<S>,
    viewport: Viewport,
}

pub struct Backdrop<S: FrameScheduler, A: AudioSink> {
    animation: Option<Animation<S>>,
    audio: AmbientAudio<A>,
    mood: Mood,
    mounted: bool,
}

impl<S: FrameScheduler, A: AudioSink> Backdrop<S, A> {
    /// Mount the view. Without a drawing surface the backdrop stays blank
    /// while audio still follows the mood.
    pub fn mount(
        sink: A,
        surface: Result<(S, Viewport), BackdropError>,
        mood: Mood,
        seed: f64,
    ) -> Self {
        let animation = match surface {
            Ok((scheduler, viewport)) => Some(Animation {
                driver: AnimationDriver::new(scheduler),
                viewport,
            }),
            Err(e) => {
                log::warn!("[driver] animation disabled: {}", e);
                None
            }
        };
        let mut backdrop = Self {
            animation,
            audio: AmbientAudio::new(sink),
            mood,
            mounted: true,
        };
        backdrop.establish(seed);
        backdrop
    }

    /// Tear down the current session (pending frame, track) before starting
    /// the new one. Selecting the active mood again is a no-op.
    pub fn set_mood(&mut self, mood: Mood, seed: f64) -> bool {
        if !self.mounted || mood == self.mood {
            return false;
        }
        log::info!("[mood] {} -> {}", self.mood.id(), mood.id());
        self.teardown();
        self.mood = mood;
        self.establish(seed);
        true
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.teardown();
        self.mounted = false;
        log::info!("[mood] backdrop unmounted");
    }

    /// Forward the host's frame callback to the driver.
    pub fn on_frame<P: Painter + ?Sized>(&mut self, t: f64, painter: &mut P) -> bool {
        match &mut self.animation {
            Some(a) => a.driver.on_frame(t, painter),
            None => false,
        }
    }

    fn teardown(&mut self) {
        if let Some(a) = &mut self.animation {
            a.driver.stop();
        }
        self.audio.teardown();
    }

    fn establish(&mut self, seed: f64) {
        let mood = self.mood;
        if let Some(a) = &mut self.animation {
            a.driver.start(AnimationState {
                viewport: a.viewport,
                seed,
                mood,
            });
        }
        self.audio.set_mood(mood);
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn driver(&self) -> Option<&AnimationDriver<S>> {
        self.animation.as_ref().map(|a| &a.driver)
    }

    pub fn audio(&self) -> &AmbientAudio<A> {
        &self.audio
    }
}
