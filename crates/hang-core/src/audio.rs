//! Ambient track selection per mood.

use crate::constants::AMBIENT_VOLUME;
use crate::error::BackdropError;
use crate::mood::Mood;

/// Media element the ambient track plays through.
pub trait AudioSink {
    fn pause(&mut self);
    fn load(&mut self, src: &str, looping: bool, volume: f64);
    /// Start playback. Hosts may refuse (autoplay policy); callers ignore the error.
    fn play(&mut self) -> Result<(), BackdropError>;
}

/// Swaps the looping track whenever the mood changes. One best-effort play
/// attempt per change; no cross-fade and no retry.
pub struct AmbientAudio<A: AudioSink> {
    sink: A,
    current: Option<Mood>,
}

impl<A: AudioSink> AmbientAudio<A> {
    pub fn new(sink: A) -> Self {
        Self {
            sink,
            current: None,
        }
    }

    pub fn set_mood(&mut self, mood: Mood) {
        if self.current.take().is_some() {
            self.sink.pause();
        }
        self.current = Some(mood);
        let Some(src) = mood.audio_asset() else {
            log::debug!("[audio] no track for mood={}", mood.id());
            return;
        };
        self.sink.load(src, true, AMBIENT_VOLUME);
        if let Err(e) = self.sink.play() {
            log::debug!("[audio] {}", e);
        }
    }

    pub fn teardown(&mut self) {
        if self.current.take().is_some() {
            self.sink.pause();
        }
    }

    pub fn current(&self) -> Option<Mood> {
        self.current
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }
}
