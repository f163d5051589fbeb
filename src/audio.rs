use hang_core::{AudioSink, BackdropError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Ambient track output through an `<audio>` element.
pub struct HtmlAudioSink {
    el: web::HtmlAudioElement,
}

impl HtmlAudioSink {
    pub fn new(el: web::HtmlAudioElement) -> Self {
        Self { el }
    }

    /// Use the page's `<audio>` element, or a detached one when it is missing.
    pub fn from_document(document: &web::Document, id: &str) -> anyhow::Result<Self> {
        let el = match crate::dom::element_by_id::<web::HtmlAudioElement>(document, id) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[audio] {}; using a detached element", e);
                web::HtmlAudioElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?
            }
        };
        Ok(Self::new(el))
    }
}

impl AudioSink for HtmlAudioSink {
    fn pause(&mut self) {
        _ = self.el.pause();
    }

    fn load(&mut self, src: &str, looping: bool, volume: f64) {
        self.el.set_src(src);
        self.el.set_loop(looping);
        self.el.set_volume(volume);
    }

    fn play(&mut self) -> Result<(), BackdropError> {
        let promise: js_sys::Promise = self
            .el
            .play()
            .map_err(|e| BackdropError::Playback(format!("{:?}", e)))?;
        // autoplay refusals arrive as a rejected promise; nothing to surface
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] play rejected: {:?}", e);
            }
        });
        Ok(())
    }
}
