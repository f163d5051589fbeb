use crate::audio::HtmlAudioSink;
use crate::canvas::CanvasPainter;
use crate::constants::{AUDIO_ID, CANVAS_ID};
use crate::dom;
use hang_core::{draw_seed, Backdrop, BackdropError, FrameScheduler, Mood, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Closure<dyn FnMut(f64)>;

pub type WebBackdrop = Backdrop<RafScheduler, HtmlAudioSink>;

/// Filled once mounting finishes; frame and input callbacks see `None` before that.
pub type SharedBackdrop = Rc<RefCell<Option<WebBackdrop>>>;

/// `requestAnimationFrame`-backed scheduler. Every request re-arms the same
/// tick closure.
pub struct RafScheduler {
    window: web::Window,
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> i32 {
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            log::warn!("[driver] frame requested before the tick closure was installed");
            return 0;
        };
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .unwrap_or_else(|e| {
                log::error!("[driver] requestAnimationFrame failed: {:?}", e);
                0
            })
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Acquire the canvas once, capture its size, and start the backdrop for `mood`.
///
/// A missing canvas or 2D context leaves the background blank; audio still
/// follows the mood.
pub fn mount_backdrop(
    window: &web::Window,
    document: &web::Document,
    mood: Mood,
) -> anyhow::Result<SharedBackdrop> {
    let shared: SharedBackdrop = Rc::new(RefCell::new(None));
    let sink = HtmlAudioSink::from_document(document, AUDIO_ID)?;

    let surface = acquire_surface(window, document).map(|(painter, viewport)| {
        let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
        *tick.borrow_mut() = Some(tick_closure(shared.clone(), painter));
        let scheduler = RafScheduler {
            window: window.clone(),
            tick,
        };
        (scheduler, viewport)
    });

    let seed = draw_seed(&mut rand::thread_rng());
    *shared.borrow_mut() = Some(Backdrop::mount(sink, surface, mood, seed));
    Ok(shared)
}

fn acquire_surface(
    window: &web::Window,
    document: &web::Document,
) -> Result<(CanvasPainter, Viewport), BackdropError> {
    let canvas: web::HtmlCanvasElement =
        dom::element_by_id(document, CANVAS_ID).map_err(|_| BackdropError::MissingCanvas)?;
    let painter = CanvasPainter::acquire(&canvas)?;
    let (w, h) = dom::capture_viewport(window, &canvas);
    Ok((painter, Viewport::new(w as f64, h as f64)))
}

fn tick_closure(shared: SharedBackdrop, mut painter: CanvasPainter) -> TickClosure {
    Closure::wrap(Box::new(move |t: f64| {
        if let Some(backdrop) = shared.borrow_mut().as_mut() {
            backdrop.on_frame(t, &mut painter);
        }
    }) as Box<dyn FnMut(f64)>)
}

/// Pick a new mood with a fresh seed; the backdrop cancels the old session first.
pub fn switch_mood(shared: &SharedBackdrop, mood: Mood) {
    if let Some(backdrop) = shared.borrow_mut().as_mut() {
        backdrop.set_mood(mood, draw_seed(&mut rand::thread_rng()));
    }
}

/// Cancel the pending frame and pause audio when the page goes away.
pub fn wire_unmount(window: &web::Window, shared: SharedBackdrop) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(backdrop) = shared.borrow_mut().as_mut() {
            backdrop.unmount();
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
