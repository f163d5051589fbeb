#![cfg(target_arch = "wasm32")]
use hang_core::{Calculator, CalculatorInput, Mood, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod frame;
mod ui;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hang-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Theme is read once; later preference changes are not tracked
    let theme = Theme::from_prefers_dark(dom::prefers_dark(&window, DARK_SCHEME_QUERY));
    ui::apply_theme(&document, theme);

    let calculator = Rc::new(RefCell::new(Calculator::new(CalculatorInput {
        artwork_height: DEFAULT_ARTWORK_HEIGHT,
        wire_drop: DEFAULT_WIRE_DROP,
    })));
    ui::wire_calculator(&document, calculator);

    let mood = Mood::from_id(DEFAULT_MOOD_ID);
    let backdrop = frame::mount_backdrop(&window, &document, mood)?;
    ui::wire_mood_selector(&document, backdrop.clone(), mood);
    frame::wire_unmount(&window, backdrop);

    log::info!("[mood] mounted with {} ({:?} theme)", mood.id(), theme);
    Ok(())
}
