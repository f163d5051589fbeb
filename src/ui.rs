use crate::constants::*;
use crate::dom;
use crate::frame::{self, SharedBackdrop};
use hang_core::{echo_text, field_text, Calculator, Mood, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Paint the page, panel and form controls for the detected color scheme.
pub fn apply_theme(document: &web::Document, theme: Theme) {
    let palette = theme.palette();
    if let Ok(page) = dom::element_by_id::<web::HtmlElement>(document, PAGE_ID) {
        dom::set_style(&page, "background", palette.page_background);
        dom::set_style(&page, "color", palette.text);
    }
    if let Ok(panel) = dom::element_by_id::<web::HtmlElement>(document, PANEL_ID) {
        dom::set_style(&panel, "background", palette.panel_background);
        dom::set_style(&panel, "border", palette.panel_border);
        dom::set_style(&panel, "box-shadow", palette.panel_shadow);
    }
    if let Ok(controls) = document.query_selector_all(THEMED_INPUT_SELECTOR) {
        for i in 0..controls.length() {
            if let Some(el) = controls.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
                dom::set_style(&el, "background-color", palette.input_background);
                dom::set_style(&el, "color", palette.input_text);
                dom::set_style(&el, "border-color", palette.input_border);
            }
        }
    }
}

/// Keep the calculator in sync with both fields; the result only changes
/// when Calculate is pressed.
pub fn wire_calculator(document: &web::Document, calculator: Rc<RefCell<Calculator>>) {
    let fields: [(&str, fn(&mut Calculator, &str), f64); 2] = [
        (
            ARTWORK_HEIGHT_ID,
            Calculator::set_artwork_height,
            calculator.borrow().input.artwork_height,
        ),
        (
            WIRE_DROP_ID,
            Calculator::set_wire_drop,
            calculator.borrow().input.wire_drop,
        ),
    ];
    for (id, setter, initial) in fields {
        let Ok(input) = dom::element_by_id::<web::HtmlInputElement>(document, id) else {
            log::warn!("[calc] missing #{}", id);
            continue;
        };
        input.set_value(&field_text(initial));
        let calc = calculator.clone();
        let field = input.clone();
        dom::add_listener(document, id, "input", move || {
            let raw = field.value();
            setter(&mut *calc.borrow_mut(), &raw);
            if let Some(text) = echo_text(&raw) {
                field.set_value(&text);
            }
        });
    }

    let result_el = document.get_element_by_id(RESULT_ID);
    dom::add_click_listener(document, CALCULATE_ID, move || {
        let mut calc = calculator.borrow_mut();
        calc.calculate();
        if let (Some(el), Some(message)) = (&result_el, calc.message()) {
            el.set_text_content(Some(&message));
            _ = el.remove_attribute("hidden");
        }
    });
}

/// Fill the selector with the named moods and restart the backdrop on change.
pub fn wire_mood_selector(document: &web::Document, backdrop: SharedBackdrop, initial: Mood) {
    let Ok(select) = dom::element_by_id::<web::HtmlSelectElement>(document, MOOD_SELECT_ID) else {
        log::warn!("[mood] missing #{}", MOOD_SELECT_ID);
        return;
    };
    select.set_inner_html("");
    for mood in Mood::SELECTABLE {
        let icon = MOOD_OPTION_ICONS
            .iter()
            .find(|(id, _)| *id == mood.id())
            .map(|(_, icon)| *icon)
            .unwrap_or_default();
        let text = format!("{} {}", icon, mood.label());
        match web::HtmlOptionElement::new_with_text_and_value(text.trim(), mood.id()) {
            Ok(option) => {
                _ = select.append_child(&option);
            }
            Err(e) => log::warn!("[mood] option {}: {:?}", mood.id(), e),
        }
    }
    select.set_value(initial.id());

    let field = select.clone();
    dom::add_listener(document, MOOD_SELECT_ID, "change", move || {
        frame::switch_mood(&backdrop, Mood::from_id(&field.value()));
    });
}
