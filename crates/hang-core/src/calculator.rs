//! Nail placement formula and the calculator form state.

use crate::constants::EYE_LEVEL_INCHES;

/// Height of the nail from the floor, in inches.
///
/// The artwork's vertical center sits at eye level; the nail is the top of the
/// frame (center + half height) minus the drop from the top to the taut wire.
/// No range validation happens here; NaN inputs yield NaN.
#[inline]
pub fn nail_height(artwork_height: f64, wire_drop: f64) -> f64 {
    EYE_LEVEL_INCHES + artwork_height / 2.0 - wire_drop
}

/// Round half away from zero to one decimal place.
#[inline]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One decimal place followed by an inch mark, e.g. `63.0"`.
pub fn format_inches(value: f64) -> String {
    format!("{:.1}\"", round_tenth(value))
}

/// Drop leading zeros that precede another digit: `"007"` → `"7"`, `"00"` → `"0"`,
/// `"0.5"` is left alone.
pub fn strip_leading_zeros(raw: &str) -> &str {
    let zeros = raw.bytes().take_while(|b| *b == b'0').count();
    if zeros == 0 {
        return raw;
    }
    match raw.as_bytes().get(zeros) {
        Some(b) if b.is_ascii_digit() => &raw[zeros..],
        // keep one zero when nothing numeric follows the run
        _ => &raw[zeros - 1..],
    }
}

/// Coerce a field's text into inches: empty is 0, anything unparseable is NaN.
pub fn parse_inches(raw: &str) -> f64 {
    let trimmed = strip_leading_zeros(raw.trim());
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Text shown in a number field for a stored value; zero renders as empty.
pub fn field_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Replacement text for a field after an edit, if the typed text needs one.
///
/// Only a stripped leading-zero run is written back. Partial entries such as
/// `"12."` or a transiently empty field are left as typed so decimals can be
/// entered.
pub fn echo_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = strip_leading_zeros(trimmed);
    (stripped.len() != trimmed.len()).then(|| stripped.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorInput {
    pub artwork_height: f64,
    pub wire_drop: f64,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            artwork_height: 24.0,
            wire_drop: 6.0,
        }
    }
}

/// Form state: current field values plus the last explicitly computed result.
///
/// Editing a field never touches the result; it only changes on `calculate`.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    pub input: CalculatorInput,
    result: Option<f64>,
}

impl Calculator {
    pub fn new(input: CalculatorInput) -> Self {
        Self {
            input,
            result: None,
        }
    }

    pub fn set_artwork_height(&mut self, raw: &str) {
        self.input.artwork_height = parse_inches(raw);
    }

    pub fn set_wire_drop(&mut self, raw: &str) {
        self.input.wire_drop = parse_inches(raw);
    }

    pub fn calculate(&mut self) -> f64 {
        let value = round_tenth(nail_height(self.input.artwork_height, self.input.wire_drop));
        log::debug!(
            "[calc] artwork={} wire={} -> nail={}",
            self.input.artwork_height,
            self.input.wire_drop,
            value
        );
        self.result = Some(value);
        value
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// `63.0"` once calculated.
    pub fn result_text(&self) -> Option<String> {
        self.result.map(format_inches)
    }

    pub fn message(&self) -> Option<String> {
        self.result_text()
            .map(|value| format!("Place the nail at {} from the floor.", value))
    }
}
