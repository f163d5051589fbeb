// Host-side tests for the nail-height formula and calculator form state.

use hang_core::*;

#[test]
fn nail_height_matches_formula_over_input_domain() {
    for artwork in 1..=200 {
        for wire in 0..=100 {
            let a = artwork as f64;
            let w = wire as f64;
            let expected = round_tenth(57.0 + a / 2.0 - w);
            let actual = round_tenth(nail_height(a, w));
            assert_eq!(actual, expected, "artwork={artwork} wire={wire}");
        }
    }
}

#[test]
fn default_example_places_nail_at_63_inches() {
    assert_eq!(nail_height(24.0, 6.0), 63.0);
    assert_eq!(format_inches(nail_height(24.0, 6.0)), "63.0\"");
}

#[test]
fn format_rounds_to_one_decimal_half_away_from_zero() {
    assert_eq!(format_inches(57.25), "57.3\"");
    assert_eq!(format_inches(57.5), "57.5\"");
    assert_eq!(format_inches(-42.5), "-42.5\"");
    assert_eq!(format_inches(63.04), "63.0\"");
}

#[test]
fn non_numeric_result_is_still_formatted() {
    assert_eq!(format_inches(f64::NAN), "NaN\"");
}

#[test]
fn strip_leading_zeros_only_before_digits() {
    assert_eq!(strip_leading_zeros("007"), "7");
    assert_eq!(strip_leading_zeros("00"), "0");
    assert_eq!(strip_leading_zeros("0"), "0");
    assert_eq!(strip_leading_zeros("0.5"), "0.5");
    assert_eq!(strip_leading_zeros("000.5"), "0.5");
    assert_eq!(strip_leading_zeros("120"), "120");
    assert_eq!(strip_leading_zeros(""), "");
}

#[test]
fn parse_inches_coerces_like_a_number_field() {
    assert_eq!(parse_inches(""), 0.0);
    assert_eq!(parse_inches("0012"), 12.0);
    assert_eq!(parse_inches(" 24 "), 24.0);
    assert_eq!(parse_inches("7.5"), 7.5);
    assert!(parse_inches("abc").is_nan());
    assert!(parse_inches("12in").is_nan());
}

#[test]
fn zero_is_shown_as_an_empty_field() {
    assert_eq!(field_text(0.0), "");
    assert_eq!(field_text(24.0), "24");
    assert_eq!(field_text(2.5), "2.5");
}

#[test]
fn partial_decimals_are_not_echoed_back() {
    assert_eq!(echo_text("12."), None);
    assert_eq!(echo_text("12.5"), None);
    assert_eq!(echo_text(""), None);
    assert_eq!(echo_text("0"), None);
    assert_eq!(echo_text("0.5"), None);

    let mut calc = Calculator::default();
    calc.set_artwork_height("12.");
    assert_eq!(calc.input.artwork_height, 12.0);
    calc.set_artwork_height("12.5");
    assert_eq!(calc.input.artwork_height, 12.5);
}

#[test]
fn leading_zeros_are_echoed_stripped() {
    assert_eq!(echo_text("007").as_deref(), Some("7"));
    assert_eq!(echo_text("00").as_deref(), Some("0"));
    assert_eq!(echo_text("000.5").as_deref(), Some("0.5"));
}

#[test]
fn result_is_absent_until_calculate() {
    let calc = Calculator::new(CalculatorInput::default());
    assert_eq!(calc.input.artwork_height, 24.0);
    assert_eq!(calc.input.wire_drop, 6.0);
    assert!(calc.result().is_none());
    assert!(calc.message().is_none());
}

#[test]
fn result_only_updates_on_calculate() {
    let mut calc = Calculator::new(CalculatorInput::default());
    assert_eq!(calc.calculate(), 63.0);
    assert_eq!(
        calc.message().as_deref(),
        Some("Place the nail at 63.0\" from the floor.")
    );

    // editing leaves the displayed value stale until recomputed
    calc.set_artwork_height("36");
    calc.set_wire_drop("004");
    assert_eq!(calc.result(), Some(63.0));
    assert_eq!(calc.input.wire_drop, 4.0);

    assert_eq!(calc.calculate(), 71.0);
    assert_eq!(calc.result_text().as_deref(), Some("71.0\""));
}

#[test]
fn garbage_input_yields_nan_without_error() {
    let mut calc = Calculator::new(CalculatorInput::default());
    calc.set_artwork_height("tall");
    assert!(calc.calculate().is_nan());
    assert_eq!(calc.result_text().as_deref(), Some("NaN\""));
}
