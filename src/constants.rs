/// Page wiring and startup defaults for the web front-end.
///
/// Kept free of web-sys types so host-side tests can include it directly.
// Element ids expected in index.html
pub const CANVAS_ID: &str = "backdrop-canvas";
pub const AUDIO_ID: &str = "ambient-audio";
pub const PAGE_ID: &str = "page";
pub const PANEL_ID: &str = "panel";
pub const ARTWORK_HEIGHT_ID: &str = "artwork-height";
pub const WIRE_DROP_ID: &str = "wire-drop";
pub const CALCULATE_ID: &str = "calculate";
pub const RESULT_ID: &str = "result";
pub const MOOD_SELECT_ID: &str = "mood";

// Form controls receiving the themed input colors
pub const THEMED_INPUT_SELECTOR: &str = "input, select";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Initial form state
pub const DEFAULT_ARTWORK_HEIGHT: f64 = 24.0;
pub const DEFAULT_WIRE_DROP: f64 = 6.0;
pub const DEFAULT_MOOD_ID: &str = "cubist";

// Selector option decorations, keyed by mood id
pub const MOOD_OPTION_ICONS: [(&str, &str); 3] = [
    ("cubist", "🎨"),
    ("post-impressionist", "🌻"),
    ("zen", "🪷"),
];
