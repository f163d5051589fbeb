//! Light and dark palettes for the page shell. The animation ignores the theme.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// CSS values applied to the page, the form panel and its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page_background: &'static str,
    pub text: &'static str,
    pub panel_background: &'static str,
    pub panel_border: &'static str,
    pub panel_shadow: &'static str,
    pub input_background: &'static str,
    pub input_text: &'static str,
    pub input_border: &'static str,
}

pub const LIGHT: Palette = Palette {
    page_background: "radial-gradient(ellipse at top left, #f8fafc 0%, #e2e8f0 100%)",
    text: "#000000",
    panel_background: "rgba(255,255,255,0.85)",
    panel_border: "1.5px solid #e2e8f0",
    panel_shadow: "0 8px 32px 0 rgba(100,100,100,0.10)",
    input_background: "#ffffff",
    input_text: "#000000",
    input_border: "#d1d5db",
};

pub const DARK: Palette = Palette {
    page_background: "radial-gradient(ellipse at top left, #232526 0%, #414345 100%)",
    text: "#ffffff",
    panel_background: "rgba(20,20,20,0.85)",
    panel_border: "1.5px solid #444",
    panel_shadow: "0 8px 32px 0 rgba(0,0,0,0.45)",
    input_background: "#1f2937",
    input_text: "#ffffff",
    input_border: "#4b5563",
};

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}
