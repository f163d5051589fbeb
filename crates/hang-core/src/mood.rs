use crate::color::{Color, Glow};
use crate::constants::{ZEN_GLOW_BLUR, ZEN_GLOW_COLOR};

/// Visual and audio style selected by the user.
///
/// The three named moods are reachable from the selector; any other
/// identifier resolves to `Fallback`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    Cubist,
    PostImpressionist,
    Zen,
    Fallback,
}

impl Mood {
    /// Moods offered in the selector, in display order.
    pub const SELECTABLE: [Mood; 3] = [Mood::Cubist, Mood::PostImpressionist, Mood::Zen];

    pub fn from_id(id: &str) -> Self {
        match id {
            "cubist" => Mood::Cubist,
            "post-impressionist" => Mood::PostImpressionist,
            "zen" => Mood::Zen,
            _ => Mood::Fallback,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Mood::Cubist => "cubist",
            Mood::PostImpressionist => "post-impressionist",
            Mood::Zen => "zen",
            Mood::Fallback => "fallback",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Cubist => "Cubist",
            Mood::PostImpressionist => "Post-Impressionist",
            Mood::Zen => "Zen",
            Mood::Fallback => "Default",
        }
    }

    /// Looping ambient track for this mood. The fallback mood is silent.
    pub fn audio_asset(self) -> Option<&'static str> {
        match self {
            Mood::Cubist => Some("/audio/cubist.mp3"),
            Mood::PostImpressionist => Some("/audio/post-impressionist.mp3"),
            Mood::Zen => Some("/audio/zen.mp3"),
            Mood::Fallback => None,
        }
    }

    pub fn profile(self) -> &'static MoodProfile {
        match self {
            Mood::Cubist => &CUBIST,
            Mood::PostImpressionist => &POST_IMPRESSIONIST,
            Mood::Zen => &ZEN,
            Mood::Fallback => &FALLBACK,
        }
    }
}

/// Normalized particle offset in [-1, 1] for particle `i` at time `t` (ms).
pub type PositionFn = fn(i: usize, t: f64) -> f64;

/// Fill color for particle `i` at time `t`, given the session seed and the
/// profile's `base_opacity`.
pub type ColorFn = fn(i: usize, t: f64, seed: f64, opacity: f64) -> Color;

/// Immutable animation parameters for one mood.
#[derive(Clone, Copy, Debug)]
pub struct MoodProfile {
    pub mood: Mood,
    pub particle_count: usize,
    pub base_opacity: f64,
    pub size_factor: f64,
    pub shape_point_count: usize,
    pub position_x: PositionFn,
    pub position_y: PositionFn,
    pub color: ColorFn,
    /// Shadow drawn under every particle, if any.
    pub glow: Option<Glow>,
    /// Whether the pulsing background orbs are drawn before the particles.
    pub orbs: bool,
}

pub static CUBIST: MoodProfile = MoodProfile {
    mood: Mood::Cubist,
    particle_count: 30,
    base_opacity: 0.25,
    size_factor: 1.0,
    shape_point_count: 8,
    position_x: |i, t| (t * 0.00005 + i as f64).sin(),
    position_y: |i, t| (t * 0.00007 + i as f64).cos(),
    color: |i, t, seed, a| Color::hsla((seed * i as f64 + t * 0.01) % 360.0, 70.0, 50.0, a),
    glow: None,
    orbs: false,
};

pub static POST_IMPRESSIONIST: MoodProfile = MoodProfile {
    mood: Mood::PostImpressionist,
    particle_count: 20,
    base_opacity: 0.2,
    size_factor: 0.8,
    shape_point_count: 6,
    position_x: |i, t| (t * 0.00004 + i as f64).sin(),
    position_y: |i, t| (t * 0.00006 + i as f64).cos(),
    color: |i, t, seed, a| {
        Color::hsla((seed * i as f64 + t * 0.01 + 90.0) % 360.0, 60.0, 60.0, a)
    },
    glow: None,
    orbs: false,
};

pub static ZEN: MoodProfile = MoodProfile {
    mood: Mood::Zen,
    particle_count: 18,
    base_opacity: 0.09,
    size_factor: 1.2,
    shape_point_count: 32,
    position_x: |i, t| {
        let i = i as f64;
        (t * 0.00009 + i * 0.2).sin() * (t * 0.00013 + i * 0.3).cos()
    },
    position_y: |i, t| {
        let i = i as f64;
        (t * 0.00011 + i * 0.3).cos() * (t * 0.00015 + i * 0.2).sin()
    },
    // teal-biased hue swinging +/-60 degrees around 180
    color: |i, t, _seed, a| {
        let i = i as f64;
        Color::hsla(
            (180.0 + (t * 0.0002 + i).sin() * 60.0) % 360.0,
            40.0,
            60.0 + 20.0 * (i + t * 0.0002).sin(),
            a,
        )
    },
    glow: Some(Glow {
        color: Color::Named(ZEN_GLOW_COLOR),
        blur: ZEN_GLOW_BLUR,
    }),
    orbs: true,
};

pub static FALLBACK: MoodProfile = MoodProfile {
    mood: Mood::Fallback,
    particle_count: 10,
    base_opacity: 0.1,
    size_factor: 1.0,
    shape_point_count: 4,
    position_x: |i, t| (t * 0.00005 + i as f64).sin(),
    position_y: |i, t| (t * 0.00005 + i as f64).cos(),
    // flat grey, drawn at a fixed alpha above base_opacity
    color: |_, _, _, _| Color::rgba(200, 200, 200, 0.2),
    glow: None,
    orbs: false,
};
