// Shared layout, motion and audio tuning constants for the backdrop and calculator.

// Calculator
pub const EYE_LEVEL_INCHES: f64 = 57.0; // gallery convention for the center of the artwork
pub const ARTWORK_HEIGHT_RANGE: (f64, f64) = (1.0, 200.0);
pub const WIRE_DROP_RANGE: (f64, f64) = (0.0, 100.0);

// Particle placement, as a fraction of the canvas extent from its center
pub const PARTICLE_SPREAD: f64 = 0.4;

// Particle size: (BASE + AMPLITUDE * sin(t * FREQ + i)) * size_factor
pub const PARTICLE_SIZE_BASE: f64 = 20.0;
pub const PARTICLE_SIZE_AMPLITUDE: f64 = 40.0;
pub const PARTICLE_SIZE_FREQ: f64 = 0.0001;

// Per-vertex radius jitter
pub const VERTEX_JITTER_PX: f64 = 8.0;
pub const VERTEX_JITTER_FREQ: f64 = 0.0003;

// Zen glow orbs
pub const ORB_COUNT: usize = 6;
pub const ORB_SPREAD: f64 = 0.35;
pub const ORB_WOBBLE_PX: f64 = 80.0;
pub const ORB_RADIUS_BASE: f64 = 80.0;
pub const ORB_RADIUS_SWING: f64 = 30.0; // pulses between 50 and 110 px
pub const ORB_ALPHA_BASE: f64 = 0.13;
pub const ORB_ALPHA_SWING: f64 = 0.07; // pulses between 0.06 and 0.20
pub const ORB_BASE_HUE: f64 = 180.0; // teal
pub const ORB_HUE_STEP: f64 = 30.0;
pub const ORB_GLOW_BLUR: f64 = 40.0;

// Soft shadow on zen particles
pub const ZEN_GLOW_COLOR: &str = "#b2f5ea";
pub const ZEN_GLOW_BLUR: f64 = 24.0;

// Session seed is drawn uniformly from [0, SEED_SCALE)
pub const SEED_SCALE: f64 = 1000.0;

// Ambient audio
pub const AMBIENT_VOLUME: f64 = 0.3;
