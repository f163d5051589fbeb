pub mod audio;
pub mod backdrop;
pub mod calculator;
pub mod color;
pub mod constants;
pub mod driver;
pub mod error;
pub mod mood;
pub mod scene;
pub mod theme;

pub use audio::*;
pub use backdrop::*;
pub use calculator::*;
pub use color::*;
pub use driver::*;
pub use error::*;
pub use mood::*;
pub use scene::*;
pub use theme::*;
