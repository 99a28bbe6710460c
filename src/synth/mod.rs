//! This namespace contains all the parts turning a pitch into wave data.

pub mod envelope;
pub mod oscillator;
pub mod tone;

pub use oscillator::WaveShape;
pub use tone::{render, Tone};

/// Length in seconds of the fades at both ends of every tone.
pub const FADE_TIME: f64 = 0.005;
