//! Sinks for rendered audio.

pub mod sox;
pub mod wav;
