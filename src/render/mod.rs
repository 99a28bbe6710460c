// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The glue responsible for turning text into actual waveforms.

pub mod timeline;

use std::io;
use std::path::Path;

use log::info;
use snafu::{ResultExt, Snafu};

use crate::morse;
use crate::note::ParseError;
use crate::output::wav;
use crate::synth::WaveShape;
use crate::wave::SampleBuffer;

/// Everything that determines how a message sounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Samples per second of the generated audio.
    pub sample_rate: u32,
    /// Beats per minute, where a beat lasts eight dits.
    pub tempo: f64,
    /// Pitch of the tones, e.g. `A5`.
    pub note: String,
    pub shape: WaveShape,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            sample_rate: 44100,
            tempo: 120.0,
            note: "A5".to_string(),
            shape: WaveShape::Sine,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.tempo.is_finite() && self.tempo > 0.0) {
            return Err(Error::InvalidTempo { tempo: self.tempo });
        }
        if self.sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }
        Ok(())
    }
}

/// Possible errors when rendering a message.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{}", source))]
    Pitch { source: ParseError },
    #[snafu(display("tempo must be a positive number of beats per minute, got {}", tempo))]
    InvalidTempo { tempo: f64 },
    #[snafu(display("sample rate must not be zero"))]
    InvalidSampleRate,
    #[snafu(display("could not write audio: {}", source))]
    Io { source: io::Error },
}

/// Encode `text` as Morse code and render it to 16 bit samples.
///
/// # Examples
///
/// ```
/// use morse_wav::render::*;
///
/// let config = RenderConfig { sample_rate: 8000, ..RenderConfig::default() };
/// let audio = render_text("SOS", &config).unwrap();
/// assert_eq!(audio.len(), 20000);
/// ```
pub fn render_text(text: &str, config: &RenderConfig) -> Result<SampleBuffer, Error> {
    let code = morse::encode(text);
    info!(
        "rendering {} symbols at {} bpm, {} at {} Hz",
        code.len(),
        config.tempo,
        config.note,
        config.sample_rate
    );
    let audio = timeline::schedule(&code, config)?;
    info!(
        "total length {} samples ({:.2} seconds)",
        audio.len(),
        audio.len() as f64 / config.sample_rate as f64
    );
    Ok(audio)
}

/// Render `text` to the bytes of a WAV file.
pub fn render_wav(text: &str, config: &RenderConfig) -> Result<Vec<u8>, Error> {
    let audio = render_text(text, config)?;
    wav::wav_bytes(&audio, config.sample_rate).context(Io)
}

/// Render `text` to a WAV file at `path`.
pub fn save_wav(text: &str, config: &RenderConfig, path: &Path) -> Result<(), Error> {
    let audio = render_text(text, config)?;
    wav::save_wav(path, &audio, config.sample_rate).context(Io)?;
    info!("saved {}", path.display());
    Ok(())
}
