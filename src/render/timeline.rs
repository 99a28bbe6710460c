// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Laying out Morse symbols on a sample-accurate timeline.
//!
//! Time is counted in dits since the start of the message. After every
//! symbol the output is padded with silence up to the sample position of the
//! absolute dit count, so rounding never accumulates over a long message.

use log::{debug, trace};
use snafu::ResultExt;

use super::{Error, Pitch, RenderConfig};
use crate::morse::{MorseCode, MorseSymbol};
use crate::note;
use crate::synth::{self, Tone, WaveShape};
use crate::wave::{SampleBuffer, SampleTime};

/// A beat of the tempo is divided into this many dits.
pub const DITS_PER_BEAT: f64 = 8.0;

/// Length of a dit in seconds at the given tempo in beats per minute.
///
/// ```
/// use morse_wav::render::timeline::dit_length;
///
/// assert_eq!(dit_length(120.0), 0.0625);
/// ```
pub fn dit_length(tempo: f64) -> f64 {
    60.0 / tempo / DITS_PER_BEAT
}

/// Time measured in dits since the start of the message.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Dits(pub u64);

impl Dits {
    /// Dits occupied by a symbol, including the gap following a tone.
    pub fn of(symbol: MorseSymbol) -> Dits {
        match symbol {
            MorseSymbol::Dot => Dits(2),
            MorseSymbol::Dash => Dits(4),
            MorseSymbol::LetterGap => Dits(0),
            MorseSymbol::WordGap => Dits(4),
        }
    }

    pub fn to_samples(self, dit_length: f64, sample_rate: u32) -> SampleTime {
        SampleTime::floor_seconds(self.0 as f64 * dit_length, sample_rate)
    }
}

/// The tones played for dots and dashes at one pitch.
#[derive(Debug)]
struct Voice {
    frequency: f64,
    dot: SampleBuffer,
    dash: SampleBuffer,
}

impl Voice {
    fn new(frequency: f64, shape: WaveShape, sample_rate: u32, dit_length: f64) -> Self {
        let dot = Tone::new(frequency, dit_length).render(shape, sample_rate, synth::FADE_TIME);
        let dash =
            Tone::new(frequency, dit_length * 3.0).render(shape, sample_rate, synth::FADE_TIME);
        debug!(
            "voice: dot {} samples, dash {} samples",
            dot.len(),
            dash.len()
        );
        Voice {
            frequency,
            dot,
            dash,
        }
    }
}

/// What the timeline is currently playing.
///
/// A message is played at a single pitch for its whole length. A melody
/// changing the pitch after some number of dits would add a state here.
#[derive(Debug)]
enum TimelineState {
    Active(Voice),
}

/// Accumulates the audio of a message symbol by symbol.
#[derive(Debug)]
pub struct Timeline {
    sample_rate: u32,
    dit_length: f64,
    dits: Dits,
    state: TimelineState,
    output: SampleBuffer,
}

impl Timeline {
    pub fn new(frequency: f64, shape: WaveShape, sample_rate: u32, dit_length: f64) -> Self {
        Timeline {
            sample_rate,
            dit_length,
            dits: Dits::default(),
            state: TimelineState::Active(Voice::new(frequency, shape, sample_rate, dit_length)),
            output: SampleBuffer::new(),
        }
    }

    /// Dits elapsed so far.
    pub fn dits(&self) -> Dits {
        self.dits
    }

    pub fn frequency(&self) -> f64 {
        match &self.state {
            TimelineState::Active(voice) => voice.frequency,
        }
    }

    /// Append a symbol: its tone if it has one, then silence up to the
    /// absolute position of the next symbol.
    pub fn push(&mut self, symbol: MorseSymbol) {
        let TimelineState::Active(voice) = &self.state;
        match symbol {
            MorseSymbol::Dot => self.output.append(&voice.dot),
            MorseSymbol::Dash => self.output.append(&voice.dash),
            MorseSymbol::LetterGap | MorseSymbol::WordGap => {}
        }

        self.dits.0 += Dits::of(symbol).0;
        let target = self.dits.to_samples(self.dit_length, self.sample_rate);
        self.output.pad_to(target);
        trace!("{:?} until dit {} (sample {})", symbol, self.dits.0, target.0);
    }

    pub fn finish(self) -> SampleBuffer {
        self.output
    }
}

/// Render Morse code to audio.
///
/// Fails before rendering anything if the note cannot be resolved or the
/// configuration is invalid.
pub fn schedule(code: &MorseCode, config: &RenderConfig) -> Result<SampleBuffer, Error> {
    config.validate()?;
    let frequency = note::resolve_note(&config.note).context(Pitch)?;
    let dit_length = dit_length(config.tempo);

    let mut timeline = Timeline::new(frequency, config.shape, config.sample_rate, dit_length);
    debug!(
        "dit length {:.4} s, pitch {:.2} Hz",
        dit_length,
        timeline.frequency()
    );
    for symbol in code.iter() {
        timeline.push(symbol);
    }
    Ok(timeline.finish())
}
