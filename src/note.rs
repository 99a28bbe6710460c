// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Resolving note names like `A4` or `F#3` to frequencies.

use snafu::Snafu;

/// Highest octave that can be named.
pub const TOP_OCTAVE: i32 = 8;

/// Errors from parsing a note name.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ParseError {
    #[snafu(display("invalid note: {}", note))]
    InvalidNote { note: String },
    #[snafu(display("invalid octave: {}", octave))]
    InvalidOctave { octave: String },
}

/// Defines the tuning by assigning a frequency to A4.
/// All other notes follow at 12 half-tones per octave.
///
/// # Examples
///
/// ```
/// use morse_wav::note::*;
/// assert_eq!(Tuning::default().frequency(-12), 220.0);
/// assert_eq!(Tuning::default().frequency(12), 880.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tuning {
    pub reference_frequency: f64,
}

impl Tuning {
    /// Return the frequency of the note `half_steps` away from A4.
    pub fn frequency(&self, half_steps: i32) -> f64 {
        self.reference_frequency * 2.0f64.powf(half_steps as f64 / 12.0)
    }
}

/// Default concert tuning, where A4 corresponds to 440 Hz.
impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            reference_frequency: 440.0,
        }
    }
}

/// Signed distance in half-steps of a pitch class from A of the same octave.
pub fn pitch_class_offset(name: &str) -> Option<i32> {
    let offset = match name {
        "C" => -9,
        "C#" => -8,
        "D" => -7,
        "D#" => -6,
        "E" => -5,
        "F" => -4,
        "F#" => -3,
        "G" => -2,
        "G#" => -1,
        "A" => 0,
        "A#" => 1,
        "B" => 2,
        _ => return None,
    };
    Some(offset)
}

/// Parse a note of the format `<pitch class><octave>` and return its
/// frequency in the default tuning. Pitch classes are case insensitive and
/// only know sharps.
///
/// # Examples
///
/// ```
/// use morse_wav::note::*;
///
/// assert_eq!(resolve_note("A4"), Ok(440.0));
/// assert_eq!(resolve_note("a5"), Ok(880.0));
/// assert!((resolve_note("C4").unwrap() - 261.63).abs() < 0.01);
/// assert_eq!(resolve_note("H9"), Err(ParseError::InvalidOctave { octave: "9".into() }));
/// ```
pub fn resolve_note(note: &str) -> Result<f64, ParseError> {
    let note = note.to_uppercase();
    let invalid_note = || ParseError::InvalidNote { note: note.clone() };

    if note.chars().count() < 2 {
        return Err(invalid_note());
    }

    // the octave starts at the first digit, which must not be the first character
    let octave_start = match note.char_indices().find(|(_, ch)| ch.is_ascii_digit()) {
        Some((pos, _)) if pos > 0 => pos,
        _ => return Err(invalid_note()),
    };

    let (name, octave_str) = note.split_at(octave_start);
    let octave = parse_octave(octave_str)?;
    let offset = pitch_class_offset(name).ok_or_else(invalid_note)?;

    let half_steps = offset + (octave - 4) * 12;
    Ok(Tuning::default().frequency(half_steps))
}

/// The octave is the run of digits the string starts with, anything after it
/// is ignored.
fn parse_octave(octave_str: &str) -> Result<i32, ParseError> {
    let digits_end = octave_str
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or_else(|| octave_str.len());
    match octave_str[..digits_end].parse::<i32>() {
        Ok(octave) if (0..=TOP_OCTAVE).contains(&octave) => Ok(octave),
        _ => Err(ParseError::InvalidOctave {
            octave: octave_str.to_string(),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "{} is not close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn reference_notes() {
        assert_eq!(resolve_note("A4"), Ok(440.0));
        assert_eq!(resolve_note("A5"), Ok(880.0));
        assert_eq!(resolve_note("A3"), Ok(220.0));
        assert_eq!(resolve_note("A0"), Ok(27.5));
    }

    #[test]
    fn chromatic_notes() {
        assert_close(resolve_note("C4").unwrap(), 261.63);
        assert_close(resolve_note("c#4").unwrap(), 277.18);
        assert_close(resolve_note("F#3").unwrap(), 185.0);
        assert_close(resolve_note("G#5").unwrap(), 830.61);
        assert_close(resolve_note("B8").unwrap(), 7902.13);
        assert_close(resolve_note("C0").unwrap(), 16.35);
    }

    #[test]
    fn invalid_notes() {
        assert_eq!(
            resolve_note("5"),
            Err(ParseError::InvalidNote { note: "5".into() })
        );
        assert_eq!(
            resolve_note("45"),
            Err(ParseError::InvalidNote { note: "45".into() })
        );
        assert_eq!(
            resolve_note("A"),
            Err(ParseError::InvalidNote { note: "A".into() })
        );
        assert_eq!(
            resolve_note("AB"),
            Err(ParseError::InvalidNote { note: "AB".into() })
        );
        assert_eq!(
            resolve_note("Bb4"),
            Err(ParseError::InvalidNote { note: "BB4".into() })
        );
        assert_eq!(
            resolve_note("H4"),
            Err(ParseError::InvalidNote { note: "H4".into() })
        );
    }

    #[test]
    fn invalid_octaves() {
        assert_eq!(
            resolve_note("H9"),
            Err(ParseError::InvalidOctave { octave: "9".into() })
        );
        assert_eq!(
            resolve_note("A10"),
            Err(ParseError::InvalidOctave { octave: "10".into() })
        );
        assert_eq!(
            resolve_note("C12345678901"),
            Err(ParseError::InvalidOctave {
                octave: "12345678901".into()
            })
        );
    }

    #[test]
    fn trailing_characters_after_octave() {
        assert_eq!(resolve_note("C4x"), resolve_note("C4"));
        assert_eq!(resolve_note("A4.5"), Ok(440.0));
        assert_eq!(resolve_note("a5 "), Ok(880.0));
        assert_eq!(
            resolve_note("A9x"),
            Err(ParseError::InvalidOctave { octave: "9X".into() })
        );
    }
}
