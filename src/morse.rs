// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Translation of text into symbolic Morse code.

use std::fmt;

/// A single symbol of encoded Morse code.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MorseSymbol {
    /// A short tone, one dit long.
    Dot,
    /// A long tone, three dits long.
    Dash,
    /// Marks a space in the source text. Adds no time of its own.
    LetterGap,
    /// Separates two symbol groups.
    WordGap,
}

impl MorseSymbol {
    pub fn to_char(self) -> char {
        match self {
            MorseSymbol::Dot => '.',
            MorseSymbol::Dash => '-',
            MorseSymbol::LetterGap => '_',
            MorseSymbol::WordGap => ' ',
        }
    }

    /// # Examples
    ///
    /// ```
    /// use morse_wav::morse::*;
    ///
    /// assert_eq!(MorseSymbol::from_char('-'), Some(MorseSymbol::Dash));
    /// assert_eq!(MorseSymbol::from_char('x'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<MorseSymbol> {
        match ch {
            '.' => Some(MorseSymbol::Dot),
            '-' => Some(MorseSymbol::Dash),
            '_' => Some(MorseSymbol::LetterGap),
            ' ' => Some(MorseSymbol::WordGap),
            _ => None,
        }
    }
}

/// Encoded Morse code of a whole message. Immutable once built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MorseCode {
    symbols: Vec<MorseSymbol>,
}

impl MorseCode {
    /// Build code from its textual form. Returns `None` if `code` contains
    /// anything but `.`, `-`, `_` and spaces.
    pub fn parse(code: &str) -> Option<MorseCode> {
        let symbols = code
            .chars()
            .map(MorseSymbol::from_char)
            .collect::<Option<Vec<_>>>()?;
        Some(MorseCode { symbols })
    }

    pub fn symbols(&self) -> &[MorseSymbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = MorseSymbol> + '_ {
        self.symbols.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for MorseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for sym in &self.symbols {
            f.write_char(sym.to_char())?;
        }
        Ok(())
    }
}

/// Look up the code of a single (uppercase) character.
/// A space maps to the `_` marker.
pub fn lookup(ch: char) -> Option<&'static str> {
    let code = match ch {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",

        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '0' => "-----",

        ',' => "--..--",
        '.' => ".-.-.-",
        '?' => "..--..",
        '/' => "-..-.",
        '-' => "-....-",
        '(' => "-.--.",
        ')' => "-.--.-",

        ' ' => "_",
        _ => return None,
    };
    Some(code)
}

/// Encode text as Morse code.
///
/// The text is uppercased and padded with two trailing spaces, so every
/// message ends in `_ _`. Characters without a code are dropped.
///
/// # Examples
///
/// ```
/// use morse_wav::morse::encode;
///
/// assert_eq!(encode("sos").to_string(), "... --- ... _ _");
/// assert_eq!(encode("a~b").to_string(), ".- -... _ _");
/// ```
pub fn encode(text: &str) -> MorseCode {
    let padded = format!("{}  ", text).to_uppercase();

    let mut symbols = Vec::new();
    for group in padded.chars().filter_map(lookup) {
        if !symbols.is_empty() {
            symbols.push(MorseSymbol::WordGap);
        }
        symbols.extend(group.chars().filter_map(MorseSymbol::from_char));
    }
    MorseCode { symbols }
}
