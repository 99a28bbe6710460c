// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This is the namespace for all parts dealing with data in sampled waves.

/// Time measured in samples since the start of the message.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct SampleTime(pub usize);

impl SampleTime {
    /// Convert a time in seconds to samples, rounding down.
    ///
    /// ```
    /// use morse_wav::wave::*;
    ///
    /// assert_eq!(SampleTime::floor_seconds(0.0625 * 3.0, 8000), SampleTime(1500));
    /// ```
    pub fn floor_seconds(seconds: f64, sample_rate: u32) -> SampleTime {
        SampleTime((seconds * sample_rate as f64).floor() as usize)
    }
}

/// A buffer of mono 16 bit PCM samples.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_samples(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Size of the buffer in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * std::mem::size_of::<i16>()
    }

    /// Time right after the last sample.
    pub fn end(&self) -> SampleTime {
        SampleTime(self.samples.len())
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = i16> + '_ {
        self.samples.iter().copied()
    }

    /// Append the samples of another buffer.
    pub fn append(&mut self, other: &SampleBuffer) {
        self.samples.extend_from_slice(&other.samples);
    }

    /// Append silence until the buffer ends at `target`.
    /// Does nothing if the buffer already reaches that far.
    ///
    /// ```
    /// use morse_wav::wave::*;
    ///
    /// let mut buf = SampleBuffer::from_samples(vec![1, 2]);
    /// buf.pad_to(SampleTime(4));
    /// assert_eq!(buf.samples(), &[1, 2, 0, 0]);
    /// buf.pad_to(SampleTime(3));
    /// assert_eq!(buf.len(), 4);
    /// ```
    pub fn pad_to(&mut self, target: SampleTime) {
        if target.0 > self.samples.len() {
            self.samples.resize(target.0, 0);
        }
    }

    /// Convert to floating point samples in [-1, 1] as used by most playback APIs.
    pub fn to_f32(&self) -> Vec<f32> {
        self.samples
            .iter()
            .map(|&s| s as f32 / i16::MAX as f32)
            .collect()
    }

    /// Copy the samples to bytes in little endian order.
    ///
    /// Returns the number of samples that were actually copied.
    /// Might be less than the number of input samples if the output buffer was not large enough.
    pub fn copy_bytes_to(&self, bytes: &mut [u8]) -> usize {
        let mut processed = 0;
        for (sample, target) in self.samples.iter().zip(bytes.chunks_exact_mut(2)) {
            target.copy_from_slice(&sample.to_le_bytes());
            processed += 1;
        }
        processed
    }
}
