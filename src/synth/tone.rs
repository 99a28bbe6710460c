// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Rendering of single fixed-pitch tones to PCM samples.

use super::envelope::Fade;
use super::oscillator::{Oscillator, WaveShape};
use crate::wave::SampleBuffer;

/// Largest amplitude of a rendered tone.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// A tone of fixed pitch and length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tone {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Nominal duration in seconds.
    pub duration: f64,
}

impl Tone {
    pub fn new(frequency: f64, duration: f64) -> Self {
        Tone {
            frequency,
            duration,
        }
    }

    /// The duration shortened or lengthened to the nearest whole number of cycles.
    ///
    /// ```
    /// use morse_wav::synth::tone::Tone;
    ///
    /// assert_eq!(Tone::new(100.0, 0.0149).cycle_duration(), 0.01);
    /// ```
    pub fn cycle_duration(&self) -> f64 {
        (self.frequency * self.duration).round() / self.frequency
    }

    /// Number of samples the rendered tone occupies.
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (sample_rate as f64 * self.cycle_duration()).round() as usize
    }

    pub fn render(&self, shape: WaveShape, sample_rate: u32, fade_time: f64) -> SampleBuffer {
        render(shape, self.frequency, sample_rate, self.duration, fade_time)
    }
}

/// Render a tone with linear fades at both ends.
///
/// The tone always consists of whole cycles so that it ends where the wave
/// crosses zero. Square waves are faded first and then normalized to full scale.
///
/// # Examples
///
/// ```
/// use morse_wav::synth::oscillator::WaveShape;
/// use morse_wav::synth::tone::render;
///
/// let tone = render(WaveShape::Sine, 880.0, 8000, 0.0625, 0.005);
/// assert_eq!(tone.len(), 500);
/// assert_eq!(tone.samples()[0], 0);
/// ```
pub fn render(
    shape: WaveShape,
    frequency: f64,
    sample_rate: u32,
    duration: f64,
    fade_time: f64,
) -> SampleBuffer {
    let tone = Tone::new(frequency, duration);
    let osc = Oscillator::new(shape, sample_rate as f64, frequency);
    let mut wave: Vec<f64> = (0..tone.sample_count(sample_rate))
        .map(|i| osc.sample(i))
        .collect();

    Fade::from_seconds(fade_time, sample_rate).apply(&mut wave);

    // the fade may remove the largest overshoot, so normalize what is left
    if shape == WaveShape::Square {
        normalize(&mut wave);
    }

    SampleBuffer::from_samples(
        wave.iter()
            .map(|s| round_half_up(s * FULL_SCALE) as i16)
            .collect(),
    )
}

/// Round to the nearest integer, with halves going towards positive infinity.
///
/// ```
/// use morse_wav::synth::tone::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// ```
pub fn round_half_up(x: f64) -> f64 {
    let lower = x.floor();
    if x - lower >= 0.5 {
        lower + 1.0
    } else {
        lower
    }
}

/// Scale the wave so that its largest absolute sample becomes one.
/// A silent wave is left untouched.
pub fn normalize(wave: &mut [f64]) {
    let peak = wave.iter().fold(0.0f64, |peak, s| peak.max(s.abs()));
    if peak > 0.0 {
        wave.iter_mut().for_each(|s| *s /= peak);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn peak(buf: &SampleBuffer) -> i16 {
        buf.iter().map(|s| s.saturating_abs()).max().unwrap_or(0)
    }

    #[test]
    fn whole_cycles() {
        // 440 Hz for 0.1 s is exactly 44 cycles
        assert_eq!(Tone::new(440.0, 0.1).sample_count(44100), 4410);
        // 0.0625 s of 1000 Hz rounds up to 63 cycles
        assert_eq!(Tone::new(1000.0, 0.0625).sample_count(8000), 504);
    }

    #[test]
    fn sine_without_fade() {
        let tone = render(WaveShape::Sine, 2000.0, 8000, 0.002, 0.0);
        let period: [i16; 4] = [0, 32767, 0, -32767];
        assert_eq!(tone.len(), 16);
        for chunk in tone.samples().chunks(4) {
            assert_eq!(chunk, &period);
        }
    }

    #[test]
    fn sine_fades_at_both_ends() {
        let tone = render(WaveShape::Sine, 2000.0, 8000, 0.1, 0.005);
        let samples = tone.samples();
        assert_eq!(samples.len(), 800);
        // fade of 40 samples, sample 1 is a peak scaled by 1/40
        assert_eq!(samples[1], (32767.0f64 / 40.0).round() as i16);
        assert_eq!(samples[41], 32767);
        assert_eq!(samples[799], 0);
        // the last peak at 797 has fade out gain 2/40
        assert_eq!(samples[797], (32767.0f64 * 2.0 / 40.0).round() as i16);
    }

    #[test]
    fn square_is_normalized() {
        // whole periods per sample block, so the peak repeats outside the fades
        for &(freq, rate) in &[(1000.0, 8000), (441.0, 44100), (480.0, 48000), (3000.0, 8000)] {
            let tone = render(WaveShape::Square, freq, rate, 0.2, 0.005);
            assert_eq!(peak(&tone), 32767, "{} Hz at {} Hz", freq, rate);
        }
    }

    #[test]
    fn square_peak_survives_fades() {
        // the period does not divide the sample rate, so the largest overshoot
        // may fall into a fade
        let cases = [
            (261.6255653005986, 44100, 0.0625),
            (261.6255653005986, 44100, 0.05),
            (440.0, 44100, 0.05),
            (440.0, 44100, 0.1875),
            (880.0, 22050, 0.05),
            (277.1826309768721, 8000, 0.0625),
        ];
        for &(freq, rate, duration) in &cases {
            let tone = render(WaveShape::Square, freq, rate, duration, 0.005);
            assert_eq!(
                peak(&tone),
                32767,
                "{} Hz at {} Hz for {} s",
                freq,
                rate,
                duration
            );
        }
    }

    #[test]
    fn tone_renders_itself() {
        let tone = Tone::new(880.0, 0.0625);
        assert_eq!(
            tone.render(WaveShape::Square, 8000, 0.005),
            render(WaveShape::Square, 880.0, 8000, 0.0625, 0.005)
        );
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.6), -2.0);
        assert_eq!(round_half_up(1.4), 1.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-32767.0), -32767.0);
    }

    #[test]
    fn square_above_nyquist_is_silent() {
        let tone = render(WaveShape::Square, 5000.0, 8000, 0.01, 0.0);
        assert_eq!(tone.len(), 80);
        assert!(tone.iter().all(|s| s == 0));
    }

    #[test]
    fn normalize_post_pass() {
        let mut wave = vec![0.5, -2.0, 1.0];
        normalize(&mut wave);
        assert_eq!(wave, vec![0.25, -1.0, 0.5]);
    }
}
