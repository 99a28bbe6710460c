use std::f64::consts::PI;
use std::str::FromStr;

use snafu::Snafu;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WaveShape {
    Sine,
    /// Square wave built from its odd harmonics up to the Nyquist frequency.
    Square,
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ShapeError {
    #[snafu(display("unknown wave shape {:?}, expected `sine` or `square`", name))]
    UnknownShape { name: String },
}

impl FromStr for WaveShape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sine" => Ok(WaveShape::Sine),
            "square" => Ok(WaveShape::Square),
            _ => Err(ShapeError::UnknownShape { name: s.to_string() }),
        }
    }
}

/// An oscillator sampling a wave of some shape at a fixed sample rate.
///
/// Samples are computed from their index rather than an accumulated phase,
/// so sample `i` of two oscillators with the same parameters is always identical.
#[derive(Debug)]
pub struct Oscillator {
    shape: WaveShape,
    sample_rate: f64,
    frequency: f64,
    /// Number of odd harmonics summed up for the square wave.
    harmonics: usize,
}

impl Oscillator {
    pub fn new(shape: WaveShape, sample_rate: f64, frequency: f64) -> Self {
        Self {
            shape,
            sample_rate,
            frequency,
            harmonics: harmonic_count(sample_rate, frequency),
        }
    }

    pub fn harmonics(&self) -> usize {
        self.harmonics
    }

    /// Sample the wave at index `i`. The result is in [-1, 1] for sines;
    /// square waves overshoot slightly and need normalizing.
    pub fn sample(&self, i: usize) -> f64 {
        let phase = 2.0 * PI * self.frequency * i as f64 / self.sample_rate;
        match self.shape {
            WaveShape::Sine => phase.sin(),
            WaveShape::Square => (0..self.harmonics)
                .map(|j| {
                    let h = (2 * j + 1) as f64;
                    4.0 / (h * PI) * (phase * h).sin()
                })
                .sum(),
        }
    }
}

/// Number of odd harmonics `1, 3, 5, ...` of `frequency` that stay at or below
/// the Nyquist frequency.
///
/// ```
/// use morse_wav::synth::oscillator::harmonic_count;
///
/// assert_eq!(harmonic_count(8000.0, 1000.0), 2);
/// assert_eq!(harmonic_count(44100.0, 880.0), 13);
/// assert_eq!(harmonic_count(8000.0, 5000.0), 0);
/// ```
pub fn harmonic_count(sample_rate: f64, frequency: f64) -> usize {
    let highest = ((sample_rate / 2.0 / frequency - 1.0) / 2.0).floor();
    if highest.is_finite() && highest >= 0.0 {
        highest as usize + 1
    } else {
        0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_shape() {
        assert_eq!("sine".parse::<WaveShape>(), Ok(WaveShape::Sine));
        assert_eq!("Square".parse::<WaveShape>(), Ok(WaveShape::Square));
        assert_eq!(
            "saw".parse::<WaveShape>(),
            Err(ShapeError::UnknownShape { name: "saw".into() })
        );
    }

    #[test]
    fn sine_samples() {
        let osc = Oscillator::new(WaveShape::Sine, 8000.0, 2000.0);
        assert_eq!(osc.sample(0), 0.0);
        assert!((osc.sample(1) - 1.0).abs() < 1e-12);
        assert!((osc.sample(3) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn square_stays_below_nyquist() {
        let osc = Oscillator::new(WaveShape::Square, 44100.0, 440.0);
        let highest = (2 * osc.harmonics() - 1) as f64 * 440.0;
        assert!(highest <= 22050.0);
        assert!(highest + 2.0 * 440.0 > 22050.0);
    }

    #[test]
    fn square_is_odd_symmetric() {
        let osc = Oscillator::new(WaveShape::Square, 8000.0, 1000.0);
        // a period is 8 samples long
        for i in 0..4 {
            assert!((osc.sample(i) + osc.sample(i + 4)).abs() < 1e-9);
        }
        assert!(osc.sample(1) > 1.0);
    }
}
