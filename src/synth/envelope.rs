/// A linear fade in and fade out of equal length, applied to a finished tone.
///
/// The gain rises from zero over the first `samples` samples and falls back
/// over the last `samples` samples. If the tone is shorter than two fades,
/// both ramps are applied on top of each other.
///
/// # Example
///
/// ```
/// use morse_wav::synth::envelope::*;
/// let fade = Fade::new(4);
/// let mut tone = vec![1.0; 10];
/// fade.apply(&mut tone);
/// assert_eq!(tone, vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 0.75, 0.5, 0.25, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    /// Length of each ramp in samples.
    pub samples: usize,
}

impl Fade {
    pub fn new(samples: usize) -> Self {
        Fade { samples }
    }

    /// Fade lasting `seconds`, rounded to whole samples.
    pub fn from_seconds(seconds: f64, sample_rate: u32) -> Self {
        Fade::new((seconds * sample_rate as f64).round() as usize)
    }

    /// Gain at position `i` of the fade in.
    pub fn fade_in(&self, i: usize) -> f64 {
        i as f64 / self.samples as f64
    }

    /// Gain at position `i` of the fade out.
    pub fn fade_out(&self, i: usize) -> f64 {
        (self.samples as f64 - i as f64 - 1.0) / self.samples as f64
    }

    pub fn apply(&self, wave: &mut [f64]) {
        let len = wave.len();
        for (i, sample) in wave.iter_mut().take(self.samples).enumerate() {
            *sample *= self.fade_in(i);
        }
        // the fade out may start before the buffer if the fade is longer than the tone
        for i in 0..self.samples {
            if let Some(pos) = (len + i).checked_sub(self.samples) {
                if pos < len {
                    wave[pos] *= self.fade_out(i);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_seconds() {
        assert_eq!(Fade::from_seconds(0.005, 44100), Fade::new(221));
        assert_eq!(Fade::from_seconds(0.005, 8000), Fade::new(40));
    }

    #[test]
    fn overlapping_ramps() {
        let mut tone = vec![1.0; 4];
        Fade::new(3).apply(&mut tone);
        // fade in: 0, 1/3, 2/3 - fade out over positions 1..4: 2/3, 1/3, 0
        let expected = [0.0, 2.0 / 9.0, 2.0 / 9.0, 0.0];
        for (t, e) in tone.iter().zip(expected.iter()) {
            assert!((t - e).abs() < 1e-12, "{:?}", tone);
        }
    }

    #[test]
    fn fade_longer_than_tone() {
        let mut tone = vec![1.0; 2];
        Fade::new(4).apply(&mut tone);
        // fade in 0, 1/4 - fade out covers the last two steps 1/4, 0
        assert_eq!(tone, vec![0.0, 0.0]);
    }

    #[test]
    fn zero_fade_is_identity() {
        let mut tone = vec![0.5; 3];
        Fade::new(0).apply(&mut tone);
        assert_eq!(tone, vec![0.5; 3]);
    }
}
