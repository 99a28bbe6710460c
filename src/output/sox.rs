//! Easy interface for getting sound to play using a sox subprocess.
use std::io;
use std::process::{Command, Stdio};

use crate::output::wav;
use crate::wave::SampleBuffer;

/// Run the sox `play` program reading a WAV file from its standard input,
/// and feed it through `callback`. Waits until playback has finished.
pub fn with_sox_player<R, F: FnOnce(&mut dyn io::Write) -> io::Result<R>>(
    callback: F,
) -> io::Result<R> {
    let mut player = Command::new("play")
        .arg("--no-show-progress")
        .arg("--type")
        .arg("wav")
        .arg("/dev/stdin")
        .stdin(Stdio::piped())
        .spawn()?;

    let mut audio_stream = player
        .stdin
        .take()
        .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "sox has no stdin"))?;

    let result = callback(&mut audio_stream);

    drop(audio_stream);
    let status = player.wait()?;
    if !status.success() {
        log::warn!("sox exited with {}", status);
    }

    result
}

/// Play mono 16 bit samples on the default speakers.
pub fn play_wav(samples: &SampleBuffer, sample_rate: u32) -> io::Result<()> {
    with_sox_player(|audio_stream| wav::write_wav(audio_stream, samples, sample_rate))
}
