// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `morsewav` renders text as Morse code to wav files or the speakers.

use std::io;
use std::path::PathBuf;

use structopt::StructOpt;

use morse_wav::morse;
use morse_wav::output::sox;
use morse_wav::render::{self, RenderConfig};
use morse_wav::synth::WaveShape;

#[derive(Debug, StructOpt)]
#[structopt(name = "morsewav", about = "Turning text into Morse code audio")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// The text to encode. Characters without a Morse code are skipped.
    text: String,

    /// Speed in beats per minute, at eight dits per beat.
    #[structopt(short, long, default_value = "120")]
    tempo: f64,

    /// Pitch of the tones, e.g. A5 or F#4.
    #[structopt(short, long, default_value = "A5")]
    note: String,

    #[structopt(short = "r", long, default_value = "44100")]
    sample_rate: u32,

    /// Shape of the tones, `sine` or `square`.
    #[structopt(short, long, default_value = "sine")]
    waveform: WaveShape,

    /// Output wav file. The message is played directly if not given.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Print the encoded Morse code.
    #[structopt(long)]
    print_code: bool,
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    if opt.print_code {
        println!("{}", morse::encode(&opt.text));
    }

    let config = RenderConfig {
        sample_rate: opt.sample_rate,
        tempo: opt.tempo,
        note: opt.note,
        shape: opt.waveform,
    };

    match opt.output {
        Some(path) => render::save_wav(&opt.text, &config, &path).map_err(into_io),
        None => {
            let audio = render::render_text(&opt.text, &config).map_err(into_io)?;
            sox::play_wav(&audio, config.sample_rate)
        }
    }
}

fn into_io(err: render::Error) -> io::Error {
    match err {
        render::Error::Io { source } => source,
        other => io::Error::new(io::ErrorKind::InvalidInput, other),
    }
}
