// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Writing mono 16 bit PCM audio as RIFF/WAVE files.

use std::convert::{TryFrom, TryInto};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::wave::SampleBuffer;

/// Size of the encoded header in bytes.
pub const HEADER_SIZE: usize = 44;

/// The canonical 44 byte header of a PCM WAV file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WavHeader {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Size of the sample data in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Header for `sample_count` mono 16 bit samples.
    /// Fails if the data is too large to be described by a RIFF header, or if
    /// the byte rate of `sample_rate` does not fit into 32 bits.
    pub fn mono16(sample_count: usize, sample_rate: u32) -> io::Result<WavHeader> {
        if sample_rate.checked_mul(2).is_none() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("sample rate {} is too high for a WAV file", sample_rate),
            ));
        }
        let data_size = sample_count
            .checked_mul(2)
            .and_then(|size| u32::try_from(size).ok())
            .filter(|size| size.checked_add(HEADER_SIZE as u32 - 8).is_some())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} samples do not fit into a WAV file", sample_count),
                )
            })?;
        Ok(WavHeader {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            data_size,
        })
    }

    pub fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    /// Bytes per second, saturating for headers that could not be written.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(self.block_align() as u32)
    }

    /// Size of everything following the RIFF size field.
    pub fn riff_size(&self) -> u32 {
        self.data_size + (HEADER_SIZE as u32 - 8)
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(b"RIFF");
        bytes[4..8].copy_from_slice(&self.riff_size().to_le_bytes());
        bytes[8..12].copy_from_slice(b"WAVE");
        bytes[12..16].copy_from_slice(b"fmt ");
        bytes[16..20].copy_from_slice(&16u32.to_le_bytes());
        // linear PCM
        bytes[20..22].copy_from_slice(&1u16.to_le_bytes());
        bytes[22..24].copy_from_slice(&self.channels.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.byte_rate().to_le_bytes());
        bytes[32..34].copy_from_slice(&self.block_align().to_le_bytes());
        bytes[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        bytes[36..40].copy_from_slice(b"data");
        bytes[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        bytes
    }

    /// Parse a canonical PCM header as written by [`WavHeader::to_bytes`].
    pub fn parse(bytes: &[u8]) -> Option<WavHeader> {
        let u16_at = |pos: usize| bytes.get(pos..pos + 2)?.try_into().ok().map(u16::from_le_bytes);
        let u32_at = |pos: usize| bytes.get(pos..pos + 4)?.try_into().ok().map(u32::from_le_bytes);

        if bytes.get(0..4)? != b"RIFF"
            || bytes.get(8..12)? != b"WAVE"
            || bytes.get(12..16)? != b"fmt "
            || bytes.get(36..40)? != b"data"
        {
            return None;
        }
        if u32_at(16)? != 16 || u16_at(20)? != 1 {
            return None;
        }
        Some(WavHeader {
            channels: u16_at(22)?,
            sample_rate: u32_at(24)?,
            bits_per_sample: u16_at(34)?,
            data_size: u32_at(40)?,
        })
    }
}

/// Write the header followed by the little endian samples.
pub fn write_wav<W: Write + ?Sized>(
    out: &mut W,
    samples: &SampleBuffer,
    sample_rate: u32,
) -> io::Result<()> {
    let header = WavHeader::mono16(samples.len(), sample_rate)?;
    out.write_all(&header.to_bytes())?;

    let mut data = vec![0u8; samples.byte_len()];
    samples.copy_bytes_to(&mut data);
    out.write_all(&data)
}

/// Serialize the samples as a complete WAV file in memory.
///
/// # Examples
///
/// ```
/// use morse_wav::output::wav::*;
/// use morse_wav::wave::SampleBuffer;
///
/// let bytes = wav_bytes(&SampleBuffer::from_samples(vec![1, -1]), 8000).unwrap();
/// assert_eq!(bytes.len(), 48);
/// assert_eq!(&bytes[44..], &[1u8, 0, 0xff, 0xff]);
/// ```
pub fn wav_bytes(samples: &SampleBuffer, sample_rate: u32) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE + samples.byte_len());
    write_wav(&mut bytes, samples, sample_rate)?;
    Ok(bytes)
}

/// Write the samples to a WAV file, replacing any existing file.
pub fn save_wav(path: &Path, samples: &SampleBuffer, sample_rate: u32) -> io::Result<()> {
    // serialize first so that a failure never leaves a half written file behind
    let bytes = wav_bytes(samples, sample_rate)?;
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.flush()
}

/// Read back a mono 16 bit file with a canonical header.
/// Returns the sample rate and the samples.
pub fn read_wav(bytes: &[u8]) -> Option<(u32, SampleBuffer)> {
    let header = WavHeader::parse(bytes)?;
    if header.channels != 1 || header.bits_per_sample != 16 {
        return None;
    }
    let data = bytes.get(HEADER_SIZE..HEADER_SIZE + header.data_size as usize)?;
    let samples = data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Some((header.sample_rate, SampleBuffer::from_samples(samples)))
}
