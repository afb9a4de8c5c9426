//! Audio decoding using Symphonia
//!
//! Decodes any container/codec Symphonia was built with into a flat
//! interleaved f32 buffer. Samples stay interleaved and unmixed: the grid
//! downstream consumes frames x channels pixels, one per sample, exactly as
//! decoded.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;
use symphonia::default::get_probe;

use crate::error::RenderError;

/// A fully decoded audio stream.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved samples, length = frames x channels
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Channel count
    pub channels: usize,
}

impl DecodedAudio {
    /// Total sample count across all channels.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Number of time-slices (frames) in the stream.
    pub fn frame_count(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels
        }
    }
}

/// Append one decoded buffer to `out`, interleaving channels frame-major.
fn extend_interleaved<S, F>(out: &mut Vec<f32>, buf: &AudioBuffer<S>, convert: F)
where
    S: Sample,
    F: Fn(S) -> f32,
{
    let channels = buf.spec().channels.count();
    for frame in 0..buf.frames() {
        for ch in 0..channels {
            out.push(convert(buf.chan(ch)[frame]));
        }
    }
}

/// Decode an audio file to interleaved f32 samples.
///
/// # Arguments
///
/// * `path` - Path to the audio file
///
/// # Errors
///
/// Returns `RenderError::Decode` when the file cannot be opened, no decodable
/// audio track is found, or the stream uses a sample format outside the
/// conversion table below. Corrupt packets are skipped, not fatal.
pub fn decode_file(path: &Path) -> Result<DecodedAudio, RenderError> {
    let src = File::open(path)
        .map_err(|e| RenderError::Decode(format!("failed to open `{}`: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let meta_opts: MetadataOptions = Default::default();
    let fmt_opts: FormatOptions = Default::default();

    let probed = get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| RenderError::Decode(format!("unrecognized format: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| RenderError::Decode("no supported audio tracks found".to_string()))?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);
    let mut channels = track.codec_params.channels.map(|c| c.count());

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| RenderError::Decode(format!("no decoder for track: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if channels.is_none() {
                    channels = Some(decoded.spec().channels.count());
                }
                match decoded {
                    AudioBufferRef::F32(buf) => extend_interleaved(&mut samples, &buf, |s| s),
                    AudioBufferRef::F64(buf) => {
                        extend_interleaved(&mut samples, &buf, |s| s as f32)
                    }
                    AudioBufferRef::S16(buf) => {
                        extend_interleaved(&mut samples, &buf, |s| s as f32 / 32768.0)
                    }
                    AudioBufferRef::S24(buf) => {
                        extend_interleaved(&mut samples, &buf, |s| s.inner() as f32 / 8388608.0)
                    }
                    AudioBufferRef::S32(buf) => {
                        extend_interleaved(&mut samples, &buf, |s| s as f32 / 2147483648.0)
                    }
                    AudioBufferRef::U8(buf) => {
                        extend_interleaved(&mut samples, &buf, |s| (s as f32 - 128.0) / 128.0)
                    }
                    _ => {
                        return Err(RenderError::Decode(
                            "unsupported sample format".to_string(),
                        ));
                    }
                }
            }
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                // Corrupt packets happen in the wild; keep going.
                log::warn!("skipping undecodable packet: {}", e);
                continue;
            }
            Err(e) => return Err(RenderError::Decode(e.to_string())),
        }
    }

    let channels = channels.unwrap_or(0);
    log::debug!(
        "decoded `{}`: {} channels at {} Hz, {} samples",
        path.display(),
        channels,
        sample_rate,
        samples.len()
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}
