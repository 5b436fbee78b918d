//! Media references and audio duration lookup.

use std::path::Path;

/// A decoded bitmap, described by its pixel dimensions.
///
/// Pixel data is owned by the host; sizing only needs to know whether an image
/// is present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    /// Asset name, if the image came from the bundle
    pub name: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            name: None,
            width,
            height,
        }
    }

    pub fn named(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: Some(name.into()),
            width,
            height,
        }
    }

    /// Zero sized image, used when no placeholder asset is available
    pub const fn empty() -> Self {
        Self::new(0, 0)
    }
}

/// Errors raised while probing an audio file.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("failed to read audio file")]
    Io(#[from] std::io::Error),
    #[error("not a RIFF/WAVE container")]
    NotWave,
    #[error("missing `{0}` chunk")]
    MissingChunk(&'static str),
    #[error("malformed `{0}` chunk")]
    MalformedChunk(&'static str),
    #[error("byte rate is zero")]
    ZeroByteRate,
}

/// Looks up the playback duration of an audio reference.
///
/// Implementations must not fail: when the duration cannot be determined they
/// return a fallback (normally `0.0`). Lookups may be slow (opening and parsing
/// a container), so callers that need responsiveness should build audio
/// content off the interactive path.
pub trait DurationLookup {
    /// Duration of the audio at `source`, in seconds.
    fn duration(&mut self, source: &Path) -> f32;
}

/// A duration known ahead of time, so building audio content stays cheap.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KnownDuration(pub f32);

impl DurationLookup for KnownDuration {
    fn duration(&mut self, _source: &Path) -> f32 {
        self.0
    }
}

/// Reads the duration of uncompressed RIFF/WAVE files from their headers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavDuration {
    /// Returned when the file cannot be probed
    pub fallback: f32,
}

impl WavDuration {
    pub const fn new() -> Self {
        Self { fallback: 0.0 }
    }

    pub const fn with_fallback(mut self, fallback: f32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Read `path` and compute its duration, reporting why it failed if it does.
    pub fn probe(path: &Path) -> Result<f32, MediaError> {
        let bytes = std::fs::read(path)?;
        wav_duration(&bytes)
    }
}

impl Default for WavDuration {
    fn default() -> Self {
        Self::new()
    }
}

impl DurationLookup for WavDuration {
    fn duration(&mut self, source: &Path) -> f32 {
        match Self::probe(source) {
            Ok(seconds) => seconds,
            Err(err) => {
                log::warn!(
                    "Could not read duration of {}: {err}; using {}s",
                    source.display(),
                    self.fallback
                );
                self.fallback
            }
        }
    }
}

/// Duration in seconds of an in-memory RIFF/WAVE file.
///
/// Duration is the `data` chunk length divided by the byte rate in `fmt `. A
/// `data` length running past the end of the buffer (as written by streaming
/// recorders) is clamped to the bytes actually present.
pub fn wav_duration(bytes: &[u8]) -> Result<f32, MediaError> {
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(MediaError::NotWave);
    }

    let mut byte_rate = None;
    let mut data_len = None;
    let mut cursor = 12;

    while cursor + 8 <= bytes.len() {
        let id = &bytes[cursor..cursor + 4];
        let declared = read_u32(&bytes[cursor + 4..cursor + 8]) as usize;
        let body_start = cursor + 8;
        let body_end = body_start.saturating_add(declared).min(bytes.len());
        let body = &bytes[body_start..body_end];

        match id {
            b"fmt " => {
                if body.len() < 12 {
                    return Err(MediaError::MalformedChunk("fmt "));
                }
                byte_rate = Some(read_u32(&body[8..12]));
            }
            b"data" => data_len = Some(body.len()),
            _ => {}
        }

        if byte_rate.is_some() && data_len.is_some() {
            break;
        }

        // Chunks are word aligned
        cursor = body_start
            .saturating_add(declared)
            .saturating_add(declared & 1);
    }

    let byte_rate = byte_rate.ok_or(MediaError::MissingChunk("fmt "))?;
    let data_len = data_len.ok_or(MediaError::MissingChunk("data"))?;

    if byte_rate == 0 {
        return Err(MediaError::ZeroByteRate);
    }

    Ok((data_len as f64 / byte_rate as f64) as f32)
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8 kHz mono 16-bit PCM: 16000 bytes per second
    fn wav(data_len: u32, declared_data_len: u32) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&8000u32.to_le_bytes());
        out.extend_from_slice(&16000u32.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&declared_data_len.to_le_bytes());
        out.extend(std::iter::repeat(0u8).take(data_len as usize));
        out
    }

    #[test]
    fn test_wav_duration_from_headers() {
        let bytes = wav(32000, 32000);
        assert_eq!(wav_duration(&bytes).unwrap(), 2.0);
    }

    #[test]
    fn test_wav_duration_clamps_streaming_length() {
        let bytes = wav(8000, u32::MAX);
        assert_eq!(wav_duration(&bytes).unwrap(), 0.5);
    }

    #[test]
    fn test_wav_skips_unknown_chunks() {
        let mut bytes = wav(16000, 16000);
        // Insert an odd-sized LIST chunk (plus pad byte) before `fmt `
        let list: Vec<u8> = [b"LIST".as_slice(), &3u32.to_le_bytes(), b"abc\0"].concat();
        bytes.splice(12..12, list);
        assert_eq!(wav_duration(&bytes).unwrap(), 1.0);
    }

    #[test]
    fn test_rejects_non_wave() {
        assert!(matches!(
            wav_duration(b"ID3\x04not a wave file"),
            Err(MediaError::NotWave)
        ));
    }

    #[test]
    fn test_missing_data_chunk() {
        let mut bytes = wav(0, 0);
        bytes.truncate(36);
        assert!(matches!(
            wav_duration(&bytes),
            Err(MediaError::MissingChunk("data"))
        ));
    }

    #[test]
    fn test_lookup_falls_back_on_missing_file() {
        let path = std::env::temp_dir().join("chatkit-missing-audio.wav");
        let _ = std::fs::remove_file(&path);

        let mut lookup = WavDuration::new().with_fallback(0.0);
        assert_eq!(lookup.duration(&path), 0.0);
    }

    #[test]
    fn test_lookup_reads_file() {
        let path = std::env::temp_dir().join(format!("chatkit-audio-{}.wav", std::process::id()));
        std::fs::write(&path, wav(48000, 48000)).unwrap();

        let mut lookup = WavDuration::new();
        assert_eq!(lookup.duration(&path), 3.0);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_known_duration() {
        let mut lookup = KnownDuration(12.5);
        assert_eq!(lookup.duration(Path::new("anything.m4a")), 12.5);
    }
}
