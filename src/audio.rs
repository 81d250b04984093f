use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Encoding tag sent to the recognition service; only PCM WAV input is handled
pub const ENCODING: &str = "LINEAR16";

/// Recognition parameters derived from the WAV header, serialized verbatim
/// into the request body
#[derive(Debug, Clone, Serialize)]
pub struct AudioConfig {
    pub encoding: &'static str,
    pub sample_rate_hertz: u32,
    pub num_channels: u16,
}

/// Read the WAV header and compute the recording duration in seconds
///
/// The file handle lives only for the duration of this call and is released
/// on every exit path, including header parse failures. Duration is frame
/// count over sample rate, rounded to two decimals.
pub fn inspect(path: &Path) -> Result<(AudioConfig, f64)> {
    let reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV container: {:?}", path))?;
    let spec = reader.spec();
    let frames = reader.duration();

    let config = AudioConfig {
        encoding: ENCODING,
        sample_rate_hertz: spec.sample_rate,
        num_channels: spec.channels,
    };
    let duration = round2(frames as f64 / spec.sample_rate as f64);

    Ok((config, duration))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, sample_rate: u32, frames: u32) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..frames {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_inspect_reads_header_and_duration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("call.wav");
        write_wav(&path, 16000, 32000);

        let (config, duration) = inspect(&path).unwrap();

        assert_eq!(config.encoding, "LINEAR16");
        assert_eq!(config.sample_rate_hertz, 16000);
        assert_eq!(config.num_channels, 1);
        assert_eq!(duration, 2.0);
    }

    #[test]
    fn test_duration_rounds_to_two_decimals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("call.wav");
        write_wav(&path, 44100, 88200);

        let (_, duration) = inspect(&path).unwrap();
        assert_eq!(duration, 2.0);

        let path = dir.path().join("odd.wav");
        write_wav(&path, 44100, 100000);
        let (_, duration) = inspect(&path).unwrap();
        // 100000 / 44100 = 2.26757...
        assert_eq!(duration, 2.27);
    }

    #[test]
    fn test_inspect_rejects_non_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-audio.wav");
        std::fs::write(&path, b"definitely not a riff header").unwrap();

        assert!(inspect(&path).is_err());
    }

    #[test]
    fn test_inspect_releases_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("call.wav");
        write_wav(&path, 8000, 8000);

        inspect(&path).unwrap();
        // The handle must be released; on every platform a delete now succeeds.
        std::fs::remove_file(&path).unwrap();
    }
}
