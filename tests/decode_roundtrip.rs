use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cliptriage::audio_io::decode_channel;
use hound::{SampleFormat, WavSpec, WavWriter};

fn make_temp_dir(tag: &str) -> PathBuf {
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "cliptriage_decode_{tag}_{}_{}_{}",
        std::process::id(),
        now_ms,
        seq
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_stereo_wav(path: &PathBuf, frames: usize) -> Vec<f32> {
    let spec = WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("create wav");
    let mut right = Vec::with_capacity(frames);
    for i in 0..frames {
        let v = (i as f32 / frames as f32) * 0.8 - 0.4;
        writer.write_sample(0i16).expect("left");
        writer
            .write_sample((v * i16::MAX as f32) as i16)
            .expect("right");
        right.push(v);
    }
    writer.finalize().expect("finalize");
    right
}

#[test]
fn second_channel_is_extracted() {
    let dir = make_temp_dir("stereo");
    let path = dir.join("clip.wav");
    let expected = write_stereo_wav(&path, 500);

    let (samples, sr) = decode_channel(&path, 1).expect("decode");
    assert_eq!(sr, 44100);
    assert_eq!(samples.len(), 500);
    for (got, want) in samples.iter().zip(&expected) {
        assert!((got - want).abs() < 2e-3, "got {got}, want {want}");
    }
}

#[test]
fn out_of_range_channel_clamps_to_last() {
    let dir = make_temp_dir("clamp");
    let path = dir.join("clip.wav");
    write_stereo_wav(&path, 200);

    let (second, _) = decode_channel(&path, 1).expect("decode ch1");
    let (clamped, _) = decode_channel(&path, 7).expect("decode ch7");
    assert_eq!(second, clamped);
}

#[test]
fn mono_file_serves_its_only_channel() {
    let dir = make_temp_dir("mono");
    let path = dir.join("clip.wav");
    let spec = WavSpec {
        channels: 1,
        sample_rate: 22050,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(&path, spec).expect("create wav");
    for i in 0..100i32 {
        writer.write_sample((i * 100) as i16).expect("sample");
    }
    writer.finalize().expect("finalize");

    let (samples, sr) = decode_channel(&path, 1).expect("decode");
    assert_eq!(sr, 22050);
    assert_eq!(samples.len(), 100);
}

#[test]
fn unopenable_file_is_a_recoverable_error() {
    let dir = make_temp_dir("missing");
    assert!(decode_channel(&dir.join("nope.wav"), 1).is_err());
}
