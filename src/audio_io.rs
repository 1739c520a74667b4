use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::default::{get_codecs, get_probe};

fn open_decoder(
    path: &Path,
) -> Result<(
    Box<dyn symphonia::core::formats::FormatReader>,
    Box<dyn symphonia::core::codecs::Decoder>,
    u32,
    u32,
)> {
    let ext_hint = path.extension().and_then(|s| s.to_str());
    let probe_once = |hint_ext: Option<&str>| -> Result<_> {
        let file = File::open(path).with_context(|| format!("open audio: {}", path.display()))?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());
        let mut hint = Hint::new();
        if let Some(ext) = hint_ext {
            hint.with_extension(ext);
        }
        get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(Into::into)
    };
    let probed = match probe_once(ext_hint) {
        Ok(v) => v,
        Err(first_err) => {
            if ext_hint.is_some() {
                probe_once(None).with_context(|| {
                    format!(
                        "open decoder probe failed with and without hint: {}",
                        path.display()
                    )
                })?
            } else {
                return Err(first_err);
            }
        }
    };
    let format = probed.format;
    let track = format.default_track().context("no default track")?.clone();
    let decoder = get_codecs().make(&track.codec_params, &DecoderOptions::default())?;
    let sample_rate_hint = track.codec_params.sample_rate.unwrap_or(0);
    Ok((format, decoder, track.id, sample_rate_hint))
}

/// Decode one channel of an audio file as a mono f32 sequence, together
/// with the source sample rate. `channel` is the interleaved channel
/// index; if the file has fewer channels the last available one is used.
///
/// Corrupt packets are skipped; a file that cannot be opened or yields no
/// usable sample rate is a recoverable error for the caller, never an
/// abort.
pub fn decode_channel(path: &Path, channel: usize) -> Result<(Vec<f32>, u32)> {
    let (mut format, mut decoder, track_id, mut sample_rate) = open_decoder(path)?;
    let mut out: Vec<f32> = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(SymphoniaError::IoError(err))
                if err.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(err) => return Err(err.into()),
        };
        if packet.track_id() != track_id {
            continue;
        }
        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(SymphoniaError::IoError(err))
                if err.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(err) => return Err(err.into()),
        };
        if sample_rate == 0 {
            sample_rate = decoded.spec().rate;
        }
        let channels = decoded.spec().channels.count().max(1);
        let pick = channel.min(channels - 1);
        let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, *decoded.spec());
        buf.copy_interleaved_ref(decoded);
        for frame in buf.samples().chunks(channels) {
            if let Some(&v) = frame.get(pick).or_else(|| frame.last()) {
                out.push(v);
            }
        }
    }
    if sample_rate == 0 {
        anyhow::bail!("unknown sample rate: {}", path.display());
    }
    Ok((out, sample_rate))
}
