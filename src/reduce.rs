/// Block size used for waveform display: how many consecutive decoded
/// samples collapse into one display point.
pub const DEFAULT_BLOCK: usize = 30;

/// Block-mean downsample. Each window of `block` consecutive samples
/// becomes its arithmetic mean, so the output has `len / block` points.
/// A trailing partial window is dropped, not zero-padded or averaged
/// over a short count.
///
/// Panics if `block` is zero.
pub fn reduce_block_mean(samples: &[f32], block: usize) -> Vec<f32> {
    assert!(block > 0, "reduce_block_mean: block size must be positive");
    let mut out = Vec::with_capacity(samples.len() / block);
    for window in samples.chunks_exact(block) {
        let sum: f32 = window.iter().sum();
        out.push(sum / block as f32);
    }
    out
}
