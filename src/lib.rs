pub mod app;
pub mod audio_io;
pub mod catalog;
pub mod config;
pub mod reduce;
pub mod waveform;

pub use app::{TriageApp, Verdict};
pub use config::TriageConfig;

#[cfg(feature = "kittest")]
pub mod kittest;
