//! Local audio lookup for corpus discourses
//!
//! Handles:
//! - Recursive directory scanning for audio files
//! - Matching files to discourse names
//! - Checking whether every discourse already has audio
//!
//! Both workers run off the UI thread and report a single completion.

mod checker;
mod finder;
mod progress;

pub use checker::AudioChecker;
pub use finder::AudioFinder;
pub use progress::AudioScanProgress;

use std::path::Path;

/// Audio extensions a corpus recording may use
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "flac", "mp3", "ogg", "aiff", "aif"];

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
