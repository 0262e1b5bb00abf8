// src/app/message.rs
//! Application messages

use std::path::PathBuf;

use crate::corpus::{CorpusConfig, CorpusError, Hierarchy};
use crate::features::audio::AudioScanProgress;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Connection form
    HostChanged(String),
    PortChanged(String),
    UserChanged(String),
    PasswordChanged(String),
    /// Connect button or Enter in any form field
    Connect,

    // Corpora
    CorporaListed(u64, Result<Vec<String>, CorpusError>),
    CorpusSelected(usize),
    /// Regenerated hierarchy of the named corpus
    HierarchyRefreshed(String, Result<Hierarchy, CorpusError>),
    /// Active configuration changed, `None` when cleared
    ConfigChanged(Option<CorpusConfig>),

    // Local cache
    ResetCache,
    CacheReset(String, Result<Hierarchy, CorpusError>),

    // Audio lookup
    FindAudio,
    AudioDirectoryPicked(Option<PathBuf>),
    AudioScanProgress(AudioScanProgress),
    AudioChecked(Result<bool, CorpusError>),

    // Notifications
    DismissAlert,
    HideToast,

    // Display
    ToggleDarkMode,
    ToggleLanguage,
}
