//! Corpus connection panel logic
//!
//! `ConnectPanel` owns the connection form, the corpora list and the audio
//! lookup status. User actions and worker completions are transition
//! methods that return `Effect`s; the app turns those into tasks and feeds
//! the results back in. Nothing here touches the UI toolkit.

mod corpora_list;

pub use corpora_list::CorporaList;

use std::path::PathBuf;

use thiserror::Error;

use crate::corpus::{CorpusConfig, CorpusError, DEFAULT_HOST, DEFAULT_PORT, Hierarchy};
use crate::i18n::{Key, Locale};

/// Connection form field values as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionForm {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
}

impl Default for ConnectionForm {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            user: String::new(),
            password: String::new(),
        }
    }
}

/// Why the form cannot be used to connect
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("IP address must be specified or named 'localhost'.")]
    MissingHost,
    #[error("Port must be an integer.")]
    InvalidPort,
}

impl ValidationError {
    pub fn message_key(&self) -> Key {
        match self {
            ValidationError::MissingHost => Key::InvalidHost,
            ValidationError::InvalidPort => Key::InvalidPort,
        }
    }
}

impl ConnectionForm {
    pub fn from_config(config: &CorpusConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port.to_string(),
            user: config.user.clone().unwrap_or_default(),
            password: config.password.clone().unwrap_or_default(),
        }
    }

    /// Host and port, checked in that order
    pub fn validate(&self) -> Result<(String, u16), ValidationError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ValidationError::MissingHost);
        }
        let port = self
            .port
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or(ValidationError::InvalidPort)?;
        Ok((host.to_string(), port))
    }

    /// Fresh config for `corpus_name` from the current field values
    pub fn build_config(&self, corpus_name: &str) -> Result<CorpusConfig, ValidationError> {
        let (host, port) = self.validate()?;
        Ok(CorpusConfig::new(corpus_name, host, port)
            .with_credentials(Some(self.user.clone()), Some(self.password.clone())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    ConnectionFailed,
}

impl ConnectionState {
    pub fn label_key(&self) -> Key {
        match self {
            ConnectionState::Disconnected => Key::StatusDisconnected,
            ConnectionState::Connecting => Key::StatusConnecting,
            ConnectionState::Connected => Key::StatusConnected,
            ConnectionState::ConnectionFailed => Key::StatusFailed,
        }
    }
}

/// Status of the "find audio" action, driving its label and enabled flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioLookup {
    /// Ready to search once a corpus is selected
    #[default]
    Idle,
    /// Audio check found no corpus to check
    Unavailable,
    /// A scan is running
    Searching,
    /// Every discourse has audio; the action stays disabled
    Found,
}

impl AudioLookup {
    pub fn label_key(&self) -> Key {
        match self {
            AudioLookup::Idle => Key::FindAudio,
            AudioLookup::Unavailable => Key::SelectCorpus,
            AudioLookup::Searching => Key::Searching,
            AudioLookup::Found => Key::AudioFound,
        }
    }
}

/// Whether a connection attempt may raise dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Dialog,
    Silent,
}

/// Something the user has to acknowledge
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Invalid(ValidationError),
    ConnectFailed(CorpusError),
    Failure(CorpusError),
}

impl Alert {
    pub fn title(&self, locale: &Locale) -> String {
        let key = match self {
            Alert::Invalid(_) => Key::InvalidInformation,
            Alert::ConnectFailed(_) => Key::ConnectFailed,
            Alert::Failure(_) => Key::OperationFailed,
        };
        locale.get(key).to_string()
    }

    pub fn message(&self, locale: &Locale) -> String {
        match self {
            Alert::Invalid(e) => locale.get(e.message_key()).to_string(),
            Alert::ConnectFailed(e) | Alert::Failure(e) => e.to_string(),
        }
    }
}

/// Work requested by a panel transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// List corpora; the result comes back through `corpora_listed`
    ListCorpora { attempt: u64, config: CorpusConfig },
    /// Regenerate and cache the hierarchy; result to `hierarchy_refreshed`
    RefreshHierarchy(CorpusConfig),
    /// Regenerate the hierarchy without syllables; result to `cache_reset`
    ResetCache(CorpusConfig),
    /// Ask for a directory; answer to `audio_directory_chosen`
    PickAudioDirectory,
    /// Launch the audio finder; completion to `audio_search_finished`
    FindAudio {
        config: CorpusConfig,
        directory: PathBuf,
    },
    /// Launch the audio checker; completion to `audio_checked`
    CheckAudio(CorpusConfig),
    /// Active configuration for the rest of the app, `None` when cleared
    ConfigChanged(Option<CorpusConfig>),
    Alert(Alert),
}

/// Connection form, corpora list and audio lookup state
#[derive(Debug, Clone, Default)]
pub struct ConnectPanel {
    form: ConnectionForm,
    corpora: CorporaList,
    state: ConnectionState,
    audio: AudioLookup,
    /// Corpus to reselect when no list entry is selected
    configured_corpus: String,
    /// Config of the attempt currently listing, if any
    pending: Option<CorpusConfig>,
    attempt: u64,
    feedback: Feedback,
    hierarchy: Option<Hierarchy>,
}

impl ConnectPanel {
    pub fn new(config: Option<&CorpusConfig>) -> Self {
        match config {
            Some(config) => Self {
                form: ConnectionForm::from_config(config),
                configured_corpus: config.corpus_name.clone(),
                ..Default::default()
            },
            None => Self::default(),
        }
    }

    /// Reconnect on startup when a corpus was configured before
    pub fn initial_effects(&mut self) -> Vec<Effect> {
        if self.configured_corpus.is_empty() {
            Vec::new()
        } else {
            self.connect(Feedback::Silent)
        }
    }

    pub fn set_host(&mut self, host: String) {
        self.form.host = host;
    }

    pub fn set_port(&mut self, port: String) {
        self.form.port = port;
    }

    pub fn set_user(&mut self, user: String) {
        self.form.user = user;
    }

    pub fn set_password(&mut self, password: String) {
        self.form.password = password;
    }

    /// Validate the form and start listing corpora
    pub fn connect(&mut self, feedback: Feedback) -> Vec<Effect> {
        let corpus_name = self
            .corpora
            .text()
            .map(str::to_string)
            .unwrap_or_else(|| self.configured_corpus.clone());

        let config = match self.form.build_config(&corpus_name) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Connection form rejected: {}", e);
                return match feedback {
                    Feedback::Dialog => vec![Effect::Alert(Alert::Invalid(e))],
                    Feedback::Silent => Vec::new(),
                };
            }
        };

        let mut effects = Vec::new();
        if let Some(name) = self.corpora.clear() {
            effects.extend(self.selection_changed(&name));
        }

        self.attempt += 1;
        self.feedback = feedback;
        self.state = ConnectionState::Connecting;
        self.configured_corpus = corpus_name;
        self.pending = Some(config.clone());
        tracing::info!("Connecting to {}", config.authority());

        effects.push(Effect::ListCorpora {
            attempt: self.attempt,
            config,
        });
        effects
    }

    /// Listing result for connection attempt `attempt`
    pub fn corpora_listed(
        &mut self,
        attempt: u64,
        result: Result<Vec<String>, CorpusError>,
    ) -> Vec<Effect> {
        if attempt != self.attempt {
            tracing::debug!("Ignoring listing from superseded attempt {}", attempt);
            return Vec::new();
        }
        let Some(config) = self.pending.take() else {
            return Vec::new();
        };

        match result {
            Ok(names) => {
                tracing::info!("Listed {} corpora on {}", names.len(), config.authority());
                let known = names.iter().any(|n| *n == config.corpus_name);
                self.corpora.add(names);
                self.state = ConnectionState::Connected;

                let mut effects = Vec::new();
                if config.has_corpus() && known {
                    effects.push(Effect::RefreshHierarchy(config.clone()));
                }
                if let Some(name) = self.corpora.select(&config.corpus_name) {
                    effects.extend(self.selection_changed(&name));
                }
                effects
            }
            Err(e) if e.is_connection_failure() => {
                tracing::warn!("Connection failed: {}", e);
                self.state = ConnectionState::ConnectionFailed;
                let mut effects = vec![Effect::ConfigChanged(None)];
                if self.feedback == Feedback::Dialog {
                    effects.push(Effect::Alert(Alert::ConnectFailed(e)));
                }
                effects
            }
            Err(e) => {
                tracing::error!("Listing corpora failed: {}", e);
                self.state = ConnectionState::ConnectionFailed;
                match self.feedback {
                    Feedback::Dialog => vec![Effect::Alert(Alert::Failure(e))],
                    Feedback::Silent => Vec::new(),
                }
            }
        }
    }

    /// User picked the list entry at `index`
    pub fn corpus_clicked(&mut self, index: usize) -> Vec<Effect> {
        match self.corpora.click(index) {
            Some(name) => self.selection_changed(&name),
            None => Vec::new(),
        }
    }

    /// React to the list's selection-changed notification
    fn selection_changed(&mut self, name: &str) -> Vec<Effect> {
        self.refresh_buttons();
        self.hierarchy = None;

        if name.is_empty() {
            return vec![Effect::ConfigChanged(None)];
        }
        let config = self.form.build_config(name).ok();
        let mut effects = vec![Effect::ConfigChanged(config)];
        effects.extend(self.check_audio());
        effects
    }

    /// Reset the audio action for the current selection
    fn refresh_buttons(&mut self) {
        self.audio = AudioLookup::Idle;
    }

    /// Dispatch an audio availability check for the selected corpus
    pub fn check_audio(&mut self) -> Vec<Effect> {
        match self.selected_config() {
            Some(config) => vec![Effect::CheckAudio(config)],
            None => {
                self.audio = AudioLookup::Unavailable;
                Vec::new()
            }
        }
    }

    /// Audio checker completed
    pub fn audio_checked(&mut self, result: Result<bool, CorpusError>) {
        match result {
            Ok(all_found) => tracing::debug!("Audio check complete, all found: {}", all_found),
            Err(e) => tracing::warn!("Audio check failed: {}", e),
        }
        self.refresh_buttons();
    }

    /// Config for the selected corpus, if any and the form is valid
    pub fn selected_config(&self) -> Option<CorpusConfig> {
        let name = self.corpora.text()?;
        self.form.build_config(name).ok()
    }

    pub fn reset_cache(&self) -> Vec<Effect> {
        match self.selected_config() {
            Some(config) => vec![Effect::ResetCache(config)],
            None => Vec::new(),
        }
    }

    pub fn cache_reset(
        &mut self,
        corpus: &str,
        result: Result<Hierarchy, CorpusError>,
    ) -> Vec<Effect> {
        self.hierarchy_refreshed(corpus, result)
    }

    /// Hierarchy of `corpus` arrived; shown only while it is still selected
    pub fn hierarchy_refreshed(
        &mut self,
        corpus: &str,
        result: Result<Hierarchy, CorpusError>,
    ) -> Vec<Effect> {
        match result {
            Ok(_) if self.corpora.text() != Some(corpus) => {
                tracing::debug!("Dropping hierarchy of '{}', no longer selected", corpus);
                Vec::new()
            }
            Ok(hierarchy) => {
                self.hierarchy = Some(hierarchy);
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Hierarchy update failed: {}", e);
                vec![Effect::Alert(Alert::Failure(e))]
            }
        }
    }

    /// Ask for an audio directory when a corpus is selected
    pub fn find_audio(&self) -> Vec<Effect> {
        if self.corpora.text().is_some() {
            vec![Effect::PickAudioDirectory]
        } else {
            Vec::new()
        }
    }

    /// Directory prompt answered; `None` when cancelled
    ///
    /// Each answer launches a scan, even while another one runs.
    pub fn audio_directory_chosen(&mut self, directory: Option<PathBuf>) -> Vec<Effect> {
        let Some(directory) = directory else {
            return Vec::new();
        };
        let Some(config) = self.selected_config() else {
            return Vec::new();
        };
        self.audio = AudioLookup::Searching;
        vec![Effect::FindAudio { config, directory }]
    }

    /// Audio finder completed
    pub fn audio_search_finished(&mut self, success: bool) {
        self.audio = if success {
            AudioLookup::Found
        } else {
            AudioLookup::Idle
        };
    }

    pub fn form(&self) -> &ConnectionForm {
        &self.form
    }

    pub fn corpora(&self) -> &CorporaList {
        &self.corpora
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn audio(&self) -> AudioLookup {
        self.audio
    }

    /// Annotation types of the selected corpus, top down, once known
    pub fn hierarchy(&self) -> Option<&Hierarchy> {
        self.hierarchy.as_ref()
    }

    /// Whole panel accepts input
    pub fn is_enabled(&self) -> bool {
        self.state != ConnectionState::Connecting && self.audio != AudioLookup::Searching
    }

    pub fn can_find_audio(&self) -> bool {
        self.is_enabled() && self.audio == AudioLookup::Idle && self.corpora.text().is_some()
    }

    pub fn can_reset_cache(&self) -> bool {
        self.is_enabled() && self.corpora.text().is_some()
    }
}
