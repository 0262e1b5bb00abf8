// src/app/state.rs
//! Application state definitions

use std::sync::Arc;

use crate::corpus::{CorpusConfig, CorpusService, GraphClient, VariableStore};
use crate::features::ConnectPanel;
use crate::features::audio::{AudioChecker, AudioFinder};
use crate::features::connection::Alert;
use crate::features::Settings;
use crate::i18n::Locale;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, corpus service, workers)
    pub core: CoreState,
    /// UI state (connection panel, dialogs, toasts)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    pub service: Arc<dyn CorpusService>,
    pub store: VariableStore,
    pub finder: AudioFinder,
    pub checker: AudioChecker,
    /// Configuration most recently announced by the connection panel
    pub active_config: Option<CorpusConfig>,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings, locale: Locale) -> Self {
        Self::with_service(
            settings,
            locale,
            Arc::new(GraphClient::new()),
            VariableStore::default_location(),
        )
    }

    pub fn with_service(
        settings: Settings,
        locale: Locale,
        service: Arc<dyn CorpusService>,
        store: VariableStore,
    ) -> Self {
        Self {
            finder: AudioFinder::new(service.clone(), store.clone()),
            checker: AudioChecker::new(service.clone(), store.clone()),
            settings,
            locale,
            service,
            store,
            active_config: None,
        }
    }
}

/// UI State
pub struct UiState {
    pub panel: ConnectPanel,
    /// Dialog waiting to be dismissed
    pub alert: Option<Alert>,
    pub toast: Option<Toast>,
    pub toast_visible: bool,
    /// Discourses matched so far by the running audio scan
    pub matched_discourses: usize,
}

impl UiState {
    pub fn new(panel: ConnectPanel) -> Self {
        Self {
            panel,
            alert: None,
            toast: None,
            toast_visible: false,
            matched_discourses: 0,
        }
    }
}
