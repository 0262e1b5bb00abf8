//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{ConnectPanel, Settings};
use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));
        Self::with_core(CoreState::new(settings, locale))
    }

    /// Build the app around prepared core services
    ///
    /// A remembered corpus triggers a silent reconnect.
    pub fn with_core(core: CoreState) -> (Self, Task<Message>) {
        let remembered = core.settings.connection.to_config();
        let mut panel = ConnectPanel::new(Some(&remembered));
        let effects = panel.initial_effects();

        let mut app = Self {
            core,
            ui: UiState::new(panel),
        };
        let init_task = app.run_effects(effects);
        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title naming the active corpus
    pub fn title(&self) -> String {
        let app_name = self.core.locale.get(Key::AppName);
        match &self.core.active_config {
            Some(config) if config.has_corpus() => {
                format!("{} - {}", app_name, config.corpus_name)
            }
            _ => app_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::corpus::testing::FakeService;
    use crate::corpus::{CorpusConfig, VariableStore};

    fn app_with(settings: Settings, service: Arc<FakeService>) -> (App, tempfile::TempDir) {
        let cache = tempfile::tempdir().unwrap();
        let core = CoreState::with_service(
            settings,
            Locale::default(),
            service,
            VariableStore::new(cache.path()),
        );
        (App::with_core(core).0, cache)
    }

    #[test]
    fn fresh_start_stays_disconnected() {
        let service = Arc::new(FakeService::default());
        let (app, _cache) = app_with(Settings::default(), service.clone());

        assert_eq!(
            app.ui.panel.state(),
            crate::features::ConnectionState::Disconnected
        );
        assert_eq!(app.title(), "Speech Corpus Tools");
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn remembered_corpus_starts_connecting() {
        let mut settings = Settings::default();
        settings
            .connection
            .remember(&CorpusConfig::new("buckeye", "localhost", 7474));
        let (app, _cache) = app_with(settings, Arc::new(FakeService::default()));

        assert_eq!(
            app.ui.panel.state(),
            crate::features::ConnectionState::Connecting
        );
    }

    #[test]
    fn title_names_active_corpus() {
        let (mut app, _cache) = app_with(Settings::default(), Arc::new(FakeService::default()));
        app.core.active_config = Some(CorpusConfig::new("timit", "localhost", 7474));
        assert_eq!(app.title(), "Speech Corpus Tools - timit");
    }
}
