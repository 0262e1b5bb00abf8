//! Settings message handlers

use iced::Task;

use crate::app::helpers::save_settings;
use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::{Language, Locale};

impl App {
    /// Handle display settings messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                self.core.settings.display.dark_mode = !self.core.settings.display.dark_mode;
                Some(self.persist_settings())
            }

            Message::ToggleLanguage => {
                let next = match self.core.locale.language {
                    Language::English => Language::Chinese,
                    Language::Chinese => Language::English,
                };
                self.core.locale = Locale::new(next);
                self.core.settings.display.language = next.code().to_string();
                Some(self.persist_settings())
            }

            _ => None,
        }
    }

    /// Write the current settings in the background
    pub(super) fn persist_settings(&self) -> Task<Message> {
        let settings = self.core.settings.clone();
        Task::future(async move {
            if let Err(e) = save_settings(settings).await {
                tracing::warn!("Failed to save settings: {}", e);
            }
        })
        .discard()
    }
}
