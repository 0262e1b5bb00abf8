//! Connection form and corpus selection handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Feedback;

impl App {
    /// Handle connection-related messages
    pub fn handle_connection(&mut self, message: &Message) -> Option<Task<Message>> {
        let panel = &mut self.ui.panel;
        let effects = match message {
            Message::HostChanged(host) => {
                panel.set_host(host.clone());
                return Some(Task::none());
            }
            Message::PortChanged(port) => {
                panel.set_port(port.clone());
                return Some(Task::none());
            }
            Message::UserChanged(user) => {
                panel.set_user(user.clone());
                return Some(Task::none());
            }
            Message::PasswordChanged(password) => {
                panel.set_password(password.clone());
                return Some(Task::none());
            }

            Message::Connect => panel.connect(Feedback::Dialog),

            Message::CorporaListed(attempt, result) => {
                panel.corpora_listed(*attempt, result.clone())
            }

            Message::CorpusSelected(index) => panel.corpus_clicked(*index),

            Message::HierarchyRefreshed(corpus, result) => {
                panel.hierarchy_refreshed(corpus, result.clone())
            }

            Message::ConfigChanged(config) => {
                self.core.active_config = config.clone();
                let Some(config) = config else {
                    tracing::info!("Active corpus configuration cleared");
                    return Some(Task::none());
                };
                tracing::info!(
                    "Active corpus '{}' on {}",
                    config.corpus_name,
                    config.authority()
                );
                self.core.settings.connection.remember(config);
                return Some(self.persist_settings());
            }

            _ => return None,
        };

        Some(self.run_effects(effects))
    }
}
