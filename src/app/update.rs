//! Message update handlers - thin dispatcher delegating to submodules

mod audio;
mod connection;
mod corpus_cache;
mod notifications;
mod settings;

use iced::Task;

use super::{App, Message, helpers};
use crate::corpus::{refresh_hierarchy, reset_hierarchy};
use crate::features::Effect;
use crate::i18n::Key;

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_connection(&message) {
            return task;
        }
        if let Some(task) = self.handle_corpus_cache(&message) {
            return task;
        }
        if let Some(task) = self.handle_audio(&message) {
            return task;
        }
        if let Some(task) = self.handle_notifications(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }

    /// Turn connection panel effects into tasks
    pub(super) fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = effects.into_iter().map(|e| self.run_effect(e)).collect();
        Task::batch(tasks)
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        let service = self.core.service.clone();
        let store = self.core.store.clone();

        match effect {
            Effect::ListCorpora { attempt, config } => Task::perform(
                async move { service.list_corpora(&config).await },
                move |result| Message::CorporaListed(attempt, result),
            ),
            Effect::RefreshHierarchy(config) => {
                let corpus = config.corpus_name.clone();
                Task::perform(refresh_hierarchy(service, store, config), move |result| {
                    Message::HierarchyRefreshed(corpus, result)
                })
            }
            Effect::ResetCache(config) => {
                let corpus = config.corpus_name.clone();
                Task::perform(reset_hierarchy(service, store, config), move |result| {
                    Message::CacheReset(corpus, result)
                })
            }
            Effect::PickAudioDirectory => {
                let title = self.core.locale.get(Key::SelectAudioDirectory).to_string();
                Task::perform(
                    helpers::open_folder_dialog(title),
                    Message::AudioDirectoryPicked,
                )
            }
            Effect::FindAudio { config, directory } => {
                tracing::info!(
                    "Searching {} for audio of '{}'",
                    directory.display(),
                    config.corpus_name
                );
                self.ui.matched_discourses = 0;
                let handle = self.core.finder.start(config, directory);
                Task::run(handle.into_stream(), Message::AudioScanProgress)
            }
            Effect::CheckAudio(config) => {
                let handle = self.core.checker.start(config);
                Task::perform(handle.finished(), Message::AudioChecked)
            }
            Effect::ConfigChanged(config) => Task::done(Message::ConfigChanged(config)),
            Effect::Alert(alert) => {
                self.ui.alert = Some(alert);
                Task::none()
            }
        }
    }
}
