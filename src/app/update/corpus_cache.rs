//! Local cache reset handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Handle local cache messages
    pub fn handle_corpus_cache(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ResetCache => {
                let effects = self.ui.panel.reset_cache();
                Some(self.run_effects(effects))
            }

            Message::CacheReset(corpus, result) => {
                let succeeded = result.is_ok();
                let effects = self.ui.panel.cache_reset(corpus, result.clone());
                let task = self.run_effects(effects);
                if succeeded {
                    let toast = Toast::success(self.core.locale.get(Key::CacheResetDone));
                    Some(Task::batch([task, self.show_toast(toast)]))
                } else {
                    Some(task)
                }
            }

            _ => None,
        }
    }
}
