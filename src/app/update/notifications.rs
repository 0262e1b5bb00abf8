//! Alert dialog and toast handlers

use iced::Task;

use crate::app::helpers::sleep_secs;
use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

/// How long a toast stays on screen
const TOAST_SECS: u64 = 4;

impl App {
    /// Handle notification messages
    pub fn handle_notifications(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DismissAlert => {
                self.ui.alert = None;
                Some(Task::none())
            }

            Message::HideToast => {
                self.ui.toast_visible = false;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Show `toast` and schedule hiding it
    pub(super) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.ui.toast = Some(toast);
        self.ui.toast_visible = true;
        Task::perform(sleep_secs(TOAST_SECS), |_| Message::HideToast)
    }
}
