//! Audio lookup handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::audio::AudioScanProgress;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Handle audio lookup messages
    pub fn handle_audio(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FindAudio => {
                let effects = self.ui.panel.find_audio();
                Some(self.run_effects(effects))
            }

            Message::AudioDirectoryPicked(directory) => {
                let effects = self.ui.panel.audio_directory_chosen(directory.clone());
                Some(self.run_effects(effects))
            }

            Message::AudioScanProgress(progress) => Some(self.process_scan_progress(progress)),

            Message::AudioChecked(result) => {
                self.ui.panel.audio_checked(result.clone());
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Process audio scan progress updates
    fn process_scan_progress(&mut self, progress: &AudioScanProgress) -> Task<Message> {
        match progress {
            AudioScanProgress::Started { discourses, files } => {
                tracing::info!(
                    "Audio scan started: {} discourses, {} audio files",
                    discourses,
                    files
                );
                Task::none()
            }
            AudioScanProgress::Matched { discourse, path } => {
                tracing::debug!("Matched {} -> {}", discourse, path.display());
                self.ui.matched_discourses += 1;
                Task::none()
            }
            AudioScanProgress::Completed { found, missing } => {
                let success = progress.outcome().unwrap_or(false);
                self.ui.panel.audio_search_finished(success);

                let locale = self.core.locale;
                let toast = if success {
                    Toast::success(locale.get(Key::AudioFound))
                } else {
                    Toast::warning(format!(
                        "{} ({}/{})",
                        locale.get(Key::AudioScanIncomplete),
                        found,
                        found + missing
                    ))
                };
                self.show_toast(toast)
            }
            AudioScanProgress::Failed(reason) => {
                tracing::error!("Audio scan failed: {}", reason);
                self.ui.panel.audio_search_finished(false);
                let toast = Toast::error(format!(
                    "{}: {}",
                    self.core.locale.get(Key::AudioScanFailed),
                    reason
                ));
                self.show_toast(toast)
            }
        }
    }
}
