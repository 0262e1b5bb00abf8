// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, button, column, container, row, stack, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::i18n::Language;
use crate::ui::{components, theme, widgets};

impl App {
    /// Build the main window
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let panel = &self.ui.panel;

        let display_toggles = row![
            button(text(if self.core.settings.display.dark_mode { "☀" } else { "☾" }).size(14))
                .padding([6, 10])
                .style(theme::secondary_button)
                .on_press(Message::ToggleDarkMode),
            button(
                text(match locale.language {
                    Language::English => "中文",
                    Language::Chinese => "EN",
                })
                .size(13)
            )
            .padding([6, 10])
            .style(theme::secondary_button)
            .on_press(Message::ToggleLanguage),
        ]
        .spacing(8);

        let left = column![
            components::connect_form::view(panel, locale),
            Space::new().height(Fill),
            display_toggles,
        ]
        .width(460)
        .height(Fill);

        let main_layout = container(
            row![left, components::corpora_list::view(panel, locale)]
                .spacing(16)
                .height(Fill),
        )
        .width(Fill)
        .height(Fill)
        .padding(16)
        .style(theme::main_content);

        let toast_overlay: Element<'_, Message> = match (&self.ui.toast, self.ui.toast_visible) {
            (Some(toast), true) => container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .into(),
            _ => Space::new().width(0).height(0).into(),
        };

        let alert_overlay: Element<'_, Message> = match &self.ui.alert {
            Some(alert) => components::alert_dialog::view(alert, locale),
            None => Space::new().width(0).height(0).into(),
        };

        stack![main_layout, toast_overlay, alert_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
