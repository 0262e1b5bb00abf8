//! Connection form component: credentials, connect and corpus actions

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::ConnectPanel;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

const LABEL_WIDTH: f32 = 190.0;

/// One labelled form row; read-only while the panel is busy
fn field<'a>(
    label: &'static str,
    value: &'a str,
    enabled: bool,
    secure: bool,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let input = text_input("", value)
        .secure(secure)
        .size(14)
        .padding([8, 10])
        .style(theme::form_input)
        .on_input_maybe(enabled.then_some(on_input))
        .on_submit_maybe(enabled.then_some(Message::Connect));

    row![
        text(label)
            .size(13)
            .width(LABEL_WIDTH)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        input,
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

/// Build the connection form
pub fn view(panel: &ConnectPanel, locale: Locale) -> Element<'_, Message> {
    let form = panel.form();
    let enabled = panel.is_enabled();

    let fields = column![
        field(
            locale.get(Key::HostLabel),
            &form.host,
            enabled,
            false,
            Message::HostChanged
        ),
        field(
            locale.get(Key::PortLabel),
            &form.port,
            enabled,
            false,
            Message::PortChanged
        ),
        field(
            locale.get(Key::UserLabel),
            &form.user,
            enabled,
            false,
            Message::UserChanged
        ),
        field(
            locale.get(Key::PasswordLabel),
            &form.password,
            enabled,
            true,
            Message::PasswordChanged
        ),
    ]
    .spacing(10);

    let state = panel.state();
    let status = text(locale.get(state.label_key()))
        .size(12)
        .style(move |theme| text::Style {
            color: Some(theme::status_color(theme, state)),
        });

    let connect_btn = button(text(locale.get(Key::Connect)).size(14).center())
        .width(Fill)
        .padding([10, 16])
        .style(theme::primary_button)
        .on_press_maybe(enabled.then_some(Message::Connect));

    let find_audio_btn = button(text(locale.get(panel.audio().label_key())).size(14).center())
        .width(Fill)
        .padding([10, 16])
        .style(theme::secondary_button)
        .on_press_maybe(panel.can_find_audio().then_some(Message::FindAudio));

    let reset_cache_btn = button(text(locale.get(Key::ResetCache)).size(14).center())
        .width(Fill)
        .padding([10, 16])
        .style(theme::secondary_button)
        .on_press_maybe(panel.can_reset_cache().then_some(Message::ResetCache));

    let content = column![
        fields,
        Space::new().height(16),
        connect_btn,
        Space::new().height(6),
        status,
        Space::new().height(16),
        find_audio_btn,
        Space::new().height(10),
        reset_cache_btn,
    ]
    .padding(20);

    container(content)
        .width(Fill)
        .style(theme::panel)
        .into()
}
