//! Modal alert dialog component

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::connection::Alert;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the alert dialog over a dimmed backdrop
pub fn view(alert: &Alert, locale: Locale) -> Element<'static, Message> {
    let title = text(alert.title(&locale))
        .size(18)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::danger(theme)),
        });

    let message = text(alert.message(&locale))
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let ok_btn = button(text(locale.get(Key::Ok)).size(14))
        .padding([10, 28])
        .style(theme::primary_button)
        .on_press(Message::DismissAlert);

    let buttons = row![Space::new().width(Fill), ok_btn].align_y(Alignment::Center);

    let dialog_content = column![
        title,
        Space::new().height(10),
        message,
        Space::new().height(20),
        buttons,
    ]
    .width(420)
    .padding(24);

    let dialog_box = container(dialog_content).style(|theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(theme::surface_elevated(theme))),
        border: iced::Border {
            radius: 12.0.into(),
            width: 1.0,
            color: theme::divider(theme),
        },
        shadow: iced::Shadow {
            color: theme::shadow_color(theme),
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    let backdrop_content = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(theme, 0.5))),
            ..Default::default()
        });

    // Swallow clicks so the panel underneath stays untouched until dismissed
    let event_blocker = mouse_area(backdrop_content).interaction(Interaction::Idle);

    opaque(event_blocker).into()
}
