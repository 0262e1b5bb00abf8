//! Available corpora list component

use iced::widget::{Column, Space, button, column, container, scrollable, text};
use iced::{Element, Fill};

use crate::app::Message;
use crate::features::ConnectPanel;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the corpora list with the selected corpus' annotation types
pub fn view(panel: &ConnectPanel, locale: Locale) -> Element<'_, Message> {
    let corpora = panel.corpora();
    let enabled = panel.is_enabled();

    let title = text(locale.get(Key::AvailableCorpora))
        .size(16)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let list: Element<'_, Message> = if corpora.is_empty() {
        text(locale.get(Key::NoCorpora))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into()
    } else {
        let rows = corpora.names().iter().enumerate().map(|(index, name)| -> Element<'_, Message> {
            let selected = corpora.selected_index() == Some(index);
            button(text(name.as_str()).size(14))
                .width(Fill)
                .padding([8, 12])
                .style(theme::list_item(selected))
                .on_press_maybe(enabled.then_some(Message::CorpusSelected(index)))
                .into()
        });
        scrollable(Column::with_children(rows).spacing(2))
            .height(Fill)
            .style(theme::dark_scrollable)
            .into()
    };

    let hierarchy: Element<'_, Message> = match panel.hierarchy() {
        Some(hierarchy) if !hierarchy.is_empty() => text(format!(
            "{}: {}",
            locale.get(Key::AnnotationTypes),
            hierarchy.highest_to_lowest().join(" > ")
        ))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into(),
        _ => Space::new().height(0).into(),
    };

    container(column![title, Space::new().height(12), list, hierarchy].spacing(6))
        .width(Fill)
        .height(Fill)
        .padding(20)
        .style(theme::panel)
        .into()
}
