// SPDX-License-Identifier: MPL-2.0
//! About dialog shown above the main content.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub endpoint: &'a str,
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Close,
}

/// Process a dialog message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Close => Event::Close,
    }
}

/// Render the about dialog. A click on the backdrop closes it.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_MD))
        .push(Text::new(format!("v{APP_VERSION}")).size(typography::CAPTION));

    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);

    let endpoint = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("about-endpoint-label")).size(typography::CAPTION))
        .push(Text::new(ctx.endpoint.to_string()).size(typography::BODY));

    let close_button = button(Text::new(ctx.i18n.tr("about-close-button")).size(typography::BODY))
        .padding(spacing::XS)
        .on_press(Message::Close);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(description)
            .push(endpoint)
            .push(close_button),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::LG)
    .style(styles::overlay::panel);

    // The inner opaque layer swallows clicks on the panel; only the dimmed
    // backdrop closes the dialog.
    opaque(
        mouse_area(center(opaque(panel)).style(styles::overlay::backdrop))
            .on_press(Message::Close),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_maps_to_close_event() {
        assert!(matches!(update(Message::Close), Event::Close));
    }

    #[test]
    fn dialog_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            endpoint: "http://127.0.0.1:8000/generate",
        };
        let _element = view(ctx);
    }

    #[test]
    fn app_version_is_valid() {
        assert!(!APP_VERSION.is_empty());
    }
}
