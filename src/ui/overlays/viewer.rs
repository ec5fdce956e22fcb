// SPDX-License-Identifier: MPL-2.0
//! Fullscreen image viewer overlay.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, center, mouse_area, opaque, Column, Row, Text};
use iced::{alignment, Element, Length};

/// Which image the viewer is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Sketch,
    Face,
}

/// Contextual data needed to render the viewer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub handle: Handle,
    /// Download only makes sense for the generated face.
    pub downloadable: bool,
}

/// Messages emitted by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Download,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Close,
    Download,
}

/// Process a viewer message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Close => Event::Close,
        Message::Download => Event::Download,
    }
}

/// Render the fullscreen viewer. A click on the backdrop closes it.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let image = Image::new(ctx.handle)
        .width(Length::Fill)
        .height(Length::Fill);

    let close_button = button(Text::new(ctx.i18n.tr("viewer-close-button")).size(typography::BODY))
        .padding(spacing::XS)
        .on_press(Message::Close);

    let mut actions = Row::new().spacing(spacing::SM).push(close_button);
    if ctx.downloadable {
        actions = actions.push(
            button(Text::new(ctx.i18n.tr("viewer-download-button")).size(typography::BODY))
                .padding(spacing::XS)
                .on_press(Message::Download),
        );
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(image)
        .push(actions);

    // Clicks on the image itself are swallowed by the inner opaque layer;
    // only the dimmed backdrop closes the viewer.
    opaque(
        mouse_area(center(opaque(content)).style(styles::overlay::backdrop))
            .on_press(Message::Close),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_matching_events() {
        assert!(matches!(update(Message::Close), Event::Close));
        assert!(matches!(update(Message::Download), Event::Download));
    }

    #[test]
    fn viewer_renders_with_and_without_download() {
        let i18n = I18n::default();
        for downloadable in [true, false] {
            let ctx = ViewContext {
                i18n: &i18n,
                handle: Handle::from_bytes(vec![0u8, 1, 2]),
                downloadable,
            };
            let _element = view(ctx);
        }
    }
}
