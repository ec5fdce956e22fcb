// SPDX-License-Identifier: MPL-2.0
//! Result panel showing the sketch next to its generated face.

use crate::generation::GenerationResult;
use crate::i18n::fluent::I18n;
use crate::media::SketchImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Which image a click in the panel refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Sketch,
    Face,
}

/// Contextual data needed to render the result panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub sketch: Option<&'a SketchImage>,
    pub result: &'a GenerationResult,
}

/// Messages emitted by the result panel.
#[derive(Debug, Clone)]
pub enum Message {
    ImageClicked(ImageSlot),
    Download,
    StartOver,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ImageClicked(ImageSlot),
    Download,
    StartOver,
}

/// Process a result panel message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ImageClicked(slot) => Event::ImageClicked(slot),
        Message::Download => Event::Download,
        Message::StartOver => Event::StartOver,
    }
}

/// Render the result panel.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("result-title")).size(typography::TITLE_LG);
    let status = Text::new(ctx.i18n.tr(ctx.result.message_key)).size(typography::BODY);

    let face = captioned_image(
        ctx.result.handle.clone(),
        ctx.i18n.tr("result-face-caption"),
        ImageSlot::Face,
        sizing::RESULT_IMAGE_HEIGHT,
    );

    let mut images = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center);
    if let Some(sketch) = ctx.sketch {
        images = images.push(captioned_image(
            sketch.handle.clone(),
            ctx.i18n.tr("result-sketch-caption"),
            ImageSlot::Sketch,
            sizing::THUMBNAIL_HEIGHT,
        ));
    }
    images = images.push(face);

    let download_button = button(
        Text::new(ctx.i18n.tr("result-download-button")).size(typography::BODY_LG),
    )
    .padding(spacing::SM)
    .on_press(Message::Download);
    let start_over_button = button(
        Text::new(ctx.i18n.tr("result-new-button")).size(typography::BODY_LG),
    )
    .padding(spacing::SM)
    .on_press(Message::StartOver);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(download_button)
        .push(start_over_button);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(status)
        .push(images)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

/// An image with a caption underneath, clickable for the fullscreen viewer.
fn captioned_image<'a>(
    handle: iced::widget::image::Handle,
    caption: String,
    slot: ImageSlot,
    height: f32,
) -> Element<'a, Message> {
    let image = mouse_area(Image::new(handle).height(Length::Fixed(height)))
        .on_press(Message::ImageClicked(slot));

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(image)
        .push(Text::new(caption).size(typography::CAPTION))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_matching_events() {
        assert!(matches!(update(Message::Download), Event::Download));
        assert!(matches!(update(Message::StartOver), Event::StartOver));
        assert!(matches!(
            update(Message::ImageClicked(ImageSlot::Face)),
            Event::ImageClicked(ImageSlot::Face)
        ));
    }

    #[test]
    fn result_panel_renders_without_a_sketch() {
        let i18n = I18n::default();
        let result = GenerationResult::from_bytes(vec![0, 1, 2, 3]);
        let ctx = ViewContext {
            i18n: &i18n,
            sketch: None,
            result: &result,
        };
        let _element = view(ctx);
    }
}
