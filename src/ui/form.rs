// SPDX-License-Identifier: MPL-2.0
//! Sketch submission form: drop zone, description input, gender choice.
//!
//! The form is purely presentational; validation and submission live in the
//! application update loop. It emits events that the parent translates into
//! state changes and tasks.

use crate::generation::Gender;
use crate::i18n::fluent::I18n;
use crate::media::SketchImage;
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::widget::image::Image;
use iced::widget::{
    button, container, mouse_area, radio, text_input, Column, Container, Row, Text,
};
use iced::{alignment, Border, Element, Length, Theme};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub description: &'a str,
    pub gender: Option<Gender>,
    pub sketch: Option<&'a SketchImage>,
    /// A submission is in flight; inputs stay visible but the button locks.
    pub busy: bool,
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    DescriptionChanged(String),
    GenderSelected(Gender),
    BrowseRequested,
    RemoveSketch,
    SketchClicked,
    Submit,
    AboutRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    DescriptionChanged(String),
    GenderSelected(Gender),
    BrowseRequested,
    RemoveSketch,
    SketchClicked,
    Submit,
    AboutRequested,
}

/// Process a form message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::DescriptionChanged(value) => Event::DescriptionChanged(value),
        Message::GenderSelected(gender) => Event::GenderSelected(gender),
        Message::BrowseRequested => Event::BrowseRequested,
        Message::RemoveSketch => Event::RemoveSketch,
        Message::SketchClicked => Event::SketchClicked,
        Message::Submit => Event::Submit,
        Message::AboutRequested => Event::AboutRequested,
    }
}

/// Render the submission form.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("form-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("form-subtitle")).size(typography::BODY);

    let sketch_area = match ctx.sketch {
        Some(sketch) => sketch_preview(&ctx, sketch),
        None => drop_zone(&ctx),
    };

    let description_label = Text::new(ctx.i18n.tr("form-description-label")).size(typography::BODY);
    let description_input = text_input(
        &ctx.i18n.tr("form-description-placeholder"),
        ctx.description,
    )
    .on_input(Message::DescriptionChanged)
    .on_submit(Message::Submit)
    .padding(spacing::SM)
    .size(typography::BODY_LG);

    let gender_label = Text::new(ctx.i18n.tr("form-gender-label")).size(typography::BODY);
    let mut gender_row = Row::new().spacing(spacing::LG);
    for gender in Gender::ALL {
        gender_row = gender_row.push(radio(
            ctx.i18n.tr(gender.label_key()),
            gender,
            ctx.gender,
            Message::GenderSelected,
        ));
    }

    let submit_key = if ctx.busy {
        "form-submit-busy"
    } else {
        "form-submit-button"
    };
    let mut submit_button = button(
        Text::new(ctx.i18n.tr(submit_key))
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM);
    if !ctx.busy {
        submit_button = submit_button.on_press(Message::Submit);
    }

    let about_button = button(Text::new(ctx.i18n.tr("about-open-button")).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(button::text)
        .on_press(Message::AboutRequested);

    let content = Column::new()
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .spacing(spacing::MD)
        .push(title)
        .push(subtitle)
        .push(sketch_area)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(description_label)
                .push(description_input),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(gender_label)
                .push(gender_row),
        )
        .push(submit_button)
        .push(about_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

/// The empty drop zone with a browse button.
fn drop_zone<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hint = Text::new(ctx.i18n.tr("dropzone-hint")).size(typography::BODY);
    let browse_button = button(Text::new(ctx.i18n.tr("dropzone-browse-button")).size(typography::BODY));
    let browse_button = if ctx.busy {
        browse_button
    } else {
        browse_button.on_press(Message::BrowseRequested)
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(hint)
        .push(browse_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(drop_zone_style)
        .into()
}

/// Preview of the selected sketch with a remove button.
fn sketch_preview<'a>(ctx: &ViewContext<'a>, sketch: &'a SketchImage) -> Element<'a, Message> {
    let preview = mouse_area(
        Image::new(sketch.handle.clone()).height(Length::Fixed(sizing::THUMBNAIL_HEIGHT)),
    )
    .on_press(Message::SketchClicked);

    let caption = Text::new(format!(
        "{} ({}×{})",
        sketch.file_name, sketch.width, sketch.height
    ))
    .size(typography::CAPTION);

    let remove_button = button(Text::new(ctx.i18n.tr("sketch-remove-button")).size(typography::CAPTION));
    let remove_button = if ctx.busy {
        remove_button
    } else {
        remove_button.on_press(Message::RemoveSketch)
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(preview)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(caption)
                .push(remove_button),
        );

    Container::new(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::SM)
        .style(drop_zone_style)
        .into()
}

/// Dashed-look bordered container for the sketch area.
fn drop_zone_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(iced::Color {
            a: opacity::OVERLAY_SUBTLE,
            ..theme.extended_palette().background.weak.color
        })),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_view_renders_without_sketch() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            description: "",
            gender: None,
            sketch: None,
            busy: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn messages_map_to_matching_events() {
        assert!(matches!(update(Message::Submit), Event::Submit));
        assert!(matches!(
            update(Message::BrowseRequested),
            Event::BrowseRequested
        ));
        assert!(matches!(update(Message::RemoveSketch), Event::RemoveSketch));
        assert!(matches!(
            update(Message::GenderSelected(Gender::Female)),
            Event::GenderSelected(Gender::Female)
        ));
        assert!(matches!(
            update(Message::SketchClicked),
            Event::SketchClicked
        ));
        assert!(matches!(
            update(Message::AboutRequested),
            Event::AboutRequested
        ));
        match update(Message::DescriptionChanged("a face".into())) {
            Event::DescriptionChanged(value) => assert_eq!(value, "a face"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
