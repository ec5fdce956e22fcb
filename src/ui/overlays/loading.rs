// SPDX-License-Identifier: MPL-2.0
//! Loading overlay with spinner, progress bar, and rotating status phrases.
//!
//! This overlay has no interactions: it blocks the UI for the duration of a
//! generation request and is torn down by the application, never by the user.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::AnimatedSpinner;
use iced::widget::{opaque, progress_bar, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Number of `loading-phrase-*` keys in the translation files.
pub const PHRASE_COUNT: usize = 6;

/// How many ticks a phrase stays on screen before rotating.
pub const TICKS_PER_PHRASE: u64 = 25;

/// Returns the translation key for the phrase at `index`.
#[must_use]
pub fn phrase_key(index: usize) -> String {
    format!("loading-phrase-{}", (index % PHRASE_COUNT) + 1)
}

/// Contextual data needed to render the loading overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Simulated progress in percent, `0.0..=100.0`.
    pub percent: f32,
    /// Index into the rotating phrase list.
    pub phrase_index: usize,
    /// Spinner rotation angle in radians.
    pub spinner_rotation: f32,
}

/// Render the loading overlay.
#[must_use]
pub fn view<'a, Message: 'a + 'static>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("loading-title")).size(typography::TITLE_MD);
    let phrase = Text::new(ctx.i18n.tr(&phrase_key(ctx.phrase_index))).size(typography::BODY);

    let spinner = AnimatedSpinner::new(palette::PRIMARY_400, ctx.spinner_rotation).into_element();

    let bar = Container::new(progress_bar(0.0..=100.0, ctx.percent))
        .width(Length::Fixed(sizing::PROGRESS_BAR_WIDTH));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(title)
        .push(bar)
        .push(phrase);

    // Opaque so clicks cannot reach the form underneath.
    opaque(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::overlay::backdrop),
    )
}
