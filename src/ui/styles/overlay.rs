// SPDX-License-Identifier: MPL-2.0
//! Overlay styles shared by the loading screen, viewer, and dialog.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn backdrop_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn panel_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Style for the dimmed fullscreen backdrop behind every overlay.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(backdrop_color())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Style for a floating panel sitting on top of the backdrop.
#[must_use]
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        text_color: Some(theme.palette().text),
        border: Border {
            color: panel_border(),
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_dims_but_stays_translucent() {
        let style = backdrop(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => {
                assert!(color.a > 0.0 && color.a < 1.0);
            }
            _ => panic!("backdrop should have a color background"),
        }
    }

    #[test]
    fn panel_has_rounded_corners() {
        let style = panel(&Theme::Dark);
        assert!(style.background.is_some());
    }
}
