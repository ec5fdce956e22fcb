// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The main content (form or result panel) sits at the bottom of a stack;
//! the loading overlay, fullscreen viewer, about dialog, and toasts are
//! layered on top as state demands.

use super::{Message, Overlay};
use crate::generation::{Gender, GenerationResult};
use crate::i18n::fluent::I18n;
use crate::media::SketchImage;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::overlays::{loading, modal, viewer};
use crate::ui::{form, result_panel};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub description: &'a str,
    pub gender: Option<Gender>,
    pub sketch: Option<&'a SketchImage>,
    pub result: Option<&'a GenerationResult>,
    pub overlay: Overlay,
    pub busy: bool,
    pub progress_percent: f32,
    pub phrase_index: usize,
    pub spinner_rotation: f32,
    pub endpoint: &'a str,
    pub notifications: &'a Manager,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = match ctx.result {
        Some(result) => result_panel::view(result_panel::ViewContext {
            i18n: ctx.i18n,
            sketch: ctx.sketch,
            result,
        })
        .map(Message::ResultPanel),
        None => form::view(form::ViewContext {
            i18n: ctx.i18n,
            description: ctx.description,
            gender: ctx.gender,
            sketch: ctx.sketch,
            busy: ctx.busy,
        })
        .map(Message::Form),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.busy {
        layers = layers.push(loading::view(loading::ViewContext {
            i18n: ctx.i18n,
            percent: ctx.progress_percent,
            phrase_index: ctx.phrase_index,
            spinner_rotation: ctx.spinner_rotation,
        }));
    } else {
        match ctx.overlay {
            Overlay::None => {}
            Overlay::Viewer(target) => {
                if let Some(layer) = viewer_layer(&ctx, target) {
                    layers = layers.push(layer);
                }
            }
            Overlay::About => {
                layers = layers.push(
                    modal::view(modal::ViewContext {
                        i18n: ctx.i18n,
                        endpoint: ctx.endpoint,
                    })
                    .map(Message::About),
                );
            }
        }
    }

    layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    layers.into()
}

/// Builds the fullscreen viewer layer if its image still exists.
fn viewer_layer<'a>(
    ctx: &ViewContext<'a>,
    target: viewer::Target,
) -> Option<Element<'a, Message>> {
    let (handle, downloadable) = match target {
        viewer::Target::Sketch => (ctx.sketch?.handle.clone(), false),
        viewer::Target::Face => (ctx.result?.handle.clone(), true),
    };

    Some(
        viewer::view(viewer::ViewContext {
            i18n: ctx.i18n,
            handle,
            downloadable,
        })
        .map(Message::Viewer),
    )
}
