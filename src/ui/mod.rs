// SPDX-License-Identifier: MPL-2.0
//! UI components, widgets, and design tokens.

pub mod design_tokens;
pub mod form;
pub mod notifications;
pub mod overlays;
pub mod result_panel;
pub mod styles;
pub mod widgets;
