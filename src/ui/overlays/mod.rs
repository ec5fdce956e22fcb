// SPDX-License-Identifier: MPL-2.0
//! Fullscreen overlays stacked above the main content.
//!
//! Three overlays exist: the loading screen shown while a generation is in
//! flight, the fullscreen image viewer, and the about dialog. At most one is
//! visible at a time; Escape or a backdrop click closes the dismissable ones.

pub mod loading;
pub mod modal;
pub mod viewer;
