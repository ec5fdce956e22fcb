// SPDX-License-Identifier: MPL-2.0
//! `sketchface` is a desktop client for a sketch-to-face generation service,
//! built with the Iced GUI framework.
//!
//! The user picks (or drops) a hand-drawn sketch, types a description, picks
//! a gender, and submits everything to a remote generation endpoint. The
//! generated face is shown next to the original sketch and can be saved to
//! disk. All user-visible strings go through Fluent for localization.

pub mod app;
pub mod config;
pub mod error;
pub mod generation;
pub mod i18n;
pub mod media;
pub mod ui;
