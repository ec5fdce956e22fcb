// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and launch flags.

use crate::error::Error;
use crate::generation::GenerationError;
use crate::media::SketchImage;
use crate::ui::notifications::NotificationMessage;
use crate::ui::overlays::{modal, viewer};
use crate::ui::{form, result_panel};
use std::path::PathBuf;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional sketch to preload, as a trailing argument.
    pub sketch_path: Option<String>,
}

/// Top-level messages routed through `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Form component messages.
    Form(form::Message),
    /// Result panel component messages.
    ResultPanel(result_panel::Message),
    /// Fullscreen viewer messages.
    Viewer(viewer::Message),
    /// About dialog messages.
    About(modal::Message),
    /// Toast notification messages.
    Notification(NotificationMessage),
    /// The sketch file picker closed.
    SketchDialogResult(Option<PathBuf>),
    /// A file was dropped onto the window.
    FileDropped(PathBuf),
    /// Sketch preprocessing finished.
    SketchPrepared(Result<SketchImage, Error>),
    /// The generation request finished.
    GenerationCompleted(Result<Vec<u8>, GenerationError>),
    /// The post-completion settle delay elapsed.
    SubmissionSettled,
    /// The save dialog for a download closed.
    DownloadDialogResult(Option<PathBuf>),
    /// Escape was pressed while no widget captured it.
    EscapePressed,
    /// Periodic timer for progress, spinner, and notification expiry.
    Tick(std::time::Instant),
}
