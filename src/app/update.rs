// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Submission is a strict sequence: validate synchronously, flip to the
//! submitting phase, fire the request task, then settle on the response.
//! Validation failures never reach the network, and stale responses arriving
//! after a reset are dropped.

use super::{App, Message, Overlay, Phase};
use crate::generation::progress::SimulatedProgress;
use crate::generation::{self, client, GenerationError, GenerationRequest, GenerationResult};
use crate::media::{self, export, preprocess, SketchImage};
use crate::ui::notifications::Notification;
use crate::ui::overlays::{modal, viewer};
use crate::ui::{form, result_panel};
use chrono::Local;
use iced::Task;
use std::path::PathBuf;
use std::time::Duration;

/// Pause between the bar reaching 100% and the overlay coming down, so the
/// completed bar is actually visible.
pub const SETTLE_DELAY: Duration = Duration::from_millis(600);

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Routes a message to its handler.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Form(message) => handle_form_event(app, form::update(message)),
        Message::ResultPanel(message) => {
            handle_result_panel_event(app, result_panel::update(message))
        }
        Message::Viewer(message) => match viewer::update(message) {
            viewer::Event::Close => {
                app.overlay = Overlay::None;
                Task::none()
            }
            viewer::Event::Download => download_task(app),
        },
        Message::About(message) => match modal::update(message) {
            modal::Event::Close => {
                app.overlay = Overlay::None;
                Task::none()
            }
        },
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::SketchDialogResult(result) => match result {
            Some(path) => prepare_sketch_task(app, path),
            None => Task::none(),
        },
        Message::FileDropped(path) => prepare_sketch_task(app, path),
        Message::SketchPrepared(result) => handle_sketch_prepared(app, result),
        Message::GenerationCompleted(result) => handle_generation_completed(app, result),
        Message::SubmissionSettled => {
            if matches!(app.phase, Phase::Succeeded | Phase::Failed) {
                app.busy = false;
            }
            Task::none()
        }
        Message::DownloadDialogResult(result) => handle_download_dialog_result(app, result),
        Message::EscapePressed => {
            // The loading overlay is not user-dismissable.
            if !app.busy {
                app.overlay = Overlay::None;
            }
            Task::none()
        }
        Message::Tick(_) => handle_tick(app),
    }
}

fn handle_form_event(app: &mut App, event: form::Event) -> Task<Message> {
    match event {
        form::Event::DescriptionChanged(value) => {
            app.description = value;
            Task::none()
        }
        form::Event::GenderSelected(gender) => {
            app.gender = Some(gender);
            Task::none()
        }
        form::Event::BrowseRequested => {
            if app.busy || app.preparing_sketch {
                return Task::none();
            }
            pick_sketch_task()
        }
        form::Event::RemoveSketch => {
            if !app.busy {
                app.sketch = None;
            }
            Task::none()
        }
        form::Event::SketchClicked => {
            if !app.busy && app.sketch.is_some() {
                app.overlay = Overlay::Viewer(viewer::Target::Sketch);
            }
            Task::none()
        }
        form::Event::Submit => handle_submit(app),
        form::Event::AboutRequested => {
            app.overlay = Overlay::About;
            Task::none()
        }
    }
}

fn handle_result_panel_event(app: &mut App, event: result_panel::Event) -> Task<Message> {
    match event {
        result_panel::Event::ImageClicked(slot) => {
            let target = match slot {
                result_panel::ImageSlot::Sketch => viewer::Target::Sketch,
                result_panel::ImageSlot::Face => viewer::Target::Face,
            };
            app.overlay = Overlay::Viewer(target);
            Task::none()
        }
        result_panel::Event::Download => download_task(app),
        result_panel::Event::StartOver => {
            app.reset();
            Task::none()
        }
    }
}

/// Opens the sketch file picker.
fn pick_sketch_task() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", media::SUPPORTED_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::SketchDialogResult,
    )
}

/// Kicks off sketch preprocessing for a picked or dropped file.
pub(super) fn prepare_sketch_task(app: &mut App, path: PathBuf) -> Task<Message> {
    if app.busy || app.preparing_sketch {
        return Task::none();
    }
    app.preparing_sketch = true;
    Task::perform(
        async move { preprocess::prepare_sketch(&path) },
        Message::SketchPrepared,
    )
}

fn handle_sketch_prepared(
    app: &mut App,
    result: Result<SketchImage, crate::error::Error>,
) -> Task<Message> {
    app.preparing_sketch = false;
    match result {
        Ok(sketch) => {
            app.notifications.push(
                Notification::info("notification-sketch-selected")
                    .with_arg("name", sketch.file_name.clone()),
            );
            app.sketch = Some(sketch);
        }
        Err(err) => {
            log::warn!("sketch preprocessing failed: {err}");
            app.notifications
                .push(Notification::error(err.notification_key()));
        }
    }
    Task::none()
}

/// Validates the form and, if complete, fires the generation request.
///
/// Validation reports the first missing field only and never touches the
/// network. Double submissions while a request is in flight are ignored.
fn handle_submit(app: &mut App) -> Task<Message> {
    if app.busy || app.preparing_sketch {
        return Task::none();
    }

    let Some(sketch) = &app.sketch else {
        app.notifications
            .push(Notification::warning("notification-missing-sketch"));
        return Task::none();
    };
    if app.description.trim().is_empty() {
        app.notifications
            .push(Notification::warning("notification-missing-description"));
        return Task::none();
    }
    let Some(gender) = app.gender else {
        app.notifications
            .push(Notification::warning("notification-missing-gender"));
        return Task::none();
    };

    let request = GenerationRequest {
        file_name: sketch.file_name.clone(),
        mime: sketch.mime,
        bytes: sketch.bytes.clone(),
        prompt: generation::build_prompt(&app.description, gender),
    };

    app.phase = Phase::Submitting;
    app.busy = true;
    app.progress = SimulatedProgress::new();
    app.loading_ticks = 0;
    app.overlay = Overlay::None;

    log::info!(
        "submitting sketch {} ({} bytes)",
        request.file_name,
        request.bytes.len()
    );

    Task::perform(
        client::generate(
            app.config.endpoint().to_string(),
            app.config.request_timeout(),
            request,
        ),
        Message::GenerationCompleted,
    )
}

fn handle_generation_completed(
    app: &mut App,
    result: Result<Vec<u8>, GenerationError>,
) -> Task<Message> {
    // A response arriving after a reset has nothing to update.
    if app.phase != Phase::Submitting {
        return Task::none();
    }

    match result {
        Ok(bytes) => {
            app.phase = Phase::Succeeded;
            app.progress.complete();
            app.result = Some(GenerationResult::from_bytes(bytes));
            app.notifications
                .push(Notification::success("notification-generation-success"));

            // Keep the full bar on screen briefly before lowering the overlay.
            settle_task()
        }
        Err(err) => {
            log::warn!("generation failed: {err}");
            app.phase = Phase::Failed;
            app.notifications
                .push(Notification::error("notification-generation-failed"));
            settle_task()
        }
    }
}

/// Delays lowering the busy flag so the final bar state stays visible.
///
/// The sleep is built inside the future: a `Sleep` registers with the timer
/// driver on construction and must only be created on the runtime.
fn settle_task() -> Task<Message> {
    Task::perform(async { tokio::time::sleep(SETTLE_DELAY).await }, |_| {
        Message::SubmissionSettled
    })
}

/// Opens the save dialog for the generated face.
fn download_task(app: &App) -> Task<Message> {
    let Some(result) = &app.result else {
        return Task::none();
    };
    let file_name = export::download_filename(&result.bytes, Local::now());
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::DownloadDialogResult,
    )
}

fn handle_download_dialog_result(app: &mut App, result: Option<PathBuf>) -> Task<Message> {
    let Some(path) = result else {
        return Task::none();
    };
    let Some(generated) = &app.result else {
        return Task::none();
    };

    match export::save_bytes(&path, &generated.bytes) {
        Ok(()) => {
            app.notifications
                .push(Notification::success("notification-download-success"));
        }
        Err(err) => {
            log::warn!("saving {} failed: {err}", path.display());
            app.notifications
                .push(Notification::error("notification-download-error"));
        }
    }
    Task::none()
}

fn handle_tick(app: &mut App) -> Task<Message> {
    app.notifications.tick();

    if app.busy {
        // The bar is pinned once the outcome is known; only the spinner and
        // phrases keep moving through the settle window.
        if app.phase == Phase::Submitting {
            app.progress.tick();
        }
        app.loading_ticks += 1;
        app.spinner_rotation += SPINNER_SPEED;
        if app.spinner_rotation > std::f32::consts::TAU {
            app.spinner_rotation -= std::f32::consts::TAU;
        }
    }

    Task::none()
}
