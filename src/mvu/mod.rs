// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring form state, messages, and commands.

use std::time::Duration;

use crate::models::form::{
    Feedback, Field, FormFields, SUBMIT_DELAY, SUBMITTED_MESSAGE, SubmissionState,
};
use crate::models::upload::{IncomingFile, UploadedFile};
use crate::ui::components::password::{self, PasswordModel, PasswordMsg};
use crate::ui::components::uploads::{self, UploadsCommand, UploadsEvent, UploadsModel, UploadsMsg};

/// Top-level form state, owned by the controller.
#[derive(Default)]
pub struct AppModel {
    /// Name, email and message values.
    pub fields: FormFields,
    /// Password value and reveal flag.
    pub password: PasswordModel,
    /// Drop zone state and accepted files.
    pub uploads: UploadsModel,
    pub submission: SubmissionState,
    /// Error/success banners.
    pub feedback: Feedback,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    FieldChanged(Field, String),
    Password(PasswordMsg),
    Uploads(UploadsMsg),
    SubmitRequested,
    /// Transport outcome; the simulated transport always resolves `Ok`.
    SubmitCompleted(Result<(), String>),
}

/// Commands represent side-effects executed between frames.
#[derive(Debug)]
pub enum Command {
    PickFiles,
    ResolveBatch(Vec<IncomingFile>),
    SimulateSubmit { delay: Duration },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::FieldChanged(field, value) => model.fields.set(field, value),
        Msg::Password(m) => password::update(&mut model.password, m),
        Msg::Uploads(m) => {
            let mut upload_cmds = Vec::new();
            if let Some(event) = uploads::update(&mut model.uploads, m, &mut upload_cmds) {
                surface_intake(model, event);
            }
            for c in upload_cmds {
                match c {
                    UploadsCommand::PickFiles => cmds.push(Command::PickFiles),
                    UploadsCommand::ResolveBatch(batch) => {
                        cmds.push(Command::ResolveBatch(batch))
                    }
                }
            }
        }
        Msg::SubmitRequested => {
            // Re-entry while submitting is allowed; each request runs its own timer.
            model.feedback.clear();
            model.submission = SubmissionState::Submitting;
            tracing::info!(
                files = model.uploads.files().len(),
                has_password = !model.password.value().is_empty(),
                "contact form submission started"
            );
            cmds.push(Command::SimulateSubmit {
                delay: SUBMIT_DELAY,
            });
        }
        Msg::SubmitCompleted(result) => {
            model.submission = SubmissionState::Idle;
            match result {
                Ok(()) => {
                    tracing::info!("contact form submitted");
                    model.feedback.success = Some(SUBMITTED_MESSAGE.to_string());
                }
                Err(err) => {
                    tracing::warn!(%err, "contact form submission failed");
                    model.feedback.error = Some(err);
                }
            }
        }
    }
}

/// Execute a command synchronously on the calling worker and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickFiles => {
            let files = rfd::FileDialog::new()
                .set_title("Select files to upload")
                .pick_files()
                .unwrap_or_default();
            Msg::Uploads(UploadsMsg::FilesPicked(files))
        }
        Command::ResolveBatch(files) => {
            let resolved: anyhow::Result<Vec<UploadedFile>> =
                files.into_iter().map(UploadedFile::resolve).collect();
            match resolved {
                Ok(batch) => Msg::Uploads(UploadsMsg::BatchResolved(batch)),
                Err(err) => Msg::Uploads(UploadsMsg::BatchFailed(format!("{err:#}"))),
            }
        }
        Command::SimulateSubmit { delay } => {
            std::thread::sleep(delay);
            Msg::SubmitCompleted(Ok(()))
        }
    }
}

/// Map an intake outcome onto the form feedback.
fn surface_intake(model: &mut AppModel, event: UploadsEvent) {
    match event {
        UploadsEvent::Accepted { count } => {
            tracing::info!(
                count,
                total = model.uploads.files().len(),
                "upload batch accepted"
            );
            model.feedback.error = None;
        }
        UploadsEvent::Rejected(message) => {
            tracing::info!(reason = %message, "upload batch rejected");
            model.feedback.error = Some(message);
        }
    }
}
