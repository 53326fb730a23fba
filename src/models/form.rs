// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form field values, feedback, and submission state.

use std::time::Duration;

/// Simulated transport latency between submit and completion.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(4000);

/// Success text shown once a submission resolves.
pub const SUBMITTED_MESSAGE: &str = "form submitted";

/// Free-text fields of the form; replaced wholesale on every edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Which text field an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl FormFields {
    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// True when the email is non-empty and not a syntactically valid address.
    ///
    /// Used for a hint only; it never blocks submission.
    pub fn email_looks_invalid(&self) -> bool {
        !self.email.is_empty() && !email_address::EmailAddress::is_valid(self.email.trim())
    }
}

/// Transient user feedback. Cleared together at the start of every submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Feedback {
    pub fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }
}

/// Submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}
