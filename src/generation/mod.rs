// SPDX-License-Identifier: MPL-2.0
//! Face generation: request construction and the upload to the remote service.

pub mod client;
pub mod progress;

use iced::widget::image;
use std::fmt;

/// Gender choice attached to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The token appended to the prompt, lowercase.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Translation key for the radio label.
    pub fn label_key(self) -> &'static str {
        match self {
            Gender::Male => "gender-male",
            Gender::Female => "gender-female",
        }
    }

    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

/// Composes the prompt sent alongside the sketch.
pub fn build_prompt(description: &str, gender: Gender) -> String {
    format!("{} ({})", description.trim(), gender.as_str())
}

/// Everything the client needs to perform one generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    pub prompt: String,
}

/// A generated face held in memory for display and download.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub handle: image::Handle,
    pub bytes: Vec<u8>,
    /// Translation key for the status line shown next to the result.
    pub message_key: &'static str,
}

impl GenerationResult {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_bytes(bytes.clone()),
            bytes,
            message_key: "result-status-success",
        }
    }
}

/// Failure modes of a generation call.
///
/// The payload strings are for the log only; the user always sees the generic
/// `notification-generation-failed` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The request never produced a response (DNS, refused, timeout).
    Network(String),
    /// The service answered with a non-success status.
    Server { status: u16, detail: String },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Network(detail) => write!(f, "Network error: {}", detail),
            GenerationError::Server { status, detail } => {
                write!(f, "Server error ({}): {}", status, detail)
            }
        }
    }
}

impl std::error::Error for GenerationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_appends_gender_in_parentheses() {
        assert_eq!(
            build_prompt("a smiling man", Gender::Male),
            "a smiling man (male)"
        );
        assert_eq!(
            build_prompt("short curly hair", Gender::Female),
            "short curly hair (female)"
        );
    }

    #[test]
    fn prompt_trims_surrounding_whitespace() {
        assert_eq!(
            build_prompt("  a stern face \n", Gender::Female),
            "a stern face (female)"
        );
    }

    #[test]
    fn generation_errors_format_for_the_log() {
        let network = GenerationError::Network("connection refused".into());
        assert_eq!(network.to_string(), "Network error: connection refused");

        let server = GenerationError::Server {
            status: 503,
            detail: "model not loaded".into(),
        };
        assert_eq!(server.to_string(), "Server error (503): model not loaded");
    }
}
