//! Errors surfaced to the user with category, suggestion and exit code.

use std::io;
use std::path::PathBuf;

use holofetch_core::DrawError;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

use crate::common::ErrorCategory;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read avatar template {}: {source}", path.display())]
    Avatar {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read header art {}: {source}", path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid sections file {}: {reason}", path.display())]
    Sections { path: PathBuf, reason: String },

    #[error("Draw failed: {0}")]
    Draw(#[from] DrawError),

    #[error("Terminal error: {0}")]
    Terminal(#[source] io::Error),
}

impl FetchError {
    /// Returns the error category for programmatic handling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::Avatar { .. } | FetchError::Header { .. } => ErrorCategory::NotFound,
            FetchError::Sections { .. } => ErrorCategory::InvalidInput,
            FetchError::Draw(DrawError::MissingAvatarData) => ErrorCategory::InvalidInput,
            FetchError::Draw(DrawError::Io(_)) | FetchError::Terminal(_) => {
                ErrorCategory::External
            }
        }
    }

    /// Returns structured context about the error for debugging.
    pub fn context(&self) -> Value {
        match self {
            FetchError::Avatar { path, source } => json!({
                "operation": "read_avatar",
                "path": path.display().to_string(),
                "reason": source.to_string()
            }),
            FetchError::Header { path, source } => json!({
                "operation": "read_header",
                "path": path.display().to_string(),
                "reason": source.to_string()
            }),
            FetchError::Sections { path, reason } => json!({
                "operation": "read_sections",
                "path": path.display().to_string(),
                "reason": reason
            }),
            FetchError::Draw(e) => json!({
                "operation": "draw",
                "reason": e.to_string()
            }),
            FetchError::Terminal(e) => json!({
                "operation": "write",
                "reason": e.to_string()
            }),
        }
    }

    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> String {
        match self {
            FetchError::Avatar { path, .. } => format!(
                "Check that '{}' exists and is readable.",
                path.display()
            ),
            FetchError::Header { path, .. } => format!(
                "Check that '{}' exists, or drop --header to use the built-in banner.",
                path.display()
            ),
            FetchError::Sections { .. } => {
                "Sections must be a JSON array of {\"header\": ..., \"properties\": [[key, value], ...]}."
                    .to_string()
            }
            FetchError::Draw(e) => e.suggestion(),
            FetchError::Terminal(_) => {
                "Writing to the terminal failed. Check the output stream.".to_string()
            }
        }
    }

    /// Converts to UNIX sysexits.h-compliant exit code.
    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    /// Returns structured JSON representation of this error.
    pub fn to_json(&self) -> Value {
        json!({
            "message": self.to_string(),
            "category": self.category().as_str(),
            "context": self.context(),
            "suggestion": self.suggestion(),
            "exit_code": self.exit_code()
        })
    }
}
