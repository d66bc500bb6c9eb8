use std::io;

use thiserror::Error;

/// Failures of a draw call. Anything else degrades to a reduced layout.
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("avatar image data is not available")]
    MissingAvatarData,

    #[error("failed to write dashboard: {0}")]
    Io(#[from] io::Error),
}

impl DrawError {
    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> String {
        match self {
            DrawError::MissingAvatarData => {
                "The avatar template is empty. Pass a file containing ASCII art.".to_string()
            }
            DrawError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                "Output was closed early. Check the command reading holofetch output.".to_string()
            }
            DrawError::Io(_) => "Writing to the terminal failed. Try again.".to_string(),
        }
    }
}
