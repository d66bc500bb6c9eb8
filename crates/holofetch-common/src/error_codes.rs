//! Error categories and the process exit codes they map to.
//!
//! Exit codes follow BSD sysexits.h.

pub const EX_OK: i32 = 0;
/// Command line usage error.
pub const EX_USAGE: i32 = 64;
/// An input file did not exist or was not readable.
pub const EX_NOINPUT: i32 = 66;
pub const EX_SOFTWARE: i32 = 70;
pub const EX_IOERR: i32 = 74;

/// Error category for programmatic handling of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input file missing or unreadable
    NotFound,
    /// Invalid input data or arguments
    InvalidInput,
    /// Terminal or output stream failure
    External,
    /// Bug or broken invariant
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::External => "external",
            ErrorCategory::Internal => "internal",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::NotFound => EX_NOINPUT,
            ErrorCategory::InvalidInput => EX_USAGE,
            ErrorCategory::External => EX_IOERR,
            ErrorCategory::Internal => EX_SOFTWARE,
        }
    }
}

impl std::str::FromStr for ErrorCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_found" => Ok(ErrorCategory::NotFound),
            "invalid_input" => Ok(ErrorCategory::InvalidInput),
            "external" => Ok(ErrorCategory::External),
            "internal" => Ok(ErrorCategory::Internal),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
