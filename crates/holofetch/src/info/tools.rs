//! Versions of developer tools found on `PATH`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::subprocess;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(\.\d+)+").expect("Invalid version regex"));

#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub label: &'static str,
    pub program: &'static str,
    pub args: &'static [&'static str],
}

pub const TOOLS: &[Tool] = &[
    Tool {
        label: "PowerShell",
        program: "pwsh",
        args: &["--version"],
    },
    Tool {
        label: "C/C++",
        program: "cc",
        args: &["--version"],
    },
    Tool {
        label: "Python",
        program: "python3",
        args: &["--version"],
    },
    Tool {
        label: "Rust",
        program: "rustc",
        args: &["--version"],
    },
];

/// First dotted version number in `text`, e.g. `1.82.0` from `rustc 1.82.0 (f6e511eec 2024-10-15)`.
pub fn extract_version(text: &str) -> Option<&str> {
    VERSION_REGEX.find(text).map(|m| m.as_str())
}

/// Version reported by `tool`, or `None` when it is missing or fails.
pub fn tool_version(tool: &Tool) -> Option<String> {
    let output = match subprocess::run(tool.program, tool.args) {
        Ok(output) => output,
        Err(e) => {
            debug!(program = tool.program, error = %e, "Tool not available");
            return None;
        }
    };

    if !output.status.success() {
        debug!(program = tool.program, code = ?output.status.code(), "Tool version query failed");
        return None;
    }

    // some interpreters print their version on stderr
    extract_version(&output.stdout)
        .or_else(|| extract_version(&output.stderr))
        .map(str::to_string)
}

/// `(label, version)` for every tool that answered.
pub fn detect_tools() -> Vec<(String, String)> {
    TOOLS
        .iter()
        .filter_map(|tool| tool_version(tool).map(|version| (tool.label.to_string(), version)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_version() {
        assert_eq!(
            extract_version("rustc 1.82.0 (f6e511eec 2024-10-15)"),
            Some("1.82.0")
        );
        assert_eq!(extract_version("Python 3.12.1"), Some("3.12.1"));
        assert_eq!(
            extract_version("cc (Debian 12.2.0-14) 12.2.0"),
            Some("12.2.0")
        );
        assert_eq!(extract_version("PowerShell 7.4"), Some("7.4"));
    }

    #[test]
    fn test_extract_version_needs_a_dot() {
        assert_eq!(extract_version("version 7"), None);
        assert_eq!(extract_version(""), None);
    }

    #[test]
    fn test_missing_tool_has_no_version() {
        let tool = Tool {
            label: "Missing",
            program: "holofetch-no-such-tool",
            args: &["--version"],
        };
        assert_eq!(tool_version(&tool), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_version_read_from_stderr() {
        let tool = Tool {
            label: "Shell",
            program: "sh",
            args: &["-c", "echo 'Python 2.7.18' >&2"],
        };
        assert_eq!(tool_version(&tool).as_deref(), Some("2.7.18"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_has_no_version() {
        let tool = Tool {
            label: "Shell",
            program: "sh",
            args: &["-c", "echo 1.2.3; exit 1"],
        };
        assert_eq!(tool_version(&tool), None);
    }
}
