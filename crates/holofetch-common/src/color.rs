//! Terminal color helpers for diagnostics.

use std::ffi::OsStr;
use std::io::IsTerminal;
use std::sync::OnceLock;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

/// Records whether colour is off for this process. Only the first call wins.
pub fn init(no_color_flag: bool) {
    let _ = NO_COLOR.set(
        no_color_flag
            || env_disables_color(std::env::var_os("NO_COLOR").as_deref())
            || !std::io::stdout().is_terminal(),
    );
}

/// Any non-empty `NO_COLOR` value turns colour off.
fn env_disables_color(value: Option<&OsStr>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

pub fn is_disabled() -> bool {
    *NO_COLOR.get().unwrap_or(&false)
}

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[90m";
}

pub struct Colors;

fn wrap_with_ansi(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + text.len() + codes::RESET.len());
    out.push_str(prefix);
    out.push_str(text);
    out.push_str(codes::RESET);
    out
}

impl Colors {
    pub fn error(text: &str) -> String {
        if is_disabled() {
            text.to_string()
        } else {
            wrap_with_ansi(text, codes::RED)
        }
    }

    pub fn warning(text: &str) -> String {
        if is_disabled() {
            text.to_string()
        } else {
            wrap_with_ansi(text, codes::YELLOW)
        }
    }

    pub fn dim(text: &str) -> String {
        if is_disabled() {
            text.to_string()
        } else {
            wrap_with_ansi(text, codes::DIM)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_disabled() {
        let _ = NO_COLOR.set(true);
        assert_eq!(Colors::error("test"), "test");
        assert_eq!(Colors::warning("test"), "test");
        assert_eq!(Colors::dim("test"), "test");
    }

    #[test]
    fn test_no_color_env_values() {
        assert!(env_disables_color(Some(OsStr::new("1"))));
        assert!(env_disables_color(Some(OsStr::new("true"))));
        assert!(env_disables_color(Some(OsStr::new("yes please"))));
        assert!(!env_disables_color(Some(OsStr::new(""))));
        assert!(!env_disables_color(None));
    }

    #[test]
    fn test_wrap_with_ansi() {
        assert_eq!(wrap_with_ansi("x", codes::RED), "\x1b[31mx\x1b[0m");
    }
}
