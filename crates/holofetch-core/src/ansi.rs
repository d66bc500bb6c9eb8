//! SGR colour codes and the style palette applied to rendered blocks.

pub const RESET: &str = "\x1b[0m";

pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_CYAN: &str = "\x1b[36m";

pub const FG_BRIGHT_BLACK: &str = "\x1b[90m";
pub const FG_BRIGHT_RED: &str = "\x1b[91m";
pub const FG_BRIGHT_GREEN: &str = "\x1b[92m";
pub const FG_BRIGHT_YELLOW: &str = "\x1b[93m";
pub const FG_BRIGHT_CYAN: &str = "\x1b[96m";

pub const FG_BOLD_BRIGHT_BLACK: &str = "\x1b[1;90m";

/// Colour escape codes bound to the style slots of the dashboard.
///
/// An empty slot means "unstyled": [`paint`] then writes the bare text with no
/// escape bytes at all, which is how `--no-color` output stays clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: &'static str,
    pub section: &'static str,
    pub property: &'static str,
    pub comment: &'static str,
    /// Fill colour for header lines.
    pub accent: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            border: FG_BOLD_BRIGHT_BLACK,
            section: FG_CYAN,
            property: FG_BRIGHT_CYAN,
            comment: FG_BRIGHT_BLACK,
            accent: FG_GREEN,
        }
    }
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            border: "",
            section: "",
            property: "",
            comment: "",
            accent: "",
        }
    }
}

/// Appends `text` wrapped in `style` and a reset.
pub fn paint(out: &mut String, style: &str, text: &str) {
    if style.is_empty() {
        out.push_str(text);
        return;
    }
    out.reserve(style.len() + text.len() + RESET.len());
    out.push_str(style);
    out.push_str(text);
    out.push_str(RESET);
}
