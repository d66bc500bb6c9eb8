use std::env;

use holofetch_core::LayoutOptions;
use holofetch_core::layout::DEFAULT_AVATAR_MIN_ROWS;
use holofetch_core::layout::DEFAULT_HEADER_MIN_ROWS;

pub const AVATAR_MIN_ROWS_ENV: &str = "HOLOFETCH_AVATAR_MIN_ROWS";
pub const HEADER_MIN_ROWS_ENV: &str = "HOLOFETCH_HEADER_MIN_ROWS";

/// Layout and styling settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub avatar_min_rows: usize,
    pub header_min_rows: usize,
    pub align_keys: bool,
    pub portrait: bool,
    pub frame: bool,
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl RenderConfig {
    pub fn from_env() -> Self {
        Self {
            avatar_min_rows: env_usize(AVATAR_MIN_ROWS_ENV).unwrap_or(DEFAULT_AVATAR_MIN_ROWS),
            header_min_rows: env_usize(HEADER_MIN_ROWS_ENV).unwrap_or(DEFAULT_HEADER_MIN_ROWS),
            align_keys: false,
            portrait: false,
            frame: false,
            color: true,
        }
    }

    pub fn with_avatar_min_rows(mut self, rows: usize) -> Self {
        self.avatar_min_rows = rows;
        self
    }

    pub fn with_header_min_rows(mut self, rows: usize) -> Self {
        self.header_min_rows = rows;
        self
    }

    pub fn with_align_keys(mut self, align: bool) -> Self {
        self.align_keys = align;
        self
    }

    pub fn with_portrait(mut self, portrait: bool) -> Self {
        self.portrait = portrait;
        self
    }

    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            avatar_min_rows: self.avatar_min_rows,
            header_min_rows: self.header_min_rows,
            align_keys: self.align_keys,
        }
    }
}

fn env_usize(name: &str) -> Option<usize> {
    env::var(name).ok().and_then(|v| parse_rows(&v))
}

fn parse_rows(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}
