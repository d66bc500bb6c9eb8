//! Labeled key/value tables.

use crate::ansi::Palette;
use crate::ansi::paint;
use crate::block::PrerenderedBlock;
use crate::text::push_spaces;
use crate::text::visible_length;

/// Filler between the left edge of the key column and a short key.
const DOT_LEADER: char = '.';
const KEY_SEPARATOR: &str = ": ";

/// A header plus ordered key/value rows. Keys need not be unique; values may
/// carry their own colour codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub properties: Vec<(String, String)>,
}

impl Section {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Widest key and widest value, in visible columns.
    pub fn max_lengths(&self) -> (usize, usize) {
        self.properties
            .iter()
            .fold((0, 0), |(max_key, max_value), (key, value)| {
                (
                    max_key.max(visible_length(key)),
                    max_value.max(visible_length(value)),
                )
            })
    }

    pub fn natural_width(&self) -> usize {
        self.column_width(0)
    }

    /// Table width when the key column is at least `min_key_width` wide.
    pub fn column_width(&self, min_key_width: usize) -> usize {
        let (max_key, max_value) = self.max_lengths();
        max_key.max(min_key_width) + KEY_SEPARATOR.len() + max_value
    }

    pub fn natural_height(&self) -> usize {
        1 + self.properties.len()
    }

    /// Renders the table. `min_key_width` widens the key column so that
    /// several tables can share one alignment.
    pub fn render(&self, palette: &Palette, min_key_width: usize) -> PrerenderedBlock {
        if self.properties.is_empty() {
            return PrerenderedBlock::default();
        }

        let (max_key, max_value) = self.max_lengths();
        let key_width = max_key.max(min_key_width);
        let width = key_width + KEY_SEPARATOR.len() + max_value;
        let mut out = String::new();

        out.push_str("{ ");
        paint(&mut out, palette.section, &self.header);
        out.push_str(" }");
        push_spaces(&mut out, width.saturating_sub(4 + visible_length(&self.header)));
        out.push('\n');

        for (key, value) in &self.properties {
            let leader: String =
                std::iter::repeat_n(DOT_LEADER, key_width.saturating_sub(visible_length(key)))
                    .collect();
            paint(&mut out, palette.comment, &leader);
            paint(&mut out, palette.property, key);
            paint(&mut out, palette.comment, KEY_SEPARATOR);
            out.push_str(value);

            let used = key_width + KEY_SEPARATOR.len() + visible_length(value);
            push_spaces(&mut out, width.saturating_sub(used));
            out.push('\n');
        }

        PrerenderedBlock::from_text(out)
    }
}
