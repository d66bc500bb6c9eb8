//! Visible-width metrics for ANSI-coloured text.
//!
//! Only `m`-terminated CSI sequences are recognised. Everything else counts as
//! one column per character; wide glyphs are not measured.

use std::ops::Range;

const ESC: char = '\x1b';
const SGR_TERMINATOR: char = 'm';

/// Number of visible columns in `line`, ignoring colour escape sequences.
///
/// Counts `char`s rather than bytes, so a multibyte glyph such as `█` is one
/// column. An escape sequence with no terminating `m` hides the rest of the
/// line.
pub fn visible_length(line: &str) -> usize {
    let mut length = 0;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c == ESC {
            for c in chars.by_ref() {
                if c == SGR_TERMINATOR {
                    break;
                }
            }
            continue;
        }
        length += 1;
    }

    length
}

/// Byte ranges of the non-empty lines of `blob`.
///
/// Consecutive newlines collapse. An unterminated trailing fragment loses its
/// first character.
pub fn split_line_ranges(blob: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    if blob.is_empty() {
        return ranges;
    }

    let mut last = 0;
    for (pos, _) in blob.match_indices('\n') {
        if pos > last {
            ranges.push(last..pos);
        }
        last = pos + 1;
    }

    if last < blob.len() {
        let mut tail = blob[last..].chars();
        let skipped = tail.next().map(char::len_utf8).unwrap_or(0);
        if !tail.as_str().is_empty() {
            ranges.push(last + skipped..blob.len());
        }
    }

    ranges
}

/// Splits `blob` into its non-empty lines. See [`split_line_ranges`].
pub fn split_lines(blob: &str) -> Vec<&str> {
    split_line_ranges(blob)
        .into_iter()
        .map(|range| &blob[range])
        .collect()
}

/// Widest visible length across `lines`, or 0 when there are none.
pub fn max_visible_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| visible_length(line.as_ref()))
        .max()
        .unwrap_or(0)
}

pub(crate) fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}
