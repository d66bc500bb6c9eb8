use std::io;
use std::io::Write;
use std::ops::Range;

use crate::ansi::RESET;
use crate::text::max_visible_width;
use crate::text::split_line_ranges;

/// A finished block of styled text, ready to be emitted one line at a time.
///
/// The block owns its text buffer and indexes its lines by byte range. The
/// draw cursor only moves forward; a fresh cursor requires re-rendering the
/// source image or section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerenderedBlock {
    data: String,
    lines: Vec<Range<usize>>,
    width: usize,
    drawn_lines: usize,
}

impl PrerenderedBlock {
    pub fn from_text(data: String) -> Self {
        let lines = split_line_ranges(&data);
        let width = {
            let views: Vec<&str> = lines.iter().map(|range| &data[range.clone()]).collect();
            max_visible_width(&views)
        };

        Self {
            data,
            lines,
            width,
            drawn_lines: 0,
        }
    }

    /// Widest visible line.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.data
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|range| &self.data[range.clone()])
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|range| &self.data[range.clone()])
    }

    pub fn drawn_lines(&self) -> usize {
        self.drawn_lines
    }

    pub fn is_exhausted(&self) -> bool {
        self.drawn_lines >= self.lines.len()
    }

    /// Returns the line under the cursor and advances past it.
    pub fn next_line(&mut self) -> Option<&str> {
        let range = self.lines.get(self.drawn_lines)?.clone();
        self.drawn_lines += 1;
        Some(&self.data[range])
    }

    /// Left padding that centres this block within `width` columns.
    pub fn centering_tab(&self, width: usize) -> usize {
        width.saturating_sub(self.width) / 2
    }

    /// Writes `tab` spaces and the next line, without a newline.
    ///
    /// Returns `false` and writes nothing once the block is exhausted.
    pub fn draw<W: Write>(&mut self, out: &mut W, tab: usize) -> io::Result<bool> {
        let Some(line) = self.next_line() else {
            return Ok(false);
        };
        write_spaces(out, tab)?;
        out.write_all(line.as_bytes())?;
        Ok(true)
    }

    /// Like [`draw`](Self::draw), followed by a newline when a line was written.
    pub fn draw_line<W: Write>(&mut self, out: &mut W, tab: usize) -> io::Result<bool> {
        let drawn = self.draw(out, tab)?;
        if drawn {
            out.write_all(b"\n")?;
        }
        Ok(drawn)
    }

    /// Writes the next line filled with `color`, followed by a newline.
    pub fn fill_draw_line<W: Write>(
        &mut self,
        out: &mut W,
        color: &str,
        tab: usize,
    ) -> io::Result<bool> {
        let Some(line) = self.next_line() else {
            return Ok(false);
        };
        write_spaces(out, tab)?;
        if color.is_empty() {
            out.write_all(line.as_bytes())?;
        } else {
            write!(out, "{color}{line}{RESET}")?;
        }
        out.write_all(b"\n")?;
        Ok(true)
    }

    /// Writes the next line, or blank padding of the block's width once exhausted.
    pub fn draw_or_pad<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if !self.draw(out, 0)? {
            write_spaces(out, self.width)?;
        }
        Ok(())
    }
}

pub(crate) fn write_spaces<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    if count > 0 {
        write!(out, "{:count$}", "")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(block: &mut PrerenderedBlock, tab: usize) -> String {
        let mut out = Vec::new();
        block.draw(&mut out, tab).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_from_text_measures_composed_lines() {
        let block = PrerenderedBlock::from_text("ab\n\x1b[31mabcd\x1b[0m\n".to_string());
        assert_eq!(block.height(), 2);
        assert_eq!(block.width(), 4);
        assert_eq!(block.line(1), Some("\x1b[31mabcd\x1b[0m"));
    }

    #[test]
    fn test_empty_block() {
        let block = PrerenderedBlock::default();
        assert!(block.is_empty());
        assert!(block.is_exhausted());
        assert_eq!(block.width(), 0);
        assert_eq!(block.height(), 0);
    }

    #[test]
    fn test_cursor_advances_until_exhausted() {
        let mut block = PrerenderedBlock::from_text("one\ntwo\n".to_string());
        assert_eq!(block.next_line(), Some("one"));
        assert_eq!(block.drawn_lines(), 1);
        assert!(!block.is_exhausted());
        assert_eq!(block.next_line(), Some("two"));
        assert!(block.is_exhausted());
        assert_eq!(block.next_line(), None);
        assert_eq!(block.drawn_lines(), 2);
    }

    #[test]
    fn test_draw_writes_tab_then_line() {
        let mut block = PrerenderedBlock::from_text("xy\n".to_string());
        assert_eq!(drawn(&mut block, 3), "   xy");
        assert_eq!(drawn(&mut block, 3), "");
    }

    #[test]
    fn test_draw_line_appends_newline() {
        let mut block = PrerenderedBlock::from_text("xy\n".to_string());
        let mut out = Vec::new();
        assert!(block.draw_line(&mut out, 0).unwrap());
        assert!(!block.draw_line(&mut out, 0).unwrap());
        assert_eq!(out, b"xy\n");
    }

    #[test]
    fn test_fill_draw_line_wraps_color() {
        let mut block = PrerenderedBlock::from_text("xy\n".to_string());
        let mut out = Vec::new();
        block.fill_draw_line(&mut out, "\x1b[32m", 1).unwrap();
        assert_eq!(out, b" \x1b[32mxy\x1b[0m\n");
    }

    #[test]
    fn test_draw_or_pad_pads_when_exhausted() {
        let mut block = PrerenderedBlock::from_text("abc\n".to_string());
        let mut out = Vec::new();
        block.draw_or_pad(&mut out).unwrap();
        block.draw_or_pad(&mut out).unwrap();
        assert_eq!(out, b"abc   ");
    }

    #[test]
    fn test_centering_tab() {
        let block = PrerenderedBlock::from_text("abcd\n".to_string());
        assert_eq!(block.centering_tab(10), 3);
        assert_eq!(block.centering_tab(2), 0);
    }
}
