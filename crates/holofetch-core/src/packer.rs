//! Greedy grouping of rendered sections into rows.

use std::ops::Range;

use crate::ansi::Palette;
use crate::block::PrerenderedBlock;
use crate::section::Section;

/// Most blocks a row may hold.
pub const ROW_CAPACITY: usize = 2;

/// Columns between neighbouring blocks of a row.
pub const BLOCK_SPACING: usize = 2;

/// Rendered section blocks plus the spans that group them into rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedRows {
    blocks: Vec<PrerenderedBlock>,
    spans: Vec<Range<usize>>,
}

impl PackedRows {
    /// Every section in a row of its own.
    pub fn stacked(sections: &[Section], palette: &Palette, min_key_width: usize) -> Self {
        let blocks: Vec<PrerenderedBlock> = sections
            .iter()
            .map(|section| section.render(palette, min_key_width))
            .collect();
        let spans = (0..blocks.len()).map(|i| i..i + 1).collect();
        Self { blocks, spans }
    }

    pub fn blocks(&self) -> &[PrerenderedBlock] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut [PrerenderedBlock] {
        &mut self.blocks
    }

    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    pub fn row_count(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[PrerenderedBlock]> {
        let span = self.spans.get(index)?.clone();
        Some(&self.blocks[span])
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut [PrerenderedBlock]> {
        let span = self.spans.get(index)?.clone();
        Some(&mut self.blocks[span])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[PrerenderedBlock]> + '_ {
        self.spans.iter().map(|span| &self.blocks[span.clone()])
    }

    /// Lines the rows occupy, one spacer line per row included.
    pub fn content_height(&self) -> usize {
        self.rows()
            .map(|row| row.first().map_or(0, PrerenderedBlock::height) + 1)
            .sum()
    }

    /// Widest leading block across all rows.
    pub fn max_front_width(&self) -> usize {
        self.rows()
            .filter_map(|row| row.first())
            .map(PrerenderedBlock::width)
            .max()
            .unwrap_or(0)
    }

    /// Widest row, counting spacing after every block.
    pub fn max_row_length(&self) -> usize {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|block| block.width() + BLOCK_SPACING)
                    .sum::<usize>()
            })
            .max()
            .unwrap_or(0)
    }
}

/// Packs `sections` into rows in one left-to-right pass, rendering each
/// section as it is placed.
///
/// A section joins the current row while the row has room for another block,
/// the running width stays under `terminal_width`, and it is no taller than
/// the row's first section. A section wider than the terminal still gets a
/// row of its own.
pub fn pack_rows(
    sections: &[Section],
    palette: &Palette,
    terminal_width: usize,
    min_key_width: usize,
) -> PackedRows {
    let mut blocks = Vec::with_capacity(sections.len());
    let mut spans = Vec::new();
    let mut row_start = 0;
    let mut content_width = 0;
    let mut row_height = 0;

    for (i, section) in sections.iter().enumerate() {
        let width = section.column_width(min_key_width);
        let height = section.natural_height();

        let joins_row = i > row_start
            && i - row_start < ROW_CAPACITY
            && content_width + BLOCK_SPACING + width < terminal_width
            && height <= row_height;

        if joins_row {
            content_width += BLOCK_SPACING + width;
        } else {
            if i > row_start {
                spans.push(row_start..i);
                row_start = i;
            }
            content_width = BLOCK_SPACING + width;
            row_height = height;
        }

        blocks.push(section.render(palette, min_key_width));
    }

    if row_start < blocks.len() {
        spans.push(row_start..blocks.len());
    }

    PackedRows { blocks, spans }
}
