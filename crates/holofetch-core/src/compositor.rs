//! Writes a [`LayoutPlan`] to an output stream.

use std::io;
use std::io::Write;

use tracing::debug;

use crate::block::PrerenderedBlock;
use crate::block::write_spaces;
use crate::error::DrawError;
use crate::layout::Composition;
use crate::layout::LayoutPlan;
use crate::layout::PortraitLead;
use crate::packer::BLOCK_SPACING;

/// Indent of sections stacked without avatar or header.
const STACKED_INDENT: usize = 4;

/// How the single block of a one-block row is placed.
#[derive(Debug, Clone, Copy)]
enum SingleTab {
    Centered(usize),
    Fixed(usize),
}

#[derive(Debug, Clone, Copy)]
struct RowAnchor {
    first_tab: usize,
    single: SingleTab,
    max_front_width: usize,
}

impl RowAnchor {
    /// Tabs for each block of `row`. Blocks after the first line up on the
    /// widest leading block of the whole layout.
    fn tabs(&self, row: &[PrerenderedBlock]) -> Vec<usize> {
        match row {
            [] => Vec::new(),
            [only] => vec![match self.single {
                SingleTab::Centered(width) => only.centering_tab(width),
                SingleTab::Fixed(tab) => tab,
            }],
            [front, rest @ ..] => {
                let follow = self.max_front_width.saturating_sub(front.width()) + BLOCK_SPACING;
                std::iter::once(self.first_tab)
                    .chain(rest.iter().map(|_| follow))
                    .collect()
            }
        }
    }
}

/// Draws the plan and flushes `out`.
pub fn draw<W: Write>(mut plan: LayoutPlan, out: &mut W) -> Result<(), DrawError> {
    match plan.composition {
        Composition::Landscape {
            top_offset,
            header_indent,
        } => draw_landscape(&mut plan, top_offset, header_indent, out)?,
        Composition::Portrait { lead } => draw_portrait(&mut plan, lead, out)?,
    }
    out.flush()?;
    Ok(())
}

/// Interleaves the lines of `row` until its tallest block is exhausted,
/// keeping exhausted blocks' columns blank. Every line starts with the next
/// avatar line when one is given. Returns the number of lines written.
fn draw_row<W: Write>(
    out: &mut W,
    row: &mut [PrerenderedBlock],
    tabs: &[usize],
    mut avatar: Option<&mut PrerenderedBlock>,
) -> io::Result<usize> {
    let mut written = 0;
    while row.iter().any(|block| !block.is_exhausted()) {
        if let Some(avatar) = avatar.as_deref_mut() {
            avatar.draw_or_pad(out)?;
        }
        for (block, &tab) in row.iter_mut().zip(tabs) {
            if !block.draw(out, tab)? {
                write_spaces(out, tab + block.width())?;
            }
        }
        out.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}

fn draw_landscape<W: Write>(
    plan: &mut LayoutPlan,
    top_offset: usize,
    header_indent: usize,
    out: &mut W,
) -> io::Result<()> {
    for _ in 0..top_offset {
        plan.avatar.draw_line(out, 0)?;
    }

    while !plan.header.is_exhausted() {
        plan.avatar.draw_or_pad(out)?;
        plan.header
            .fill_draw_line(out, plan.palette.accent, header_indent)?;
    }
    plan.avatar.draw_or_pad(out)?;
    out.write_all(b"\n")?;

    let anchor = RowAnchor {
        first_tab: BLOCK_SPACING,
        single: SingleTab::Fixed(BLOCK_SPACING),
        max_front_width: plan.rows.max_front_width(),
    };
    for index in 0..plan.rows.row_count() {
        let Some(row) = plan.rows.row_mut(index) else {
            continue;
        };
        let tabs = anchor.tabs(row);
        let written = draw_row(out, row, &tabs, Some(&mut plan.avatar))?;
        debug!(row = index, lines = written, "Drew landscape row");

        plan.avatar.draw_or_pad(out)?;
        out.write_all(b"\n")?;
    }

    while plan.avatar.draw_line(out, 0)? {}
    Ok(())
}

fn draw_portrait<W: Write>(
    plan: &mut LayoutPlan,
    lead: PortraitLead,
    out: &mut W,
) -> io::Result<()> {
    let width = plan.terminal.width;

    match lead {
        PortraitLead::Avatar => {
            let tab = plan.avatar.centering_tab(width);
            while plan.avatar.draw_line(out, tab)? {}
            out.write_all(b"\n")?;
        }
        PortraitLead::Header => {
            let tab = plan.header.centering_tab(width);
            while plan
                .header
                .fill_draw_line(out, plan.palette.accent, tab)?
            {}
            out.write_all(b"\n")?;
        }
        PortraitLead::Stacked => {
            for (index, block) in plan.rows.blocks_mut().iter_mut().enumerate() {
                if index > 0 {
                    out.write_all(b"\n")?;
                }
                while block.draw_line(out, STACKED_INDENT)? {}
            }
            return Ok(());
        }
    }

    let anchor = RowAnchor {
        first_tab: width.saturating_sub(plan.avatar.width()) / 2,
        single: SingleTab::Centered(width),
        max_front_width: plan.rows.max_front_width(),
    };
    for index in 0..plan.rows.row_count() {
        let Some(row) = plan.rows.row_mut(index) else {
            continue;
        };
        let tabs = anchor.tabs(row);
        let written = draw_row(out, row, &tabs, None)?;
        debug!(row = index, lines = written, "Drew portrait row");
        out.write_all(b"\n")?;
    }
    Ok(())
}
