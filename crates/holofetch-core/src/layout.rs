//! Landscape/portrait selection and the layout plan consumed by the compositor.
//!
//! All decisions for a draw call are made here, once, before any output is
//! produced. Landscape may fall back to portrait a single time when the
//! content does not fit beside the avatar; portrait never switches back.

use std::borrow::Cow;

use tracing::debug;

use crate::ansi::Palette;
use crate::assets::DEFAULT_HEADER;
use crate::block::PrerenderedBlock;
use crate::error::DrawError;
use crate::image::Image;
use crate::packer::PackedRows;
use crate::packer::pack_rows;
use crate::section::Section;

pub const DEFAULT_AVATAR_MIN_ROWS: usize = 60;
pub const DEFAULT_HEADER_MIN_ROWS: usize = 75;

/// Side border of the header in landscape mode.
const LANDSCAPE_HEADER_MARGIN: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Avatar on the left, header and sections beside it.
    #[default]
    Landscape,
    /// Avatar or header on top, sections below.
    Portrait,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Landscape => "landscape",
            LayoutMode::Portrait => "portrait",
        }
    }
}

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: usize,
    pub height: usize,
}

impl TerminalSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// The avatar is drawn only on terminals taller than this.
    pub avatar_min_rows: usize,
    /// Portrait draws the header only on terminals taller than this.
    pub header_min_rows: usize,
    /// Render every section with the widest key column of them all.
    pub align_keys: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            avatar_min_rows: DEFAULT_AVATAR_MIN_ROWS,
            header_min_rows: DEFAULT_HEADER_MIN_ROWS,
            align_keys: false,
        }
    }
}

/// What portrait mode draws above the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitLead {
    Avatar,
    Header,
    /// Nothing fits: sections are stacked alone, indented.
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    Landscape {
        /// Avatar lines drawn before the header starts.
        top_offset: usize,
        /// Indent that centres the header over the widest row.
        header_indent: usize,
    },
    Portrait {
        lead: PortraitLead,
    },
}

/// Everything the compositor needs for one draw call.
#[derive(Debug, Clone)]
pub struct LayoutPlan {
    pub composition: Composition,
    pub terminal: TerminalSize,
    pub palette: Palette,
    pub avatar: PrerenderedBlock,
    pub header: PrerenderedBlock,
    pub rows: PackedRows,
    /// Landscape was attempted first and abandoned.
    pub retried: bool,
}

impl LayoutPlan {
    pub fn mode(&self) -> LayoutMode {
        match self.composition {
            Composition::Landscape { .. } => LayoutMode::Landscape,
            Composition::Portrait { .. } => LayoutMode::Portrait,
        }
    }

    /// Lines taken by the header, its spacer and the section rows.
    pub fn content_height(&self) -> usize {
        content_height(&self.header, &self.rows)
    }
}

fn content_height(header: &PrerenderedBlock, rows: &PackedRows) -> usize {
    header.height() + 1 + rows.content_height()
}

pub fn avatar_drawable(avatar_width: usize, terminal: TerminalSize, options: &LayoutOptions) -> bool {
    avatar_width < terminal.width && terminal.height > options.avatar_min_rows
}

/// Portrait header rule. Without a drawable avatar the height requirement
/// shrinks by the avatar's height; an avatar taller than the requirement
/// leaves no room for the header at all.
pub fn header_drawable(
    header_width: usize,
    avatar_drawable: bool,
    avatar_height: usize,
    terminal: TerminalSize,
    options: &LayoutOptions,
) -> bool {
    let min_rows = if avatar_drawable {
        options.header_min_rows
    } else {
        match options.header_min_rows.checked_sub(avatar_height) {
            Some(rows) => rows,
            None => return false,
        }
    };
    header_width < terminal.width && terminal.height > min_rows
}

pub fn select_mode(
    hint: LayoutMode,
    avatar_width: usize,
    header_width: usize,
    terminal: TerminalSize,
    options: &LayoutOptions,
) -> LayoutMode {
    if hint == LayoutMode::Portrait {
        return LayoutMode::Portrait;
    }
    if avatar_width + header_width >= terminal.width {
        return LayoutMode::Portrait;
    }
    if !avatar_drawable(avatar_width, terminal, options) {
        return LayoutMode::Portrait;
    }
    LayoutMode::Landscape
}

/// `width` columns of alternating dots and spaces, starting with a dot.
pub fn dotted_rule(width: usize) -> String {
    (0..width)
        .map(|i| if i % 2 == 0 { '.' } else { ' ' })
        .collect()
}

/// Frames a header that has no bottom border of its own with a dotted rule.
pub fn decorate_header(header: &Image, mode: LayoutMode, avatar_width: usize) -> Image {
    if !header.border_bottom.is_empty() {
        return header.clone();
    }

    let header_width = header.front_line_width();
    let mut decorated = header.clone();
    match mode {
        LayoutMode::Portrait => {
            let side = " ".repeat(avatar_width.saturating_sub(header_width) / 2);
            decorated.border_left = side.clone();
            decorated.border_right = side;
            decorated.border_bottom = dotted_rule(avatar_width);
        }
        LayoutMode::Landscape => {
            let rule = dotted_rule(2 * LANDSCAPE_HEADER_MARGIN.len() + header_width + 1);
            decorated.border_left = LANDSCAPE_HEADER_MARGIN.to_string();
            decorated.border_right = LANDSCAPE_HEADER_MARGIN.to_string();
            decorated.border_top = rule.clone();
            decorated.border_bottom = rule;
        }
    }
    decorated
}

/// Decides the composition for one draw call.
///
/// `header` falls back to the built-in banner when absent or empty.
pub fn layout(
    sections: &[Section],
    avatar: &Image,
    header: Option<&Image>,
    palette: &Palette,
    terminal: TerminalSize,
    hint: LayoutMode,
    options: &LayoutOptions,
) -> Result<LayoutPlan, DrawError> {
    if avatar.is_empty() {
        return Err(DrawError::MissingAvatarData);
    }

    let header = match header {
        Some(header) if !header.is_empty() => Cow::Borrowed(header),
        _ => Cow::Owned(Image::new(DEFAULT_HEADER)),
    };

    let avatar_block = avatar.render(palette);
    let min_key_width = if options.align_keys {
        sections
            .iter()
            .map(|section| section.max_lengths().0)
            .max()
            .unwrap_or(0)
    } else {
        0
    };

    let mode = select_mode(
        hint,
        avatar_block.width(),
        header.front_line_width(),
        terminal,
        options,
    );
    debug!(
        mode = mode.as_str(),
        avatar_width = avatar_block.width(),
        avatar_height = avatar_block.height(),
        terminal_width = terminal.width,
        terminal_height = terminal.height,
        "Selected layout mode"
    );

    let mut retried = false;
    if mode == LayoutMode::Landscape {
        let header_block =
            decorate_header(&header, LayoutMode::Landscape, avatar_block.width()).render(palette);
        let rows = pack_rows(sections, palette, terminal.width, min_key_width);
        let height = content_height(&header_block, &rows);

        if height <= avatar_block.height() {
            let top_offset = (avatar_block.height() - height) / 2;
            let header_indent = rows.max_row_length().saturating_sub(header_block.width()) / 2;
            debug!(rows = rows.row_count(), content_height = height, "Landscape layout fits");

            return Ok(LayoutPlan {
                composition: Composition::Landscape {
                    top_offset,
                    header_indent,
                },
                terminal,
                palette: *palette,
                avatar: avatar_block,
                header: header_block,
                rows,
                retried,
            });
        }

        debug!(
            content_height = height,
            avatar_height = avatar_block.height(),
            "Content taller than avatar, retrying in portrait"
        );
        retried = true;
    }

    let avatar_ok = avatar_drawable(avatar_block.width(), terminal, options);
    let header_block =
        decorate_header(&header, LayoutMode::Portrait, avatar_block.width()).render(palette);
    let header_ok = header_drawable(
        header_block.width(),
        avatar_ok,
        avatar_block.height(),
        terminal,
        options,
    );

    let lead = if avatar_ok {
        PortraitLead::Avatar
    } else if header_ok {
        PortraitLead::Header
    } else {
        PortraitLead::Stacked
    };

    let rows = match lead {
        PortraitLead::Stacked => PackedRows::stacked(sections, palette, min_key_width),
        PortraitLead::Avatar | PortraitLead::Header => {
            pack_rows(sections, palette, terminal.width, min_key_width)
        }
    };
    debug!(lead = ?lead, rows = rows.row_count(), "Portrait layout");

    Ok(LayoutPlan {
        composition: Composition::Portrait { lead },
        terminal,
        palette: *palette,
        avatar: avatar_block,
        header: header_block,
        rows,
        retried,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(width: usize, height: usize) -> Image {
        let line = "#".repeat(width);
        let data: String = (0..height).map(|_| format!("{line}\n")).collect();
        Image::new(data).with_texture("ab")
    }

    fn cpu_section() -> Section {
        Section::new("Hardware").with_property("CPU", "X")
    }

    fn tall_section(rows: usize) -> Section {
        let mut section = Section::new("Tall");
        for i in 0..rows {
            section.push(format!("k{i}"), "v");
        }
        section
    }

    fn plan(
        sections: &[Section],
        avatar: &Image,
        header: Option<&Image>,
        terminal: TerminalSize,
        hint: LayoutMode,
    ) -> LayoutPlan {
        layout(
            sections,
            avatar,
            header,
            &Palette::plain(),
            terminal,
            hint,
            &LayoutOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_avatar_is_an_error() {
        let result = layout(
            &[cpu_section()],
            &Image::default(),
            None,
            &Palette::plain(),
            TerminalSize::new(120, 80),
            LayoutMode::Landscape,
            &LayoutOptions::default(),
        );
        assert!(matches!(result, Err(DrawError::MissingAvatarData)));
    }

    #[test]
    fn test_select_mode_rules() {
        let options = LayoutOptions::default();
        let big = TerminalSize::new(120, 80);
        assert_eq!(select_mode(LayoutMode::Landscape, 30, 20, big, &options), LayoutMode::Landscape);
        assert_eq!(select_mode(LayoutMode::Portrait, 30, 20, big, &options), LayoutMode::Portrait);
        assert_eq!(select_mode(LayoutMode::Landscape, 60, 60, big, &options), LayoutMode::Portrait);
        assert_eq!(
            select_mode(LayoutMode::Landscape, 30, 20, TerminalSize::new(120, 60), &options),
            LayoutMode::Portrait
        );
    }

    #[test]
    fn test_header_drawable_thresholds() {
        let options = LayoutOptions::default();
        assert!(header_drawable(50, true, 10, TerminalSize::new(100, 76), &options));
        assert!(!header_drawable(50, true, 10, TerminalSize::new(100, 75), &options));
        assert!(!header_drawable(100, true, 10, TerminalSize::new(100, 90), &options));
        assert!(header_drawable(50, false, 30, TerminalSize::new(100, 46), &options));
        assert!(!header_drawable(50, false, 30, TerminalSize::new(100, 45), &options));
        assert!(!header_drawable(50, false, 80, TerminalSize::new(100, 500), &options));
    }

    #[test]
    fn test_dotted_rule() {
        assert_eq!(dotted_rule(5), ". . .");
        assert_eq!(dotted_rule(0), "");
    }

    #[test]
    fn test_decorate_header_landscape() {
        let header = decorate_header(&Image::new("H\n"), LayoutMode::Landscape, 30);
        assert_eq!(header.border_left, "  ");
        assert_eq!(header.border_right, "  ");
        assert_eq!(header.border_top, ". . . ");
        assert_eq!(header.border_bottom, header.border_top);
    }

    #[test]
    fn test_decorate_header_portrait() {
        let header = decorate_header(&Image::new("HHHH\n"), LayoutMode::Portrait, 10);
        assert_eq!(header.border_left, "   ");
        assert_eq!(header.border_right, "   ");
        assert!(header.border_top.is_empty());
        assert_eq!(header.border_bottom, dotted_rule(10));
    }

    #[test]
    fn test_decorate_header_keeps_explicit_bottom_border() {
        let header = Image::new("H\n").with_borders("", "", "", "===");
        assert_eq!(decorate_header(&header, LayoutMode::Landscape, 30), header);
    }

    #[test]
    fn test_single_section_lands_in_landscape() {
        let header = Image::new("H\n");
        let plan = plan(
            &[Section::new("Info").with_property("CPU", "X")],
            &art(30, 50),
            Some(&header),
            TerminalSize::new(120, 80),
            LayoutMode::Landscape,
        );

        assert_eq!(plan.mode(), LayoutMode::Landscape);
        assert!(!plan.retried);
        // header: dotted rule, "  H  ", dotted rule; rows: 2 lines + spacer
        assert_eq!(plan.header.height(), 3);
        assert_eq!(plan.content_height(), 3 + 1 + 3);
        assert_eq!(
            plan.composition,
            Composition::Landscape {
                top_offset: (50 - 7) / 2,
                // widest row is "{ Info }" plus spacing, header block is 6 wide
                header_indent: 2,
            }
        );
    }

    #[test]
    fn test_tall_content_falls_back_to_portrait_once() {
        let plan = plan(
            &[tall_section(30)],
            &art(30, 10),
            None,
            TerminalSize::new(200, 100),
            LayoutMode::Landscape,
        );

        assert_eq!(plan.mode(), LayoutMode::Portrait);
        assert!(plan.retried);
        assert_eq!(
            plan.composition,
            Composition::Portrait {
                lead: PortraitLead::Avatar
            }
        );
    }

    #[test]
    fn test_narrow_terminal_stacks_sections() {
        let header = Image::new("H\n");
        let plan = plan(
            &[cpu_section(), cpu_section()],
            &art(60, 20),
            Some(&header),
            TerminalSize::new(40, 30),
            LayoutMode::Landscape,
        );

        assert_eq!(plan.mode(), LayoutMode::Portrait);
        assert!(!plan.retried);
        assert_eq!(
            plan.composition,
            Composition::Portrait {
                lead: PortraitLead::Stacked
            }
        );
        assert_eq!(plan.rows.row_count(), 2);
    }

    #[test]
    fn test_short_terminal_leads_with_header() {
        let header = Image::new("HEADER\n");
        let plan = plan(
            &[cpu_section()],
            &art(20, 30),
            Some(&header),
            TerminalSize::new(100, 50),
            LayoutMode::Landscape,
        );

        assert_eq!(
            plan.composition,
            Composition::Portrait {
                lead: PortraitLead::Header
            }
        );
    }

    #[test]
    fn test_default_header_used_when_absent() {
        let plan = plan(
            &[cpu_section()],
            &art(30, 60),
            None,
            TerminalSize::new(200, 100),
            LayoutMode::Landscape,
        );
        let banner = Image::new(DEFAULT_HEADER);
        assert_eq!(
            plan.header.height(),
            banner.render(&Palette::plain()).height() + 2
        );
    }

    #[test]
    fn test_align_keys_widens_every_section() {
        let sections = vec![
            Section::new("A").with_property("Key", "v"),
            Section::new("B").with_property("LongerKey", "v"),
        ];
        let options = LayoutOptions {
            align_keys: true,
            ..LayoutOptions::default()
        };
        let plan = layout(
            &sections,
            &art(20, 60),
            None,
            &Palette::plain(),
            TerminalSize::new(200, 100),
            LayoutMode::Landscape,
            &options,
        )
        .unwrap();
        let blocks = plan.rows.blocks();
        assert_eq!(blocks[0].line(1), Some("......Key: v"));
        assert_eq!(blocks[1].line(1), Some("LongerKey: v"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn landscape_plans_always_fit_beside_avatar(
                section_rows in prop::collection::vec(1usize..15, 0..6),
                avatar_height in 1usize..80,
                width in 20usize..250,
                height in 10usize..120
            ) {
                let sections: Vec<Section> = section_rows.iter().map(|n| tall_section(*n)).collect();
                let plan = plan(
                    &sections,
                    &art(16, avatar_height),
                    None,
                    TerminalSize::new(width, height),
                    LayoutMode::Landscape,
                );

                match plan.mode() {
                    LayoutMode::Landscape => {
                        prop_assert!(!plan.retried);
                        prop_assert!(plan.content_height() <= plan.avatar.height());
                    }
                    LayoutMode::Portrait => {
                        if plan.retried {
                            prop_assert!(avatar_drawable(plan.avatar.width(), plan.terminal, &LayoutOptions::default()));
                        }
                    }
                }
            }
        }
    }
}
