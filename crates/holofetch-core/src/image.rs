//! ASCII/ANSI art images and the `#` texture overlay.

use crate::ansi::Palette;
use crate::ansi::paint;
use crate::assets::DEFAULT_IMAGE_TEXTURE;
use crate::block::PrerenderedBlock;
use crate::text::max_visible_width;
use crate::text::push_spaces;
use crate::text::split_lines;
use crate::text::visible_length;

/// Glyph in image art that the texture replaces.
pub const TEXTURE_PLACEHOLDER: char = '#';

/// Raw image art plus the texture and border strings applied when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub data: String,
    pub texture: String,
    pub border_left: String,
    pub border_right: String,
    pub border_top: String,
    pub border_bottom: String,
}

impl Image {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    /// Builds the avatar image. Art that contains the placeholder glyph gets
    /// the built-in texture when no texture is supplied.
    pub fn avatar(data: impl Into<String>, texture: Option<String>) -> Self {
        let data = data.into();
        let texture = match texture.filter(|t| !t.is_empty()) {
            Some(texture) => texture,
            None if data.contains(TEXTURE_PLACEHOLDER) => DEFAULT_IMAGE_TEXTURE.to_string(),
            None => String::new(),
        };

        Self {
            data,
            texture,
            ..Self::default()
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = texture.into();
        self
    }

    pub fn with_borders(
        mut self,
        left: impl Into<String>,
        right: impl Into<String>,
        top: impl Into<String>,
        bottom: impl Into<String>,
    ) -> Self {
        self.border_left = left.into();
        self.border_right = right.into();
        self.border_top = top.into();
        self.border_bottom = bottom.into();
        self
    }

    /// Bracket frame sized to the first art line:
    ///
    /// ```text
    /// +------+
    /// { art  }
    /// +------+
    /// ```
    pub fn with_frame(self) -> Self {
        let rule = format!("+{}+", "-".repeat(self.front_line_width() + 1));
        self.with_borders("{ ", "}", rule.clone(), rule)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Visible width of the first non-empty art line.
    pub fn front_line_width(&self) -> usize {
        split_lines(&self.data)
            .first()
            .map(|line| visible_length(line))
            .unwrap_or(0)
    }

    /// Composes borders, texture and padding into a block.
    ///
    /// Every content line is padded to the widest art line; the block's own
    /// width and height include the borders.
    pub fn render(&self, palette: &Palette) -> PrerenderedBlock {
        if self.data.is_empty() {
            return PrerenderedBlock::default();
        }

        let lines = split_lines(&self.data);
        let width = max_visible_width(&lines);
        let mut texture = TextureCursor::new(&self.texture);
        let mut out = String::with_capacity(self.data.len() * 2);

        if !self.border_top.is_empty() {
            paint(&mut out, palette.border, &self.border_top);
            out.push('\n');
        }

        for line in &lines {
            if !self.border_left.is_empty() {
                paint(&mut out, palette.border, &self.border_left);
            }

            match texture.as_mut() {
                Some(texture) => texture.apply(line, &mut out),
                None => out.push_str(line),
            }
            push_spaces(&mut out, width.saturating_sub(visible_length(line)));

            if !self.border_right.is_empty() {
                paint(&mut out, palette.border, &self.border_right);
            }
            out.push('\n');
        }

        if !self.border_bottom.is_empty() {
            paint(&mut out, palette.border, &self.border_bottom);
            out.push('\n');
        }

        PrerenderedBlock::from_text(out)
    }
}

/// Cycles through a texture string, one character per placeholder glyph.
///
/// The offset starts at zero for each render and carries across lines.
#[derive(Debug, Clone)]
pub struct TextureCursor {
    glyphs: Vec<char>,
    offset: usize,
}

impl TextureCursor {
    /// `None` for an empty texture.
    pub fn new(texture: &str) -> Option<Self> {
        let glyphs: Vec<char> = texture.chars().collect();
        if glyphs.is_empty() {
            return None;
        }
        Some(Self { glyphs, offset: 0 })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn next_glyph(&mut self) -> char {
        let glyph = self.glyphs[self.offset];
        self.offset = (self.offset + 1) % self.glyphs.len();
        glyph
    }

    /// Appends `line` to `out` with every placeholder replaced.
    pub fn apply(&mut self, line: &str, out: &mut String) {
        for c in line.chars() {
            if c == TEXTURE_PLACEHOLDER {
                out.push(self.next_glyph());
            } else {
                out.push(c);
            }
        }
    }
}
