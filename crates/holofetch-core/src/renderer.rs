use std::io::Write;

use crate::ansi::Palette;
use crate::compositor;
use crate::error::DrawError;
use crate::image::Image;
use crate::layout::LayoutMode;
use crate::layout::LayoutOptions;
use crate::layout::LayoutPlan;
use crate::layout::TerminalSize;
use crate::layout::layout;
use crate::section::Section;

/// Holds the images and style for repeated draws of a dashboard.
///
/// ```
/// use holofetch_core::{Image, Renderer, Section, TerminalSize};
///
/// let renderer = Renderer::new(Image::new("###\n###\n")).with_portrait_mode(true);
/// let sections = vec![Section::new("Hardware").with_property("CPU", "8 cores")];
/// let mut out = Vec::new();
/// renderer.draw(&sections, TerminalSize::new(80, 24), &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("8 cores"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    avatar: Image,
    header: Option<Image>,
    palette: Palette,
    portrait_mode: bool,
    options: LayoutOptions,
}

impl Renderer {
    pub fn new(avatar: Image) -> Self {
        Self {
            avatar,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, header: Image) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Skips the landscape attempt entirely.
    pub fn with_portrait_mode(mut self, portrait: bool) -> Self {
        self.portrait_mode = portrait;
        self
    }

    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    pub fn avatar(&self) -> &Image {
        &self.avatar
    }

    pub fn header(&self) -> Option<&Image> {
        self.header.as_ref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    fn hint(&self) -> LayoutMode {
        if self.portrait_mode {
            LayoutMode::Portrait
        } else {
            LayoutMode::Landscape
        }
    }

    pub fn layout(
        &self,
        sections: &[Section],
        terminal: TerminalSize,
    ) -> Result<LayoutPlan, DrawError> {
        layout(
            sections,
            &self.avatar,
            self.header.as_ref(),
            &self.palette,
            terminal,
            self.hint(),
            &self.options,
        )
    }

    /// Lays out and draws `sections`, returning the mode that was used.
    pub fn draw<W: Write>(
        &self,
        sections: &[Section],
        terminal: TerminalSize,
        out: &mut W,
    ) -> Result<LayoutMode, DrawError> {
        let plan = self.layout(sections, terminal)?;
        let mode = plan.mode();
        compositor::draw(plan, out)?;
        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![Section::new("Hardware").with_property("CPU", "X")]
    }

    #[test]
    fn test_draw_without_avatar_fails_before_writing() {
        let mut out = Vec::new();
        let result = Renderer::default().draw(&sections(), TerminalSize::new(80, 24), &mut out);
        assert!(matches!(result, Err(DrawError::MissingAvatarData)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_portrait_mode_forces_portrait() {
        let renderer = Renderer::new(Image::new("##\n##\n")).with_portrait_mode(true);
        let mut out = Vec::new();
        let mode = renderer
            .draw(&sections(), TerminalSize::new(200, 100), &mut out)
            .unwrap();
        assert_eq!(mode, LayoutMode::Portrait);
    }

    #[test]
    fn test_draws_are_repeatable() {
        let renderer = Renderer::new(Image::new("##\n").with_texture("ab"))
            .with_header(Image::new("H\n"))
            .with_palette(Palette::plain());
        let mut first = Vec::new();
        let mut second = Vec::new();
        renderer
            .draw(&sections(), TerminalSize::new(80, 100), &mut first)
            .unwrap();
        renderer
            .draw(&sections(), TerminalSize::new(80, 100), &mut second)
            .unwrap();
        assert_eq!(first, second);
        assert!(String::from_utf8(first).unwrap().contains("ab"));
    }

    #[test]
    fn test_builder_keeps_settings() {
        let options = LayoutOptions {
            align_keys: true,
            ..LayoutOptions::default()
        };
        let renderer = Renderer::new(Image::new("x\n"))
            .with_header(Image::new("H\n"))
            .with_options(options);
        assert_eq!(renderer.options(), &options);
        assert_eq!(renderer.header().map(|h| h.data.as_str()), Some("H\n"));
        assert_eq!(renderer.avatar().data, "x\n");
        assert_eq!(renderer.palette(), &Palette::default());
    }
}
