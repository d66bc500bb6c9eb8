//! Text layout and compositing engine for holofetch.
//!
//! Turns an avatar image, an optional header banner and a list of key/value
//! sections into a dashboard sized for the current terminal. Layout decisions
//! ([`layout`]) are separate from output ([`compositor::draw`]), so a plan can
//! be inspected before anything is written.

#![deny(clippy::all)]

pub mod ansi;
pub mod assets;
mod block;
pub mod compositor;
mod error;
mod image;
pub mod layout;
mod packer;
mod renderer;
mod section;
pub mod text;

pub use ansi::Palette;
pub use block::PrerenderedBlock;
pub use error::DrawError;
pub use image::Image;
pub use image::TEXTURE_PLACEHOLDER;
pub use image::TextureCursor;
pub use layout::Composition;
pub use layout::LayoutMode;
pub use layout::LayoutOptions;
pub use layout::LayoutPlan;
pub use layout::PortraitLead;
pub use layout::TerminalSize;
pub use layout::layout;
pub use packer::BLOCK_SPACING;
pub use packer::PackedRows;
pub use packer::ROW_CAPACITY;
pub use packer::pack_rows;
pub use renderer::Renderer;
pub use section::Section;
