//! holofetch: a system information dashboard drawn next to ASCII art.
//!
//! The layout engine lives in `holofetch-core`; this crate gathers the host
//! facts, parses the command line and drives the renderer.

#![deny(clippy::all)]

pub mod app;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod format;
pub mod info;
pub mod sections_dto;
pub mod subprocess;
pub mod terminal;
