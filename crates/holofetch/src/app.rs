use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use holofetch_common::error_codes::EX_OK;
use holofetch_core::DrawError;
use holofetch_core::Image;
use holofetch_core::Palette;
use holofetch_core::Renderer;
use holofetch_core::Section;
use tracing::debug;

use crate::commands::Cli;
use crate::common::Colors;
use crate::common::color_init;
use crate::common::color_is_disabled;
use crate::common::telemetry;
use crate::config::RenderConfig;
use crate::error::FetchError;
use crate::format::build_sections;
use crate::info::HostInfo;
use crate::sections_dto::load_sections;
use crate::sections_dto::write_sections;
use crate::terminal::detect_size;

const PROGRAM_NAME: &str = "holofetch";

pub struct Application;

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> i32 {
        let cli = Cli::parse();
        color_init(cli.no_color);
        let _telemetry = telemetry::init_tracing(if cli.verbose { "debug" } else { "warn" });
        debug!(
            template = ?cli.template,
            sections = ?cli.sections,
            portrait = cli.portrait,
            "CLI parsed"
        );

        match self.execute(&cli) {
            Ok(()) => EX_OK,
            Err(e) => self.handle_error(&e),
        }
    }

    fn execute(&self, cli: &Cli) -> Result<(), FetchError> {
        if let Some(shell) = cli.completions {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, PROGRAM_NAME, &mut io::stdout());
            return Ok(());
        }

        let config = RenderConfig::from_env()
            .with_align_keys(cli.align_keys)
            .with_portrait(cli.portrait)
            .with_frame(cli.frame)
            .with_color(!color_is_disabled());

        // dumped sections stay free of colour codes
        let sections =
            gather_sections(cli.sections.as_deref(), config.color && !cli.dump_sections)?;

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        if cli.dump_sections {
            write_sections(&sections, &mut out)?;
            return out.flush().map_err(FetchError::Terminal);
        }

        let Some(template) = cli.template.as_deref() else {
            return Err(DrawError::MissingAvatarData.into());
        };
        let mut avatar = Image::avatar(
            read_art(template).map_err(|source| FetchError::Avatar {
                path: template.to_path_buf(),
                source,
            })?,
            cli.texture.clone(),
        );
        if config.frame {
            avatar = avatar.with_frame();
        }

        let palette = if config.color {
            Palette::default()
        } else {
            Palette::plain()
        };
        let mut renderer = Renderer::new(avatar)
            .with_palette(palette)
            .with_portrait_mode(config.portrait)
            .with_options(config.layout_options());

        if let Some(path) = cli.header.as_deref() {
            let header = read_art(path).map_err(|source| FetchError::Header {
                path: path.to_path_buf(),
                source,
            })?;
            renderer = renderer.with_header(Image::new(header));
        }

        let terminal = detect_size(cli.cols, cli.rows);
        let mode = renderer.draw(&sections, terminal, &mut out)?;
        debug!(mode = mode.as_str(), sections = sections.len(), "Dashboard drawn");
        Ok(())
    }

    fn handle_error(&self, e: &FetchError) -> i32 {
        eprintln!("{}: {} {}", PROGRAM_NAME, Colors::error("Error:"), e);
        eprintln!("{} {}", Colors::dim("Suggestion:"), e.suggestion());
        debug!(error = %e.to_json(), "Run failed");
        e.exit_code()
    }
}

fn gather_sections(path: Option<&Path>, color: bool) -> Result<Vec<Section>, FetchError> {
    match path {
        Some(path) => {
            let sections = load_sections(path)?;
            debug!(path = %path.display(), count = sections.len(), "Loaded sections");
            Ok(sections)
        }
        None => Ok(build_sections(&HostInfo::query(), color)),
    }
}

/// Reads an art file. Invalid UTF-8 is replaced, CRLF line endings become LF
/// and a missing final newline is added.
pub fn read_art(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(normalize_art(&String::from_utf8_lossy(&bytes)))
}

fn normalize_art(text: &str) -> String {
    let mut art = text.replace("\r\n", "\n");
    if !art.is_empty() && !art.ends_with('\n') {
        art.push('\n');
    }
    art
}
