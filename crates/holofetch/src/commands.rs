use std::path::PathBuf;

use clap::Parser;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"holofetch prints system information next to an ASCII art avatar.

The avatar template is a text file of ASCII or ANSI art. Every '#' in it is
replaced by the next character of the texture string, cycling through the
texture across lines.

LAYOUT:
    Landscape puts the avatar on the left and the sections beside it. When the
    sections do not fit beside the avatar, or the terminal is too small, the
    dashboard is drawn in portrait: avatar (or header) on top, sections below.

EXAMPLES:
    # Draw the dashboard with a custom texture
    holofetch avatar.txt --texture "rust@"

    # Render fixed sections at a fixed size
    holofetch avatar.txt --sections sections.json --cols 120 --rows 80

    # Save the gathered sections for later
    holofetch --dump-sections > sections.json"#;

#[derive(Parser, Debug)]
#[command(name = "holofetch")]
#[command(author, version)]
#[command(about = "System information dashboard with ASCII art avatars")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Avatar art file
    #[arg(
        value_name = "TEMPLATE",
        required_unless_present_any = ["completions", "dump_sections"]
    )]
    pub template: Option<PathBuf>,

    /// Characters substituted for '#' in the avatar, cycled in order
    #[arg(long, value_name = "STR")]
    pub texture: Option<String>,

    /// Header art file (default: built-in banner)
    #[arg(long, value_name = "PATH")]
    pub header: Option<PathBuf>,

    /// Start in portrait mode
    #[arg(long)]
    pub portrait: bool,

    /// Draw a bracket frame around the avatar
    #[arg(long)]
    pub frame: bool,

    /// Share one key column width across all sections
    #[arg(long)]
    pub align_keys: bool,

    /// Terminal width override
    #[arg(long, env = "HOLOFETCH_COLS", value_name = "N")]
    pub cols: Option<u16>,

    /// Terminal height override
    #[arg(long, env = "HOLOFETCH_ROWS", value_name = "N")]
    pub rows: Option<u16>,

    /// Read sections from a JSON file instead of querying the host
    #[arg(long, value_name = "PATH")]
    pub sections: Option<PathBuf>,

    /// Print the sections as JSON and exit
    #[arg(long)]
    pub dump_sections: bool,

    /// Disable colored output (a non-empty NO_COLOR env var does the same)
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}
