//! Terminal size detection.

use std::io::IsTerminal;

use holofetch_core::TerminalSize;
use tracing::debug;

pub const FALLBACK_COLS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 24;

/// Size of the terminal behind stdout. Explicit `cols`/`rows` win over the
/// detected values; without a terminal the size falls back to 80x24.
pub fn detect_size(cols: Option<u16>, rows: Option<u16>) -> TerminalSize {
    let detected = if std::io::stdout().is_terminal() {
        match crossterm::terminal::size() {
            Ok(size) => Some(size),
            Err(e) => {
                debug!(error = %e, "Terminal size query failed");
                None
            }
        }
    } else {
        None
    };
    resolve_size(detected, cols, rows)
}

pub fn resolve_size(
    detected: Option<(u16, u16)>,
    cols: Option<u16>,
    rows: Option<u16>,
) -> TerminalSize {
    let (detected_cols, detected_rows) = detected
        .filter(|(w, h)| *w > 0 && *h > 0)
        .unwrap_or((FALLBACK_COLS, FALLBACK_ROWS));
    let size = TerminalSize::new(
        usize::from(cols.unwrap_or(detected_cols)),
        usize::from(rows.unwrap_or(detected_rows)),
    );
    debug!(width = size.width, height = size.height, "Resolved terminal size");
    size
}
