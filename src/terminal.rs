//! Terminal size discovery.

use std::io::IsTerminal;

use crate::error::{AsciiError, Result};

/// Target grid size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCanvas {
    pub width: u16,
    pub height: u16,
}

impl Default for TerminalCanvas {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl TerminalCanvas {
    /// Build a canvas, rejecting zero-sized axes.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AsciiError::TerminalSizeUnavailable);
        }
        Ok(Self { width, height })
    }
}

/// Query the size of the terminal attached to stdout.
///
/// Fails with [`AsciiError::TerminalSizeUnavailable`] when stdout is not a
/// terminal (piped or redirected) or the size query fails.
pub fn query_size() -> Result<TerminalCanvas> {
    if !std::io::stdout().is_terminal() {
        return Err(AsciiError::TerminalSizeUnavailable);
    }
    let (cols, rows) =
        crossterm::terminal::size().map_err(|_| AsciiError::TerminalSizeUnavailable)?;
    TerminalCanvas::new(cols, rows)
}

/// Query the terminal size, falling back to `fallback` when there is none.
pub fn query_size_or(fallback: TerminalCanvas) -> TerminalCanvas {
    match query_size() {
        Ok(canvas) => canvas,
        Err(e) => {
            log::warn!(
                "{}; using {}x{} instead",
                e,
                fallback.width,
                fallback.height
            );
            fallback
        }
    }
}
