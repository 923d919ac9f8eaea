//! ascii-image library crate.
//!
//! Converts raster images into text for terminal display or file export,
//! optionally coloring each glyph with a truecolor escape sequence.
//!
//! ```no_run
//! use ascii_image::renderer::{render, RenderOptions, Sizing};
//! use ascii_image::terminal::TerminalCanvas;
//!
//! let image = ascii_image::source::decode("photo.png".as_ref())?;
//! let sizing = Sizing::Terminal(TerminalCanvas::default());
//! let text = render(&image, &RenderOptions::default(), sizing)?;
//! println!("{}", text);
//! # Ok::<(), ascii_image::AsciiError>(())
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod renderer;
pub mod source;
pub mod terminal;

pub use error::{AsciiError, Result};
