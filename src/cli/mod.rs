//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{parse_fontratio, parse_reduction_factor, Args, Command, ConfigAction, RenderArgs};
pub use commands::{convert_image, handle_config_action, print_image, render_options, run};
pub use enums::{Color, PresetPalette};
