//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Color, PresetPalette};

/// Parse and validate a font ratio (> 0)
pub fn parse_fontratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if ratio.is_nan() {
        return Err(format!("'{}' is not a valid number", s));
    }
    if ratio < 0.0 {
        return Err("Negative fontratios are not possible".to_string());
    }
    if ratio == 0.0 {
        return Err("Null fontratios are not possible".to_string());
    }
    if ratio.is_infinite() {
        return Err("Font ratio must be finite".to_string());
    }
    Ok(ratio)
}

/// Parse and validate a reduction factor (> 0)
pub fn parse_reduction_factor(s: &str) -> Result<f64, String> {
    let factor: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(factor.is_finite() && factor > 0.0) {
        return Err(format!(
            "Reduction factor must be a positive number, got {}",
            s
        ));
    }
    Ok(factor)
}

/// Convert images into ASCII art for the terminal or a text file
#[derive(Parser, Debug)]
#[command(name = "ascii-image")]
#[command(version, about = "Convert images to ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Print an image in full color
    ascii-image print-image photo.jpg

    # Grey tones with the reduced palette
    ascii-image print-image photo.jpg --color b&w --palette-code reduced

    # Save a plain-text version at a quarter of the size
    ascii-image convert-image photo.jpg photo.txt --reduction-factor 4")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the ASCII conversion of an image into the terminal
    PrintImage {
        /// Image to convert
        path: PathBuf,

        /// Color compatibility of the output
        #[arg(long)]
        color: Option<Color>,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Save the ASCII conversion of an image into a file (without color)
    ConvertImage {
        /// Image to convert
        path: PathBuf,

        /// File to write the text to
        output: PathBuf,

        /// Divide the image size by this factor instead of fitting the terminal
        #[arg(long, value_parser = parse_reduction_factor)]
        reduction_factor: Option<f64>,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options shared by the conversion commands.
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct RenderArgs {
    /// Preset palette
    #[arg(long)]
    pub palette_code: Option<PresetPalette>,

    /// Custom palette, densest character first (e.g. '#-. ' not ' .-#')
    #[arg(long)]
    pub palette: Option<String>,

    /// Assign a random character from the palette to each pixel
    #[arg(long)]
    pub random_char: bool,

    /// Map dark pixels to sparse characters
    #[arg(long)]
    pub invert: bool,

    /// Width of the font divided by its height (x/y)
    #[arg(long, value_parser = parse_fontratio, allow_negative_numbers = true)]
    pub fontratio: Option<f64>,

    /// Seed for --random-char
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
