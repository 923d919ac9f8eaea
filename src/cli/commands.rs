//! Subcommand handlers for print-image, convert-image and config actions.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::args::{Args, Command, ConfigAction, RenderArgs};
use super::enums::Color;
use crate::ascii::{ColorMode, FontRatio, PaletteCode, PaletteSelection};
use crate::config::{default_path, Config, ConfigError, DEFAULT_CONFIG};
use crate::error::{AsciiError, Result};
use crate::renderer::{self, RenderOptions, RenderedText, Sizing};
use crate::source::SourceImage;
use crate::{source, terminal};

/// Dispatch parsed arguments to the matching handler.
pub fn run(args: Args) -> Result<()> {
    let config_path = args.config.as_deref();
    match args.command {
        Command::PrintImage {
            path,
            color,
            render,
        } => {
            let config = Config::load(config_path)?;
            print_image(&path, color, &render, &config)
        }
        Command::ConvertImage {
            path,
            output,
            reduction_factor,
            render,
        } => {
            let config = Config::load(config_path)?;
            convert_image(&path, &output, reduction_factor, &render, &config)
        }
        Command::Config { action } => handle_config_action(action, config_path),
    }
}

/// Merge command-line flags over config values over built-in defaults.
pub fn render_options(
    render: &RenderArgs,
    color: ColorMode,
    config: &Config,
) -> Result<RenderOptions> {
    let fontratio = match render.fontratio {
        Some(value) => FontRatio::new(value)?,
        None => config.fontratio()?.unwrap_or_default(),
    };

    let code = match render.palette_code {
        Some(code) => PaletteCode::from(code),
        None => config.palette_code()?.unwrap_or_default(),
    };
    let custom = render.palette.clone().or_else(|| config.render.palette.clone());

    Ok(RenderOptions {
        palette: PaletteSelection::from_parts(custom, code),
        fontratio,
        color,
        random_char: render.random_char || config.render.random_char,
        invert: render.invert || config.render.invert,
    })
}

/// Validate the palette, then decode `path`.
fn load_image(path: &Path, options: &RenderOptions) -> Result<SourceImage> {
    // Validate the palette before touching the file system
    options.palette.resolve()?;
    source::decode(path)
}

/// Render a decoded image, seeding the random source when asked.
fn render_image(
    image: &SourceImage,
    options: &RenderOptions,
    sizing: Sizing,
    seed: Option<u64>,
) -> Result<RenderedText> {
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };
    renderer::render_with_rng(image, options, sizing, rng.as_mut())
}

/// Print the ASCII conversion of an image to stdout, sized to the terminal.
///
/// Fails with [`AsciiError::TerminalSizeUnavailable`] when stdout is not a
/// terminal; use `convert-image` to render without one.
pub fn print_image(
    path: &Path,
    color: Option<Color>,
    render: &RenderArgs,
    config: &Config,
) -> Result<()> {
    let color = match color {
        Some(color) => ColorMode::from(color),
        None => config.color()?.unwrap_or_default(),
    };
    let options = render_options(render, color, config)?;
    let image = load_image(path, &options)?;
    let canvas = terminal::query_size()?;

    let text = render_image(&image, &options, Sizing::Terminal(canvas), render.seed)?;
    println!("{}", text);
    Ok(())
}

/// Write the uncolored ASCII conversion of an image to `output`.
///
/// With a reduction factor the size is independent of the terminal;
/// otherwise the terminal (or the configured fallback canvas) bounds it.
pub fn convert_image(
    path: &Path,
    output: &Path,
    reduction_factor: Option<f64>,
    render: &RenderArgs,
    config: &Config,
) -> Result<()> {
    let options = render_options(render, ColorMode::None, config)?;
    let sizing = match reduction_factor {
        Some(factor) => Sizing::Reduction(factor),
        None => Sizing::Terminal(terminal::query_size_or(config.fallback_canvas()?)),
    };

    let image = load_image(path, &options)?;
    let text = render_image(&image, &options, sizing, render.seed)?;
    std::fs::write(output, text.to_string()).map_err(|e| AsciiError::Io {
        path: output.to_path_buf(),
        source: e,
    })?;

    log::info!(
        "Wrote {}x{} characters to {}",
        text.width(),
        text.height(),
        output.display()
    );
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(config_path)?;
            let color = config.color()?.unwrap_or_default();
            let options = render_options(&RenderArgs::default(), color, &config)?;
            let canvas = config.fallback_canvas()?;

            println!("Current configuration:");
            println!("  Fontratio: {}", options.fontratio);
            println!("  Color: {}", options.color);
            match &options.palette {
                PaletteSelection::Preset(code) => println!("  Palette: {}", code),
                PaletteSelection::Custom(glyphs) => println!("  Palette: custom {:?}", glyphs),
            }
            println!("  Random char: {}", if options.random_char { "yes" } else { "no" });
            println!("  Invert: {}", if options.invert { "yes" } else { "no" });
            println!("  Fallback canvas: {}x{}", canvas.width, canvas.height);
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(ConfigError::AlreadyExists { path }.into());
            }

            // Create parent directories if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| AsciiError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            std::fs::write(&path, DEFAULT_CONFIG).map_err(|e| AsciiError::Io {
                path: path.clone(),
                source: e,
            })?;

            println!("Created config file: {}", path.display());
            Ok(())
        }
    }
}
