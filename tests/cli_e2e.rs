//! End-to-end tests for the ascii-image binary.
//!
//! Stdout is a pipe under the test harness, so `print-image` has no terminal
//! to size against and must fail, while `convert-image` sizes its output from
//! the fallback canvas. Each test points the config directory at a temp dir
//! so a developer's own config file is never picked up.

use ascii_image::ascii::{ColorMode, PaletteCode, PaletteSelection};
use ascii_image::renderer::{render, RenderOptions, Sizing};
use ascii_image::source::decode;
use ascii_image::terminal::TerminalCanvas;
use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Temp workspace with an isolated config location.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Top row black, bottom row white.
    fn two_by_two(&self) -> PathBuf {
        let path = self.path("two.png");
        RgbImage::from_fn(2, 2, |_, y| if y == 0 { BLACK } else { WHITE })
            .save(&path)
            .unwrap();
        path
    }

    fn gradient(&self, width: u32, height: u32) -> PathBuf {
        let path = self.path("gradient.png");
        RgbImage::from_fn(width, height, |x, _| {
            let v = (x * 255 / width.max(1)) as u8;
            Rgb([v, v / 2, 255 - v])
        })
        .save(&path)
        .unwrap();
        path
    }

    fn config(&self, content: &str) -> PathBuf {
        let path = self.path("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ascii-image").unwrap();
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .env_remove("RUST_LOG");
        cmd
    }
}

fn canvas_config(ws: &Workspace, width: u16, height: u16) -> PathBuf {
    ws.config(&format!(
        "[output]\nfallback_width = {}\nfallback_height = {}\n",
        width, height
    ))
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_print_image_requires_terminal() {
    let ws = Workspace::new();
    let image = ws.two_by_two();
    let config = canvas_config(&ws, 2, 2);

    ws.cmd()
        .args(["print-image", arg(&image), "--palette", "@. "])
        .args(["--config", arg(&config)])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Terminal size unavailable"));
}

#[test]
fn test_convert_image_plain_text() {
    let ws = Workspace::new();
    let image = ws.two_by_two();
    let config = canvas_config(&ws, 2, 2);
    let out = ws.path("out.txt");

    ws.cmd()
        .args(["convert-image", arg(&image), arg(&out)])
        .args(["--palette", "@. ", "--fontratio", "1.0"])
        .args(["--config", arg(&config)])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "@@\n  ");
}

#[test]
fn test_convert_image_fits_fallback_canvas() {
    let ws = Workspace::new();
    let image = ws.gradient(300, 300);
    let config = canvas_config(&ws, 40, 12);
    let out = ws.path("out.txt");

    ws.cmd()
        .args(["convert-image", arg(&image), arg(&out)])
        .args(["--config", arg(&config)])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.split('\n').collect();
    assert!(lines.len() <= 12);
    for line in &lines {
        assert!(line.chars().count() <= 40);
    }
}

#[test]
fn test_convert_image_matches_uncolored_render() {
    let ws = Workspace::new();
    let image = ws.gradient(64, 48);
    let config = canvas_config(&ws, 30, 10);
    let out = ws.path("out.txt");

    ws.cmd()
        .args(["convert-image", arg(&image), arg(&out), "--palette-code", "reduced"])
        .args(["--config", arg(&config)])
        .assert()
        .success()
        .stdout("");

    let options = RenderOptions {
        palette: PaletteSelection::Preset(PaletteCode::Reduced),
        color: ColorMode::None,
        ..Default::default()
    };
    let sizing = Sizing::Terminal(TerminalCanvas::new(30, 10).unwrap());
    let expected = render(&decode(&image).unwrap(), &options, sizing).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, expected.to_string());
    assert!(!written.contains('\x1b'));
}

#[test]
fn test_convert_image_with_reduction_factor() {
    let ws = Workspace::new();
    let image = ws.gradient(100, 80);
    let out = ws.path("small.txt");

    ws.cmd()
        .args(["convert-image", arg(&image), arg(&out)])
        .args(["--reduction-factor", "4", "--fontratio", "0.5"])
        .assert()
        .success();

    // 100 / 4 = 25 columns, 80 * 0.5 / 4 = 10 rows
    let written = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.split('\n').collect();
    assert_eq!(lines.len(), 10);
    assert!(lines.iter().all(|line| line.chars().count() == 25));
}

#[test]
fn test_random_char_is_reproducible_with_seed() {
    let ws = Workspace::new();
    let image = ws.gradient(20, 20);
    let config = canvas_config(&ws, 20, 8);

    let run = |name: &str| {
        let out = ws.path(name);
        ws.cmd()
            .args(["convert-image", arg(&image), arg(&out), "--random-char"])
            .args(["--palette", "abc", "--seed", "11"])
            .args(["--config", arg(&config)])
            .assert()
            .success();
        std::fs::read_to_string(&out).unwrap()
    };

    let first = run("first.txt");
    let second = run("second.txt");
    assert_eq!(first, second);
    assert!(first.chars().all(|c| c == '\n' || "abc".contains(c)));
}

#[test]
fn test_missing_image_fails() {
    let ws = Workspace::new();
    let missing = ws.path("nope.png");

    ws.cmd()
        .args(["print-image", arg(&missing)])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found at"));
}

#[test]
fn test_non_image_fails() {
    let ws = Workspace::new();
    let text = ws.path("readme.txt");
    std::fs::write(&text, "not pixels").unwrap();

    ws.cmd()
        .args(["convert-image", arg(&text), arg(&ws.path("out.txt"))])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a supported image"));
}

#[test]
fn test_zero_fontratio_is_usage_error() {
    let ws = Workspace::new();
    let image = ws.two_by_two();

    ws.cmd()
        .args(["print-image", arg(&image), "--fontratio", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Null fontratios are not possible"));
}

#[test]
fn test_negative_fontratio_is_usage_error() {
    let ws = Workspace::new();
    let image = ws.two_by_two();

    ws.cmd()
        .args(["print-image", arg(&image), "--fontratio", "-0.4"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Negative fontratios are not possible"));
}

#[test]
fn test_empty_palette_fails() {
    let ws = Workspace::new();
    let image = ws.two_by_two();

    ws.cmd()
        .args(["print-image", arg(&image), "--palette", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Palette must contain at least one character"));
}

#[test]
fn test_unknown_color_is_usage_error() {
    let ws = Workspace::new();
    let image = ws.two_by_two();

    ws.cmd()
        .args(["print-image", arg(&image), "--color", "rainbow"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_config_init_and_show() {
    let ws = Workspace::new();
    let path = ws.path("settings/config.toml");

    ws.cmd()
        .args(["config", "init", "--config", arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));
    assert!(path.exists());

    ws.cmd()
        .args(["config", "show", "--config", arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fontratio: 0.4"))
        .stdout(predicate::str::contains("Palette: standard"))
        .stdout(predicate::str::contains("(exists)"));

    ws.cmd()
        .args(["config", "init", "--config", arg(&path)])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_values_apply_to_convert() {
    let ws = Workspace::new();
    let image = ws.two_by_two();
    let config = ws.config(
        "[render]\nfontratio = 1.0\ncolor = \"full\"\npalette = \"@. \"\ninvert = true\n\n\
         [output]\nfallback_width = 2\nfallback_height = 2\n",
    );
    let out = ws.path("out.txt");

    ws.cmd()
        .args(["convert-image", arg(&image), arg(&out), "--config", arg(&config)])
        .assert()
        .success();

    // convert-image never colors, whatever the config says
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "  \n@@");
}

#[test]
fn test_tiny_reduction_factor_fails() {
    let ws = Workspace::new();
    let image = ws.two_by_two();
    let out = ws.path("out.txt");

    ws.cmd()
        .args(["convert-image", arg(&image), arg(&out), "--reduction-factor", "1e-9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Reduction factor must be positive"));
    assert!(!out.exists());
}
