//! Draw command implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use stabcut_core::{draw, DrawOptions, LabelRequest};

use super::config::Config;
use super::font::TtfFont;
use super::render::{card_svg, drawing_to_svg};
use super::workbook::ChartDocument;

/// Execute the draw command: one chart document in, one SVG out.
pub fn cmd_draw(args: &[String]) {
    let mut input: Option<&str> = None;
    let mut output: Option<&str> = None;
    let mut config_path: Option<&str> = None;
    let mut font_path: Option<&str> = None;
    let mut class: Option<&str> = None;
    let mut raw = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(&args[i]);
                }
            }
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(&args[i]);
                }
            }
            "-f" | "--font" => {
                i += 1;
                if i < args.len() {
                    font_path = Some(&args[i]);
                }
            }
            "--class" => {
                i += 1;
                if i < args.len() {
                    class = Some(&args[i]);
                }
            }
            "--raw" => raw = true,
            other if input.is_none() => input = Some(other),
            other => {
                eprintln!("unexpected argument: {other}");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        eprintln!("usage: stabcut draw <chart.json> [-o out.svg] [-c config.json] [-f font.ttf] [--class name] [--raw]");
        process::exit(1);
    };

    let document = match ChartDocument::load(Path::new(input)) {
        Ok(document) => document,
        Err(error) => {
            eprintln!("could not load {input}: {error}");
            process::exit(1);
        }
    };

    let config = match config_path {
        Some(path) => match Config::load(Path::new(path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("could not load config {path}: {error}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    let layout = config.layout_for(class.or(document.class.as_deref()));

    let font_path = font_path.map(PathBuf::from).or_else(|| config.font.clone());
    let font = match font_path {
        Some(path) => match TtfFont::load(&path) {
            Ok(font) => Some(font),
            Err(error) => {
                eprintln!("could not load font {}: {}", path.display(), error);
                process::exit(1);
            }
        },
        None => None,
    };

    let label = font.as_ref().map(|font| LabelRequest {
        text: &document.name,
        font,
    });
    let options = DrawOptions {
        notch_width: layout.notch_width,
        label,
    };

    let drawing = match draw(&document, &document, &options) {
        Ok(drawing) => drawing,
        Err(error) => {
            eprintln!("{input}: {error}");
            process::exit(1);
        }
    };

    let svg = if raw {
        drawing_to_svg(&drawing)
    } else {
        match card_svg(&drawing, &layout) {
            Some(svg) => svg,
            None => {
                eprintln!("{input}: drawing has no geometry to place on a card");
                process::exit(1);
            }
        }
    };

    match output {
        Some(path) => {
            if let Err(error) = fs::write(path, svg) {
                eprintln!("could not write {path}: {error}");
                process::exit(1);
            }
        }
        None => print!("{svg}"),
    }
}
