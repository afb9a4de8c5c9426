//! Command-line waveform-to-PNG renderer
//!
//! Usage:
//!   wavetile <input> -o <output> [-m <mode>] [--json]
//!
//! Decodes the input audio file, reshapes its samples into a near-square
//! grid, maps each sample to a pixel with the selected mode, and writes the
//! result as PNG. Set RUST_LOG=warn (or lower) to see range-clamp
//! diagnostics from the rainbow encoder.

use std::path::PathBuf;

use serde::Serialize;

use wavetile::io::{decoder, encoder};
use wavetile::{PixelMode, render};

/// Machine-readable summary emitted with `--json`.
#[derive(Serialize)]
struct RenderReport<'a> {
    input: &'a str,
    output: &'a str,
    mode: &'static str,
    channels: usize,
    sample_rate: u32,
    frames: usize,
    samples: usize,
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
}

fn usage() {
    eprintln!("Usage: wavetile <input> -o <output> [-m <mode>] [--json]");
    eprintln!();
    eprintln!("  -o <path>   Output PNG path");
    eprintln!(
        "  -m <mode>   Pixel mode (default: {})",
        PixelMode::default().name()
    );
    eprintln!("     Available modes:");
    for mode in PixelMode::all() {
        eprintln!("     <{}>", mode.aliases().join("|"));
    }
    eprintln!("  --json      Emit a machine-readable summary on stdout");
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut mode = PixelMode::default();
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" => {
                let Some(path) = args.next() else {
                    eprintln!("ERROR: Expected output path after -o");
                    usage();
                    std::process::exit(2);
                };
                output = Some(PathBuf::from(path));
            }
            "-m" => {
                let Some(name) = args.next() else {
                    eprintln!("ERROR: Expected mode after -m");
                    usage();
                    std::process::exit(2);
                };
                // Resolve immediately so a bad mode name aborts before any
                // file is opened.
                mode = match PixelMode::from_name(&name) {
                    Ok(mode) => mode,
                    Err(e) => {
                        eprintln!("ERROR: {}", e);
                        usage();
                        std::process::exit(1);
                    }
                };
            }
            "--json" => json = true,
            "-h" | "--help" => {
                usage();
                return;
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            other => {
                eprintln!("ERROR: Unexpected argument `{}`", other);
                usage();
                std::process::exit(2);
            }
        }
    }

    let Some(input) = input else {
        eprintln!("ERROR: Missing input path");
        usage();
        std::process::exit(2);
    };
    let Some(output) = output else {
        eprintln!("ERROR: Missing output path");
        usage();
        std::process::exit(2);
    };

    let audio = match decoder::decode_file(&input) {
        Ok(audio) => audio,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    if !json {
        println!("Mode: {}", mode.name());
        println!("Loaded `{}`:", input.display());
        println!("  channels:     {}", audio.channels);
        println!("  sample rate:  {}", audio.sample_rate);
        println!("  total frames: {}", audio.frame_count());
    }

    let image = match render(&audio.samples, mode) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    if !json {
        println!(
            "Using {}x{} grid",
            image.dimensions.width, image.dimensions.height
        );
    }

    if let Err(e) = encoder::write_png(&output, &image) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    if json {
        let input_path = input.display().to_string();
        let output_path = output.display().to_string();
        let report = RenderReport {
            input: &input_path,
            output: &output_path,
            mode: mode.name(),
            channels: audio.channels,
            sample_rate: audio.sample_rate,
            frames: audio.frame_count(),
            samples: audio.sample_count(),
            width: image.dimensions.width,
            height: image.dimensions.height,
            bytes_per_pixel: image.pixels.bytes_per_pixel(),
        };
        match serde_json::to_string(&report) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("ERROR: failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("Wrote `{}`", output.display());
    }
}
