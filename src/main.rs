//! Picatex CLI - Command-line tool for packing PICA200 ETC1 textures.
//!
//! Inputs and outputs are raw RGBA8 files (row-major, top row first); image
//! container formats are left to other tools.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};

use picatex::etc1::layout::BlockLayout;
use picatex::prelude::*;

/// Picatex - PICA200 ETC1/ETC1A4 texture packer
#[derive(Parser)]
#[command(name = "picatex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Texture shape shared by every subcommand.
#[derive(clap::Args, Clone, Copy)]
struct Shape {
    /// Image width in pixels
    #[arg(long)]
    width: u16,

    /// Image height in pixels
    #[arg(long)]
    height: u16,

    /// Encode 4-bit alpha (ETC1A4)
    #[arg(short, long)]
    alpha: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a raw RGBA8 file into an ETC1 texture
    Encode {
        /// Raw RGBA8 input file
        #[arg(short, long, env = "PICATEX_INPUT")]
        input: PathBuf,

        /// Encoded texture output file
        #[arg(short, long, env = "PICATEX_OUTPUT")]
        output: PathBuf,

        #[command(flatten)]
        shape: Shape,

        /// Quantizer quality (low, medium, high)
        #[arg(short, long, env = "PICATEX_QUALITY", default_value = "low")]
        quality: QuantizerQuality,
    },

    /// Decode an ETC1 texture back into raw RGBA8
    Decode {
        /// Encoded texture input file
        #[arg(short, long, env = "PICATEX_INPUT")]
        input: PathBuf,

        /// Raw RGBA8 output file
        #[arg(short, long, env = "PICATEX_OUTPUT")]
        output: PathBuf,

        #[command(flatten)]
        shape: Shape,
    },

    /// Show the tile layout and encoded size for a texture shape
    Info {
        #[command(flatten)]
        shape: Shape,
    },

    /// Encode every `*.rgba` file in a directory
    Batch {
        /// Directory containing raw RGBA8 files
        #[arg(short, long, env = "PICATEX_INPUT")]
        input_dir: PathBuf,

        /// Output directory for encoded textures
        #[arg(short, long, env = "PICATEX_OUTPUT")]
        output_dir: PathBuf,

        #[command(flatten)]
        shape: Shape,

        /// Quantizer quality (low, medium, high)
        #[arg(short, long, env = "PICATEX_QUALITY", default_value = "low")]
        quality: QuantizerQuality,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Commands::Encode {
            input,
            output,
            shape,
            quality,
        } => {
            cmd_encode(&input, &output, shape, quality)?;
        }
        Commands::Decode { input, output, shape } => {
            cmd_decode(&input, &output, shape)?;
        }
        Commands::Info { shape } => {
            cmd_info(shape);
        }
        Commands::Batch {
            input_dir,
            output_dir,
            shape,
            quality,
        } => {
            cmd_batch(&input_dir, &output_dir, shape, quality)?;
        }
    }

    Ok(())
}

fn encoder_for(shape: Shape, quality: QuantizerQuality) -> ImageEncoder {
    ImageEncoder::new(
        EncodeConfig::new(shape.width, shape.height)
            .with_alpha(shape.alpha)
            .with_quality(quality),
    )
}

fn encode_file(encoder: &ImageEncoder, input: &Path, output: &Path) -> Result<EncodedTexture> {
    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let texture = encoder
        .encode_bytes_parallel(&data)
        .with_context(|| format!("Failed to encode {}", input.display()))?;
    fs::write(output, texture.as_bytes()).with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(texture)
}

fn cmd_encode(input: &Path, output: &Path, shape: Shape, quality: QuantizerQuality) -> Result<()> {
    let encoder = encoder_for(shape, quality);
    println!(
        "Encoding {} ({}x{}, {}, quality {})",
        input.display(),
        shape.width,
        shape.height,
        encoder.config().format(),
        quality
    );

    let start = Instant::now();
    let texture = encode_file(&encoder, input, output)?;

    println!(
        "Wrote {} bytes to {} in {:?}",
        texture.len(),
        output.display(),
        start.elapsed()
    );

    Ok(())
}

fn cmd_decode(input: &Path, output: &Path, shape: Shape) -> Result<()> {
    let format = Etc1Format::from_has_alpha(shape.alpha);
    println!("Decoding {} ({}x{}, {})", input.display(), shape.width, shape.height, format);

    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let pixels = decode_image(&data, shape.width, shape.height, format)
        .with_context(|| format!("Failed to decode {}", input.display()))?;
    fs::write(output, &pixels).with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote {} bytes of RGBA8 to {}", pixels.len(), output.display());

    Ok(())
}

fn cmd_info(shape: Shape) {
    let format = Etc1Format::from_has_alpha(shape.alpha);
    let layout = BlockLayout::new(shape.width, shape.height);

    println!("Format:       {} (PICA ID {:#04x})", format, format.format_id());
    println!("Dimensions:   {}x{}", shape.width, shape.height);
    println!("Tiles:        {}x{} ({} total)", layout.tiles_x(), layout.tiles_y(), layout.tile_count());
    println!("Sub-blocks:   {} x {} bytes", layout.block_count(), format.block_size());
    println!("Encoded size: {} bytes", format.encoded_size(shape.width, shape.height));

    if shape.width % 8 != 0 || shape.height % 8 != 0 {
        println!("Note: dimensions are not multiples of 8; edge tiles are padded");
    }
}

/// All `*.rgba` files directly inside `dir`, sorted.
///
/// The directory name is matched literally, even if it contains glob
/// metacharacters.
fn list_rgba_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir = dir.to_str().context("Input directory is not valid UTF-8")?;
    let pattern = format!("{}/*.rgba", glob::Pattern::escape(dir));

    let inputs = glob::glob(&pattern)
        .context("Invalid input directory pattern")?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .collect();

    Ok(inputs)
}

fn cmd_batch(input_dir: &Path, output_dir: &Path, shape: Shape, quality: QuantizerQuality) -> Result<()> {
    let inputs = list_rgba_files(input_dir)?;
    if inputs.is_empty() {
        anyhow::bail!("No .rgba files found in {}", input_dir.display());
    }

    println!("Encoding {} files to {}...", inputs.len(), output_dir.display());
    fs::create_dir_all(output_dir)?;

    let encoder = encoder_for(shape, quality);
    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let mut encoded = 0;
    let mut errors = 0;

    for input in &inputs {
        let output = output_dir.join(input.file_name().unwrap_or_default()).with_extension("etc1");

        match encode_file(&encoder, input, &output) {
            Ok(_) => encoded += 1,
            Err(e) => {
                pb.suspend(|| eprintln!("Error encoding {}: {:#}", input.display(), e));
                errors += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!(
        "Encoded {} files in {:?} ({} errors)",
        encoded,
        start.elapsed(),
        errors
    );

    if errors > 0 {
        anyhow::bail!("{} of {} files failed to encode", errors, inputs.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_rgba_files_with_glob_characters_in_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("tex[1]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a.rgba"), [0u8; 256]).unwrap();
        fs::write(dir.join("b.rgba"), [0u8; 256]).unwrap();
        fs::write(dir.join("notes.txt"), b"skip").unwrap();

        let files = list_rgba_files(&dir).unwrap();
        assert_eq!(files, vec![dir.join("a.rgba"), dir.join("b.rgba")]);
    }

    #[test]
    fn test_batch_fails_when_a_file_fails() {
        let root = tempfile::tempdir().unwrap();
        let input = root.path().join("in");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("good.rgba"), [0u8; 8 * 8 * 4]).unwrap();
        fs::write(input.join("short.rgba"), [0u8; 10]).unwrap();

        let shape = Shape {
            width: 8,
            height: 8,
            alpha: false,
        };
        let output = root.path().join("out");
        let result = cmd_batch(&input, &output, shape, QuantizerQuality::Low);

        assert!(result.is_err());
        assert!(output.join("good.etc1").exists());
        assert!(!output.join("short.etc1").exists());
    }

    #[test]
    fn test_decode_errors_name_the_file() {
        let root = tempfile::tempdir().unwrap();
        let input = root.path().join("texture.etc1");
        let shape = Shape {
            width: 8,
            height: 8,
            alpha: false,
        };

        let err = cmd_decode(&input, &root.path().join("out.rgba"), shape).unwrap_err();
        assert!(format!("{err:#}").contains("texture.etc1"), "{err:#}");

        fs::write(&input, [0u8; 8]).unwrap();
        let err = cmd_decode(&input, &root.path().join("out.rgba"), shape).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to decode"), "{err:#}");
        assert!(format!("{err:#}").contains("texture.etc1"), "{err:#}");
    }
}
