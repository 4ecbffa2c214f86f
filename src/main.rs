//! skybox-cubemap CLI - HDR panorama to skybox converter.
//!
//! Converts an equirectangular OpenEXR/Radiance panorama into six JPEG
//! cubemap faces.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use skybox_cubemap::cubemap::{is_auto_face_size, resolve_face_size};
use skybox_cubemap::export::{face_path, JpegExportOptions, DEFAULT_JPEG_QUALITY};
use skybox_cubemap::pipeline::{convert_panorama, ConsoleReporter, ConvertError, ConvertOptions};
use skybox_cubemap::tonemap::{ToneMapConfig, DEFAULT_EXPOSURE, DEFAULT_GAMMA};
use skybox_cubemap::{load_panorama, CubeFaceId};

/// Largest face edge accepted on the command line.
const MAX_FACE_SIZE: u32 = 16384;

/// HDR equirectangular panorama to skybox cubemap converter.
#[derive(Parser)]
#[command(name = "skybox-cubemap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a panorama into six cubemap face images.
    Convert {
        /// Input panorama (.exr, or any float image such as .hdr).
        input: PathBuf,

        /// Output directory for the face images (created if missing).
        #[arg(short, long, default_value = "textures/skybox")]
        output: PathBuf,

        /// Face edge length in pixels. Defaults to half the panorama height.
        #[arg(short, long)]
        size: Option<u32>,

        /// Exposure multiplier applied before clamping.
        #[arg(long, default_value_t = DEFAULT_EXPOSURE)]
        exposure: f32,

        /// Display gamma.
        #[arg(long, default_value_t = DEFAULT_GAMMA)]
        gamma: f64,

        /// JPEG quality (1-100).
        #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY)]
        quality: u8,
    },

    /// Display information about a panorama and the cubemap it would produce.
    Info {
        /// Input panorama.
        input: PathBuf,

        /// Face edge length in pixels, as passed to `convert`.
        #[arg(short, long)]
        size: Option<u32>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            size,
            exposure,
            gamma,
            quality,
        } => run_convert(&input, &output, size, exposure, gamma, quality),
        Commands::Info { input, size } => run_info(&input, size),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn validate_size(size: Option<u32>) {
    if let Some(size) = size {
        if size > MAX_FACE_SIZE {
            eprintln!("Error: Face size must be at most {}", MAX_FACE_SIZE);
            std::process::exit(1);
        }
    }
}

fn run_convert(
    input: &Path,
    output: &Path,
    size: Option<u32>,
    exposure: f32,
    gamma: f64,
    quality: u8,
) -> Result<(), ConvertError> {
    // Validate parameters
    validate_size(size);

    if !exposure.is_finite() || exposure <= 0.0 {
        eprintln!("Error: Exposure must be a positive number");
        std::process::exit(1);
    }

    if !gamma.is_finite() || gamma <= 0.0 {
        eprintln!("Error: Gamma must be a positive number");
        std::process::exit(1);
    }

    if !(1..=100).contains(&quality) {
        eprintln!("Error: Quality must be between 1 and 100");
        std::process::exit(1);
    }

    println!("Skybox Cubemap Converter");
    println!("========================");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());
    println!("Exposure: {}  Gamma: {}  Quality: {}", exposure, gamma, quality);
    println!();

    let options = ConvertOptions {
        face_size: size,
        tonemap: ToneMapConfig { exposure, gamma },
        jpeg: JpegExportOptions { quality },
    };

    convert_panorama(input, output, &options, &ConsoleReporter)?;
    Ok(())
}

fn run_info(input: &Path, size: Option<u32>) -> Result<(), ConvertError> {
    validate_size(size);

    let panorama = load_panorama(input)?;
    let (width, height) = (panorama.width(), panorama.height());

    println!("Panorama Information");
    println!("====================");
    println!("File: {}", input.display());
    println!("Dimensions: {}x{}", width, height);
    if panorama.has_equirect_aspect() {
        println!("Aspect: 2:1 (equirectangular)");
    } else {
        println!("Aspect: {:.3}:1 (expected 2:1, output will be distorted)", width as f64 / height as f64);
    }

    let face_size = resolve_face_size(height, size)?;
    let source = if is_auto_face_size(size) { "auto" } else { "requested" };
    println!("Face size: {}x{} ({})", face_size, face_size, source);

    let face_bytes = (face_size as u64) * (face_size as u64) * 3;
    println!(
        "Uncompressed cubemap: {:.2} MB",
        (face_bytes * 6) as f64 / (1024.0 * 1024.0)
    );

    println!("\nOutputs:");
    for face in CubeFaceId::all() {
        println!("  {}", face_path(Path::new("<output>"), face).display());
    }

    Ok(())
}
