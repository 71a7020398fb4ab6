use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epd_convert::models::{ConvertConfig, OutputEncoding};
use epd_convert::services::Converter;

#[derive(Parser)]
#[command(name = "epd-convert")]
#[command(about = "Convert images for 1.54\" 3/4-color NFC e-paper tags", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Settings shared by the commands that quantize
#[derive(Args)]
struct PaletteArgs {
    /// Palette: "bwry" (black/white/yellow/red) or "bwr" (black/white/red)
    #[arg(short, long)]
    format: Option<String>,

    /// YAML configuration file (flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to 4EI, indexed BMP or PNG preview
    Convert {
        /// Input image (PNG, JPEG, GIF, WebP, BMP)
        input: PathBuf,

        /// Output file; the extension picks the encoding unless --encoding is set
        output: PathBuf,

        #[command(flatten)]
        palette: PaletteArgs,

        /// Output encoding: 4ei, bmp or png
        #[arg(short, long)]
        encoding: Option<OutputEncoding>,

        /// Nearest-color mapping without error diffusion
        #[arg(long)]
        no_dither: bool,

        /// Clamp error-adjusted pixels to 0..=255 before classification
        #[arg(long)]
        clamp: bool,
    },
    /// Write a horizontal stripe pattern with one band per palette color
    TestPattern {
        /// Output file
        output: PathBuf,

        #[command(flatten)]
        palette: PaletteArgs,

        /// Output encoding: 4ei, bmp or png
        #[arg(short, long)]
        encoding: Option<OutputEncoding>,
    },
    /// Pack a bitmap that already has the panel size and palette colors into 4EI
    Pack {
        /// Prepared input image
        input: PathBuf,

        /// Output 4EI file
        output: PathBuf,

        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Render a 4EI file as a PNG preview
    Decode {
        /// Input 4EI file
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,

        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Print the dimensions and color usage of a 4EI file
    Info {
        /// Input 4EI file
        input: PathBuf,

        #[command(flatten)]
        palette: PaletteArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epd_convert=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            palette,
            encoding,
            no_dither,
            clamp,
        } => {
            let mut config = load_config(&palette)?;
            config.dither = config.dither && !no_dither;
            config.clamp = config.clamp || clamp;
            run_convert(config, &input, &output, encoding)
        }
        Commands::TestPattern {
            output,
            palette,
            encoding,
        } => run_test_pattern(load_config(&palette)?, &output, encoding),
        Commands::Pack {
            input,
            output,
            palette,
        } => run_pack(load_config(&palette)?, &input, &output),
        Commands::Decode {
            input,
            output,
            palette,
        } => run_decode(load_config(&palette)?, &input, &output),
        Commands::Info { input, palette } => run_info(load_config(&palette)?, &input),
    }
}

/// Config file (or defaults) with the --format flag applied
fn load_config(args: &PaletteArgs) -> anyhow::Result<ConvertConfig> {
    let mut config = match &args.config {
        Some(path) => ConvertConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConvertConfig::default(),
    };
    if let Some(format) = &args.format {
        config.format = format.clone();
    }
    Ok(config)
}

fn run_convert(
    config: ConvertConfig,
    input: &Path,
    output: &Path,
    encoding: Option<OutputEncoding>,
) -> anyhow::Result<()> {
    let converter = Converter::new(config)?;
    let encoding = converter.encoding_for(output, encoding);
    let written = converter
        .convert_file(input, output, encoding)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    println!("Wrote {} ({written} bytes, {encoding})", output.display());
    Ok(())
}

fn run_test_pattern(
    config: ConvertConfig,
    output: &Path,
    encoding: Option<OutputEncoding>,
) -> anyhow::Result<()> {
    let converter = Converter::new(config)?;
    let encoding = converter.encoding_for(output, encoding);
    let bytes = converter.test_pattern(encoding)?;
    write_output(output, &bytes)?;
    println!(
        "Wrote {} test pattern to {} ({} bytes, {encoding})",
        converter.palette().format(),
        output.display(),
        bytes.len()
    );
    Ok(())
}

fn run_pack(config: ConvertConfig, input: &Path, output: &Path) -> anyhow::Result<()> {
    let converter = Converter::new(config)?;
    let bytes = converter
        .pack_prepared(input)
        .with_context(|| format!("Failed to pack {}", input.display()))?;
    write_output(output, &bytes)?;
    println!("Packed {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}

fn run_decode(config: ConvertConfig, input: &Path, output: &Path) -> anyhow::Result<()> {
    let converter = Converter::new(config)?;
    let data = read_input(input)?;
    let image = converter
        .decode_4ei(&data)
        .with_context(|| format!("Failed to decode {}", input.display()))?;
    let bytes = converter.encode(&image, OutputEncoding::Png)?;
    write_output(output, &bytes)?;
    println!(
        "Rendered {} ({}x{}) to {}",
        input.display(),
        image.width(),
        image.height(),
        output.display()
    );
    Ok(())
}

fn run_info(config: ConvertConfig, input: &Path) -> anyhow::Result<()> {
    let converter = Converter::new(config)?;
    let data = read_input(input)?;
    let image = converter
        .decode_4ei(&data)
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    println!("{}", input.display());
    println!("  Size:    {}x{}", image.width(), image.height());
    println!("  Palette: {}", image.palette().format());
    let total = image.indices().len().max(1) as f64;
    for (entry, count) in image.palette().entries().iter().zip(image.histogram()) {
        println!(
            "  {:<7} (code {}): {:>6} px  {:>5.1}%",
            entry.name.as_str(),
            entry.code,
            count,
            count as f64 * 100.0 / total
        );
    }
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
