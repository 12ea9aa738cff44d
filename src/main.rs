use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gray_dither::DiffusionAlgorithm;
use monodither::models::AppConfig;
use monodither::services::{ConvertService, Operation};

#[derive(Parser)]
#[command(name = "monodither")]
#[command(about = "Monochrome error diffusion dithering for PNG images")]
struct Cli {
    /// YAML configuration file (default: $MONODITHER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither an image to black and white with error diffusion
    Dither {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Diffusion algorithm (see `monodither algorithms`)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Fixed quantization level instead of Otsu's
        #[arg(long)]
        threshold: Option<u8>,
    },
    /// Convert an image to grayscale
    Gray {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Gray policy: lightness, average or luminosity
        #[arg(short, long)]
        policy: Option<String>,
    },
    /// Binarize an image at a single level
    Threshold {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Pick the level with Otsu's method
        #[arg(long, conflicts_with = "level")]
        otsu: bool,

        /// Static level (pixels at or below it turn black)
        #[arg(long)]
        level: Option<u8>,

        /// Swap black and white
        #[arg(long)]
        invert: bool,
    },
    /// Stretch the grayscale to the full 0-255 range
    Normalize {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// List available diffusion algorithms
    Algorithms,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Commands::Algorithms = cli.command {
        print_algorithms();
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref());
    let (operation, input, output) = match cli.command {
        Commands::Dither {
            input,
            output,
            algorithm,
            threshold,
        } => (
            Operation::dither(&config, algorithm.as_deref(), threshold),
            input,
            output,
        ),
        Commands::Gray {
            input,
            output,
            policy,
        } => (Operation::gray(&config, policy.as_deref()), input, output),
        Commands::Threshold {
            input,
            output,
            otsu,
            level,
            invert,
        } => (
            Operation::threshold(&config, otsu, level, invert),
            input,
            output,
        ),
        Commands::Normalize { input, output } => (Operation::normalize(), input, output),
        Commands::Algorithms => return Ok(()),
    };

    run_convert(operation, &input, &output)
}

/// Logs go to stderr without timestamps; `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "monodither=debug,gray_dither=debug"
    } else {
        "monodither=info,gray_dither=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run_convert(operation: Operation, input: &Path, output: &Path) -> anyhow::Result<()> {
    let service = ConvertService::new(operation);
    let report = service
        .convert_file(input, output)
        .with_context(|| format!("Failed to convert {} to {}", input.display(), output.display()))?;

    println!(
        "Wrote {} ({}x{}, {} white pixels)",
        output.display(),
        report.width,
        report.height,
        report.white
    );
    Ok(())
}

fn print_algorithms() {
    println!("{:<22} {:>5} {:>7} {:>11}", "NAME", "CELLS", "DIVISOR", "PROPAGATES");
    for algorithm in DiffusionAlgorithm::ALL {
        let kernel = algorithm.kernel();
        let marker = if algorithm == DiffusionAlgorithm::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<22} {:>5} {:>7} {:>10.0}%{marker}",
            algorithm.name(),
            kernel.cells(),
            kernel.divisor,
            kernel.propagation() * 100.0
        );
    }
}
