use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_grid::{Palette, PaletteMapper, PaletteMatcher, PerceptualSpace, Rgba};
use pixelcut::models::{AppConfig, ConfigSource, CONFIG_FILE_ENV};
use pixelcut::services::{default_output_paths, ConversionPipeline, PngFileSink, XlsxFileSink};

/// Preset name used in default output paths when `--colors` is given
const CUSTOM_PRESET: &str = "custom";

#[derive(Parser)]
#[command(name = "pixelcut")]
#[command(about = "Turn images into palette-constrained grids for paper mosaics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Downsample an image, map it to a palette, write a PNG preview and an xlsx color map
    Convert {
        /// Input image
        input: PathBuf,

        /// Palette preset name from the configuration
        #[arg(short, long, conflicts_with = "colors")]
        preset: Option<String>,

        /// Palette as comma-separated hex colors (e.g. "#000000,#FFFFFF,#FF0000")
        #[arg(long)]
        colors: Option<String>,

        /// Downsampling factor (default from configuration)
        #[arg(short, long)]
        scale: Option<u32>,

        /// Output PNG path [default: <INPUT>_<PRESET>.png]
        #[arg(long)]
        image_out: Option<PathBuf>,

        /// Output xlsx path [default: <INPUT>_<PRESET>.xlsx]
        #[arg(long)]
        sheet_out: Option<PathBuf>,

        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Map colors onto their perceptually nearest entries of a reference palette
    Match {
        /// Colors to match, comma-separated hex
        #[arg(long)]
        colors: String,

        /// Reference preset name from the configuration
        #[arg(short, long, conflicts_with = "reference")]
        preset: Option<String>,

        /// Reference palette as comma-separated hex colors
        #[arg(long)]
        reference: Option<String>,

        /// Color space distances are measured in
        #[arg(long, value_enum, default_value_t = Space::Lab)]
        space: Space,

        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List configured palette presets
    Presets {
        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Space {
    /// CIE L*a*b* (D65)
    Lab,
    /// Oklab
    Oklab,
}

impl From<Space> for PerceptualSpace {
    fn from(space: Space) -> Self {
        match space {
            Space::Lab => PerceptualSpace::CieLab,
            Space::Oklab => PerceptualSpace::Oklab,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelcut=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Convert {
            input,
            preset,
            colors,
            scale,
            image_out,
            sheet_out,
            config,
        }) => run_convert_command(
            &input,
            preset.as_deref(),
            colors.as_deref(),
            scale,
            image_out,
            sheet_out,
            config.as_deref(),
        ),
        Some(Commands::Match {
            colors,
            preset,
            reference,
            space,
            config,
        }) => run_match_command(
            &colors,
            preset.as_deref(),
            reference.as_deref(),
            space,
            config.as_deref(),
        ),
        Some(Commands::Presets { config }) => run_presets_command(config.as_deref()),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let source = ConfigSource::resolve(path);
    AppConfig::load(&source).with_context(|| format!("loading configuration from {source}"))
}

/// Split a comma-separated hex list into a palette
fn parse_palette(list: &str) -> anyhow::Result<Palette> {
    let hex: Vec<&str> = list.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
    Palette::from_hex(&hex).with_context(|| format!("invalid palette {list:?}"))
}

/// Resolve the palette and its name from `--colors`, `--preset` or the configured default
fn select_palette(
    config: &AppConfig,
    preset: Option<&str>,
    colors: Option<&str>,
) -> anyhow::Result<(String, Palette)> {
    if let Some(colors) = colors {
        return Ok((CUSTOM_PRESET.to_string(), parse_palette(colors)?));
    }
    let Some(name) = preset.or(config.default_preset()) else {
        bail!("no palette given: use --preset or --colors, or set default_preset in the configuration");
    };
    Ok((name.to_string(), config.palette(name)?))
}

/// Run the full conversion pipeline on one image
fn run_convert_command(
    input: &Path,
    preset: Option<&str>,
    colors: Option<&str>,
    scale: Option<u32>,
    image_out: Option<PathBuf>,
    sheet_out: Option<PathBuf>,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let (name, palette) = select_palette(&config, preset, colors)?;
    let scale = scale.unwrap_or(config.scale);

    let (default_png, default_xlsx) = default_output_paths(input, &name);
    let image_sink = PngFileSink::new(image_out.unwrap_or(default_png));
    let table_sink = XlsxFileSink::new(sheet_out.unwrap_or(default_xlsx));

    tracing::info!(preset = %name, colors = palette.len(), scale, "Converting");

    let pipeline = ConversionPipeline::new(PaletteMapper::new(palette)?.scale(scale));
    let conversion = pipeline
        .run_file(input, &image_sink, &table_sink)
        .with_context(|| format!("converting {}", input.display()))?;

    let report = conversion.report;
    if report.image.is_ok() {
        println!("Image: {}", report.image.destination);
    }
    if report.table.is_ok() {
        println!("Sheet: {}", report.table.destination);
    }
    report.into_result()?;
    Ok(())
}

/// Print the nearest reference color for every candidate
fn run_match_command(
    colors: &str,
    preset: Option<&str>,
    reference: Option<&str>,
    space: Space,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let reference = match reference {
        Some(list) => parse_palette(list)?,
        None => {
            let config = load_config(config)?;
            select_palette(&config, preset, None)?.1
        }
    };
    let matcher = PaletteMatcher::with_space(&reference, space.into())?;

    for candidate in colors.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let color: Rgba = candidate
            .parse()
            .with_context(|| format!("invalid color {candidate:?}"))?;
        println!("{candidate} -> {}", matcher.nearest(color).to_hex_rgb());
    }
    Ok(())
}

fn run_presets_command(config: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let default = config.default_preset();

    for name in config.preset_names() {
        let size = config.presets.get(name).map_or(0, Vec::len);
        let marker = if Some(name) == default { " (default)" } else { "" };
        println!("{name:<24} {size:>3} colors{marker}");
    }
    Ok(())
}

/// Show version, configuration source and available commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_FILE_ENV).ok();

    println!("Pixelcut v{VERSION}");
    println!("Palette-constrained grids for paper mosaics\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_FILE_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let source = ConfigSource::resolve(None);
    println!("\nConfiguration: {source}");
    match AppConfig::load(&source) {
        Ok(config) => {
            println!("  presets       = {}", config.presets.len());
            println!(
                "  default       = {}",
                config.default_preset().unwrap_or("(none)")
            );
            println!("  scale         = {}", config.scale);
        }
        Err(e) => println!("  error: {e}"),
    }

    println!("\nCommands:");
    println!("  pixelcut convert <INPUT>   Write a PNG preview and an xlsx color map");
    println!("  pixelcut match --colors    Snap colors onto a reference palette");
    println!("  pixelcut presets           List palette presets");
    println!("  pixelcut --help            Show all options");
}
