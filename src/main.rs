use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luma_index::{brightness_of_code, BrightnessIndex, ColorCode, HslCache, LEVELS};
use luma_palette::models::{AppConfig, PaletteRequest, CONFIG_ENV_VAR};
use luma_palette::rendering::{render, ExportFormat, RenderOptions};
use luma_palette::services::{PaletteSelector, ShuffleMode};

#[derive(Parser)]
#[command(name = "luma-palette")]
#[command(about = "Generate color palettes of equal perceived brightness")]
struct Cli {
    /// YAML config file (overrides LUMA_PALETTE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a palette and print it to stdout
    Generate {
        /// Target brightness (0-255, clamped)
        #[arg(short, long, allow_negative_numbers = true)]
        brightness: Option<f64>,

        /// Allowed deviation from the target in levels
        #[arg(short, long, allow_negative_numbers = true)]
        tolerance: Option<f64>,

        /// Number of colors sampled before the saturation filter
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<f64>,

        /// Fixed RNG seed for a reproducible palette
        #[arg(long)]
        seed: Option<u64>,

        /// Use the legacy biased shuffle
        #[arg(long)]
        legacy_shuffle: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
    /// Show code, RGB, brightness level and HSL of colors
    Inspect {
        /// Colors as #rgb or #rrggbb
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Show how many colors each brightness level holds
    Levels {
        /// First level to show
        #[arg(long, default_value_t = 0)]
        from: u8,

        /// Last level to show
        #[arg(long, default_value_t = 255)]
        to: u8,
    },
}

/// Where the active configuration came from
enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Flag(path) => write!(f, "{} (--config)", path.display()),
            ConfigSource::Env(path) => write!(f, "{} ({CONFIG_ENV_VAR})", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so exports on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luma_palette=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let (config, source) = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Generate {
            brightness,
            tolerance,
            size,
            seed,
            legacy_shuffle,
            format,
        }) => run_generate_command(
            &config,
            brightness,
            tolerance,
            size,
            seed,
            legacy_shuffle,
            format,
        ),
        Some(Commands::Inspect { colors }) => run_inspect_command(&colors),
        Some(Commands::Levels { from, to }) => run_levels_command(&config, from, to),
        None => {
            run_status_command(&config, &source);
            Ok(())
        }
    }
}

/// Load the config named by `--config`, else by the environment, else use
/// defaults.
///
/// An explicit `--config` must load. A file named by the environment falls
/// back to defaults with a warning.
fn resolve_config(flag: Option<&Path>) -> anyhow::Result<(AppConfig, ConfigSource)> {
    if let Some(path) = flag {
        let config = AppConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        return Ok((config, ConfigSource::Flag(path.to_path_buf())));
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
        let config = AppConfig::load_or_default(Some(&path));
        return Ok((config, ConfigSource::Env(path)));
    }

    Ok((AppConfig::default(), ConfigSource::Defaults))
}

/// Build the full index now, or hand out the lazily built shared one
fn prepare_index(eager: bool) -> Cow<'static, BrightnessIndex> {
    if !eager {
        return Cow::Borrowed(BrightnessIndex::shared());
    }

    let start = Instant::now();
    let index = BrightnessIndex::build();
    tracing::info!(
        levels = LEVELS,
        codes = index.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Built brightness index"
    );
    Cow::Owned(index)
}

/// Generate a palette and print it in the requested format
fn run_generate_command(
    config: &AppConfig,
    brightness: Option<f64>,
    tolerance: Option<f64>,
    size: Option<f64>,
    seed: Option<u64>,
    legacy_shuffle: bool,
    format: Option<ExportFormat>,
) -> anyhow::Result<()> {
    let brightness = brightness.unwrap_or(f64::from(config.brightness));
    let tolerance = tolerance.unwrap_or(f64::from(config.tolerance));
    let size = size.unwrap_or(config.size as f64);

    let request = PaletteRequest::new(brightness, tolerance, size)
        .context("Invalid palette request")?;

    // Limit the truncated tolerance the selector will use
    if request.tolerance() > config.max_tolerance {
        anyhow::bail!(
            "tolerance {} exceeds max_tolerance {}",
            request.tolerance(),
            config.max_tolerance
        );
    }

    let shuffle = if legacy_shuffle {
        ShuffleMode::Legacy
    } else {
        config.shuffle
    };
    let mut rng = match seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let index = prepare_index(config.eager_index);
    let selector = PaletteSelector::new(&index, HslCache::global()).with_shuffle(shuffle);
    let palette = selector.select(&request, &mut rng)?;

    tracing::info!(
        brightness = request.brightness(),
        tolerance = request.tolerance(),
        size = request.size(),
        colors = palette.len(),
        "Generated palette"
    );

    let options = RenderOptions {
        svg_columns: config.svg_columns,
    };
    let output = render(&palette, format.unwrap_or(config.format), options)?;
    println!("{output}");

    Ok(())
}

/// Print details for each color
fn run_inspect_command(colors: &[String]) -> anyhow::Result<()> {
    let cache = HslCache::global();

    for input in colors {
        let code: ColorCode = input
            .parse()
            .with_context(|| format!("Invalid color '{input}'"))?;
        let (r, g, b) = code.to_rgb();
        let hsl = cache.get_or_compute(code);

        println!(
            "{code}  rgb({r:>3}, {g:>3}, {b:>3})  level {:>3}  hsl({:.4}, {:.4}, {:.4})",
            brightness_of_code(code),
            hsl.h,
            hsl.s,
            hsl.l
        );
    }

    Ok(())
}

/// Print bucket sizes for a range of levels
fn run_levels_command(config: &AppConfig, from: u8, to: u8) -> anyhow::Result<()> {
    if from > to {
        anyhow::bail!("--from {from} is above --to {to}");
    }

    let index = prepare_index(config.eager_index);

    println!("level  colors");
    for (level, bucket) in index.levels().filter(|(level, _)| (from..=to).contains(level)) {
        println!("{level:>5}  {:>6}", bucket.len());
    }

    Ok(())
}

/// Display version, configuration and available commands
fn run_status_command(config: &AppConfig, source: &ConfigSource) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("luma-palette v{VERSION}");
    println!("Palettes of equal perceived brightness\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        std::env::var(CONFIG_ENV_VAR).as_deref().unwrap_or("(not set)")
    );

    println!("\nConfiguration: {source}");
    println!("  brightness    = {}", config.brightness);
    println!(
        "  tolerance     = {} (max {})",
        config.tolerance, config.max_tolerance
    );
    println!("  size          = {}", config.size);
    println!("  shuffle       = {:?}", config.shuffle);
    println!(
        "  seed          = {}",
        config
            .seed
            .map_or_else(|| "(random)".to_string(), |seed| seed.to_string())
    );
    println!("  eager_index   = {}", config.eager_index);
    println!("  format        = {:?}", config.format);
    println!("  svg_columns   = {}", config.svg_columns);

    println!("\nCommands:");
    println!("  luma-palette generate   Generate a palette");
    println!("  luma-palette inspect    Show details for colors");
    println!("  luma-palette levels     Show colors per brightness level");
    println!("\nRun 'luma-palette --help' for more details.");
}
