//! Command line front end for tincture palettes.
//!
//! ```text
//! tincture shades '#ff5500' '#3b82f6'             # :root { --color-primary: ... }
//! tincture shades '#ff5500' --name brand -f json
//! tincture shades '#ff5500' -f swatch             # colored preview in the terminal
//! tincture config                                 # default controller config as YAML
//! ```
//!
//! Unlike the browser controller, which ignores malformed colors, the CLI
//! reports them as errors.

use std::fmt::Write;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use console::Style;
use serde::Serialize;
use tincture::ThemeConfig;
use tincture_palette::{render_css, HexColor, Rgb, ShadeSet};
use tracing_subscriber::EnvFilter;

/// Generate shade palettes from base colors
#[derive(Debug, Parser)]
#[command(name = "tincture", version)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by TINCTURE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the shade palette of one or more base colors
    Shades(ShadesArgs),

    /// Print the default controller configuration
    Config {
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Yaml)]
        format: ConfigFormat,
    },
}

#[derive(Debug, Args)]
pub struct ShadesArgs {
    /// Base colors in #RRGGBB form
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// Palette names, matched to colors in order [default: primary, accent, color3, ...]
    #[arg(short, long = "name")]
    pub names: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    pub format: Format,

    /// Rule selector for CSS output
    #[arg(long, default_value = ":root")]
    pub selector: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Css,
    Json,
    Yaml,
    Swatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

#[derive(Serialize)]
struct NamedPalette<'a> {
    name: &'a str,
    shades: &'a ShadeSet,
}

/// Installs the stderr logger. `TINCTURE_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TINCTURE_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs a parsed command, returning what should go to stdout.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Shades(args) => shades(args),
        Command::Config { format } => config(*format),
    }
}

/// Default palette name for the color at `index`.
fn default_name(index: usize) -> String {
    match index {
        0 => "primary".to_string(),
        1 => "accent".to_string(),
        n => format!("color{}", n + 1),
    }
}

fn shades(args: &ShadesArgs) -> Result<String> {
    if args.names.len() > args.colors.len() {
        bail!(
            "{} names given for {} colors",
            args.names.len(),
            args.colors.len()
        );
    }

    let mut palettes = Vec::with_capacity(args.colors.len());
    for (index, raw) in args.colors.iter().enumerate() {
        let color =
            HexColor::parse(raw).with_context(|| format!("invalid base color '{raw}'"))?;
        let name = args
            .names
            .get(index)
            .cloned()
            .unwrap_or_else(|| default_name(index));
        tracing::debug!(name = %name, color = %color, "generating shades");
        palettes.push((name, ShadeSet::generate(&color)));
    }

    let named: Vec<NamedPalette> = palettes
        .iter()
        .map(|(name, shades)| NamedPalette { name, shades })
        .collect();

    let output = match args.format {
        Format::Css => {
            let sets: Vec<(&str, &ShadeSet)> =
                palettes.iter().map(|(n, s)| (n.as_str(), s)).collect();
            render_css(&args.selector, &sets)
        }
        Format::Json => serde_json::to_string_pretty(&named)? + "\n",
        Format::Yaml => serde_yaml::to_string(&named)?,
        Format::Swatch => swatch(&named),
    };
    Ok(output)
}

fn config(format: ConfigFormat) -> Result<String> {
    let config = ThemeConfig::default();
    Ok(match format {
        ConfigFormat::Yaml => serde_yaml::to_string(&config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(&config)? + "\n",
    })
}

fn swatch(palettes: &[NamedPalette]) -> String {
    let label = Style::new().bold();
    let mut out = String::new();
    for palette in palettes {
        let _ = writeln!(out, "{}", label.apply_to(palette.name));
        for (key, color) in palette.shades.iter() {
            let block = Style::new().color256(rgb_to_ansi256(color.rgb()));
            let _ = writeln!(
                out,
                "  {:>3}  {}  {}",
                key.weight(),
                block.apply_to("██████"),
                color
            );
        }
    }
    out
}

/// Nearest xterm 256-color index.
fn rgb_to_ansi256(rgb: Rgb) -> u8 {
    let (r, g, b) = rgb.channels();
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let scale = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * scale(r) + 6 * scale(g) + scale(b)
    }
}
