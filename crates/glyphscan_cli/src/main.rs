use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use glyphscan::{
    AsciiOptions, AsciiRenderer, BrightnessFormula, RenderOutput, ScalePolicy, DEFAULT_REPEAT,
    DEFAULT_SCALE_PERCENT,
};
use log::{debug, warn, LevelFilter};

const USAGE_MESSAGE: &str = "Not enough arguments! At least need an image filepath...";
const USAGE_EXIT_CODE: i32 = -1;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert an image to ASCII art")]
struct Cli {
    /// Input image path
    input: PathBuf,
    /// Presence tokens: debug, invert, min_max, lum; anything else is ignored
    tokens: Vec<String>,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Times each glyph is repeated horizontally
    #[arg(
        long,
        default_value_t = DEFAULT_REPEAT,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    repeat: usize,
    /// Rescale percentage applied to both axes (1..=100)
    #[arg(
        long,
        default_value_t = DEFAULT_SCALE_PERCENT,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    scale: u32,
    /// Values printed by the debug trace
    #[arg(long, value_enum, default_value = "glyphs")]
    trace: TraceKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Token {
    Debug,
    Invert,
    #[value(name = "min_max")]
    MinMax,
    Lum,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TraceKind {
    Pixels,
    Brightness,
    Glyphs,
}

/// Configuration resolved from the command line.
#[derive(Debug)]
struct Config {
    input: PathBuf,
    debug: bool,
    trace: TraceKind,
    options: AsciiOptions,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut options = self.settings.to_options();
        let mut debug = false;
        for name in &self.tokens {
            let Ok(token) = Token::from_str(name, false) else {
                warn!("ignoring unknown token {name:?}");
                continue;
            };
            match token {
                Token::Debug => debug = true,
                Token::Invert => options.invert = true,
                Token::MinMax => options.formula = BrightnessFormula::MinMax,
                Token::Lum => options.formula = BrightnessFormula::Luminosity,
            }
        }

        Config { input: self.input, debug, trace: self.settings.trace, options }
    }
}

impl RenderSettings {
    fn to_options(&self) -> AsciiOptions {
        let mut options = AsciiOptions::default();
        options.repeat = self.repeat;
        options.scale = if self.scale == 100 {
            ScalePolicy::Original
        } else {
            ScalePolicy::percent(self.scale)
        };
        options
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let code = run(std::env::args_os(), &mut out)?;
    out.flush()?;

    if code != 0 {
        process::exit(code);
    }
    Ok(())
}

/// Parse `args`, render the image and write the report. Returns the exit code.
fn run<I, T, W>(args: I, out: &mut W) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            writeln!(out, "{USAGE_MESSAGE}")?;
            return Ok(USAGE_EXIT_CODE);
        },
        Err(err) => err.exit(),
    };

    let config = cli.into_config();
    debug!("{config:?}");

    let output = AsciiRenderer::default()
        .render_path(&config.input, &config.options)
        .with_context(|| format!("failed to render {:?}", config.input))?;

    write_report(out, &config, &output).context("failed to write to stdout")?;
    Ok(0)
}

fn write_report<W: Write>(out: &mut W, config: &Config, output: &RenderOutput) -> io::Result<()> {
    if config.debug {
        write_dimensions(out, output)?;
    }

    output.glyphs.write_to(out, output.repeat)?;

    if config.debug {
        match config.trace {
            TraceKind::Pixels => output.pixels.dump(out, "Iterating through pixels: ", |pixel| {
                let [r, g, b, a] = pixel.0;
                format!("({r}, {g}, {b}, {a})")
            })?,
            TraceKind::Brightness => {
                output.brightness.dump(out, "Iterating through: ", |value| *value)?
            },
            TraceKind::Glyphs => output.glyphs.dump(out, "Iterating through: ", |ch| *ch)?,
        }
        write_dimensions(out, output)?;
    }

    writeln!(out, "Complete! Exiting...")
}

fn write_dimensions<W: Write>(out: &mut W, output: &RenderOutput) -> io::Result<()> {
    writeln!(out, "Image width: {}", output.width())?;
    writeln!(out, "Image height: {}", output.height())?;
    writeln!(out)
}
