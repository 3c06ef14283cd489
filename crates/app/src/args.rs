use std::fmt;
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

/// Command-line flags. Every field is an override; `None` defers to env, file, then defaults.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub log: Option<String>,
    pub title: Option<String>,
    pub no_hints: bool,
    pub help: bool,
}

impl Args {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config = Some(require_value(&mut args, "--config")?.into()),
                "--log" => parsed.log = Some(require_value(&mut args, "--log")?),
                "--title" => parsed.title = Some(require_value(&mut args, "--title")?),
                "--no-hints" => parsed.no_hints = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  fraction-quiz [--config <path>] [--log <directives>] [--title <text>] [--no-hints]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --title \"Fraction Quiz\"");
    eprintln!("  --log   info,services=debug");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FRACTIONS_CONFIG, FRACTIONS_LOG, FRACTIONS_LOG_FORMAT (pretty|json)");
}
