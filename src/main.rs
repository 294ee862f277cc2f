use anyhow::{Context, Result};
use clap::Parser;
use number_names::{try_get_name, NameError, MAX_SUPPORTED};
use tracing::{debug, info};
use tracing_subscriber::filter::{Directive, EnvFilter};

mod config;

use config::{Config, LogFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the English name of a number", long_about = None)]
struct Args {
    /// Non-negative integer to name
    #[arg(value_parser = parse_number, allow_negative_numbers = true)]
    number: u128,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<String>,
}

fn parse_number(value: &str) -> Result<u128, NameError> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if value.strip_prefix('-').is_some_and(is_digits) {
        return Err(NameError::Negative(value.to_string()));
    }
    if !is_digits(value) {
        return Err(NameError::Parse(value.to_string()));
    }

    let out_of_range = || NameError::OutOfRange {
        number: value.to_string(),
        max: MAX_SUPPORTED,
    };

    // All digits, so the only way parsing fails is overflowing u128.
    let number: u128 = value.parse().map_err(|_| out_of_range())?;
    if number > MAX_SUPPORTED {
        return Err(out_of_range());
    }

    Ok(number)
}

fn get_config_path(args: &Args) -> Option<String> {
    if let Some(path) = &args.config {
        return Some(path.clone());
    }

    if let Ok(path) = std::env::var("CONFIG_FILE") {
        return Some(path);
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        let config_path = format!("{}/number-names/config.toml", xdg_config_home);
        if std::path::Path::new(&config_path).exists() {
            return Some(config_path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let config_path = format!("{}/.config/number-names/config.toml", home.display());
        if std::path::Path::new(&config_path).exists() {
            return Some(config_path);
        }
    }

    None
}

fn init_logging(config: &Config) -> Result<()> {
    let default_directive: Directive = config
        .get_logging_level()
        .parse()
        .with_context(|| format!("Invalid log level {:?}", config.get_logging_level()))?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_directive)
        .from_env_lossy();

    // stdout is reserved for the name itself
    match config.get_logging_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = get_config_path(&args);
    let config = match &config_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => Config::default(),
    };

    init_logging(&config)?;

    match &config_path {
        Some(path) => info!("Loaded config from: {}", path),
        None => debug!("No config file found, using defaults"),
    }

    let name = try_get_name(args.number)?;
    debug!("Named {} as {:?}", args.number, name);

    println!("{}", name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("0"), Ok(0));
        assert_eq!(parse_number("125"), Ok(125));
        assert_eq!(parse_number("007"), Ok(7));
        assert_eq!(parse_number("999999999999999999999"), Ok(MAX_SUPPORTED));
    }

    #[test]
    fn test_parse_number_rejects_negative() {
        assert_eq!(
            parse_number("-5"),
            Err(NameError::Negative("-5".to_string()))
        );
    }

    #[test]
    fn test_parse_number_rejects_non_numeric() {
        for value in ["", "abc", "12a", "1,000", "1_000", " 5", "+5", "-", "1.5"] {
            assert_eq!(
                parse_number(value),
                Err(NameError::Parse(value.to_string())),
                "accepted {value:?}"
            );
        }
    }

    #[test]
    fn test_parse_number_rejects_too_large() {
        assert!(matches!(
            parse_number("1000000000000000000000"),
            Err(NameError::OutOfRange { .. })
        ));
        // Past u128::MAX as well
        assert!(matches!(
            parse_number(&"9".repeat(60)),
            Err(NameError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["number-names", "7011"]).unwrap();
        assert_eq!(args.number, 7011);
        assert!(args.config.is_none());

        let args =
            Args::try_parse_from(["number-names", "--config", "/tmp/config.toml", "42"]).unwrap();
        assert_eq!(args.number, 42);
        assert_eq!(get_config_path(&args), Some("/tmp/config.toml".to_string()));
    }

    #[test]
    fn test_args_missing_number() {
        let err = Args::try_parse_from(["number-names"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_args_invalid_number() {
        for value in ["-5", "five", "1000000000000000000000"] {
            let err = Args::try_parse_from(["number-names", value]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "accepted {value:?}");
        }
    }
}
