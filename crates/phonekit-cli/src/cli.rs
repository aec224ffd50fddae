//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// phonekit: normalize, validate, and classify phone numbers.
///
/// Detects countries from dial-code prefixes and renders numbers in US,
/// international, national, or E.164 format.
#[derive(Parser, Debug)]
#[command(name = "phonekit", version, about)]
pub struct Cli {
    /// Country database (JSON); defaults to the configured or bundled database
    #[arg(long, global = true, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Configuration file; defaults to the XDG config location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format a phone number.
    Format(FormatArgs),
    /// Check whether a phone number is plausible (exit code 1 when not).
    Validate(ValidateArgs),
    /// Print the full analysis report as JSON.
    Info(InputArgs),
    /// List the dial-code prefixes a number could start with.
    Detect(InputArgs),
    /// Look up one country by ISO2, ISO3, dial code, or name.
    Country(CountryArgs),
    /// List every country matching all given criteria.
    Search(SearchArgs),
    /// List the distinct dial codes in numeric order.
    DialCodes,
    /// Print registry statistics as JSON.
    Stats,
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Phone number
    pub input: String,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Phone number
    pub input: String,

    /// Output format: us, international, national, e164
    #[arg(short, long)]
    pub format: Option<String>,

    /// Country as ISO2, ISO3, or dial code
    #[arg(short, long)]
    pub country: Option<String>,

    /// Detect the country from the leading digits
    #[arg(short, long)]
    pub auto_detect: bool,

    /// Fail when no national digits remain after the dial code
    #[arg(short, long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Phone number
    pub input: String,

    /// Country as ISO2, ISO3, or dial code
    #[arg(short, long)]
    pub country: Option<String>,

    /// Require a matching dial code
    #[arg(short, long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct CountryArgs {
    /// ISO2, ISO3, dial code, or part of the name
    pub query: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Part of the country name
    #[arg(long)]
    pub name: Option<String>,

    /// Dial code, with or without `+`
    #[arg(long)]
    pub dial_code: Option<String>,

    /// ISO2 code
    #[arg(long)]
    pub iso2: Option<String>,

    /// ISO3 code
    #[arg(long)]
    pub iso3: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from([
            "phonekit",
            "format",
            "15123456789",
            "--format",
            "international",
            "--country",
            "DE",
            "--strict",
        ])
        .expect("parse format command");

        match cli.command {
            Command::Format(args) => {
                assert_eq!(args.input, "15123456789");
                assert_eq!(args.format.as_deref(), Some("international"));
                assert_eq!(args.country.as_deref(), Some("DE"));
                assert!(!args.auto_detect);
                assert!(args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_registry() {
        let cli = Cli::try_parse_from(["phonekit", "stats", "--registry", "/tmp/countries.json"])
            .expect("parse stats command");
        assert_eq!(cli.registry, Some(PathBuf::from("/tmp/countries.json")));
        assert!(matches!(cli.command, Command::Stats));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["phonekit"]).is_err());
    }
}
