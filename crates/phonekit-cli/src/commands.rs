//! Command handlers.

use crate::cli::{Cli, Command, CountryArgs, FormatArgs, SearchArgs, ValidateArgs};
use anyhow::{Context, Result};
use phonekit_core::AppConfig;
use phonekit_registry::{CountryQuery, CountryRecord, CountryRegistry, RegistryLoader};
use phonekit_resolver::{FormatRequest, Resolver, ValidationOptions};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Load configuration from `path`, or from the default location.
///
/// Environment overrides apply in both cases.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let mut config = AppConfig::load_from(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            config.apply_env_overrides(|key| std::env::var(key).ok())?;
            Ok(config)
        }
        None => AppConfig::load_with_env().context("loading config"),
    }
}

/// Load the registry from `override_path`, the configured path, or the bundled database.
pub fn load_registry(override_path: Option<&Path>, config: &AppConfig) -> Result<CountryRegistry> {
    match override_path.or(config.registry.path.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "using external country database");
            let loader = RegistryLoader::new(path)?;
            Ok(CountryRegistry::load_from(&loader)?)
        }
        None => Ok(CountryRegistry::bundled()?),
    }
}

/// Execute a parsed command, writing results to `out`.
///
/// Returns `false` when the number is invalid or a lookup found nothing.
pub fn run(cli: &Cli, config: &AppConfig, out: &mut impl Write) -> Result<bool> {
    let registry = load_registry(cli.registry.as_deref(), config)?;
    let resolver = Resolver::new(registry);

    debug!(command = ?cli.command, "dispatching command");

    match &cli.command {
        Command::Format(args) => format_number(&resolver, config, args, out),
        Command::Validate(args) => validate(&resolver, config, args, out),
        Command::Info(args) => {
            print_json(out, &resolver.analyze(&args.input))?;
            Ok(true)
        }
        Command::Detect(args) => detect(&resolver, &args.input, out),
        Command::Country(args) => country(&resolver, args, out),
        Command::Search(args) => search(resolver.registry(), args, out),
        Command::DialCodes => {
            for code in resolver.registry().all_dial_codes() {
                writeln!(out, "{code}")?;
            }
            Ok(true)
        }
        Command::Stats => {
            print_json(out, &resolver.registry().stats())?;
            Ok(true)
        }
    }
}

fn format_number(
    resolver: &Resolver,
    config: &AppConfig,
    args: &FormatArgs,
    out: &mut impl Write,
) -> Result<bool> {
    let request = FormatRequest {
        format: Some(
            args.format
                .clone()
                .unwrap_or_else(|| config.formatting.default_format.to_string()),
        ),
        country_code: args.country.clone(),
        auto_detect: args.auto_detect || config.formatting.auto_detect,
        strict: args.strict || config.formatting.strict,
    };

    let formatted = resolver
        .format_request(&args.input, &request)
        .map_err(|e| anyhow::anyhow!("{}: {e}", e.code()))?;

    writeln!(out, "{formatted}")?;
    Ok(true)
}

fn validate(
    resolver: &Resolver,
    config: &AppConfig,
    args: &ValidateArgs,
    out: &mut impl Write,
) -> Result<bool> {
    let options = ValidationOptions {
        country_code: args.country.clone(),
        strict: args.strict || config.formatting.strict,
    };

    let valid = resolver.is_valid(&args.input, &options);
    writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
    Ok(valid)
}

fn detect(resolver: &Resolver, input: &str, out: &mut impl Write) -> Result<bool> {
    let candidates = resolver.detect(input);
    if candidates.is_empty() {
        writeln!(out, "no dial code matches")?;
        return Ok(false);
    }

    for candidate in candidates {
        let names: Vec<&str> = candidate
            .countries
            .iter()
            .map(|country| country.name.as_str())
            .collect();
        writeln!(
            out,
            "{:<6} {:<16} {}",
            candidate.dial_code,
            candidate.remaining_digits,
            names.join(", ")
        )?;
    }
    Ok(true)
}

fn country(resolver: &Resolver, args: &CountryArgs, out: &mut impl Write) -> Result<bool> {
    let found = resolver
        .resolve_hint(&args.query)
        .or_else(|| resolver.registry().by_name(&args.query));

    match found {
        Some(record) => {
            write_record(out, record)?;
            Ok(true)
        }
        None => {
            writeln!(out, "no country matches '{}'", args.query)?;
            Ok(false)
        }
    }
}

fn search(registry: &CountryRegistry, args: &SearchArgs, out: &mut impl Write) -> Result<bool> {
    let query = CountryQuery {
        name: args.name.clone(),
        dial_code: args.dial_code.clone(),
        iso2: args.iso2.clone(),
        iso3: args.iso3.clone(),
    };

    let results = registry.search(&query);
    for record in &results {
        write_record(out, record)?;
    }

    Ok(!results.is_empty())
}

fn write_record(out: &mut impl Write, record: &CountryRecord) -> Result<()> {
    writeln!(
        out,
        "{} {:<2} {:<3} {:<6} {}",
        record.flag, record.iso2, record.iso3, record.dial_code, record.name
    )?;
    Ok(())
}

fn print_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
