//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};
use wordwatch_core::config::{Config, ConfigSources};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vocabulary_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fancy_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    academic_list: Option<String>,
    interesting_words: usize,
    debounce_ms: u64,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            endpoint: config.endpoint.clone(),
            vocabulary_list: config.vocabulary_list.as_ref().map(|p| p.to_string()),
            fancy_list: config.fancy_list.as_ref().map(|p| p.to_string()),
            academic_list: config.academic_list.as_ref().map(|p| p.to_string()),
            interesting_words: config.interesting_words,
            debounce_ms: config.debounce_ms,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }
    if !full_info.package.repository.is_empty() {
        println!(
            "{}: {}",
            "Repository".dimmed(),
            full_info.package.repository.cyan()
        );
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = full_info.config.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
    if let Some(ref dir) = full_info.config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    print_opt("Endpoint", &full_info.config.endpoint);
    print_opt("Vocabulary list", &full_info.config.vocabulary_list);
    print_opt("Fancy list", &full_info.config.fancy_list);
    print_opt("Academic list", &full_info.config.academic_list);
    println!(
        "{}: {}",
        "Interesting words".dimmed(),
        full_info.config.interesting_words
    );
    println!("{}: {}", "Debounce ms".dimmed(), full_info.config.debounce_ms);

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_info_text_succeeds() {
        assert!(
            cmd_info(
                InfoArgs::default(),
                false,
                &Config::default(),
                &ConfigSources::default()
            )
            .is_ok()
        );
    }

    #[test]
    fn cmd_info_json_succeeds() {
        assert!(
            cmd_info(
                InfoArgs::default(),
                true,
                &Config::default(),
                &ConfigSources::default()
            )
            .is_ok()
        );
    }

    #[test]
    fn config_info_defaults() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.interesting_words, 10);
    }
}
