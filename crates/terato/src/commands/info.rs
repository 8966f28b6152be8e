//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout, Style};
use serde::Serialize;
use terato_core::Check;
use terato_core::config::{Config, ConfigSources};
use tracing::{debug, instrument};

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
    enable: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disable: Option<Vec<String>>,
    paging: bool,
    context_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_findings: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let codes = |checks: &Option<Vec<Check>>| -> Option<Vec<String>> {
            checks
                .as_ref()
                .map(|list| list.iter().map(|c| c.code().to_string()).collect())
        };
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            enable: codes(&config.enable),
            disable: codes(&config.disable),
            paging: config.paging,
            context_words: config.context_words(),
            max_findings: config.max_findings,
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
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

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stdout, |t| t.bold()),
        package.version.if_supports_color(Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        print_field("License", package.license);
    }
    if !package.repository.is_empty() {
        print_field(
            "Repository",
            package.repository.if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    let cfg = &full_info.config;
    print_heading("Configuration");
    match cfg.config_file {
        Some(ref path) => print_field("Config file", path.if_supports_color(Stdout, |t| t.cyan())),
        None => print_field(
            "Config file",
            "none loaded".if_supports_color(Stdout, |t| t.yellow()),
        ),
    }
    print_field("Log level", &cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        print_field("Log directory", dir);
    }

    print_heading("Checks");
    print_opt("Enabled", &cfg.enable.as_ref().map(|c| c.join(", ")));
    print_opt("Disabled", &cfg.disable.as_ref().map(|c| c.join(", ")));
    print_field("Paging", cfg.paging);
    print_field("Context words", cfg.context_words);
    print_opt("Max findings", &cfg.max_findings);
    print_opt("Input limit (bytes)", &cfg.max_input_bytes);

    Ok(())
}

fn print_heading(title: &str) {
    println!();
    let style = Style::new().bold().underline();
    println!("{}", title.if_supports_color(Stdout, |t| t.style(style)));
}

fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{}: {}", label.if_supports_color(Stdout, |t| t.dimmed()), value);
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => print_field(label, v),
        None => print_field(label, "(not set)".if_supports_color(Stdout, |t| t.dimmed())),
    }
}
