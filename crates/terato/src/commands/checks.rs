//! Checks command: list the available checks.

use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use tracing::{debug, instrument};

use terato_core::{Check, Config};

use super::check::SelectionArgs;

/// Arguments for the `checks` subcommand.
#[derive(Args, Debug, Default)]
pub struct ChecksArgs {
    /// Check selection to evaluate instead of the configured one.
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Debug, Serialize)]
struct CheckInfo {
    code: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    window: Option<usize>,
    enabled: bool,
}

/// Print every check with its window and whether it runs.
#[instrument(name = "cmd_checks", skip_all)]
pub fn cmd_checks(args: ChecksArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let registry = args.selection.resolve(config)?;
    debug!(selection = ?registry.selection(), "executing checks command");

    let infos: Vec<CheckInfo> = Check::ALL
        .into_iter()
        .map(|check| CheckInfo {
            code: check.code(),
            description: check.description(),
            window: check.window(),
            enabled: registry.is_enabled(check),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in &infos {
        let window = info
            .window
            .map_or_else(String::new, |n| format!(" (last {n} words)"));
        if info.enabled {
            println!(
                "{:<20} {}{}",
                info.code.if_supports_color(Stdout, |t| t.green()),
                info.description,
                window.if_supports_color(Stdout, |t| t.dimmed())
            );
        } else {
            println!(
                "{:<20} {}{} {}",
                info.code.if_supports_color(Stdout, |t| t.dimmed()),
                info.description.if_supports_color(Stdout, |t| t.dimmed()),
                window.if_supports_color(Stdout, |t| t.dimmed()),
                "[disabled]".if_supports_color(Stdout, |t| t.yellow())
            );
        }
    }
    Ok(())
}
