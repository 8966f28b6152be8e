//! Check command: lint a manuscript.

use std::io::IsTerminal;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream::Stdout};
use tracing::{debug, instrument};

use terato_core::{Check, CheckRegistry, Config, LintReport, Linter, TextSource};

/// Check selection flags shared by `check` and `checks`.
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Run only these checks (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "CHECKS")]
    pub enable: Option<Vec<Check>>,

    /// Run every check except these (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "CHECKS")]
    pub disable: Option<Vec<Check>>,
}

impl SelectionArgs {
    /// The registry to use: the flags when given, otherwise the config.
    ///
    /// A selection on the command line replaces the configured one entirely,
    /// but a conflicting configured selection is still an error.
    pub fn resolve(&self, config: &Config) -> anyhow::Result<CheckRegistry> {
        let configured = config
            .registry()
            .context("invalid check selection in configuration")?;
        if self.enable.is_none() && self.disable.is_none() {
            return Ok(configured);
        }
        CheckRegistry::from_lists(self.enable.as_deref(), self.disable.as_deref())
            .context("invalid check selection")
    }
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// File to lint (`-` or omitted for stdin). `.md` files are read as Markdown.
    pub file: Option<Utf8PathBuf>,

    /// Check selection.
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Track pages: form feeds and Markdown thematic breaks start a new page
    #[arg(long)]
    pub paging: bool,

    /// Words of context to quote with each finding
    #[arg(long, value_name = "N")]
    pub context_words: Option<usize>,

    /// Fail when more than N findings are reported
    #[arg(long, value_name = "N")]
    pub max_findings: Option<usize>,
}

/// Lint a file or stdin and print the findings.
#[instrument(name = "cmd_check", skip_all, fields(file = ?args.file))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let registry = args.selection.resolve(config)?;
    let paging = args.paging || config.paging;
    let context_words = args.context_words.unwrap_or_else(|| config.context_words());
    let max_findings = args.max_findings.or(config.max_findings);
    debug!(?registry, paging, context_words, ?max_findings, "executing check command");

    let path = args.file.as_deref().filter(|p| p.as_str() != "-");
    let content = super::read_input(path, max_input)?;
    let source = TextSource::for_path(path, &content).with_paging(paging);
    let linter = Linter::new(&registry).with_context_words(context_words);

    let progress = progress_spinner(quiet || global_json);
    let report = linter.run(source.words().inspect(|_| progress.inc(1)));
    progress.finish_and_clear();

    debug!(
        words = report.words_read,
        findings = report.total_findings,
        "lint complete"
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(max) = max_findings
        && report.total_findings > max
    {
        bail!(
            "{} findings exceed the limit of {max}",
            report.total_findings
        );
    }
    Ok(())
}

/// Spinner on stderr, only when it is a terminal.
fn progress_spinner(hidden: bool) -> ProgressBar {
    if hidden || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {pos} words read") {
        spinner.set_style(style);
    }
    spinner
}

/// Text output, same layout as the report's `Display` plus color.
fn print_report(report: &LintReport) {
    for page in &report.pages {
        if let Some(n) = page.page {
            let header = format!("Página {n}:");
            println!("{}", header.if_supports_color(Stdout, |t| t.bold()));
        }
        for finding in page.findings() {
            let tag = format!("[{}]", finding.code());
            let context = format!("(… {})", finding.context);
            println!(
                "{} {} {}",
                tag.if_supports_color(Stdout, |t| t.yellow()),
                finding.message(),
                context.if_supports_color(Stdout, |t| t.dimmed())
            );
        }
        println!();
    }
    let total = format!("Total: {} avisos", report.total_findings);
    if report.is_clean() {
        println!("{}", total.if_supports_color(Stdout, |t| t.green()));
    } else {
        println!("{}", total.if_supports_color(Stdout, |t| t.bold()));
    }
}
