//! CLI entry point for fipsgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `fipsgate-app` crate.

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fipsgate_app::{
    render_text, run_apply, run_check, run_explain, run_policy, runtime_error_report,
    serialize_report, verdict_exit_code, ApplyInput, CheckInput, DisableFailed, ExplainOutput,
    FipsAction,
};
use fipsgate_domain::{AssertionSet, Gate};
use fipsgate_settings::Overrides;
use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "fipsgate=info";

#[derive(Parser, Debug)]
#[command(
    name = "fipsgate",
    version,
    about = "Decide whether a software TPM can run with the host crypto library in FIPS mode"
)]
struct Cli {
    /// Path to fipsgate config TOML (missing file: built-in defaults).
    #[arg(long, global = true, default_value = "fipsgate.toml")]
    config: Utf8PathBuf,

    /// Override profile (swtpm|none).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log filter, e.g. `fipsgate=debug` (default: RUST_LOG, then fipsgate=info).
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug, Clone)]
struct AssertionArgs {
    /// Enabled algorithms and key-size statements, comma separated.
    #[arg(long, value_delimiter = ',')]
    algorithms: Vec<String>,

    /// Attributes the host asserts, comma separated.
    #[arg(long, value_delimiter = ',')]
    attributes: Vec<String>,

    /// Which decision procedure to run.
    #[arg(long, value_enum, default_value_t = Mode::Attributes)]
    mode: Mode,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Restriction sets selected by host attributes.
    Attributes,
    /// The default restriction set, ignoring attributes.
    Algorithms,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyFormat {
    Toml,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the policy (exit 0 satisfied, 2 FIPS mode must be disabled, 1 error).
    Check {
        #[command(flatten)]
        assertions: AssertionArgs,

        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Also write the JSON report here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Evaluate the policy and disable the host library's FIPS mode if it fails.
    Apply {
        #[command(flatten)]
        assertions: AssertionArgs,

        /// Report what would happen without touching the host library.
        #[arg(long)]
        dry_run: bool,

        /// Also write the JSON report here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Print the effective policy table.
    Policy {
        #[arg(long, value_enum, default_value_t = PolicyFormat::Toml)]
        format: PolicyFormat,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g. "fips.algorithm_set") or code (e.g. "insufficient_key_size").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref())?;

    match &cli.cmd {
        Commands::Check {
            assertions,
            format,
            report_out,
        } => cmd_check(&cli, assertions, *format, report_out.as_deref()),
        Commands::Apply {
            assertions,
            dry_run,
            report_out,
        } => cmd_apply(&cli, assertions, *dry_run, report_out.as_deref()),
        Commands::Policy { format } => cmd_policy(&cli, *format),
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

fn init_tracing(filter: Option<&str>) -> anyhow::Result<()> {
    let filter = match filter {
        Some(filter) => EnvFilter::try_new(filter).context("invalid --log filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
    Ok(())
}

fn cmd_check(
    cli: &Cli,
    assertions: &AssertionArgs,
    format: ReportFormat,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;
        let output = run_check(CheckInput {
            config_text: &cfg_text,
            overrides: overrides(cli),
            assertions: assertion_set(assertions),
            gate: gate(assertions.mode),
        })?;

        if let Some(path) = report_out {
            write_report_file(path, &serialize_report(&output.report)?)
                .context("write report json")?;
        }
        match format {
            ReportFormat::Text => print!("{}", render_text(&output.report)),
            ReportFormat::Json => print!(
                "{}",
                String::from_utf8_lossy(&serialize_report(&output.report)?)
            ),
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    exit_with(result, report_out)
}

fn cmd_apply(
    cli: &Cli,
    assertions: &AssertionArgs,
    dry_run: bool,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;
        let controller = fipsgate_host::host_controller();
        let output = run_apply(
            controller.as_ref(),
            ApplyInput {
                config_text: &cfg_text,
                overrides: overrides(cli),
                assertions: assertion_set(assertions),
                gate: gate(assertions.mode),
                dry_run,
            },
        )?;

        match (&output.report, output.action) {
            (Some(report), _) => {
                if let Some(path) = report_out {
                    write_report_file(path, &serialize_report(report)?)
                        .context("write report json")?;
                }
                print!("{}", render_text(report));
            }
            (None, FipsAction::NotEnforced) => println!(
                "host: {} FIPS mode not enforced; nothing to check",
                controller.library()
            ),
            (None, action) => println!("host: {action:?}"),
        }
        Ok(0)
    })();

    exit_with(result, report_out)
}

fn cmd_policy(cli: &Cli, format: PolicyFormat) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;
    let format = match format {
        PolicyFormat::Toml => fipsgate_app::PolicyFormat::Toml,
        PolicyFormat::Json => fipsgate_app::PolicyFormat::Json,
    };
    print!("{}", run_policy(&cfg_text, overrides(cli), format)?);
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", fipsgate_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                fipsgate_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

/// Runtime errors exit 1 and still leave a report behind when one was requested.
/// A refused FIPS disable writes the evaluation report instead of a generic one.
fn exit_with(result: anyhow::Result<i32>, report_out: Option<&Utf8Path>) -> anyhow::Result<()> {
    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            if let Some(path) = report_out {
                let report = match err.downcast_ref::<DisableFailed>() {
                    Some(failed) => (*failed.report).clone(),
                    None => runtime_error_report(&format!("{err:#}")),
                };
                if let Ok(data) = serialize_report(&report) {
                    let _ = write_report_file(path, &data);
                }
            }
            eprintln!("fipsgate error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Missing config file is allowed (defaults apply); any other read error is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "config file not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
    }
}

fn assertion_set(args: &AssertionArgs) -> AssertionSet {
    // `--algorithms ''` means an empty list, not one empty name.
    let non_empty = |items: &[String]| {
        items
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
    };
    AssertionSet::new(non_empty(&args.algorithms), non_empty(&args.attributes))
}

fn gate(mode: Mode) -> Gate {
    match mode {
        Mode::Attributes => Gate::Attributes,
        Mode::Algorithms => Gate::Algorithms,
    }
}

fn write_report_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}
