//! doclinks
//!
//! Checks that internal links in a Markdown/AsciiDoc documentation tree point
//! at files that exist. Prints a summary and exits non-zero when a link is
//! broken or the documentation root is missing.

use anyhow::Result;
use clap::Parser;
use doclinks::cli::Cli;
use doclinks::output::{ErrorCode, ExitCode, JsonError, JsonOutput, OutputContext};
use doclinks::report::ReportPayload;
use doclinks::{CheckError, LinkChecker};
use tracing_subscriber::EnvFilter;

/// Command name recorded in JSON metadata
const COMMAND: &str = "check";

/// Helper to determine exit code from an error
fn error_to_exit_code(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<CheckError>()
        .map_or(ExitCode::Failure, CheckError::exit_code)
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ctx = OutputContext::new(cli.quiet, cli.json);
    let exit_code = match run(&cli, &ctx) {
        Ok(code) => code,
        Err(e) => {
            report_error(&ctx, &e);
            error_to_exit_code(&e)
        }
    };

    if exit_code != ExitCode::Success {
        std::process::exit(exit_code.code());
    }
}

fn run(cli: &Cli, ctx: &OutputContext) -> Result<ExitCode> {
    if cli.schema {
        let schema = schemars::schema_for!(ReportPayload);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(ExitCode::Success);
    }

    let checker = LinkChecker::new(cli.check_options())?;
    let docs = checker.discover()?;

    ctx.print_info(format!("🔍 Checking {} documentation files...", docs.len()))?;

    let report = checker.check(&docs)?;

    for skipped in &report.skipped_files {
        ctx.print_warning(format!(
            "skipped unreadable document {}: {}",
            skipped.path.display(),
            skipped.reason
        ))?;
    }

    if ctx.is_json() {
        let output = JsonOutput::new(report.is_valid(), report.to_payload(), COMMAND);
        ctx.print_json(&output.to_json_string()?)?;
    } else {
        report.print(ctx)?;
    }

    Ok(report.exit_code())
}

/// Print a fatal error as JSON or as an actionable message on stderr
fn report_error(ctx: &OutputContext, error: &anyhow::Error) {
    let Some(check_error) = error.downcast_ref::<CheckError>() else {
        if ctx.is_json() {
            let json_error = JsonError::new(ErrorCode::INTERNAL_ERROR, error.to_string(), COMMAND);
            if let Ok(json) = json_error.to_json_string() {
                let _ = ctx.print_json(&json);
            }
        } else {
            let _ = ctx.print_error(format!("Error: {}", error));
        }
        return;
    };

    let actionable = check_error.to_actionable();
    if ctx.is_json() {
        let json_error = actionable.remedies().iter().fold(
            JsonError::new(check_error.error_code(), check_error.to_string(), COMMAND),
            |json_error, remedy| json_error.with_suggestion(remedy.clone()),
        );
        if let Ok(json) = json_error.to_json_string() {
            let _ = ctx.print_json(&json);
        }
    } else {
        let _ = ctx.print_error(actionable);
    }
}
