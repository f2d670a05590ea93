use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde_json::Value;

use plan_schema::{SchemaValidator, ValidationReport};
use plan_server::{PlanServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Validate(args) => cmd_validate(args, &cli.format),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = apply_flags(&args, file_config(&args)?.apply_env()?);
    tracing::debug!(?config, "resolved server configuration");
    let server = PlanServer::new(config).context("failed to load plan schema")?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

/// Defaults, overlaid by the `--config` file when one is given.
fn file_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    Ok(match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig::default(),
    })
}

/// Command-line flags take precedence over the file and the environment.
fn apply_flags(args: &ServeArgs, mut config: ServerConfig) -> ServerConfig {
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(ip) = args.bind {
        config.bind_addr.set_ip(ip);
    }
    if let Some(schema) = &args.schema {
        config.schema_path = Some(schema.clone());
    }
    if let Some(prefix) = &args.prefix {
        config.api_prefix = prefix.clone();
    }
    config
}

fn cmd_validate(args: ValidateArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let validator = match &args.schema {
        Some(path) => SchemaValidator::from_path(path)?,
        None => SchemaValidator::builtin()?,
    };
    let report = validate_file(&validator, &args.file)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&args.file, &report),
    }

    if !report.valid {
        anyhow::bail!("{} failed validation", args.file.display());
    }
    Ok(())
}

fn validate_file(validator: &SchemaValidator, path: &Path) -> anyhow::Result<ValidationReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    Ok(validator.validate(&payload))
}

fn print_report(path: &Path, report: &ValidationReport) {
    if report.valid {
        println!(
            "{} {} is a valid plan",
            "✓".green().bold(),
            path.display().to_string().bold()
        );
        return;
    }
    println!(
        "{} {} has {} issue(s)",
        "✗".red().bold(),
        path.display().to_string().bold(),
        report.errors.len()
    );
    for issue in &report.errors {
        let location = if issue.instance_path.is_empty() {
            "/"
        } else {
            issue.instance_path.as_str()
        };
        println!(
            "  {} [{}] {}",
            location.yellow(),
            issue.keyword.cyan(),
            issue.message
        );
    }
}
