use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "planstore",
    about = "In-memory JSON plan store with schema validation and ETag reads",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Validate a plan document against the schema
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Interface address to bind
    #[arg(long)]
    pub bind: Option<IpAddr>,
    /// JSON Schema file (overrides SCHEMA_PATH)
    #[arg(long)]
    pub schema: Option<PathBuf>,
    /// Route prefix for the plan endpoints (overrides API_PREFIX)
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Plan document to check
    pub file: PathBuf,
    /// JSON Schema file; defaults to the built-in plan schema
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_flags() {
        let cli = Cli::try_parse_from([
            "planstore", "serve", "--port", "8080", "--bind", "127.0.0.1", "--prefix", "",
        ])
        .unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.bind, Some("127.0.0.1".parse().unwrap()));
        assert_eq!(args.prefix.as_deref(), Some(""));
    }

    #[test]
    fn parses_validate_with_global_format() {
        let cli = Cli::try_parse_from(["planstore", "validate", "plan.json", "--format", "json"])
            .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        let Command::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.file, PathBuf::from("plan.json"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["planstore", "serve", "--port", "abc"]).is_err());
    }
}
