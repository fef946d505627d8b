use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Parser)]
#[command(name = "atlas")]
#[command(about = "Browse the countries of the world from a GraphQL endpoint", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "GraphQL endpoint (overrides the config file)")]
    pub endpoint: Option<String>,

    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all countries and render them as cards (default)
    Countries,

    /// Print the GraphQL document sent to the endpoint
    Query,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "atlas",
            "countries",
            "--format",
            "json",
            "--endpoint",
            "http://localhost:4000/graphql",
        ]);
        assert!(matches!(cli.command, Some(Commands::Countries)));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:4000/graphql"));
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["atlas", "--no-color"]);
        assert!(cli.command.is_none());
        assert!(cli.no_color);
    }
}
