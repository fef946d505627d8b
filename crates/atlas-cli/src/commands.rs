use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, resolve_config_path};
use crate::logging::init_logging;
use anyhow::Result;

/// How a run ended, mapped to the exit code by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A ready or empty page
    Rendered,
    /// A failed fetch or a caught rendering fault, still printed as a page
    Degraded,
}

pub fn run(cli: Cli) -> Result<Outcome> {
    init_logging(cli.log_level)?;

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?.with_endpoint(cli.endpoint);
    let ctx = HandlerContext::new(cli.format, &config, cli.no_color);

    match cli.command.unwrap_or(Commands::Countries) {
        Commands::Countries => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(handlers::countries::handle(&ctx, &config))
        }
        Commands::Query => {
            handlers::query::handle(&ctx)?;
            Ok(Outcome::Rendered)
        }
    }
}
