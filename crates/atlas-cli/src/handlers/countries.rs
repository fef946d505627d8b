use anyhow::{Context, Result};
use atlas_client::HttpTransportBuilder;
use is_terminal::IsTerminal;
use tracing::info;

use super::HandlerContext;
use crate::commands::Outcome;
use crate::config::Config;
use crate::presentation::views::page::LOADING_TEXT;
use crate::shell::Shell;

/// Transient pending line for an interactive stderr. The header belongs to
/// the settled page on stdout, so it is not repeated here.
fn loading_indicator(json: bool, stderr_is_tty: bool) -> Option<&'static str> {
    (!json && stderr_is_tty).then_some(LOADING_TEXT)
}

pub async fn handle(ctx: &HandlerContext, config: &Config) -> Result<Outcome> {
    let transport = HttpTransportBuilder::new(config.endpoint.as_str())
        .with_timeout(config.timeout())
        .build()
        .context("Failed to build HTTP client")?;
    info!(endpoint = %transport.endpoint(), "mounting countries page");

    let mut shell = Shell::new(transport, ctx.renderer());

    if let Some(indicator) = loading_indicator(ctx.is_json(), std::io::stderr().is_terminal()) {
        eprintln!("{}", indicator);
    }

    let mounted = shell.mount().await;
    print!("{}", mounted.page);

    if shell.is_degraded(&mounted.state) {
        Ok(Outcome::Degraded)
    } else {
        Ok(Outcome::Rendered)
    }
}
