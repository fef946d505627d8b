// NOTE: atlas Architecture Rationale
//
// Why a one-shot fetch (not a cache-backed client)?
// - The listing is re-fetched per run; nothing outlives the process
// - One request per mount keeps the state machine at Loading → settled
// - Trade-off: no offline mode, but no invalidation rules either
//
// Why an explicit error boundary (not letting render errors bubble)?
// - Fetch failures are data (FetchState::Failed) and render as a page
// - Render faults are defects; the Shell degrades to a fallback page once
//   and stays there, so a half-written page never reaches stdout

mod args;
mod commands;
pub mod boundary;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod shell;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::{Outcome, run};
