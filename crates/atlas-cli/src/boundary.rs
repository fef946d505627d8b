//! Error boundary around the render step.
//!
//! A render that returns `Err` or panics flips the boundary to
//! [`BoundaryState::Caught`]. It never flips back: every later render is
//! skipped and reports the first fault's description.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Ok,
    Caught(String),
}

#[derive(Debug, Default)]
pub struct ErrorBoundary {
    state: BoundaryState,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    pub fn is_caught(&self) -> bool {
        matches!(self.state, BoundaryState::Caught(_))
    }

    /// Run `render` unless a fault was already caught.
    ///
    /// Returns the rendered content, or the fault description as `Err`.
    pub fn render<F>(&mut self, render: F) -> Result<String, String>
    where
        F: FnOnce() -> anyhow::Result<String>,
    {
        if let BoundaryState::Caught(description) = &self.state {
            return Err(description.clone());
        }

        let description = match panic::catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(content)) => return Ok(content),
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_description(payload.as_ref()),
        };

        error!(%description, "render fault caught by error boundary");
        self.state = BoundaryState::Caught(description.clone());
        Err(description)
    }
}

fn panic_description(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
