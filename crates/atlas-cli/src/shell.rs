//! The page host: owns the client, mounts the fetcher and renders the page
//! through the error boundary.

use std::sync::Arc;

use anyhow::Result;
use atlas_client::{CountriesFetcher, FetchState, GraphqlClient, Transport};
use tracing::debug;

use crate::boundary::{BoundaryState, ErrorBoundary};
use crate::presentation::presenters::{present_fault, present_page};
use crate::presentation::{ConsoleRenderer, Renderer};

/// What a mount produced: the settled state and the page to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mounted {
    pub state: FetchState,
    pub page: String,
}

pub struct Shell<T> {
    client: Arc<GraphqlClient<T>>,
    renderer: ConsoleRenderer,
    boundary: ErrorBoundary,
}

impl<T: Transport + 'static> Shell<T> {
    /// The client is built once here and shared with every mount.
    pub fn new(transport: T, renderer: ConsoleRenderer) -> Self {
        Self {
            client: Arc::new(GraphqlClient::new(transport)),
            renderer,
            boundary: ErrorBoundary::new(),
        }
    }

    pub fn boundary(&self) -> &BoundaryState {
        self.boundary.state()
    }

    pub fn render(&mut self, state: &FetchState) -> String {
        self.render_with(|renderer| renderer.render(&present_page(state)))
    }

    /// Render through the boundary; a fault yields the fallback page.
    pub fn render_with<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&ConsoleRenderer) -> Result<String>,
    {
        let renderer = &self.renderer;
        match self.boundary.render(|| render(renderer)) {
            Ok(page) => page,
            Err(description) => self.fallback_page(&description),
        }
    }

    fn fallback_page(&self, description: &str) -> String {
        let page = present_fault(description);
        match self.renderer.render(&page) {
            Ok(output) => output,
            Err(_) => format!("Something went wrong: {}\n", description),
        }
    }

    /// Mount a fetcher, wait for it to settle and render the result.
    pub async fn mount(&mut self) -> Mounted {
        let mut handle = CountriesFetcher::mount(Arc::clone(&self.client)).spawn();
        let state = handle.settled().await;
        debug!(?state, "mount settled");

        let page = self.render(&state);
        Mounted { state, page }
    }

    /// Failed fetches and caught faults both count as a degraded page.
    pub fn is_degraded(&self, state: &FetchState) -> bool {
        self.boundary.is_caught() || matches!(state, FetchState::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::DisplayOptions;
    use atlas_client::ClientError;

    struct Canned(&'static str);

    impl Transport for Canned {
        async fn send(&self, _body: Vec<u8>) -> atlas_client::Result<Vec<u8>> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    struct Refused;

    impl Transport for Refused {
        async fn send(&self, _body: Vec<u8>) -> atlas_client::Result<Vec<u8>> {
            Err(ClientError::Http("connection refused".to_string()))
        }
    }

    fn plain() -> ConsoleRenderer {
        ConsoleRenderer::new(false, DisplayOptions::plain())
    }

    #[test]
    fn test_loading_state_page() {
        let mut shell = Shell::new(Canned("{}"), plain());
        assert!(shell.render(&FetchState::Loading).ends_with("Loading...\n"));
    }

    #[tokio::test]
    async fn test_failed_mount_is_degraded_but_not_caught() {
        let mut shell = Shell::new(Refused, plain());
        let mounted = shell.mount().await;

        assert!(mounted.page.ends_with("Error: connection refused\n"));
        assert!(shell.is_degraded(&mounted.state));
        assert_eq!(shell.boundary(), &BoundaryState::Ok);
    }

    #[tokio::test]
    async fn test_empty_mount() {
        let mut shell = Shell::new(Canned(r#"{"data":null}"#), plain());
        let mounted = shell.mount().await;

        assert_eq!(mounted.state, FetchState::Empty);
        assert!(mounted.page.ends_with("No data available\n"));
        assert!(!shell.is_degraded(&mounted.state));
    }

    #[test]
    fn test_render_fault_switches_to_fallback() {
        let mut shell = Shell::new(Canned("{}"), plain());

        let page = shell.render_with(|_| panic!("layout overflow"));
        assert_eq!(page, "Something went wrong: layout overflow\n");

        // Later renders keep the fallback even for healthy states.
        let page = shell.render(&FetchState::Empty);
        assert_eq!(page, "Something went wrong: layout overflow\n");
        assert!(shell.is_degraded(&FetchState::Empty));
    }

    #[test]
    fn test_fallback_in_json_mode() -> anyhow::Result<()> {
        let mut shell = Shell::new(Canned("{}"), ConsoleRenderer::new(true, DisplayOptions::plain()));
        let page = shell.render_with(|_| anyhow::bail!("bad view model"));

        let value: serde_json::Value = serde_json::from_str(&page)?;
        assert_eq!(value["body"]["state"], "fault");
        assert_eq!(value["body"]["description"], "bad view model");
        Ok(())
    }
}
