//! One-shot fetch lifecycle for the countries listing.
//!
//! A mount starts in [`FetchState::Loading`] and settles exactly once into
//! `Failed`, `Empty` or `Ready`. Settling consumes the mount, so a second
//! request for the same mount cannot be expressed; remount to fetch again.

use std::sync::Arc;

use atlas_types::{CountriesData, CountriesResult, Country};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::client::GraphqlClient;
use crate::operation::EmptyVariables;
use crate::query::CountriesQuery;
use crate::transport::Transport;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchState {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    /// Settled with neither an error nor a countries payload
    Empty,
    Ready {
        countries: CountriesResult,
    },
}

impl FetchState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }

    pub fn countries(&self) -> Option<&[Country]> {
        match self {
            FetchState::Ready { countries } => Some(countries),
            _ => None,
        }
    }
}

static LOADING: FetchState = FetchState::Loading;

/// Data fetcher for a single mount.
pub struct CountriesFetcher<T> {
    client: Arc<GraphqlClient<T>>,
}

impl<T: Transport + 'static> CountriesFetcher<T> {
    /// Mount a fetcher; no request is issued until it is settled or spawned.
    pub fn mount(client: Arc<GraphqlClient<T>>) -> Self {
        Self { client }
    }

    /// State observed before settlement.
    pub fn state(&self) -> &FetchState {
        &LOADING
    }

    /// Issue the request and wait for it to settle.
    ///
    /// Dropping the returned future before completion discards the result.
    pub async fn settle(self) -> FetchState {
        fetch_countries(&self.client).await
    }

    /// Run the fetch on the current tokio runtime.
    ///
    /// Dropping the handle before settlement aborts the request.
    pub fn spawn(self) -> FetchHandle {
        let (tx, rx) = watch::channel(FetchState::Loading);
        let task = tokio::spawn(async move {
            let state = self.settle().await;
            // Receiver gone means the handle was dropped; nothing to update.
            let _ = tx.send(state);
        });
        FetchHandle { state: rx, task }
    }
}

async fn fetch_countries<T: Transport>(client: &GraphqlClient<T>) -> FetchState {
    debug!("fetching countries");
    match client
        .execute_strict::<CountriesQuery>(EmptyVariables {})
        .await
    {
        Ok(Some(CountriesData {
            countries: Some(countries),
        })) => {
            info!(count = countries.len(), "countries ready");
            FetchState::Ready { countries }
        }
        Ok(_) => {
            warn!("query settled without countries");
            FetchState::Empty
        }
        Err(err) => {
            warn!(error = %err, "countries fetch failed");
            FetchState::Failed {
                message: err.to_string(),
            }
        }
    }
}

/// Observer of a spawned fetch.
pub struct FetchHandle {
    state: watch::Receiver<FetchState>,
    task: JoinHandle<()>,
}

impl FetchHandle {
    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Wait until the fetch settles.
    pub async fn settled(&mut self) -> FetchState {
        match self.state.wait_for(FetchState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => FetchState::Failed {
                message: "fetch task ended before settling".to_string(),
            },
        }
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
