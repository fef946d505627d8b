//! GraphQL plumbing for the countries service.
//!
//! - [`CountriesQuery`]: the one operation the atlas issues.
//! - [`Transport`]: the network capability, injected so tests can script it.
//! - [`CountriesFetcher`]: one-shot fetch lifecycle (`Loading` → settled).

mod client;
mod error;
mod fetcher;
mod operation;
mod query;
mod transport;

pub use client::GraphqlClient;
pub use error::{ClientError, GraphqlError, GraphqlErrorLocation, Result};
pub use fetcher::{CountriesFetcher, FetchHandle, FetchState};
pub use operation::{
    EmptyVariables, GraphqlOperation, GraphqlQuery, GraphqlRequest, GraphqlResponse,
};
pub use query::{COUNTRIES_ENDPOINT, CountriesQuery};
pub use transport::{HttpTransport, HttpTransportBuilder, HttpTransportConfig, Transport};
