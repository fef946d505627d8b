//! Testing infrastructure for atlas tests.
//!
//! - `FakeTransport`: scripted stand-in for the HTTP transport
//! - `fixtures`: sample countries and response bodies
//! - `assertions`: checks over the CLI's JSON page output
//! - `TestWorld`: isolated config directory for CLI runs

pub mod assertions;
pub mod fixtures;
pub mod transport;
pub mod world;

pub use transport::{FakeTransport, Gate};
pub use world::TestWorld;
