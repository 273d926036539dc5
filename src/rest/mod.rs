//! Bleutrade REST API client.
//!
//! Provides access to the public market data and private account endpoints
//! of the Bleutrade v2 API.
//!
//! # Trait-based API
//!
//! The [`BleutradeApi`] trait abstracts all endpoint operations so callers
//! can substitute a mock or wrap the client.

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod query;
mod traits;

pub use client::{Access, BleutradeRestClient, BleutradeRestClientBuilder};
pub use endpoints::*;
pub use query::QueryParams;
pub use traits::BleutradeApi;
