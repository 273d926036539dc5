//! Common types used across the Bleutrade client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
