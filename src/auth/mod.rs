//! Authentication module for the Bleutrade API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation from an injectable clock
//! - HMAC-SHA512 signing of request URLs

mod credentials;
mod nonce;
mod signature;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use nonce::{NonceProvider, UnixTimeNonce};
pub use signature::sign_url;
