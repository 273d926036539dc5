//! HMAC-SHA512 signature generation for Bleutrade API authentication.
//!
//! Private Bleutrade endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA512(full_request_url, api_secret))
//! ```
//!
//! The lowercase hex digest is sent in the `apisign` header.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::error::BleutradeError;

type HmacSha512 = Hmac<Sha512>;

/// Sign a request URL for Bleutrade's private API.
///
/// The URL must be byte-for-byte the one that is sent, including the
/// `apikey` and `nonce` parameters.
///
/// # Example
///
/// ```rust
/// use bleutrade_api_client::auth::sign_url;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign_url(
///     "https://bleutrade.com/api/v2/market/getopenorders?apikey=key&nonce=1700000000",
///     "secret",
/// )?;
/// assert_eq!(signature.len(), 128);
/// # Ok(())
/// # }
/// ```
pub fn sign_url(url: &str, secret: &str) -> Result<String, BleutradeError> {
    let mut hmac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| BleutradeError::Configuration(format!("Invalid HMAC key: {e}")))?;
    hmac.update(url.as_bytes());

    Ok(hex::encode(hmac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4231_vector() {
        let signature = sign_url("what do ya want for nothing?", "Jefe").unwrap();
        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_signature_of_request_url() {
        let url = "https://bleutrade.com/api/v2/account/getbalances\
                   ?apikey=test_key&nonce=1700000000&currencies=ALL";
        let signature = sign_url(url, "test_secret").unwrap();
        assert_eq!(
            signature,
            "426abba268869593b0f7ca47ca372466e213a163e898be0644cd4240e6ac0184\
             0b29e5cb313f335a93515a059303c0ad8f2a4185e2ad1bf31190728f3555f79f"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signature = sign_url("https://bleutrade.com/api/v2/market/getopenorders", "s").unwrap();
        assert_eq!(signature.len(), 128);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_signature_consistency() {
        let url = "https://bleutrade.com/api/v2/account/getorder?apikey=k&nonce=12345&orderid=7";
        assert_eq!(
            sign_url(url, "my_secret").unwrap(),
            sign_url(url, "my_secret").unwrap()
        );
    }

    #[test]
    fn test_signature_changes_with_nonce() {
        let sig1 = sign_url("https://x/api?apikey=k&nonce=12345", "my_secret").unwrap();
        let sig2 = sign_url("https://x/api?apikey=k&nonce=12346", "my_secret").unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_secret() {
        let url = "https://x/api?apikey=k&nonce=12345";
        assert_ne!(
            sign_url(url, "secret_a").unwrap(),
            sign_url(url, "secret_b").unwrap()
        );
    }
}
