use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use log::trace;
use sha2::Sha256;

use crate::constant::{HMAC_ALGO_VALUE, SIGNED_HEADERS_VALUE};
use crate::error::{Error, Result};
use crate::CanonicalRequest;

type HmacSha256 = Hmac<Sha256>;

/// The decoded shared access key.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Decode a base64 (standard alphabet) access key.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let key = STANDARD.decode(encoded)?;
        Ok(Self(key))
    }
}

impl FromStr for SigningKey {
    type Err = Error;

    fn from_str(encoded: &str) -> Result<Self> {
        Self::from_base64(encoded)
    }
}

impl AsRef<[u8]> for SigningKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey")
    }
}

impl fmt::Display for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey")
    }
}

pub struct Signer<'s> {
    key: &'s SigningKey,
}

impl<'s> Signer<'s> {
    #[inline]
    pub fn new(key: &'s SigningKey) -> Self {
        Self { key }
    }

    /// Base64 of HMAC-SHA256(key, string_to_sign).
    #[inline]
    pub fn sign(&self, string_to_sign: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.key.as_ref())?;
        mac.update(string_to_sign.as_bytes());
        let msg = mac.finalize().into_bytes();
        Ok(STANDARD.encode(msg))
    }

    #[inline]
    pub fn authorization(&self, canonical: &CanonicalRequest<'_>) -> Result<String> {
        let string_to_sign = canonical.string_to_sign();
        trace!("String to sign:\n{}", string_to_sign);
        let signature = self.sign(&string_to_sign)?;
        Ok(format_authorization(&signature))
    }
}

#[inline]
pub fn format_authorization(signature: &str) -> String {
    format!(
        "{algo} SignedHeaders={signed_headers}&Signature={signature}",
        algo = HMAC_ALGO_VALUE,
        signed_headers = SIGNED_HEADERS_VALUE,
        signature = signature,
    )
}

/// Produce the `Authorization` header value for one request.
///
/// `access_key` is the base64 shared secret; a malformed encoding is reported as
/// [`Error::InvalidKeyEncoding`] before anything is signed. `query` excludes the
/// leading `?` and may be empty.
pub fn compute_signature(
    access_key: &str,
    method: &str,
    path: &str,
    query: &str,
    timestamp: &str,
    content_hash: &str,
) -> Result<String> {
    let key = SigningKey::from_base64(access_key)?;
    let canonical = CanonicalRequest::new(method, path, query, timestamp, content_hash);
    Signer::new(&key).authorization(&canonical)
}
