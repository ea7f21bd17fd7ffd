use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Request, Url};
use sha2::{Digest, Sha256};

/// The five request attributes covered by the signature, in signing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest<'a> {
    method: &'a str,
    path: &'a str,
    query: &'a str,
    timestamp: &'a str,
    content_hash: &'a str,
}

impl<'a> CanonicalRequest<'a> {
    #[inline]
    pub fn new(
        method: &'a str,
        path: &'a str,
        query: &'a str,
        timestamp: &'a str,
        content_hash: &'a str,
    ) -> Self {
        Self {
            method,
            path,
            query,
            timestamp,
            content_hash,
        }
    }

    /// Read method, path and query off a built request. The query is taken
    /// as-is from the URL, without the leading `?`.
    #[inline]
    pub fn from_request(req: &'a Request, timestamp: &'a str, content_hash: &'a str) -> Self {
        Self::from_url(req.method().as_str(), req.url(), timestamp, content_hash)
    }

    #[inline]
    pub fn from_url(
        method: &'a str,
        url: &'a Url,
        timestamp: &'a str,
        content_hash: &'a str,
    ) -> Self {
        Self::new(
            method,
            url.path(),
            url.query().unwrap_or(""),
            timestamp,
            content_hash,
        )
    }

    pub fn method(&self) -> &str {
        self.method
    }

    pub fn path(&self) -> &str {
        self.path
    }

    pub fn query(&self) -> &str {
        self.query
    }

    pub fn timestamp(&self) -> &str {
        self.timestamp
    }

    pub fn content_hash(&self) -> &str {
        self.content_hash
    }

    pub fn string_to_sign(&self) -> String {
        [
            self.method,
            self.path,
            self.query,
            self.timestamp,
            self.content_hash,
        ]
        .join("\n")
    }
}

/// Base64 of the SHA-256 digest of `body`.
#[inline]
pub fn content_hash(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    let result = hasher.finalize();
    STANDARD.encode(result)
}

pub trait RequestPayload {
    fn payload_hash(&self) -> String;
}

impl RequestPayload for Request {
    fn payload_hash(&self) -> String {
        let body = self.body().map(|b| b.as_bytes());
        let payload = if let Some(Some(payload)) = body {
            payload
        } else {
            b""
        };

        content_hash(payload)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Method, Request, Url};

    use super::*;

    const EMPTY_HASH: &str = "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=";

    #[test_log::test]
    fn test_empty_body_hash() {
        assert_eq!(content_hash(b""), EMPTY_HASH);
        assert_eq!(content_hash(&[]), content_hash(b""));
    }

    #[test_log::test]
    fn test_content_hash_is_deterministic() {
        let body = br#"{"a":1}"#;
        assert_eq!(content_hash(body), "AVq9f1zFei3ZS3WQ8ErYCEJzkF7jPsXOvq5iJ2qX+GI=");
        assert_eq!(content_hash(body), content_hash(body));
        assert_ne!(content_hash(body), content_hash(br#"{"a":2}"#));
    }

    #[test_log::test]
    fn test_string_to_sign_field_order() {
        let canonical = CanonicalRequest::new("POST", "/sms", "api-version=1", "ts", "hash");
        assert_eq!(canonical.string_to_sign(), "POST\n/sms\napi-version=1\nts\nhash");
    }

    #[test_log::test]
    fn test_empty_query_keeps_its_line() {
        let canonical = CanonicalRequest::new("GET", "/sms", "", "ts", "hash");
        assert_eq!(canonical.string_to_sign(), "GET\n/sms\n\nts\nhash");
    }

    #[test_log::test]
    fn test_fields_are_not_trimmed() {
        let canonical = CanonicalRequest::new("POST", "/sms ", "", " ts", "hash");
        assert_eq!(canonical.string_to_sign(), "POST\n/sms \n\n ts\nhash");
    }

    #[test_log::test]
    fn test_from_request() {
        let url = Url::parse("https://res.communication.azure.com/sms?api-version=2021-03-07")
            .unwrap();
        let req = Request::new(Method::POST, url);
        let canonical = CanonicalRequest::from_request(&req, "ts", "hash");
        assert_eq!(canonical.method(), "POST");
        assert_eq!(canonical.path(), "/sms");
        assert_eq!(canonical.query(), "api-version=2021-03-07");
        assert_eq!(canonical.timestamp(), "ts");
        assert_eq!(canonical.content_hash(), "hash");
    }

    #[test_log::test]
    fn test_payload_hash() {
        let url = Url::parse("https://res.communication.azure.com/sms").unwrap();
        let mut req = Request::new(Method::POST, url);
        assert_eq!(req.payload_hash(), EMPTY_HASH);

        *req.body_mut() = Some(br#"{"a":1}"#.to_vec().into());
        assert_eq!(req.payload_hash(), content_hash(br#"{"a":1}"#));
    }
}
