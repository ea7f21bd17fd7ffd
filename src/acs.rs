use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, Request, Url};

use crate::constant::*;
use crate::error::{Error, Result};
use crate::{content_hash, CanonicalRequest, RequestPayload, Signer, SigningKey, SmsMessage};

/// Header values that authenticate one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub date: String,
    pub content_hash: String,
    pub host: String,
    pub authorization: String,
}

impl SignedHeaders {
    /// Full wire header set, including `Content-Type`.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE_KEY, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(MS_DATE_KEY, header_value(MS_DATE_KEY, &self.date)?);
        headers.insert(MS_CONTENT_KEY, header_value(MS_CONTENT_KEY, &self.content_hash)?);
        headers.insert(HOST_KEY, header_value(HOST_KEY, &self.host)?);
        headers.insert(
            AUTHORIZATION_KEY,
            header_value(AUTHORIZATION_KEY, &self.authorization)?,
        );
        Ok(headers)
    }
}

#[derive(Debug, Clone)]
pub struct Acs {
    endpoint: String,
    access_key: String,
    timeout: Duration,
}

impl Acs {
    /// `endpoint` includes the scheme, e.g. `https://<resource>.communication.azure.com`.
    #[inline]
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let access_key = access_key.into();

        Self {
            endpoint,
            access_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Host (and non-default port) of the endpoint, as sent in `Host`.
    #[inline]
    pub fn host(&self) -> Result<String> {
        host_of(&self.url("", "")?)
    }

    /// Any path carried by the endpoint is kept in front of `path`, and is
    /// therefore part of the signed path.
    #[inline]
    pub fn url(&self, path: &str, query: &str) -> Result<Url> {
        let base = self.endpoint.trim_end_matches('/');
        let raw = if query.is_empty() {
            format!("{}{}", base, path)
        } else {
            format!("{}{}?{}", base, path, query)
        };
        Url::parse(&raw).map_err(|e| Error::InvalidEndpoint(format!("{}: {}", raw, e)))
    }

    /// Request for `POST /sms`, stamped with the current time.
    #[inline]
    pub fn send_sms_request(&self, sms: &SmsMessage) -> Result<Request> {
        let body = sms.to_json()?;
        let query = format!("api-version={}", SMS_API_VERSION);
        self.build_request(Method::POST, SMS_PATH, &query, body, Utc::now())
    }

    /// Signed, ready-to-send request. `date` must be fresh for every attempt.
    ///
    /// The signature covers the path and query exactly as they appear on the
    /// built request's URL, after percent-encoding and dot-segment removal.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &str,
        body: Vec<u8>,
        date: DateTime<Utc>,
    ) -> Result<Request> {
        let timestamp = http_date(date);
        let url = self.url(path, query)?;

        let mut req = Request::new(method, url);
        *req.body_mut() = Some(body.into());
        let signed = self.sign_request(&req, &timestamp)?;

        *req.headers_mut() = signed.to_header_map()?;
        *req.timeout_mut() = Some(self.timeout);
        debug!("build_request: signed {} {}", req.method(), req.url());

        Ok(req)
    }

    /// Compute every header value the service checks for one request.
    ///
    /// `path` and `query` go through the same URL normalization as
    /// [`Acs::build_request`], so both produce the same signature.
    pub fn sign(
        &self,
        method: &str,
        path: &str,
        query: &str,
        body: &[u8],
        timestamp: &str,
    ) -> Result<SignedHeaders> {
        let url = self.url(path, query)?;
        let hash = content_hash(body);
        let canonical = CanonicalRequest::from_url(method, &url, timestamp, &hash);
        let authorization = self.authorization(&canonical)?;

        Ok(SignedHeaders {
            date: timestamp.to_string(),
            host: host_of(&url)?,
            content_hash: hash,
            authorization,
        })
    }

    /// Sign a built request from its own method, URL and body.
    pub fn sign_request(&self, req: &Request, timestamp: &str) -> Result<SignedHeaders> {
        let hash = req.payload_hash();
        let canonical = CanonicalRequest::from_request(req, timestamp, &hash);
        let authorization = self.authorization(&canonical)?;

        Ok(SignedHeaders {
            date: timestamp.to_string(),
            host: host_of(req.url())?,
            content_hash: hash,
            authorization,
        })
    }

    #[inline]
    fn authorization(&self, canonical: &CanonicalRequest<'_>) -> Result<String> {
        let key = SigningKey::from_base64(&self.access_key)?;
        Signer::new(&key).authorization(canonical)
    }
}

#[inline]
pub fn http_date(date: DateTime<Utc>) -> String {
    date.format(HTTP_DATE_FORMAT).to_string()
}

#[inline]
fn host_of(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::InvalidEndpoint(format!("{}: missing host", url)))?;
    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[inline]
fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader(format!("{}: {}", name, e)))
}
