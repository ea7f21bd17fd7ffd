use std::fmt;

use hmac::digest::InvalidLength;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    InvalidKeyEncoding(base64::DecodeError),
    SignError(String),
    InvalidEndpoint(String),
    InvalidHeader(String),
    SerializeError(serde_json::Error),
    RequestError(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidKeyEncoding(e) => format!("Invalid Access Key Encoding: {}", e),
            Self::SignError(msg) => format!("Sign Error: {}", msg),
            Self::InvalidEndpoint(msg) => format!("Invalid Endpoint: {}", msg),
            Self::InvalidHeader(msg) => format!("Invalid Header: {}", msg),
            Self::SerializeError(e) => format!("Serialize Body Error: {}", e),
            Self::RequestError(e) => format!("Execute Request Error: {}", e),
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKeyEncoding(e) => Some(e),
            Self::SerializeError(e) => Some(e),
            Self::RequestError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Self::InvalidKeyEncoding(e)
    }
}

impl From<InvalidLength> for Error {
    fn from(e: InvalidLength) -> Self {
        Self::SignError(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializeError(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::RequestError(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use base64::Engine;

    use super::Error;

    #[test_log::test]
    fn test_invalid_key_encoding_display_and_source() {
        let decode_err = base64::engine::general_purpose::STANDARD
            .decode("not base64!!")
            .unwrap_err();
        let e = Error::from(decode_err);
        assert!(matches!(e, Error::InvalidKeyEncoding(_)));
        assert!(e.to_string().starts_with("Invalid Access Key Encoding: "));
        assert!(e.source().is_some());
    }

    #[test_log::test]
    fn test_message_variants_have_no_source() {
        let e = Error::InvalidEndpoint("relative URL without a base".to_string());
        assert_eq!(e.to_string(), "Invalid Endpoint: relative URL without a base");
        assert!(e.source().is_none());

        let e = Error::InvalidHeader("x-ms-date".to_string());
        assert_eq!(e.to_string(), "Invalid Header: x-ms-date");
    }
}
