pub const MS_DATE_KEY: &str = "x-ms-date";
pub const MS_CONTENT_KEY: &str = "x-ms-content-sha256";
pub const HOST_KEY: &str = "host";
pub const AUTHORIZATION_KEY: &str = "authorization";
pub const CONTENT_TYPE_KEY: &str = "content-type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const HMAC_ALGO_VALUE: &str = "HMAC-SHA256";
/// Must match, in name and order, what the service re-derives on its side.
pub const SIGNED_HEADERS_VALUE: &str = "x-ms-date;host;x-ms-content-sha256";

pub const SMS_PATH: &str = "/sms";
pub const SMS_API_VERSION: &str = "2021-03-07";

/// RFC 1123 HTTP-date, always rendered in UTC.
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
