//! `Authorization: ApiKey <token>` extraction - core logic.
//!
//! This module only reads headers. It does not know about axum middleware,
//! does not look keys up anywhere, and does not log: rejected requests are
//! logged by the caller.

use std::fmt;

use axum::http::{HeaderMap, header};

/// Scheme marker expected as the first field of the Authorization value.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Why an `Authorization` header did not yield an API key.
///
/// The `Display` strings are part of the contract (clients see them in 401 bodies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    /// Absent, or present with an empty value.
    #[error("no authorization header included")]
    MissingHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl ApiKeyError {
    /// Stable short name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::MalformedHeader => "malformed_header",
        }
    }
}

/// Returns the credential token of an `Authorization: ApiKey <token>` header.
///
/// - Lookup goes through `HeaderMap`, so the header name is case-insensitive
///   and only the first value is considered when the header is repeated.
/// - An empty value is treated the same as a missing header.
/// - The value must be exactly two whitespace-separated fields, the first one
///   being `ApiKey` (case-sensitive). The token is returned verbatim.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = match headers.get(header::AUTHORIZATION) {
        None => return Err(ApiKeyError::MissingHeader),
        Some(v) if v.is_empty() => return Err(ApiKeyError::MissingHeader),
        // obs-text (non visible ASCII) can't carry a usable token
        Some(v) => v.to_str().map_err(|_| ApiKeyError::MalformedHeader)?,
    };

    let mut fields = value.split_whitespace();

    match (fields.next(), fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(token), None) => Ok(token.to_owned()),
        _ => Err(ApiKeyError::MalformedHeader),
    }
}

/// An extracted API key.
///
/// - Key material is intentionally not printable via Debug.
/// - `fingerprint` is what goes into logs and responses.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// base64url(SHA-256(token)), unpadded.
    pub fn fingerprint(&self) -> String {
        use base64::Engine as _;
        use sha2::{Digest, Sha256};

        let digest = Sha256::digest(self.0.as_bytes());
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue};

    use super::*;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn extracts_api_key_scenarios() {
        let cases: &[(&str, Option<&'static str>, Result<&str, ApiKeyError>)] = &[
            ("valid api key", Some("ApiKey test-key-123"), Ok("test-key-123")),
            ("missing header", None, Err(ApiKeyError::MissingHeader)),
            ("empty header", Some(""), Err(ApiKeyError::MissingHeader)),
            (
                "wrong scheme",
                Some("Bearer test-key"),
                Err(ApiKeyError::MalformedHeader),
            ),
            ("missing key", Some("ApiKey"), Err(ApiKeyError::MalformedHeader)),
            (
                "special characters",
                Some("ApiKey key_with-special.chars123"),
                Ok("key_with-special.chars123"),
            ),
        ];

        for (name, value, expected) in cases {
            let headers = match value {
                Some(v) => headers_with(*v),
                None => HeaderMap::new(),
            };

            let got = extract_api_key(&headers);
            let expected = (*expected).map(str::to_owned);
            assert_eq!(got, expected, "case: {name}");
        }
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            ApiKeyError::MissingHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            ApiKeyError::MalformedHeader.to_string(),
            "malformed authorization header"
        );
    }

    #[test]
    fn scheme_is_case_sensitive() {
        for value in ["apikey abc", "APIKEY abc", "Apikey abc"] {
            let mut headers = HeaderMap::new();
            headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
            assert_eq!(
                extract_api_key(&headers),
                Err(ApiKeyError::MalformedHeader),
                "value: {value}"
            );
        }
    }

    #[test]
    fn header_name_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"AUTHORIZATION").unwrap(),
            HeaderValue::from_static("ApiKey upper"),
        );
        assert_eq!(extract_api_key(&headers).as_deref(), Ok("upper"));
    }

    #[test]
    fn only_first_value_is_considered() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(extract_api_key(&headers).as_deref(), Ok("first"));

        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("Bearer first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(extract_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn rejects_extra_fields_and_blank_values() {
        for value in ["ApiKey a b", "   ", "\t", "ApiKey a\tb"] {
            assert_eq!(
                extract_api_key(&headers_with(value)),
                Err(ApiKeyError::MalformedHeader),
                "value: {value:?}"
            );
        }
    }

    #[test]
    fn collapses_whitespace_between_fields() {
        assert_eq!(
            extract_api_key(&headers_with("ApiKey   spaced")).as_deref(),
            Ok("spaced")
        );
        assert_eq!(
            extract_api_key(&headers_with("ApiKey\tTabbed-Key")).as_deref(),
            Ok("Tabbed-Key")
        );
    }

    #[test]
    fn rejects_non_ascii_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey caf\xc3\xa9").unwrap(),
        );
        assert_eq!(extract_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn extraction_is_idempotent() {
        let headers = headers_with("ApiKey same-key");
        assert_eq!(extract_api_key(&headers), extract_api_key(&headers));

        let headers = headers_with("Bearer nope");
        assert_eq!(extract_api_key(&headers), extract_api_key(&headers));
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        let printed = format!("{key:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("redacted"));
    }

    #[test]
    fn fingerprint_is_base64url_sha256() {
        assert_eq!(
            ApiKey::new("abc").fingerprint(),
            "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0"
        );
    }
}
