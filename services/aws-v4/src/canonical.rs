//! Canonical request construction for SigV4.
//!
//! - [Create a canonical request](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request)
//!
//! ```text
//! <HTTPMethod>\n
//! <CanonicalURI>\n
//! <CanonicalQueryString>\n
//! <CanonicalHeaders>\n
//! <SignedHeaders>\n
//! <HashedPayload>
//! ```

use crate::constants::{AWS_URI_ENCODE_SET, UNSIGNED_HEADERS};
use http::header;
use percent_encoding::{percent_decode_str, percent_encode, utf8_percent_encode};
use sigv4_core::hash::hex_sha256;
use sigv4_core::{Result, SigningBody, SigningRequest};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// How the request path is encoded in the canonical uri.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UriEncoding {
    /// Encode every path segment once. Already encoded input is decoded
    /// first so it isn't encoded twice. S3 expects this.
    #[default]
    Single,
    /// Encode the single encoded path once more. Most other services
    /// expect this.
    Double,
}

/// Canonical form of a request.
///
/// `Display` renders the exact string that gets hashed into the string to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// Upper-cased http method.
    pub method: String,
    /// Canonical uri.
    pub uri: String,
    /// Canonical query string, may be empty.
    pub query: String,
    /// Canonical headers as sorted `(name, value)` pairs.
    pub headers: Vec<(String, String)>,
    /// Sorted, `;` joined names of the signed headers.
    pub signed_headers: String,
    /// Hex encoded SHA256 of the payload.
    pub payload_hash: String,
}

impl CanonicalRequest {
    /// Hex encoded SHA256 of the canonical request.
    pub fn hashed(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.uri)?;
        writeln!(f, "{}", self.query)?;
        for (name, value) in &self.headers {
            writeln!(f, "{name}:{value}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.payload_hash)
    }
}

/// Canonicalizer turns a [`SigningRequest`] into its [`CanonicalRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonicalizer {
    uri_encoding: UriEncoding,
}

impl Canonicalizer {
    /// Create a canonicalizer with single uri encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the uri encoding.
    pub fn with_uri_encoding(mut self, uri_encoding: UriEncoding) -> Self {
        self.uri_encoding = uri_encoding;
        self
    }

    /// Build the canonical request.
    ///
    /// `host` is derived from the request authority if the request doesn't
    /// carry it. The request itself is not modified.
    pub fn canonicalize(
        &self,
        req: &SigningRequest,
        payload_hash: &str,
    ) -> Result<CanonicalRequest> {
        let headers = canonical_headers(req)?;
        let signed_headers = headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";");

        Ok(CanonicalRequest {
            method: req.method.as_str().to_ascii_uppercase(),
            uri: canonical_uri(&req.path, self.uri_encoding),
            query: canonical_query(&req.query),
            headers,
            signed_headers,
            payload_hash: payload_hash.to_string(),
        })
    }
}

/// Build the canonical request with the default [`Canonicalizer`].
pub fn canonicalize(req: &SigningRequest, payload_hash: &str) -> Result<CanonicalRequest> {
    Canonicalizer::default().canonicalize(req, payload_hash)
}

/// Hex encoded SHA256 of the body.
///
/// An empty body hashes as the empty string. Fails with `BodyUnavailable`
/// if the body can't be buffered.
pub fn payload_hash(body: &SigningBody) -> Result<String> {
    Ok(hex_sha256(body.as_bytes()?))
}

/// Encode the path segment by segment, keeping `/` separators.
pub fn canonical_uri(path: &str, encoding: UriEncoding) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let mut s = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        s.push('/');
    }

    for (idx, segment) in path.split('/').enumerate() {
        if idx > 0 {
            s.push('/');
        }

        let decoded: Cow<[u8]> = percent_decode_str(segment).into();
        let encoded = percent_encode(&decoded, &AWS_URI_ENCODE_SET).to_string();
        match encoding {
            UriEncoding::Single => s.push_str(&encoded),
            UriEncoding::Double => s.extend(utf8_percent_encode(&encoded, &AWS_URI_ENCODE_SET)),
        }
    }

    s
}

/// Encode and sort query pairs by name, then by value.
pub fn canonical_query(query: &[(String, String)]) -> String {
    let mut pairs = query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_URI_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_URI_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Trim the value and collapse inner whitespace runs into one space.
pub fn normalize_header_value(value: &str) -> String {
    value.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

fn canonical_headers(req: &SigningRequest) -> Result<Vec<(String, String)>> {
    // Header names in HeaderMap are lower-cased already.
    let mut headers = BTreeMap::new();
    for name in req.headers.keys() {
        if UNSIGNED_HEADERS.contains(&name.as_str()) {
            continue;
        }

        let mut values = Vec::new();
        for value in req.headers.get_all(name) {
            values.push(normalize_header_value(value.to_str()?));
        }
        headers.insert(name.as_str().to_string(), values.join(","));
    }

    headers
        .entry(header::HOST.as_str().to_string())
        .or_insert_with(|| req.host_header_value());

    Ok(headers.into_iter().collect())
}
