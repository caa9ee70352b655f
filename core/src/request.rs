use crate::{Error, Result};
use bytes::Bytes;
use http::header::{AsHeaderName, HeaderName};
use http::request::Parts;
use http::uri::{Authority, Scheme};
use http::{HeaderMap, HeaderValue, Method, Uri};

/// Snapshot of the request to sign.
///
/// Built once per signing attempt. Signers derive their canonical form from
/// it and never write back into it; the outgoing request is only touched
/// through [`SignedHeaders::apply`].
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority, host with optional port.
    pub authority: Authority,
    /// HTTP path, as encoded in the request uri.
    pub path: String,
    /// HTTP query parameters, decoded, in request order. Names may repeat.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// HTTP body.
    pub body: SigningBody,
}

impl SigningRequest {
    /// Build a signing request from http::request::Parts.
    pub fn build(parts: &Parts, body: SigningBody) -> Result<Self> {
        Self::from_uri(parts.method.clone(), &parts.uri, &parts.headers, body)
    }

    /// Build a signing request from method, uri and headers.
    ///
    /// The uri must be absolute: requests without scheme or authority can't
    /// be signed.
    pub fn from_uri(
        method: Method,
        uri: &Uri,
        headers: &HeaderMap,
        body: SigningBody,
    ) -> Result<Self> {
        let scheme = uri.scheme().cloned().ok_or_else(|| {
            Error::request_malformed(format!(
                "request uri {uri} without scheme is invalid for signing"
            ))
        })?;
        let authority = uri.authority().cloned().ok_or_else(|| {
            Error::request_malformed(format!(
                "request uri {uri} without authority is invalid for signing"
            ))
        })?;
        if authority.host().is_empty() {
            return Err(Error::request_malformed(format!(
                "request uri {uri} without host is invalid for signing"
            )));
        }

        Ok(SigningRequest {
            method,
            scheme,
            authority,
            path: uri.path().to_string(),
            query: uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
            headers: headers.clone(),
            body,
        })
    }

    /// Get the host of this request, without port.
    #[inline]
    pub fn host(&self) -> &str {
        self.authority.host()
    }

    /// Get the explicit port of this request, if any.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.authority.port_u16()
    }

    /// Value for the `host` header.
    ///
    /// The port is only kept when it differs from the scheme's default.
    pub fn host_header_value(&self) -> String {
        let default_port = if self.scheme == Scheme::HTTPS {
            Some(443)
        } else if self.scheme == Scheme::HTTP {
            Some(80)
        } else {
            None
        };

        match self.port() {
            Some(port) if Some(port) != default_port => format!("{}:{}", self.host(), port),
            _ => self.host().to_string(),
        }
    }

    /// Derive a new snapshot with `name` set to `value`, replacing any
    /// existing values.
    pub fn with_header(&self, name: HeaderName, value: HeaderValue) -> Self {
        let mut req = self.clone();
        req.headers.insert(name, value);
        req
    }
}

/// Body of the request to sign.
#[derive(Debug, Clone, Default)]
pub enum SigningBody {
    /// No body.
    #[default]
    Empty,
    /// Fully buffered body, exactly the bytes that will be sent.
    Bytes(Bytes),
    /// The body can't be buffered, for example a stream that was already
    /// consumed or can only be read once.
    Unavailable,
}

impl SigningBody {
    /// Get the buffered body content.
    ///
    /// Returns `BodyUnavailable` if the body can't be buffered.
    pub fn as_bytes(&self) -> Result<&[u8]> {
        match self {
            SigningBody::Empty => Ok(&[]),
            SigningBody::Bytes(bs) => Ok(bs.as_ref()),
            SigningBody::Unavailable => Err(Error::body_unavailable(
                "request body can't be buffered for signing",
            )),
        }
    }
}

impl From<Bytes> for SigningBody {
    fn from(bs: Bytes) -> Self {
        SigningBody::Bytes(bs)
    }
}

impl From<Vec<u8>> for SigningBody {
    fn from(bs: Vec<u8>) -> Self {
        SigningBody::Bytes(Bytes::from(bs))
    }
}

impl From<&'static str> for SigningBody {
    fn from(s: &'static str) -> Self {
        SigningBody::Bytes(Bytes::from_static(s.as_bytes()))
    }
}

impl From<String> for SigningBody {
    fn from(s: String) -> Self {
        SigningBody::Bytes(Bytes::from(s))
    }
}

/// Headers produced by a signer.
///
/// Applying them replaces any existing values with the same names and
/// leaves every other header untouched.
#[derive(Debug, Clone, Default)]
pub struct SignedHeaders {
    headers: HeaderMap,
}

impl SignedHeaders {
    /// Create an empty set of signed headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing previous value with the same name.
    pub fn insert(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Get a header value by name.
    pub fn get(&self, name: impl AsHeaderName) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Iterate over all signed headers.
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.headers.iter()
    }

    /// Number of signed headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns true if no header was produced.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Apply the signed headers onto the outgoing request headers.
    pub fn apply(self, headers: &mut HeaderMap) {
        for (name, value) in self.headers {
            // The map is built by `insert`, so every entry carries a name.
            if let Some(name) = name {
                headers.insert(name, value);
            }
        }
    }
}
