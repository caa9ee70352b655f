use crate::canonical::{payload_hash, Canonicalizer, UriEncoding};
use crate::constants::{X_AMZ_CONTENT_SHA_256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};
use crate::sign::sign;
use crate::{Config, Credential, CredentialScope};
use chrono::FixedOffset;
use http::header::{HeaderName, AUTHORIZATION};
use http::HeaderValue;
use log::debug;
use sigv4_core::time::{format_iso8601, now, to_utc};
use sigv4_core::{Error, Result, SignRequest, SignedHeaders, SigningRequest};

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer holds no state between calls, every request is signed with
/// its own timestamp.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<chrono::DateTime<FixedOffset>>,
    content_sha256: bool,
    canonicalizer: Canonicalizer,
}

impl RequestSigner {
    /// Create a new signer for AWS V4.
    ///
    /// `service` and `region` are used as is in the credential scope.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
            content_sha256: false,
            canonicalizer: Canonicalizer::default(),
        }
    }

    /// Create a signer from config.
    ///
    /// Both region and service must be set.
    pub fn from_config(cfg: Config) -> Result<Self> {
        let region = cfg
            .region
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("region is required for aws v4 signer"))?;
        let service = cfg
            .service
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("service is required for aws v4 signer"))?;

        Ok(Self::new(&service, &region)
            .with_content_sha256(cfg.content_sha256)
            .with_uri_encoding(cfg.uri_encoding))
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing. The time must be in UTC, any
    /// other offset is rejected while signing.
    pub fn with_time(mut self, time: impl Into<chrono::DateTime<FixedOffset>>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Send `X-Amz-Content-Sha256` with the payload hash.
    pub fn with_content_sha256(mut self, enabled: bool) -> Self {
        self.content_sha256 = enabled;
        self
    }

    /// Set the uri encoding used in the canonical request.
    pub fn with_uri_encoding(mut self, uri_encoding: UriEncoding) -> Self {
        self.canonicalizer = self.canonicalizer.with_uri_encoding(uri_encoding);
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &SigningRequest, cred: &Self::Credential) -> Result<SignedHeaders> {
        // One timestamp for both x-amz-date and the scope.
        let now = match self.time {
            Some(t) => to_utc(t)?,
            None => now(),
        };
        let payload_hash = payload_hash(&req.body)?;

        let mut signed = SignedHeaders::new();

        let name = HeaderName::from_static(X_AMZ_DATE);
        let value = HeaderValue::from_str(&format_iso8601(now))?;
        let mut signing_req = req.with_header(name.clone(), value.clone());
        signed.insert(name, value);

        if let Some(token) = &cred.session_token {
            let name = HeaderName::from_static(X_AMZ_SECURITY_TOKEN);
            let mut value = HeaderValue::from_str(token)?;
            value.set_sensitive(true);
            signing_req = signing_req.with_header(name.clone(), value.clone());
            signed.insert(name, value);
        }

        if self.content_sha256 || req.headers.contains_key(X_AMZ_CONTENT_SHA_256) {
            let name = HeaderName::from_static(X_AMZ_CONTENT_SHA_256);
            let value = HeaderValue::from_str(&payload_hash)?;
            signing_req = signing_req.with_header(name.clone(), value.clone());
            signed.insert(name, value);
        }

        let creq = self.canonicalizer.canonicalize(&signing_req, &payload_hash)?;
        debug!("calculated canonical request: {creq}");

        let scope = CredentialScope::new(now, &self.region, &self.service);
        debug!("calculated scope: {scope}");

        let signature = sign(&creq, now, &scope, cred)?;

        let mut authorization = HeaderValue::from_str(&signature.authorization)?;
        authorization.set_sensitive(true);
        signed.insert(AUTHORIZATION, authorization);

        Ok(signed)
    }
}
