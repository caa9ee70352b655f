//! String to sign, signing key and signature.
//!
//! - [Create a string to sign](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-string-to-sign)
//! - [Calculate the signature](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#calculate-signature)

use crate::canonical::CanonicalRequest;
use crate::constants::{AWS4_HMAC_SHA256, AWS4_REQUEST};
use crate::{Credential, CredentialScope};
use log::debug;
use sigv4_core::hash::{hex_hmac_sha256, hmac_sha256};
use sigv4_core::time::{format_iso8601, DateTime};
use sigv4_core::{Error, Result};

/// Result of signing a canonical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Signing time in `YYYYMMDDTHHMMSSZ`, the `X-Amz-Date` value.
    pub amz_date: String,
    /// The string the signature was computed over.
    pub string_to_sign: String,
    /// Hex encoded signature.
    pub signature: String,
    /// Value for the `Authorization` header.
    pub authorization: String,
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20150830T123600Z
/// 20150830/us-east-1/iam/aws4_request
/// f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59
/// ```
pub fn string_to_sign(creq: &CanonicalRequest, time: DateTime, scope: &CredentialScope) -> String {
    format!(
        "{AWS4_HMAC_SHA256}\n{}\n{scope}\n{}",
        format_iso8601(time),
        creq.hashed()
    )
}

/// Derive the signing key for this scope.
pub fn generate_signing_key(secret: &str, scope: &CredentialScope) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), scope.date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), scope.region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), scope.service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}

/// Sign the canonical request with the credential.
///
/// `scope` must be built from the same `time`.
pub fn sign(
    creq: &CanonicalRequest,
    time: DateTime,
    scope: &CredentialScope,
    cred: &Credential,
) -> Result<Signature> {
    if cred.access_key_id.is_empty() || cred.secret_access_key.is_empty() {
        return Err(Error::credential_invalid(
            "access key id and secret access key are required for signing",
        ));
    }

    let string_to_sign = string_to_sign(creq, time, scope);
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(&cred.secret_access_key, scope);
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

    let authorization = format!(
        "{AWS4_HMAC_SHA256} Credential={}/{scope}, SignedHeaders={}, Signature={signature}",
        cred.access_key_id, creq.signed_headers
    );

    Ok(Signature {
        amz_date: format_iso8601(time),
        string_to_sign,
        signature,
        authorization,
    })
}
