//! AWS Signature Version 4 request signer.
//!
//! - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
//!
//! This crate provides the SigV4 building blocks on top of `sigv4-core`:
//!
//! - [`canonical`]: build the canonical request from a `SigningRequest`
//! - [`sign`]: string to sign, signing key derivation and signature
//! - [`RequestSigner`]: ties both together and implements `SignRequest`
//! - credential providers: [`StaticCredentialProvider`], [`EnvCredentialProvider`]
//!   and [`ProvideCredentialChain`]
//!
//! ## Example
//!
//! ```no_run
//! use sigv4_aws::{EnvCredentialProvider, RequestSigner};
//! use sigv4_core::{Context, OsEnv, Result, Signer, SigningBody};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let signer = Signer::new(
//!     ctx,
//!     EnvCredentialProvider::new(),
//!     RequestSigner::new("s3", "us-east-1").with_content_sha256(true),
//! );
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://examplebucket.s3.amazonaws.com/test.txt")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, SigningBody::Empty).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

pub mod canonical;
pub use canonical::{CanonicalRequest, Canonicalizer, UriEncoding};

pub mod sign;
pub use sign::Signature;

mod config;
pub use config::Config;

mod credential;
pub use credential::{Credential, CredentialScope};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
