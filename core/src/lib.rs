//! Core components for signing HTTP requests.
//!
//! This crate provides the service-agnostic types and traits that a signing
//! service (such as `sigv4-aws`) builds upon.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **SigningRequest**: An immutable snapshot of the request to sign (method, uri, query, headers, body)
//! - **SignedHeaders**: The headers a signer produced, applied back onto the outgoing request
//! - **Context**: A container that holds the environment implementation used by credential providers
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: The orchestrator that resolves credentials for every request and runs the request signer
//!
//! ## Example
//!
//! ```no_run
//! use sigv4_core::{Context, Result, SignedHeaders, Signer, SigningBody, SigningCredential, SigningRequest};
//! use sigv4_core::{ProvideCredential, SignRequest};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyRequestSigner;
//!
//! impl SignRequest for MyRequestSigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(&self, _: &SigningRequest, _: &Self::Credential) -> Result<SignedHeaders> {
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyRequestSigner);
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, SigningBody::Empty).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting and parsing in UTC
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod request;
pub use request::{SignedHeaders, SigningBody, SigningRequest};
mod signer;
pub use signer::Signer;
