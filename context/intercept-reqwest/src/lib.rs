//! Sign [`reqwest`] requests right before they are sent.
//!
//! [`SigningInterceptor`] signs a `reqwest::Request` in place,
//! [`SigningClient`] pairs it with a `reqwest::Client` so every request that
//! goes through `execute` is signed exactly once.
//!
//! Failures are reported as [`std::io::Error`] whose source is the original
//! error, so callers can still inspect the `sigv4_core::Error` or
//! `reqwest::Error` behind it.

#![warn(missing_docs)]

use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Body, Client, Request, Response};
use sigv4_core::{Error, Result, Signer, SigningBody, SigningCredential, SigningRequest};
use std::io;

/// SigningInterceptor signs outgoing requests with the wrapped [`Signer`].
#[derive(Clone, Debug)]
pub struct SigningInterceptor<K: SigningCredential> {
    signer: Signer<K>,
}

impl<K: SigningCredential> SigningInterceptor<K> {
    /// Create a new interceptor.
    pub fn new(signer: Signer<K>) -> Self {
        Self { signer }
    }

    /// Sign the request in place.
    ///
    /// The body is buffered, hashed and put back as the same bytes. Only the
    /// signing headers are replaced. On error no signing header is written
    /// and the request must not be sent.
    pub async fn intercept(&self, req: &mut Request) -> io::Result<()> {
        let uri: http::Uri = req.url().as_str().parse().map_err(Error::from)?;
        let body = buffer_body(req.body_mut()).await?;
        let signing_req =
            SigningRequest::from_uri(req.method().clone(), &uri, req.headers(), body)?;

        let signed = self.signer.signed_headers(&signing_req).await?;
        debug!(
            "signed {} {} with {} headers",
            req.method(),
            req.url(),
            signed.len()
        );

        signed.apply(req.headers_mut());
        Ok(())
    }
}

/// Read the whole body into memory and put it back as bytes.
///
/// A body that fails while being read is lost and reported as
/// `BodyUnavailable`.
async fn buffer_body(body: &mut Option<Body>) -> Result<SigningBody> {
    let Some(inner) = body.take() else {
        return Ok(SigningBody::Empty);
    };

    let bs = match inner.as_bytes().map(Bytes::copy_from_slice) {
        Some(bs) => bs,
        None => BodyExt::collect(inner)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| {
                Error::body_unavailable("request body can't be read for signing").with_source(e)
            })?,
    };

    *body = Some(Body::from(bs.clone()));
    Ok(SigningBody::Bytes(bs))
}

/// SigningClient signs every request before sending it.
///
/// Retrying means calling [`SigningClient::execute`] again, which signs the
/// request with a fresh timestamp.
#[derive(Clone, Debug)]
pub struct SigningClient<K: SigningCredential> {
    client: Client,
    interceptor: SigningInterceptor<K>,
}

impl<K: SigningCredential> SigningClient<K> {
    /// Create a new client.
    pub fn new(client: Client, signer: Signer<K>) -> Self {
        Self {
            client,
            interceptor: SigningInterceptor::new(signer),
        }
    }

    /// Get the inner reqwest client to build requests.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Sign and send the request.
    pub async fn execute(&self, mut req: Request) -> io::Result<Response> {
        self.interceptor.intercept(&mut req).await?;
        self.client.execute(req).await.map_err(io::Error::other)
    }
}
