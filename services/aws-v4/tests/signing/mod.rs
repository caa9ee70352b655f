mod properties;
mod special_chars;
mod standard;

use anyhow::Result;
use http::{Request, StatusCode};
use log::debug;
use reqwest::Client;
use sigv4_aws::{Credential, RequestSigner, StaticCredentialProvider};
use sigv4_core::{Context, Signer, SigningBody};
use std::env;

/// Initialize the live test environment.
///
/// Returns `None` unless `SIGV4_AWS_TEST` is `on`.
pub fn init_signing_test() -> Option<(Signer<Credential>, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("SIGV4_AWS_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let region = env::var("SIGV4_AWS_REGION").expect("SIGV4_AWS_REGION must be set");
    let service = env::var("SIGV4_AWS_SERVICE").unwrap_or_else(|_| "s3".to_string());
    let url = env::var("SIGV4_AWS_URL").expect("SIGV4_AWS_URL must be set");

    let access_key = env::var("SIGV4_AWS_ACCESS_KEY").expect("SIGV4_AWS_ACCESS_KEY must be set");
    let secret_key = env::var("SIGV4_AWS_SECRET_KEY").expect("SIGV4_AWS_SECRET_KEY must be set");
    let mut provider = StaticCredentialProvider::new(&access_key, &secret_key);
    if let Ok(token) = env::var("SIGV4_AWS_SESSION_TOKEN") {
        provider = provider.with_session_token(&token);
    }

    let signer = Signer::new(
        Context::new(),
        provider,
        RequestSigner::new(&service, &region).with_content_sha256(service == "s3"),
    );

    Some((signer, url))
}

/// Sign the request, send it and return the response.
pub async fn send_signed_request(
    signer: &Signer<Credential>,
    req: Request<String>,
) -> Result<(StatusCode, String)> {
    let (mut parts, body) = req.into_parts();
    let signing_body = SigningBody::from(body.clone());
    signer.sign(&mut parts, signing_body).await?;
    let req = Request::from_parts(parts, body);

    debug!("signed request: {req:?}");

    let resp = Client::new().execute(req.try_into()?).await?;
    let status = resp.status();
    let body = resp.text().await?;

    debug!("response status: {status}, body: {body}");
    Ok((status, body))
}
