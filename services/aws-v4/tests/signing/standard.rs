use super::{init_signing_test, send_signed_request};
use anyhow::Result;
use http::{Method, Request, StatusCode};
use log::warn;
use std::str::FromStr;

#[tokio::test]
async fn test_head_object() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("SIGV4_AWS_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = Request::new(String::new());
    *req.method_mut() = Method::HEAD;
    *req.uri_mut() = http::Uri::from_str(&format!("{}/{}", url, "not_exist_file"))?;

    let (status, _body) = send_signed_request(&signer, req).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}

#[tokio::test]
async fn test_put_object() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("SIGV4_AWS_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = Request::new("Hello, World!".to_string());
    *req.method_mut() = Method::PUT;
    *req.uri_mut() = http::Uri::from_str(&format!("{}/{}", url, "put_object_test"))?;

    let (status, _body) = send_signed_request(&signer, req).await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}

#[tokio::test]
async fn test_get_object() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("SIGV4_AWS_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = Request::new(String::new());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = http::Uri::from_str(&format!("{}/{}", url, "put_object_test"))?;

    let (status, body) = send_signed_request(&signer, req).await?;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(body, "Hello, World!");
    Ok(())
}

#[tokio::test]
async fn test_list_bucket() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("SIGV4_AWS_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = Request::new(String::new());
    *req.method_mut() = Method::GET;
    *req.uri_mut() =
        http::Uri::from_str(&format!("{url}?list-type=2&delimiter=/&encoding-type=url"))?;

    let (status, _body) = send_signed_request(&signer, req).await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}
