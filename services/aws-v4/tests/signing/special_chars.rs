use super::{init_signing_test, send_signed_request};
use anyhow::Result;
use http::{Method, Request, StatusCode};
use log::warn;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::str::FromStr;

#[tokio::test]
async fn test_head_object_with_special_characters() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("SIGV4_AWS_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = Request::new(String::new());
    *req.method_mut() = Method::HEAD;
    *req.uri_mut() = http::Uri::from_str(&format!(
        "{}/{}",
        url,
        utf8_percent_encode("!@#$%^&*()_+-=;:'><,/?.txt", NON_ALPHANUMERIC)
    ))?;

    let (status, _body) = send_signed_request(&signer, req).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}

#[tokio::test]
async fn test_head_object_with_utf8_characters() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("SIGV4_AWS_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = Request::new(String::new());
    *req.method_mut() = Method::HEAD;
    *req.uri_mut() = http::Uri::from_str(&format!(
        "{}/{}",
        url,
        utf8_percent_encode("中文 文件.txt", NON_ALPHANUMERIC)
    ))?;

    let (status, _body) = send_signed_request(&signer, req).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}

#[tokio::test]
async fn test_list_bucket_with_encoded_prefix() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("SIGV4_AWS_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = Request::new(String::new());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = http::Uri::from_str(&format!(
        "{url}?list-type=2&prefix={}",
        utf8_percent_encode("a b/c+d=", NON_ALPHANUMERIC)
    ))?;

    let (status, _body) = send_signed_request(&signer, req).await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}
