use anyhow::Result;
use chrono::{TimeZone, Utc};
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::{Method, Request};
use pretty_assertions::assert_eq;
use sigv4_aws::{
    Config, Credential, EnvCredentialProvider, ProvideCredentialChain, RequestSigner,
    StaticCredentialProvider,
};
use sigv4_core::{Context, ErrorKind, Signer, SigningBody, StaticEnv};
use std::collections::HashMap;

fn fixed_signer(provider: StaticCredentialProvider) -> Signer<Credential> {
    let time = Utc
        .with_ymd_and_hms(2015, 8, 30, 12, 36, 0)
        .single()
        .expect("must be valid");

    Signer::new(
        Context::new(),
        provider,
        RequestSigner::new("service", "us-east-1").with_time(time),
    )
}

fn parts(method: Method, uri: &str, headers: &[(&str, &str)]) -> Parts {
    let mut builder = Request::builder().method(method).uri(uri);
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    builder.body(()).expect("must be valid").into_parts().0
}

async fn authorization(
    signer: &Signer<Credential>,
    mut parts: Parts,
    body: SigningBody,
) -> Result<String> {
    signer.sign(&mut parts, body).await?;
    Ok(parts.headers[AUTHORIZATION].to_str()?.to_string())
}

#[tokio::test]
async fn test_sign_get_vanilla() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let signer = fixed_signer(StaticCredentialProvider::new(
        "AKIDEXAMPLE",
        "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
    ));

    let mut parts = parts(Method::GET, "https://example.amazonaws.com/", &[]);
    signer.sign(&mut parts, SigningBody::Empty).await?;

    assert_eq!(parts.headers["x-amz-date"], "20150830T123600Z");
    assert_eq!(
        parts.headers[AUTHORIZATION],
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=host;x-amz-date, Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
    );
    // host is signed but never written back.
    assert!(parts.headers.get("host").is_none());
    Ok(())
}

#[tokio::test]
async fn test_sign_is_idempotent_under_fixed_time() -> Result<()> {
    let signer = fixed_signer(StaticCredentialProvider::new("ak", "sk"));
    let uri = "https://example.amazonaws.com/path?b=2&a=1";

    let first = authorization(&signer, parts(Method::PUT, uri, &[]), "body".into()).await?;
    let second = authorization(&signer, parts(Method::PUT, uri, &[]), "body".into()).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_sign_query_order_independent() -> Result<()> {
    let signer = fixed_signer(StaticCredentialProvider::new("ak", "sk"));

    let a = authorization(
        &signer,
        parts(
            Method::GET,
            "https://example.amazonaws.com/?z=1&a=2&a=1",
            &[],
        ),
        SigningBody::Empty,
    )
    .await?;
    let b = authorization(
        &signer,
        parts(
            Method::GET,
            "https://example.amazonaws.com/?a=1&z=1&a=2",
            &[],
        ),
        SigningBody::Empty,
    )
    .await?;
    assert_eq!(a, b);
    Ok(())
}

#[tokio::test]
async fn test_sign_header_case_and_whitespace_insensitive() -> Result<()> {
    let signer = fixed_signer(StaticCredentialProvider::new("ak", "sk"));

    let a = authorization(
        &signer,
        parts(
            Method::GET,
            "https://example.amazonaws.com/",
            &[("My-Header1", "  value1   value2  ")],
        ),
        SigningBody::Empty,
    )
    .await?;
    let b = authorization(
        &signer,
        parts(
            Method::GET,
            "https://example.amazonaws.com/",
            &[("my-header1", "value1 value2")],
        ),
        SigningBody::Empty,
    )
    .await?;
    assert_eq!(a, b);
    Ok(())
}

#[tokio::test]
async fn test_sign_body_sensitive() -> Result<()> {
    let signer = fixed_signer(StaticCredentialProvider::new("ak", "sk"));
    let uri = "https://example.amazonaws.com/";

    let a = authorization(&signer, parts(Method::POST, uri, &[]), "a=1".into()).await?;
    let b = authorization(&signer, parts(Method::POST, uri, &[]), "a=2".into()).await?;
    assert_ne!(a, b);
    Ok(())
}

#[tokio::test]
async fn test_sign_unsigned_headers_ignored() -> Result<()> {
    let signer = fixed_signer(StaticCredentialProvider::new("ak", "sk"));
    let uri = "https://example.amazonaws.com/";

    let a = authorization(&signer, parts(Method::GET, uri, &[]), SigningBody::Empty).await?;
    let b = authorization(
        &signer,
        parts(
            Method::GET,
            uri,
            &[
                ("user-agent", "curl/8.0"),
                ("x-amzn-trace-id", "Root=1-abc"),
            ],
        ),
        SigningBody::Empty,
    )
    .await?;
    assert_eq!(a, b);
    Ok(())
}

#[tokio::test]
async fn test_sign_unavailable_body_leaves_request_untouched() {
    let signer = fixed_signer(StaticCredentialProvider::new("ak", "sk"));

    let mut parts = parts(Method::PUT, "https://example.amazonaws.com/object", &[]);
    let err = signer
        .sign(&mut parts, SigningBody::Unavailable)
        .await
        .expect_err("must fail");

    assert_eq!(err.kind(), ErrorKind::BodyUnavailable);
    assert!(parts.headers.is_empty());
}

#[tokio::test]
async fn test_sign_with_env_config() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("AWS_ACCESS_KEY_ID".to_string(), "AKIDEXAMPLE".to_string()),
            (
                "AWS_SECRET_ACCESS_KEY".to_string(),
                "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
            ),
            ("AWS_SESSION_TOKEN".to_string(), "session_token".to_string()),
            ("AWS_DEFAULT_REGION".to_string(), "eu-west-1".to_string()),
        ]),
    });

    let cfg = Config::default().with_service("sqs").from_env(&ctx);
    let signer = Signer::new(
        ctx,
        ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(StaticCredentialProvider::new("unused", "unused")),
        RequestSigner::from_config(cfg)?,
    );

    let mut parts = parts(Method::GET, "https://sqs.eu-west-1.amazonaws.com/", &[]);
    signer.sign(&mut parts, SigningBody::Empty).await?;

    assert_eq!(parts.headers["x-amz-security-token"], "session_token");
    let authorization = parts.headers[AUTHORIZATION].to_str()?;
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(authorization.contains("/eu-west-1/sqs/aws4_request, "));
    assert!(authorization.contains("SignedHeaders=host;x-amz-date;x-amz-security-token, "));
    Ok(())
}

#[tokio::test]
async fn test_sign_without_credential() {
    let signer = Signer::new(
        Context::new(),
        EnvCredentialProvider::new(),
        RequestSigner::new("s3", "us-east-1"),
    );

    let mut parts = parts(Method::GET, "https://example.amazonaws.com/", &[]);
    let err = signer
        .sign(&mut parts, SigningBody::Empty)
        .await
        .expect_err("must fail");

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(err.is_credential_error());
}
