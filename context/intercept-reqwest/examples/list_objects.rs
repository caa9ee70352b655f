use anyhow::Result;
use reqwest::Client;
use sigv4_aws::{Config, EnvCredentialProvider, RequestSigner};
use sigv4_core::{Context, OsEnv, Signer};
use sigv4_reqwest::SigningClient;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let Ok(bucket) = env::var("SIGV4_EXAMPLE_BUCKET") else {
        eprintln!("SIGV4_EXAMPLE_BUCKET is not set");
        return Ok(());
    };

    let ctx = Context::new().with_env(OsEnv);
    let cfg = Config {
        region: Some("us-east-1".to_string()),
        service: Some("s3".to_string()),
        content_sha256: true,
        ..Default::default()
    }
    .from_env(&ctx);
    let region = cfg.region.clone().unwrap_or_default();

    let signer = Signer::new(
        ctx,
        EnvCredentialProvider::new(),
        RequestSigner::from_config(cfg)?,
    );
    let client = SigningClient::new(Client::new(), signer);

    let req = client
        .client()
        .get(format!("https://{bucket}.s3.{region}.amazonaws.com/?list-type=2&max-keys=10"))
        .build()?;
    let resp = client.execute(req).await?;

    println!("status: {}", resp.status());
    println!("{}", resp.text().await?);
    Ok(())
}
