use crate::canonical::UriEncoding;
use crate::constants::{AWS_DEFAULT_REGION, AWS_REGION};
use log::debug;
use sigv4_core::Context;

/// Config for the aws request signer.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `region` will be loaded from:
    ///
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    /// - this field if it's `is_some`
    pub region: Option<String>,
    /// `service` is the signing name of the service, for example `s3`.
    ///
    /// There is no env value for it, callers always know who they talk to.
    pub service: Option<String>,
    /// Send `X-Amz-Content-Sha256` with every request. S3 requires it.
    pub content_sha256: bool,
    /// How the request path is encoded in the canonical request.
    pub uri_encoding: UriEncoding,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx
            .env_var(AWS_REGION)
            .or_else(|| ctx.env_var(AWS_DEFAULT_REGION))
        {
            debug!("load region {v} from env");
            self.region = Some(v);
        }

        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Set the service signing name.
    pub fn with_service(mut self, service: &str) -> Self {
        self.service = Some(service.to_string());
        self
    }
}
