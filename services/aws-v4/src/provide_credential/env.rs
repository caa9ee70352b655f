use crate::{constants::*, Credential};
use async_trait::async_trait;
use log::debug;
use sigv4_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the credential from env.
///
/// - [`AWS_ACCESS_KEY_ID`]
/// - [`AWS_SECRET_ACCESS_KEY`]
/// - [`AWS_SESSION_TOKEN`], optional
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key_id = ctx.env_var(AWS_ACCESS_KEY_ID);
        let secret_access_key = ctx.env_var(AWS_SECRET_ACCESS_KEY);

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) => {
                debug!("loading credential from env");
                Ok(Some(Credential {
                    access_key_id: ak,
                    secret_access_key: sk,
                    session_token: ctx.env_var(AWS_SESSION_TOKEN),
                    expires_in: None,
                }))
            }
            _ => {
                debug!("incomplete credential in env, skipping");
                Ok(None)
            }
        }
    }
}
