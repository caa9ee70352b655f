use crate::{
    Context, Error, ProvideCredential, Result, SignRequest, SignedHeaders, SigningBody,
    SigningCredential, SigningRequest,
};
use http::request::Parts;
use log::debug;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Credentials are resolved again on every call so rotated or expiring
/// tokens are picked up; nothing is cached between requests.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    signer: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        signer: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            signer: Arc::new(signer),
        }
    }

    /// Replace the context.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Replace the credential provider.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Resolve a credential usable for signing right now.
    pub async fn resolve_credential(&self) -> Result<K> {
        let cred = self
            .provider
            .provide_credential(&self.ctx)
            .await
            .map_err(|e| {
                Error::credential_resolution_failed(format!(
                    "failed to resolve credential from {:?}",
                    self.provider
                ))
                .with_source(e)
            })?;

        let Some(cred) = cred else {
            return Err(Error::credential_invalid(
                "no credential found for signing",
            ));
        };
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "credential is empty or about to expire",
            ));
        }

        Ok(cred)
    }

    /// Compute the signed headers for the request.
    pub async fn signed_headers(&self, req: &SigningRequest) -> Result<SignedHeaders> {
        let cred = self.resolve_credential().await?;
        self.signer.sign_request(req, &cred)
    }

    /// Signing request.
    ///
    /// On error `parts` is left untouched.
    pub async fn sign(&self, parts: &mut Parts, body: SigningBody) -> Result<()> {
        let req = SigningRequest::build(parts, body)?;
        let signed = self.signed_headers(&req).await?;
        debug!(
            "signed {} {} with {} headers",
            req.method,
            parts.uri,
            signed.len()
        );

        signed.apply(&mut parts.headers);
        Ok(())
    }
}
