use crate::{Context, Result, SignedHeaders, SigningRequest};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing right now.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to resolve the credential.
///
/// Credentials are resolved again for every request, so implementations may
/// hit the network (STS, metadata services) or read rotating sources.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Resolve the credential from current env.
    ///
    /// Returns `Ok(None)` if this provider has nothing to offer.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to compute the signed headers.
///
/// Signing is a pure computation over the request snapshot: implementations
/// must not perform I/O and must not keep state between calls.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this request signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Compute the headers that authenticate `req`.
    ///
    /// The request itself is never modified; the caller applies the returned
    /// [`SignedHeaders`] to the outgoing request.
    fn sign_request(
        &self,
        req: &SigningRequest,
        credential: &Self::Credential,
    ) -> Result<SignedHeaders>;
}
