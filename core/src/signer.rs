use crate::{
    Context, Error, ProvideCredential, Result, SignRequest, SigningCredential, SigningRequest,
};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Signer holds no mutable state: the credential is asked from the provider for
/// every call and each call builds its own signing context, so a `Signer` can be
/// cloned and shared across tasks freely.
#[derive(Clone, Debug)]
pub struct Signer<C: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = C>>,
    builder: Arc<dyn SignRequest<Credential = C>>,
}

impl<C: SigningCredential> Signer<C> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = C>,
        builder: impl SignRequest<Credential = C>,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Get the context of this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Signing request.
    pub async fn sign(&self, req: &mut SigningRequest) -> Result<()> {
        let cred = self.loader.provide_credential(&self.ctx).await?;
        if let Some(cred) = &cred {
            if !cred.is_valid() {
                return Err(Error::credential_invalid(format!(
                    "credential {cred:?} is not valid for signing"
                )));
            }
        }

        self.builder
            .sign_request(&self.ctx, req, cred.as_ref())
            .await
    }
}
