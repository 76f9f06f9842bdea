use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use super::{finalize, AuthStrategy, StrategyOutcome};
use crate::context::RequestContext;
use crate::error::Error;
use crate::hooks::Hooks;
use crate::payload::{AuthError, AuthPayload};
use crate::request_ext::HeaderExt;

static BEARER_SCHEME: &str = "Bearer";

/// Identity decoded from a bearer token by the injected verifier.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecodedToken {
    /// Subject id, used for the optional full-record lookup.
    pub subject: String,
    /// All decoded claims, exposed as-is.
    pub claims: Value,
}

/// External token-verification collaborator.
///
/// Both operations may fail asynchronously; failures are caught by the
/// strategy and converted into hard failure payloads, never propagated as
/// panics or unhandled errors. No timeout is imposed on either call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_token(&self, token: &str) -> Result<DecodedToken, Error>;

    /// Full subject record lookup, only called when `load_subject_record`
    /// is set.
    async fn fetch_record(&self, subject: &str) -> Result<Value, Error>;
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Fetch the full subject record after token verification and merge
    /// it into the payload.
    #[serde(default)]
    pub load_subject_record: bool,
}

/// Validates an `Authorization: Bearer <token>` header through an injected
/// verifier.
///
/// A missing header is a soft failure (the request may authenticate
/// another way); a present header with the wrong scheme, or any verifier
/// rejection, is a hard failure that stops the chain.
pub struct BearerTokenAuth {
    verifier: Arc<dyn TokenVerifier>,
    load_subject_record: bool,
    hooks: Hooks,
}

impl BearerTokenAuth {
    #[must_use]
    pub fn new(config: Config, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            verifier,
            load_subject_record: config.load_subject_record,
            hooks: Hooks::default(),
        }
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    async fn check(&self, ctx: &RequestContext) -> StrategyOutcome {
        // an empty header value counts as absent
        let Some(authorization) = ctx.parts().authorization().filter(|value| !value.is_empty())
        else {
            debug!("No authorization header, handing over to the next strategy");
            return StrategyOutcome::Failure(AuthError::soft("No authorization sent in header"));
        };

        let mut segments = authorization.split_whitespace();
        if segments.next() != Some(BEARER_SCHEME) {
            return StrategyOutcome::Failure(AuthError::hard("Invalid authorization type"));
        }

        let token = segments.next().unwrap_or_default();

        let decoded = match self.verifier.verify_token(token).await {
            Ok(decoded) => decoded,
            Err(error) => {
                warn!("Token verification failed: {error}");
                return StrategyOutcome::Failure(AuthError::hard(error.to_string()));
            }
        };

        let mut payload = AuthPayload::new();
        payload.insert("token", token);
        payload.insert("decoded_identity", json!(&decoded));

        if self.load_subject_record {
            match self.verifier.fetch_record(&decoded.subject).await {
                Ok(record) => {
                    payload.insert("full_record", record);
                }
                Err(error) => {
                    warn!("Subject record lookup failed: {error}");
                    return StrategyOutcome::Failure(AuthError::hard(error.to_string()));
                }
            }
        }

        StrategyOutcome::Success(payload)
    }
}

#[async_trait]
impl AuthStrategy for BearerTokenAuth {
    fn name(&self) -> &str {
        "bearer-token"
    }

    #[instrument(skip(self, ctx))]
    async fn authenticate(&self, ctx: &RequestContext) -> StrategyOutcome {
        finalize(self.check(ctx).await, &self.hooks, ctx).await
    }
}
