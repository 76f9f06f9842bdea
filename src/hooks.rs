use std::sync::Arc;

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::payload::{AuthError, AuthPayload};

/// Caller-supplied post-processing for a successful authentication.
///
/// The hook may mutate the payload in place and return `None`, or return
/// `Some(replacement)` which replaces the payload wholesale. Both are
/// honored.
#[async_trait]
pub trait SuccessHook: Send + Sync {
    async fn on_success(
        &self,
        payload: &mut AuthPayload,
        ctx: &RequestContext,
    ) -> Option<AuthPayload>;
}

/// Caller-supplied post-processing for a failed authentication.
///
/// `Some(replacement)` replaces the error; `None` suppresses it and lets
/// the request continue without auth.
#[async_trait]
pub trait FailureHook: Send + Sync {
    async fn on_failure(&self, error: &AuthError, ctx: &RequestContext) -> Option<AuthError>;
}

/// Optional hook pair, carried by each strategy and by the chain itself.
#[derive(Clone, Default)]
pub struct Hooks {
    pub on_success: Option<Arc<dyn SuccessHook>>,
    pub on_failure: Option<Arc<dyn FailureHook>>,
}

impl Hooks {
    pub(crate) async fn apply_success(&self, payload: &mut AuthPayload, ctx: &RequestContext) {
        if let Some(hook) = &self.on_success {
            if let Some(replacement) = hook.on_success(payload, ctx).await {
                *payload = replacement;
            }
        }
    }

    /// Returns the error to report, or `None` when a configured hook
    /// suppressed it. Without a hook the error passes through unchanged.
    pub(crate) async fn apply_failure(
        &self,
        error: AuthError,
        ctx: &RequestContext,
    ) -> Option<AuthError> {
        match &self.on_failure {
            Some(hook) => hook.on_failure(&error, ctx).await,
            None => Some(error),
        }
    }
}
