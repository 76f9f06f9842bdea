pub mod bearer;
pub mod header_keys;

use async_trait::async_trait;
pub use bearer::{BearerTokenAuth, DecodedToken, TokenVerifier};
pub use header_keys::HeaderKeysAuth;

use crate::context::RequestContext;
use crate::hooks::Hooks;
use crate::payload::{AuthError, AuthPayload};

/// Outcome of a single strategy, after its own hooks ran.
#[derive(Clone, Debug, PartialEq)]
pub enum StrategyOutcome {
    /// Authentication succeeded with this payload; the chain stops here.
    Success(AuthPayload),
    /// The check failed; the error's severity decides whether the chain
    /// falls through to the next strategy or stops immediately.
    Failure(AuthError),
    /// A failure hook suppressed the error; the chain tries the next
    /// strategy with nothing to report.
    Skipped,
}

/// One pluggable authentication check in the chain.
///
/// Strategies are stateless across invocations: configuration (keys to
/// check, verifier, hooks) is captured at construction time.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// Strategy name used in log records.
    fn name(&self) -> &str;

    async fn authenticate(&self, ctx: &RequestContext) -> StrategyOutcome;
}

/// Applies a strategy's own hooks to its raw outcome: the success hook may
/// mutate or replace the payload, the failure hook may replace the error
/// (severity travels with the replacement) or suppress it entirely.
pub(crate) async fn finalize(
    outcome: StrategyOutcome,
    hooks: &Hooks,
    ctx: &RequestContext,
) -> StrategyOutcome {
    match outcome {
        StrategyOutcome::Success(mut payload) => {
            hooks.apply_success(&mut payload, ctx).await;
            StrategyOutcome::Success(payload)
        }
        StrategyOutcome::Failure(error) => match hooks.apply_failure(error, ctx).await {
            Some(error) => StrategyOutcome::Failure(error),
            None => StrategyOutcome::Skipped,
        },
        StrategyOutcome::Skipped => StrategyOutcome::Skipped,
    }
}
