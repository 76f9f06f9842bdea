use std::sync::Arc;

use tracing::{debug, instrument};

use crate::context::RequestContext;
use crate::error::Error;
use crate::hooks::Hooks;
use crate::payload::{AuthError, AuthPayload};
use crate::strategy::{AuthStrategy, StrategyOutcome};

/// Chain configuration, immutable once handed to [`AuthChain::new`] and
/// safely shared by reference across requests.
#[derive(Clone, Default)]
pub struct ChainConfig {
    /// Ordered list of strategies, tried first to last.
    pub strategies: Vec<Arc<dyn AuthStrategy>>,
    /// Exact-match URL paths that bypass the chain entirely.
    pub ignored_routes: Vec<String>,
    /// Chain-level hooks, applied after the terminal strategy outcome.
    pub hooks: Hooks,
}

/// Decision handed back to the surrounding server.
#[derive(Debug, PartialEq)]
pub enum ChainDecision {
    /// Continue to application logic: the request authenticated, matched
    /// an ignored route, or a failure hook let it through without auth.
    Proceed,
    /// Abort with this error value; response rendering belongs to the
    /// server framework.
    Reject(AuthError),
}

enum Terminal {
    Success(AuthPayload),
    /// Every strategy was skipped (suppressed failures); the request
    /// continues without an identity.
    Anonymous,
    Failure(AuthError),
}

/// Drives the configured strategies in order and finalizes the terminal
/// outcome against the chain-level hooks.
pub struct AuthChain {
    strategies: Vec<Arc<dyn AuthStrategy>>,
    ignored_routes: Vec<String>,
    hooks: Hooks,
}

impl AuthChain {
    /// Build the chain middleware.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] when no strategy is configured.
    /// This is a wiring mistake, not a per-request condition.
    pub fn new(config: ChainConfig) -> Result<Self, Error> {
        if config.strategies.is_empty() {
            return Err(Error::Initialization(
                "No authentication strategy configured".to_string(),
            ));
        }

        Ok(Self {
            strategies: config.strategies,
            ignored_routes: config.ignored_routes,
            hooks: config.hooks,
        })
    }

    /// Resolve authentication for one request.
    ///
    /// Strategy order: soft failures fall through to the next strategy,
    /// hard failures stop the chain, the first success wins.
    #[instrument(skip(self, ctx), fields(path = ctx.path(), auth_method = tracing::field::Empty))]
    pub async fn handle(&self, ctx: &mut RequestContext) -> ChainDecision {
        if self.is_ignored(ctx.path()) {
            debug!("Route is ignored, bypassing authentication");
            return ChainDecision::Proceed;
        }

        match self.execute(ctx).await {
            Terminal::Success(payload) => self.perform_success(payload, ctx).await,
            Terminal::Anonymous => self.perform_success(AuthPayload::new(), ctx).await,
            Terminal::Failure(error) => self.perform_fail(error, ctx).await,
        }
    }

    fn is_ignored(&self, path: &str) -> bool {
        self.ignored_routes.iter().any(|route| route == path)
    }

    async fn execute(&self, ctx: &RequestContext) -> Terminal {
        let last = self.strategies.len() - 1;

        for (index, strategy) in self.strategies.iter().enumerate() {
            match strategy.authenticate(ctx).await {
                StrategyOutcome::Success(payload) => {
                    debug!("Strategy '{}' authenticated the request", strategy.name());
                    tracing::Span::current().record("auth_method", strategy.name());
                    return Terminal::Success(payload);
                }
                StrategyOutcome::Failure(error) if error.is_hard() => {
                    debug!("Strategy '{}' failed hard, stopping the chain", strategy.name());
                    return Terminal::Failure(error);
                }
                StrategyOutcome::Failure(error) => {
                    if index == last {
                        return Terminal::Failure(error);
                    }
                    debug!(
                        "Strategy '{}' does not apply, trying the next one",
                        strategy.name()
                    );
                }
                StrategyOutcome::Skipped => {
                    debug!("Strategy '{}' suppressed its failure", strategy.name());
                }
            }
        }

        tracing::Span::current().record("auth_method", "anonymous");
        Terminal::Anonymous
    }

    /// Success hook first, then the auth slot is written unconditionally.
    async fn perform_success(
        &self,
        mut payload: AuthPayload,
        ctx: &mut RequestContext,
    ) -> ChainDecision {
        self.hooks.apply_success(&mut payload, ctx).await;
        ctx.set_auth(payload);
        ChainDecision::Proceed
    }

    async fn perform_fail(&self, error: AuthError, ctx: &RequestContext) -> ChainDecision {
        match self.hooks.apply_failure(error, ctx).await {
            Some(error) => ChainDecision::Reject(error),
            None => {
                debug!("Failure suppressed by the chain failure hook");
                ChainDecision::Proceed
            }
        }
    }
}
