
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{finalize, AuthStrategy, StrategyOutcome};
use crate::context::RequestContext;
use crate::hooks::Hooks;
use crate::payload::{AuthError, AuthPayload};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Required header keys, checked in order.
    pub keys: Vec<String>,
}

/// Requires a configured set of header keys to be present on the request.
///
/// On success the payload maps each configured key, in configured order,
/// to its header value. The first missing or empty key stops the check and
/// yields a soft failure so the chain can try the next strategy.
pub struct HeaderKeysAuth {
    keys: Vec<String>,
    hooks: Hooks,
}

impl HeaderKeysAuth {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            keys: config.keys,
            hooks: Hooks::default(),
        }
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    fn check(&self, ctx: &RequestContext) -> StrategyOutcome {
        let mut payload = AuthPayload::new();

        for key in &self.keys {
            match ctx.header(key) {
                Some(value) if !value.is_empty() => {
                    payload.insert(key.clone(), value);
                }
                _ => {
                    debug!("Header '{key}' missing, handing over to the next strategy");
                    return StrategyOutcome::Failure(AuthError::soft(format!(
                        "No {key} sent in header"
                    )));
                }
            }
        }

        StrategyOutcome::Success(payload)
    }
}

#[async_trait]
impl AuthStrategy for HeaderKeysAuth {
    fn name(&self) -> &str {
        "header-keys"
    }

    #[instrument(skip(self, ctx))]
    async fn authenticate(&self, ctx: &RequestContext) -> StrategyOutcome {
        finalize(self.check(ctx), &self.hooks, ctx).await
    }
}
