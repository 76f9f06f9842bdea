#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

//! Composable authentication middleware chain for HTTP services.
//!
//! An [`AuthChain`] drives an ordered list of [`AuthStrategy`] values over
//! each incoming request head and resolves whether the request is
//! authenticated, by which strategy, and which payload to attach to the
//! request before application logic runs. Policy decisions (what counts as
//! success, what to do on failure) stay with the caller through
//! [`SuccessHook`] and [`FailureHook`].

pub mod chain;
pub mod context;
pub mod error;
pub mod hooks;
pub mod payload;
pub mod request_ext;
pub mod strategy;

pub use chain::{AuthChain, ChainConfig, ChainDecision};
pub use context::RequestContext;
pub use error::Error;
pub use hooks::{FailureHook, Hooks, SuccessHook};
pub use payload::{AuthError, AuthPayload, Severity};
pub use strategy::{
    AuthStrategy, BearerTokenAuth, DecodedToken, HeaderKeysAuth, StrategyOutcome, TokenVerifier,
};
