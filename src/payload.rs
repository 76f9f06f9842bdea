use serde::Serialize;
use serde_json::{json, Map, Value};

/// Open-ended authentication payload attached to the request on success.
///
/// Keys keep their insertion order, so strategies that build the payload
/// from an ordered configuration (like the header-keys strategy) yield a
/// predictable shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AuthPayload(Map<String, Value>);

impl AuthPayload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Key-wise merge, entries from `other` overwrite existing ones.
    pub fn merge(&mut self, other: AuthPayload) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for AuthPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<AuthPayload> for Value {
    fn from(payload: AuthPayload) -> Self {
        payload.into_value()
    }
}

/// Whether a failure lets the chain try the next strategy or stops it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// The strategy does not apply to this request, try the next one.
    Soft,
    /// Terminal failure, remaining strategies are skipped.
    Hard,
}

/// Failure payload produced during chain execution.
///
/// The severity travels with the error: a failure hook that replaces the
/// error supplies its own severity and nothing re-checks it afterwards, so
/// a replacement can silently turn a hard failure into a soft one. Hook
/// authors own that decision.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuthError {
    severity: Severity,
    detail: Value,
}

impl AuthError {
    /// Soft failure carrying a `{"message": ...}` detail.
    pub fn soft(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Soft,
            detail: json!({ "message": message.into() }),
        }
    }

    /// Hard failure carrying an `{"error": ...}` detail.
    pub fn hard(cause: impl Into<Value>) -> Self {
        Self {
            severity: Severity::Hard,
            detail: json!({ "error": cause.into() }),
        }
    }

    /// Arbitrary replacement error, used by failure hooks.
    #[must_use]
    pub fn with_detail(severity: Severity, detail: Value) -> Self {
        Self { severity, detail }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn is_hard(&self) -> bool {
        self.severity == Severity::Hard
    }

    #[must_use]
    pub fn detail(&self) -> &Value {
        &self.detail
    }

    #[must_use]
    pub fn into_detail(self) -> Value {
        self.detail
    }
}
