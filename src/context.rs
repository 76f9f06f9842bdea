use hyper::http::request::Parts;

use crate::payload::AuthPayload;
use crate::request_ext::HeaderExt;

/// Per-request state threaded through the authentication chain.
///
/// Wraps the request head and owns the auth slot explicitly; nothing is
/// attached to the request through ambient type extension. The slot is
/// written once per request, by chain finalization.
#[derive(Debug)]
pub struct RequestContext {
    parts: Parts,
    auth: Option<AuthPayload>,
}

impl RequestContext {
    #[must_use]
    pub fn new(parts: Parts) -> Self {
        Self { parts, auth: None }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        self.parts.uri.path()
    }

    /// Header value as a string, `None` when absent or not valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        self.parts.get_header(name)
    }

    #[must_use]
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    #[must_use]
    pub fn auth(&self) -> Option<&AuthPayload> {
        self.auth.as_ref()
    }

    /// Hands the final payload to the surrounding server once the chain
    /// has resolved.
    pub fn take_auth(&mut self) -> Option<AuthPayload> {
        self.auth.take()
    }

    pub(crate) fn set_auth(&mut self, payload: AuthPayload) {
        self.auth = Some(payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::Request;

    fn context(uri: &str) -> RequestContext {
        let request = Request::builder()
            .uri(uri)
            .header("api-key", "d88e050c")
            .body(())
            .unwrap();
        let (parts, ()) = request.into_parts();
        RequestContext::new(parts)
    }

    #[test]
    fn test_path() {
        let ctx = context("http://localhost/healthz?probe=1");
        assert_eq!(ctx.path(), "/healthz");
    }

    #[test]
    fn test_header_lookup() {
        let ctx = context("/");
        assert_eq!(ctx.header("api-key"), Some("d88e050c".to_string()));
        assert_eq!(ctx.header("api-user"), None);
    }

    #[test]
    fn test_auth_slot_starts_empty() {
        let mut ctx = context("/");
        assert!(ctx.auth().is_none());

        let mut payload = AuthPayload::new();
        payload.insert("authenticated", true);
        ctx.set_auth(payload);

        assert!(ctx.auth().is_some());
        let taken = ctx.take_auth().unwrap();
        assert_eq!(taken.get("authenticated"), Some(&serde_json::json!(true)));
        assert!(ctx.auth().is_none());
    }
}
