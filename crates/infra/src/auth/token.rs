//! Shared-token authorizer for bulk sync invocations

use usersync_core::InvocationAuthorizer;

/// Accepts exactly one shared token. With no token configured every
/// invocation is rejected.
#[derive(Clone, Default)]
pub struct StaticTokenAuthorizer {
    expected: Option<String>,
}

impl StaticTokenAuthorizer {
    pub fn new(expected: Option<String>) -> Self {
        Self { expected: expected.filter(|token| !token.is_empty()) }
    }
}

impl std::fmt::Debug for StaticTokenAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenAuthorizer")
            .field("configured", &self.expected.is_some())
            .finish()
    }
}

impl InvocationAuthorizer for StaticTokenAuthorizer {
    fn authorize(&self, token: &str) -> bool {
        match &self.expected {
            Some(expected) => !token.is_empty() && token == expected,
            None => false,
        }
    }
}
