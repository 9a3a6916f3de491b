//! Process session state: who is signed in and with which tokens.
//!
//! # Design
//! No globals — a [`SessionContext`] is created once and passed (`Arc`) into
//! the transport and every repository that needs identity. Both cells are
//! replaced whole (last writer wins); there is never a partial mutation, so
//! plain read/write locking is the entire protocol.

use std::sync::{Arc, RwLock};

/// Identity published after a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// Access/refresh token pair injected into authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Holder of the current identity and token pair.
#[derive(Debug, Default)]
pub struct SessionContext {
    identity: RwLock<Option<SessionIdentity>>,
    tokens: RwLock<Option<TokenPair>>,
}

impl SessionContext {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn identity(&self) -> Option<SessionIdentity> {
        self.identity
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn set_identity(&self, identity: Option<SessionIdentity>) {
        *self.identity.write().unwrap_or_else(|e| e.into_inner()) = identity;
    }

    pub fn tokens(&self) -> Option<TokenPair> {
        self.tokens
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn set_tokens(&self, tokens: Option<TokenPair>) {
        *self.tokens.write().unwrap_or_else(|e| e.into_inner()) = tokens;
    }

    pub fn access_token(&self) -> Option<String> {
        self.tokens().map(|pair| pair.access_token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Drop identity and tokens, e.g. on logout.
    pub fn clear(&self) {
        self.set_identity(None);
        self.set_tokens(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: &str) -> SessionIdentity {
        SessionIdentity {
            user_id: id.to_string(),
            name: "Siti".to_string(),
            email: "siti@example.com".to_string(),
        }
    }

    #[test]
    fn replace_is_whole_value() {
        let session = SessionContext::new();
        session.set_identity(Some(identity("1")));
        session.set_identity(Some(identity("2")));
        assert_eq!(session.identity().unwrap().user_id, "2");
    }

    #[test]
    fn clear_drops_both_cells() {
        let session = SessionContext::new();
        session.set_identity(Some(identity("1")));
        session.set_tokens(Some(TokenPair {
            access_token: "t".to_string(),
            refresh_token: None,
        }));
        assert!(session.is_authenticated());
        session.clear();
        assert!(session.identity().is_none());
        assert!(session.tokens().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn access_token_reads_through() {
        let session = SessionContext::new();
        assert!(session.access_token().is_none());
        session.set_tokens(Some(TokenPair {
            access_token: "abc".to_string(),
            refresh_token: Some("ref".to_string()),
        }));
        assert_eq!(session.access_token().as_deref(), Some("abc"));
    }
}
