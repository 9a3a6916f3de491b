//! Authentication: login, registration, logout, password reset, and the
//! legacy local-store bookkeeping.

use std::sync::Arc;

use tracing::warn;

use crate::adapter::safe_api_call;
use crate::domain::User;
use crate::dto::{ForgotPasswordRequest, LoginRequest, RegisterRequest, UserDto};
use crate::mapper::map_auth;
use crate::result::ApiResult;
use crate::session::{SessionContext, SessionIdentity, TokenPair};
use crate::store::{LocalStore, StoredUser};
use crate::transport::Transport;

pub struct AuthRepository {
    transport: Transport,
    session: Arc<SessionContext>,
    store: Arc<LocalStore>,
}

impl AuthRepository {
    pub fn new(transport: Transport, session: Arc<SessionContext>, store: Arc<LocalStore>) -> Self {
        Self {
            transport,
            session,
            store,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result: ApiResult<UserDto> =
            safe_api_call(|| self.transport.post("/auth/login", &payload)).await;
        self.finish_auth(result)
    }

    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        phone_number: Option<&str>,
        password: &str,
    ) -> ApiResult<User> {
        let payload = RegisterRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.map(str::to_string),
            password: password.to_string(),
        };
        let result: ApiResult<UserDto> =
            safe_api_call(|| self.transport.post("/auth/register", &payload)).await;
        self.finish_auth(result).on_success(|user| {
            let remembered = StoredUser {
                full_name: user.full_name.clone(),
                email: user.email.clone(),
                phone_number: user.phone_number.clone(),
            };
            if let Err(e) = self.store.put_user(remembered) {
                warn!(error = %e, "failed to remember registered user");
            }
        })
    }

    /// Invalidate the server session, then drop local identity and tokens.
    pub async fn logout(&self) -> ApiResult<()> {
        let body = serde_json::json!({});
        safe_api_call(|| self.transport.post("/auth/logout", &body))
            .await
            .on_success(|_| {
                self.session.clear();
                if let Err(e) = self.store.set_current_email(None) {
                    warn!(error = %e, "failed to clear login marker");
                }
            })
    }

    /// Fire-and-forget: the backend replies with a successful envelope and
    /// no payload.
    pub async fn forgot_password(&self, email: &str) -> ApiResult<()> {
        let payload = ForgotPasswordRequest {
            email: email.to_string(),
        };
        safe_api_call(|| self.transport.post("/auth/forgot-password", &payload)).await
    }

    // --- legacy offline-auth path ---

    pub fn issue_otp(&self, email: &str, code: &str) -> bool {
        match self.store.set_otp(email, code) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to persist one-time password");
                false
            }
        }
    }

    /// Check and consume the one-time password stored for `email`.
    pub fn verify_otp(&self, email: &str, code: &str) -> bool {
        self.store.verify_otp(email, code)
    }

    pub fn remembered_user(&self, email: &str) -> Option<StoredUser> {
        self.store.user(email)
    }

    pub fn current_email(&self) -> Option<String> {
        self.store.current_email()
    }

    /// Publish identity and tokens from a successful auth response. Token
    /// injection on later requests reads from the session context.
    fn finish_auth(&self, result: ApiResult<UserDto>) -> ApiResult<User> {
        match result.map(map_auth) {
            ApiResult::Success((user, identity)) => {
                self.install_session(&user, identity);
                if let Err(e) = self.store.set_current_email(Some(&user.email)) {
                    warn!(error = %e, "failed to persist login marker");
                }
                ApiResult::Success(user)
            }
            ApiResult::Error(err) => ApiResult::Error(err),
        }
    }

    fn install_session(&self, user: &User, identity: SessionIdentity) {
        self.session.set_identity(Some(identity));
        let tokens = user.access_token.clone().map(|access_token| TokenPair {
            access_token,
            refresh_token: user.refresh_token.clone(),
        });
        self.session.set_tokens(tokens);
    }
}
