//! Admin sign-in payloads and the stored session token.
//!
//! Sign-in is two steps: credentials return a user id and send an OTP, then
//! the verified OTP returns a bearer token. The token is kept as a raw string
//! under [`AUTH_TOKEN_KEY`] in the same storage as the cart.

use std::fmt;

use serde::{Deserialize, Serialize};
use symbicroft_store::StorageBackend;

use crate::error::CommerceError;
use crate::ids::UserId;

/// Storage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /auth/verify-otp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpData {
    pub user_id: UserId,
    pub otp: String,
}

/// Body of `POST /auth/resend-otp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpData {
    pub user_id: UserId,
}

/// Signed-in admin as returned with a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

/// Response of the login, OTP and resend endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Only echoed by development backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

/// Account behind the current token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Response of `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: CurrentUser,
}

/// Body of `PUT /auth/change-password`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordData {
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordData {
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.new_password.is_empty() {
            return Err(CommerceError::Validation("new password is required".to_string()));
        }
        if self.new_password == self.current_password {
            return Err(CommerceError::Validation(
                "new password must differ from the current one".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ChangePasswordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangePasswordData { .. }")
    }
}

/// Bearer token persisted alongside the cart.
#[derive(Debug)]
pub struct AuthSession<B> {
    backend: B,
}

impl<B: StorageBackend> AuthSession<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Stored token, `None` when signed out or storage is unreadable.
    pub fn token(&self) -> Option<String> {
        match self.backend.get_item(AUTH_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "auth token unreadable");
                None
            }
        }
    }

    /// Whether a token is stored. Always false without reachable storage.
    pub fn is_authenticated(&self) -> bool {
        self.backend.is_available() && self.token().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<(), CommerceError> {
        self.backend.set_item(AUTH_TOKEN_KEY, token)?;
        tracing::debug!("auth token stored");
        Ok(())
    }

    /// Keep the token from a verified OTP. Returns whether one was present.
    pub fn accept(&self, response: &AuthResponse) -> Result<bool, CommerceError> {
        match response.token.as_deref() {
            Some(token) => self.set_token(token).map(|()| true),
            None => Ok(false),
        }
    }

    /// Forget the token. Other keys, the cart included, are left alone.
    pub fn logout(&self) -> Result<(), CommerceError> {
        self.backend.remove_item(AUTH_TOKEN_KEY)?;
        tracing::debug!("auth token removed");
        Ok(())
    }
}

/// Backend paths for sign-in.
pub mod endpoints {
    pub const LOGIN: &str = "/auth/login";
    pub const VERIFY_OTP: &str = "/auth/verify-otp";
    pub const RESEND_OTP: &str = "/auth/resend-otp";
    pub const ME: &str = "/auth/me";
    pub const CHANGE_PASSWORD: &str = "/auth/change-password";
    /// Admin page shown after logout.
    pub const LOGIN_PAGE: &str = "/admin/login";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use symbicroft_store::{MemoryStorage, UnavailableStorage};

    #[test]
    fn test_otp_payloads_use_camel_case() {
        let verify = VerifyOtpData {
            user_id: UserId::new(3),
            otp: "481516".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&verify).unwrap(),
            json!({"userId": 3, "otp": "481516"})
        );
        let resend = ResendOtpData { user_id: UserId::new(3) };
        assert_eq!(serde_json::to_value(resend).unwrap(), json!({"userId": 3}));
    }

    #[test]
    fn test_auth_response_shapes() {
        let login: AuthResponse =
            serde_json::from_value(json!({"message": "OTP sent", "userId": 3})).unwrap();
        assert_eq!(login.user_id, Some(UserId::new(3)));
        assert!(login.token.is_none());

        let verified: AuthResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Verified",
            "token": "tok",
            "user": {"id": 3, "email": "a@symbicroft.in", "fullName": "Asha R", "role": "admin"}
        }))
        .unwrap();
        assert_eq!(verified.user.unwrap().full_name, "Asha R");
    }

    #[test]
    fn test_session_lifecycle() {
        let storage = MemoryStorage::new();
        storage.set_item("symbicroft_cart", "[]").unwrap();
        let session = AuthSession::new(storage.clone());
        assert!(!session.is_authenticated());

        let response = AuthResponse {
            success: Some(true),
            message: "Verified".to_string(),
            user_id: None,
            otp: None,
            token: Some("tok-1".to_string()),
            user: None,
        };
        assert!(session.accept(&response).unwrap());
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert!(storage.get_item("symbicroft_cart").unwrap().is_some());
    }

    #[test]
    fn test_unavailable_storage_is_signed_out() {
        let session = AuthSession::new(UnavailableStorage);
        assert!(!session.is_authenticated());
        assert!(matches!(
            session.set_token("tok"),
            Err(CommerceError::EnvironmentUnavailable(_))
        ));
    }

    #[test]
    fn test_secrets_not_in_debug() {
        let creds = LoginCredentials {
            email: "a@symbicroft.in".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{creds:?}").contains("hunter2"));

        let change = ChangePasswordData {
            current_password: "old".to_string(),
            new_password: "old".to_string(),
        };
        assert!(change.validate().is_err());
        assert!(!format!("{change:?}").contains("old"));
    }
}
