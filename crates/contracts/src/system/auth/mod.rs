pub mod error;
pub mod redirect;
pub mod session;
pub mod signup;

pub use error::{message_from_body, AuthError, FormError, NetworkError, ValidationError};
pub use redirect::{redirect_target, DEFAULT_ADMIN_LANDING, SITE_ROOT};
pub use session::{LoginPhase, Role, SessionState, SubmitRejected};
pub use signup::{
    SignupField, SignupFlow, SignupForm, SignupRequest, SIGNUP_FAILED_MESSAGE, SIGNUP_SUCCESS_MESSAGE,
};

use serde::{Deserialize, Serialize};

/// Default text when a rejected login carries no `message`
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

impl UserInfo {
    /// Имя для отображения в шапке
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => self.email.clone().unwrap_or_else(|| self.role.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parses() {
        let json = r#"{
            "token": "abc",
            "user": { "_id": "1", "firstName": "Ada", "lastName": "L", "email": "a@b.c", "role": "admin" }
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token.as_deref(), Some("abc"));
        assert_eq!(response.user.role, Role::Admin);
        assert_eq!(response.user.id.as_deref(), Some("1"));
        assert_eq!(response.user.display_name(), "Ada L");
    }

    #[test]
    fn test_login_response_without_token() {
        let json = r#"{ "user": { "role": "editor" } }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.token.is_none());
        assert_eq!(response.user.role, Role::Other("editor".to_string()));
        assert_eq!(response.user.display_name(), "editor");
    }
}
