use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::redirect::redirect_target;

/// Роль пользователя; неизвестные роли сохраняются как есть
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    #[default]
    Guest,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Guest => "guest",
            Role::Other(role) => role,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Role::Admin,
            "guest" => Role::Guest,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Снимок сессии для отображения в UI
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub role: Option<Role>,
}

/// Why a credentials submit was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("A login request is already in progress")]
    InFlight,
    #[error("Already signed in")]
    AlreadyAuthenticated,
}

/// Состояние входа в систему
///
/// ```text
/// Anonymous --submit--> Authenticating --succeed(role)--> Authenticated(role)
///                                      --fail(reason)---> Failed(reason)
/// Failed --submit--> Anonymous --> Authenticating
/// any --logout--> Anonymous
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated(Role),
    Failed(String),
}

impl LoginPhase {
    /// Start a login attempt. Only one request may be in flight.
    pub fn submit(&mut self) -> Result<(), SubmitRejected> {
        if let LoginPhase::Failed(_) = self {
            *self = LoginPhase::Anonymous;
        }
        match self {
            LoginPhase::Authenticating => Err(SubmitRejected::InFlight),
            LoginPhase::Authenticated(_) => Err(SubmitRejected::AlreadyAuthenticated),
            LoginPhase::Anonymous | LoginPhase::Failed(_) => {
                *self = LoginPhase::Authenticating;
                Ok(())
            }
        }
    }

    /// Apply a successful login. Returns `false` (and changes nothing) when
    /// no attempt is pending, i.e. the result was superseded.
    pub fn succeed(&mut self, role: Role) -> bool {
        if *self != LoginPhase::Authenticating {
            return false;
        }
        *self = LoginPhase::Authenticated(role);
        true
    }

    /// Apply a failed login. Same discard rule as [`LoginPhase::succeed`].
    pub fn fail(&mut self, reason: impl Into<String>) -> bool {
        if *self != LoginPhase::Authenticating {
            return false;
        }
        *self = LoginPhase::Failed(reason.into());
        true
    }

    /// Restore an already established session (e.g. from storage).
    pub fn restore(&mut self, role: Role) {
        *self = LoginPhase::Authenticated(role);
    }

    pub fn logout(&mut self) {
        *self = LoginPhase::Anonymous;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoginPhase::Authenticating)
    }

    pub fn role(&self) -> Option<&Role> {
        match self {
            LoginPhase::Authenticated(role) => Some(role),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoginPhase::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn session(&self) -> SessionState {
        SessionState {
            is_authenticated: self.role().is_some(),
            role: self.role().cloned(),
        }
    }

    /// Post-login navigation target; `None` unless authenticated.
    pub fn redirect_target(&self, requested: Option<&str>, admin_landing: &str) -> Option<String> {
        self.role()
            .map(|role| redirect_target(role, requested, admin_landing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("guest"), Role::Guest);
        assert_eq!(Role::from("Admin"), Role::Other("Admin".to_string()));
        let role: Role = serde_json::from_str(r#""moderator""#).unwrap();
        assert_eq!(role.as_str(), "moderator");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    }

    #[test]
    fn test_happy_path() {
        let mut phase = LoginPhase::default();
        assert_eq!(phase.session(), SessionState::default());

        phase.submit().unwrap();
        assert!(phase.is_loading());

        assert!(phase.succeed(Role::Admin));
        assert_eq!(
            phase.session(),
            SessionState {
                is_authenticated: true,
                role: Some(Role::Admin),
            }
        );
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut phase = LoginPhase::default();
        phase.submit().unwrap();
        assert_eq!(phase.submit(), Err(SubmitRejected::InFlight));
        assert!(phase.is_loading());
    }

    #[test]
    fn test_failure_surfaces_reason_and_retries() {
        let mut phase = LoginPhase::default();
        phase.submit().unwrap();
        assert!(phase.fail("Invalid credentials"));
        assert_eq!(phase.error_message(), Some("Invalid credentials"));
        assert!(!phase.session().is_authenticated);

        phase.submit().unwrap();
        assert_eq!(phase, LoginPhase::Authenticating);
        assert_eq!(phase.error_message(), None);
    }

    #[test]
    fn test_late_results_discarded() {
        let mut phase = LoginPhase::default();
        assert!(!phase.succeed(Role::Admin));
        assert_eq!(phase, LoginPhase::Anonymous);

        phase.submit().unwrap();
        phase.fail("nope");
        assert!(!phase.succeed(Role::Admin));
        assert_eq!(phase.error_message(), Some("nope"));
    }

    #[test]
    fn test_submit_when_authenticated_rejected() {
        let mut phase = LoginPhase::default();
        phase.restore(Role::Guest);
        assert_eq!(phase.submit(), Err(SubmitRejected::AlreadyAuthenticated));
        phase.logout();
        assert_eq!(phase, LoginPhase::Anonymous);
        assert!(phase.submit().is_ok());
    }

    #[test]
    fn test_redirect_only_when_authenticated() {
        let mut phase = LoginPhase::default();
        assert_eq!(phase.redirect_target(Some("/admin/users"), "/admin"), None);

        phase.submit().unwrap();
        phase.succeed(Role::Admin);
        assert_eq!(
            phase.redirect_target(Some("/admin/users"), "/admin").as_deref(),
            Some("/admin/users")
        );
    }
}
