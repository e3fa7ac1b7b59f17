use thiserror::Error;

use super::signup::SignupField;

/// Required signup field left blank. Blocks submission, no request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{} is required", .field.label())]
pub struct ValidationError {
    pub field: SignupField,
}

/// Remote side rejected the login or signup; the message is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct AuthError(pub String);

/// Request could not be completed. Displayed the same way as [`AuthError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NetworkError {
    pub message: String,
    /// Transport detail for the log, never shown to the user
    pub detail: String,
}

/// Any failure of a single form submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("A request is already in progress")]
    InFlight,
}

/// Extract the `message` field of an error response body, or `default`.
pub fn message_from_body(body: &str, default: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        assert_eq!(
            message_from_body(r#"{"message":"Email already exists"}"#, "Signup failed"),
            "Email already exists"
        );
    }

    #[test]
    fn test_message_defaults() {
        assert_eq!(message_from_body("", "Signup failed"), "Signup failed");
        assert_eq!(message_from_body("<html>", "Signup failed"), "Signup failed");
        assert_eq!(message_from_body(r#"{"error":"x"}"#, "Signup failed"), "Signup failed");
        assert_eq!(message_from_body(r#"{"message":42}"#, "Signup failed"), "Signup failed");
        assert_eq!(message_from_body(r#"{"message":""}"#, "Signup failed"), "Signup failed");
    }

    #[test]
    fn test_display_is_literal() {
        let err: FormError = AuthError("Invalid credentials".to_string()).into();
        assert_eq!(err.to_string(), "Invalid credentials");

        let err: FormError = NetworkError {
            message: "Signup failed".to_string(),
            detail: "connection refused".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Signup failed");

        let err: FormError = ValidationError {
            field: SignupField::Email,
        }
        .into();
        assert_eq!(err.to_string(), "Email is required");
    }
}
