use serde::{Deserialize, Serialize};

use super::error::{FormError, ValidationError};
use crate::shared::notification::NotificationSink;

pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully. Please log in.";

/// Role assigned to every self-registered account
const SIGNUP_ROLE: &str = "guest";

/// Поля формы регистрации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl SignupField {
    pub fn label(&self) -> &'static str {
        match self {
            SignupField::FirstName => "First name",
            SignupField::LastName => "Last name",
            SignupField::Email => "Email",
            SignupField::Password => "Password",
        }
    }
}

/// Данные формы регистрации в том виде, как их ввёл пользователь
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub profile_picture: String,
}

impl SignupForm {
    /// Check required fields in form order and build the request body.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let required = [
            (SignupField::FirstName, &self.first_name),
            (SignupField::LastName, &self.last_name),
            (SignupField::Email, &self.email),
            (SignupField::Password, &self.password),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError { field: *field });
        }

        Ok(SignupRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: SIGNUP_ROLE.to_string(),
            profile_picture: self.profile_picture.trim().to_string(),
            permissions: serde_json::Map::new(),
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Body of `POST /api/auth/signup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub profile_picture: String,
    pub permissions: serde_json::Map<String, serde_json::Value>,
    pub phone: String,
}

/// Submission state of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFlow {
    loading: bool,
    error: Option<String>,
}

impl SignupFlow {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the form and mark the flow as loading.
    ///
    /// A request body is returned only when the caller should send it:
    /// validation failures and a pending request both yield `Err`.
    pub fn begin(&mut self, form: &SignupForm) -> Result<SignupRequest, FormError> {
        if self.loading {
            return Err(FormError::InFlight);
        }
        match form.validate() {
            Ok(request) => {
                self.loading = true;
                self.error = None;
                Ok(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Record the outcome of the request started by [`SignupFlow::begin`].
    ///
    /// On success the sink receives [`SIGNUP_SUCCESS_MESSAGE`] and `true` is
    /// returned so the caller can move on to the login page. Results arriving
    /// when nothing is pending are discarded.
    pub fn finish(
        &mut self,
        result: Result<(), FormError>,
        sink: &mut impl NotificationSink,
    ) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        match result {
            Ok(()) => {
                sink.notify(SIGNUP_SUCCESS_MESSAGE);
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::NoopSink;
    use crate::system::auth::error::{AuthError, NetworkError};

    fn filled() -> SignupForm {
        SignupForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: " ada@example.com ".to_string(),
            password: "secret".to_string(),
            phone: "".to_string(),
            profile_picture: "".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = filled().validate().unwrap();
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.role, "guest");
        assert!(request.permissions.is_empty());
    }

    #[test]
    fn test_request_wire_format() {
        let request = filled().validate().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["role"], "guest");
        assert_eq!(json["permissions"], serde_json::json!({}));
        assert_eq!(json["profilePicture"], "");
        assert_eq!(json["phone"], "");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_each_blank_required_field_fails() {
        let cases: [(fn(&mut SignupForm), SignupField); 4] = [
            (|f| f.first_name.clear(), SignupField::FirstName),
            (|f| f.last_name = "   ".to_string(), SignupField::LastName),
            (|f| f.email.clear(), SignupField::Email),
            (|f| f.password.clear(), SignupField::Password),
        ];
        for (blank, field) in cases {
            let mut form = filled();
            blank(&mut form);
            assert_eq!(form.validate(), Err(ValidationError { field }));
        }
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let form = SignupForm {
            phone: String::new(),
            profile_picture: String::new(),
            ..filled()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_blank_field_produces_no_request() {
        let mut flow = SignupFlow::default();
        let form = SignupForm {
            password: String::new(),
            ..filled()
        };
        let result = flow.begin(&form);
        assert!(matches!(result, Err(FormError::Validation(_))));
        assert!(!flow.is_loading());
        assert_eq!(flow.error(), Some("Password is required"));
    }

    #[test]
    fn test_second_submit_rejected() {
        let mut flow = SignupFlow::default();
        flow.begin(&filled()).unwrap();
        assert_eq!(flow.begin(&filled()), Err(FormError::InFlight));
        assert!(flow.is_loading());
    }

    #[test]
    fn test_success_notifies() {
        let mut flow = SignupFlow::default();
        let mut messages: Vec<String> = Vec::new();
        flow.begin(&filled()).unwrap();
        assert!(flow.finish(Ok(()), &mut messages));
        assert_eq!(messages, vec![SIGNUP_SUCCESS_MESSAGE.to_string()]);
        assert!(!flow.is_loading());
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_failure_keeps_message() {
        let mut flow = SignupFlow::default();
        flow.begin(&filled()).unwrap();
        let ok = flow.finish(
            Err(AuthError("Email already registered".to_string()).into()),
            &mut NoopSink,
        );
        assert!(!ok);
        assert_eq!(flow.error(), Some("Email already registered"));

        flow.begin(&filled()).unwrap();
        flow.finish(
            Err(NetworkError {
                message: SIGNUP_FAILED_MESSAGE.to_string(),
                detail: "timeout".to_string(),
            }
            .into()),
            &mut NoopSink,
        );
        assert_eq!(flow.error(), Some("Signup failed"));
    }

    #[test]
    fn test_finish_without_begin_is_discarded() {
        let mut flow = SignupFlow::default();
        let mut messages: Vec<String> = Vec::new();
        assert!(!flow.finish(Ok(()), &mut messages));
        assert!(messages.is_empty());
    }
}
