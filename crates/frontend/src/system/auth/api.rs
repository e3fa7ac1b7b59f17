use contracts::system::auth::{
    message_from_body, AuthError, FormError, LoginRequest, LoginResponse, NetworkError,
    SignupRequest, LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE,
};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, FormError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| network_error(LOGIN_FAILED_MESSAGE, e))?
        .send()
        .await
        .map_err(|e| network_error(LOGIN_FAILED_MESSAGE, e))?;

    if !response.ok() {
        return Err(rejected(response, LOGIN_FAILED_MESSAGE).await);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| network_error(LOGIN_FAILED_MESSAGE, e))
}

/// Register a new guest account. Any 2xx response counts as success.
pub async fn signup(request: &SignupRequest) -> Result<(), FormError> {
    let response = Request::post(&api_url("/api/auth/signup"))
        .json(request)
        .map_err(|e| network_error(SIGNUP_FAILED_MESSAGE, e))?
        .send()
        .await
        .map_err(|e| network_error(SIGNUP_FAILED_MESSAGE, e))?;

    if !response.ok() {
        return Err(rejected(response, SIGNUP_FAILED_MESSAGE).await);
    }

    Ok(())
}

/// Error for a non-2xx response: the body's `message`, or `default`
async fn rejected(response: Response, default: &str) -> FormError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("Auth request rejected with status {}", status);
    AuthError(message_from_body(&body, default)).into()
}

fn network_error(message: &str, e: gloo_net::Error) -> FormError {
    log::error!("Auth request failed: {}", e);
    NetworkError {
        message: message.to_string(),
        detail: e.to_string(),
    }
    .into()
}
