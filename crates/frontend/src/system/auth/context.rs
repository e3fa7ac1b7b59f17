use contracts::system::auth::{LoginPhase, LoginResponse, UserInfo};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub phase: LoginPhase,
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    /// Apply a login response if the attempt is still pending.
    pub fn accept(&mut self, response: LoginResponse) -> bool {
        if !self.phase.succeed(response.user.role.clone()) {
            return false;
        }
        self.token = response.token;
        self.user = Some(response.user);
        true
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase.role().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.phase.role().is_some_and(|role| role.is_admin())
    }

    pub fn logout(&mut self) {
        *self = AuthState::default();
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let mut initial = AuthState::default();

    // Restore session from localStorage
    if let Some((token, user)) = storage::load_session() {
        log::debug!("Restored session with role '{}'", user.role);
        initial.phase.restore(user.role.clone());
        initial.token = token;
        initial.user = Some(user);
    }

    provide_context(RwSignal::new(initial));

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Helper: Perform logout
pub fn do_logout(auth: RwSignal<AuthState>) {
    storage::clear_session();
    auth.update(|state| state.logout());
}
