//! Post-login navigation rule

use super::session::Role;

pub const SITE_ROOT: &str = "/";
pub const DEFAULT_ADMIN_LANDING: &str = "/admin";

/// Where to navigate after a successful login.
///
/// Admins go back to the page that triggered the login prompt, or to
/// `admin_landing` when none was recorded. Everyone else goes to the site
/// root. Requested paths that are not site-relative are ignored.
pub fn redirect_target(role: &Role, requested: Option<&str>, admin_landing: &str) -> String {
    if !role.is_admin() {
        return SITE_ROOT.to_string();
    }
    match requested {
        Some(path) if is_site_relative(path) => path.to_string(),
        _ if is_site_relative(admin_landing) => admin_landing.to_string(),
        _ => DEFAULT_ADMIN_LANDING.to_string(),
    }
}

/// `/foo` is accepted; `//host`, `/\host`, `https://…` and empty are not.
fn is_site_relative(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
