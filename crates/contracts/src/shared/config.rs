use log::warn;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Site-wide settings shared by every view: API location, profile, social links
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    /// Where an admin lands when no page was requested before login
    pub admin_landing: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_landing: crate::system::auth::DEFAULT_ADMIN_LANDING.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub resume_url: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SkillGroup {
    pub group: String,
    pub items: Vec<String>,
}

/// Configuration embedded in the binary from the workspace root
const EMBEDDED_CONFIG: &str = include_str!("../../../../config.toml");

static CONFIG: Lazy<SiteConfig> = Lazy::new(load_config_or_default);

impl SiteConfig {
    /// Embedded configuration, parsed once per process.
    pub fn global() -> &'static SiteConfig {
        &CONFIG
    }

    /// API base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

/// Parse configuration text in `config.toml` format
pub fn parse_config(text: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(text)?;
    Ok(config)
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<SiteConfig> {
    parse_config(EMBEDDED_CONFIG)
}

/// Load the embedded configuration, falling back to built-in defaults
pub fn load_config_or_default() -> SiteConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse embedded config.toml: {}; using defaults", e);
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = load_config().unwrap();
        assert!(!config.api.base_url.is_empty());
        assert!(config.auth.admin_landing.starts_with('/'));
        assert!(!config.profile.name.is_empty());
        assert!(!config.social.is_empty());
        assert!(!config.skills.is_empty());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.auth.admin_landing, "/admin");
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_partial_profile() {
        let config = parse_config(
            r#"
[profile]
name = "Jane"

[[social]]
label = "GitHub"
url = "https://github.com/jane"
"#,
        )
        .unwrap();
        assert_eq!(config.profile.name, "Jane");
        assert!(config.profile.resume_url.is_none());
        assert_eq!(config.social[0].icon, None);
    }

    #[test]
    fn test_api_base_trims_slash() {
        let config = parse_config("[api]\nbase_url = \"https://api.example.com/\"").unwrap();
        assert_eq!(config.api_base(), "https://api.example.com");
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[api]\nbase_url = 42").is_err());
    }
}
