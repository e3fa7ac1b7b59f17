use contracts::shared::SiteConfig;
use leptos::prelude::*;

/// Hook to access the site configuration provided by `App`
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().expect("SiteConfig not found in component tree")
}
