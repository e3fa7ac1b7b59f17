pub mod api_utils;
pub mod icons;
pub mod modal;
pub mod site_config;
pub mod toast;
