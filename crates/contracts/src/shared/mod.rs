pub mod catalog;
pub mod config;
pub mod gallery;
pub mod notification;

pub use catalog::{Catalog, DataLoadError};
pub use config::SiteConfig;
pub use gallery::GalleryState;
pub use notification::{NoopSink, NotificationSink};
