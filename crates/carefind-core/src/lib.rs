pub mod app_config;
pub mod capability;
pub mod config;
pub mod records;

pub use app_config::AppConfig;
pub use capability::{Capability, CapabilityFlags, UnknownCapability};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use records::{GeoPoint, HealthCenterRecord, PostalLocation, SearchResult};
