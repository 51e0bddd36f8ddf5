use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration, sourced from environment variables.
///
/// Everything the resolver and server need is carried here explicitly —
/// the geocoder endpoint, client identifier, and timeouts are configuration,
/// not process-wide globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Path to the health center CSV produced by the upstream pipeline.
    pub data_path: PathBuf,
    pub geocoder_base_url: String,
    /// Descriptive client identifier sent as the `User-Agent` header.
    /// Required by the geocoding service's usage policy.
    pub geocoder_user_agent: String,
    pub geocoder_timeout_secs: u64,
    /// Minimum spacing between remote geocoder calls. The service policy is
    /// at most one request per second sustained.
    pub geocoder_min_interval_ms: u64,
}
