use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub address: String,
    /// Outbound request timeout in seconds.
    pub timeout: u64,
    /// Base URL of the upstream image provider.
    pub image_base_url: String,
    /// Cache entry time-to-live in seconds.
    pub cache_ttl: u64,
    /// Period of the background expiry sweep in seconds.
    pub cache_sweep_interval: u64,
}
