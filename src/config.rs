use std::net::IpAddr;

pub const DEFAULT_ROCKETLANE_BASE_URL: &str = "https://api.rocketlane.com/api/1.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub rocketlane_base_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_key = env_required("ROCKETLANE_API_KEY")?;
        if api_key.trim().is_empty() {
            return Err("ROCKETLANE_API_KEY must not be empty".to_string());
        }

        let rocketlane_base_url = env_or("ROCKETLANE_BASE_URL", DEFAULT_ROCKETLANE_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let host: IpAddr = env_or("GOLIVE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid GOLIVE_HOST: {e}"))?;

        let port: u16 = env_or("GOLIVE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid GOLIVE_PORT: {e}"))?;

        let log_level = env_or("GOLIVE_LOG_LEVEL", "info");

        Ok(Config {
            api_key,
            rocketlane_base_url,
            host,
            port,
            log_level,
        })
    }

    /// Full URL of the upstream project listing.
    pub fn projects_url(&self) -> String {
        format!("{}/projects", self.rocketlane_base_url)
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
