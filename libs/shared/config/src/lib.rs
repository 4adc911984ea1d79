use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or_else(|| {
                    warn!("SERVER_PORT not set or invalid, defaulting to 3000");
                    3000
                }),
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .map(|value| value != "false" && value != "0")
                .unwrap_or_else(|_| {
                    warn!("SEED_SAMPLE_DATA not set, seeding sample data by default");
                    true
                }),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            seed_sample_data: true,
        }
    }
}
