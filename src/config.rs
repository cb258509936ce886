//! Runtime configuration, read from the environment at startup.

use std::env;

/// Server and model settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub model_path: String,
}

impl Config {
    /// Reads `HOST`, `PORT`, `WORKERS` and `MODEL_PATH`, falling back to
    /// defaults when a variable is unset or unparseable.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let workers = env::var("WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .unwrap_or_else(num_cpus::get);
        let model_path =
            env::var("MODEL_PATH").unwrap_or_else(|_| "models/car_price.json".to_string());

        Self {
            host,
            port,
            workers,
            model_path,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
