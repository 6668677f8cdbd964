use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8000";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());

        Self::from_parts(&host, &port)
    }

    pub fn from_parts(host: &str, port: &str) -> Result<Self> {
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid port {:?}: {}", port, e)))?;
        let ip = IpAddr::from_str(host)
            .map_err(|e| AppError::Config(format!("Invalid host address {:?}: {}", host, e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8000() {
        let config = Config::from_parts(DEFAULT_HOST, DEFAULT_PORT).unwrap();
        assert_eq!(config.server_addr, Config::default().server_addr);
        assert_eq!(config.server_addr.to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_parts("127.0.0.1", "eighty").unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("eighty")));
    }

    #[test]
    fn rejects_bad_host() {
        assert!(matches!(
            Config::from_parts("localhost:1", "8000"),
            Err(AppError::Config(_))
        ));
    }
}
