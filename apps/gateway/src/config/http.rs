use std::env;

use crate::error::AppError;

/// Listen address for the HTTP server.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    /// Read `GATEWAY_HOST` / `GATEWAY_PORT` from the environment.
    ///
    /// Defaults to `0.0.0.0:8777`. A port that does not parse is a
    /// configuration error rather than a silent fallback.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("GATEWAY_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("GATEWAY_PORT is not a valid port: {raw}")))?,
            Err(_) => 8777,
        };

        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn defaults_when_unset() {
        std::env::remove_var("GATEWAY_HOST");
        std::env::remove_var("GATEWAY_PORT");
        let cfg = HttpConfig::from_env().unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8777);
    }

    #[test]
    #[serial_test::serial]
    fn invalid_port_is_a_config_error() {
        std::env::set_var("GATEWAY_PORT", "eighty");
        assert!(HttpConfig::from_env().is_err());
        std::env::remove_var("GATEWAY_PORT");
    }
}
