use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT {0:?}: expected a number between 0 and 65535")]
    InvalidPort(String)
}

/// Where the server listens. The CORS allow-list is deliberately not part of this.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16
}

impl ServerConfig {

    /// Reads `HOST` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {

        Self::from_lookup(|key| std::env::var(key).ok())

    }

    /// Builds the config from any key lookup, missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST.parse()
                .map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.to_string()))?
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT
        };

        Ok(ServerConfig { host, port })

    }

    pub fn socket_addr(&self) -> SocketAddr {

        SocketAddr::new(self.host, self.port)

    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {

        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| map.get(key).cloned()

    }

    #[test]
    fn test_defaults_when_unset() {

        let config = ServerConfig::from_lookup(lookup_in(&[])).unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:8000".parse::<SocketAddr>().unwrap());

    }

    #[test]
    fn test_overrides_from_environment() {

        let config = ServerConfig::from_lookup(lookup_in(&[
            ("HOST", "127.0.0.1"),
            ("PORT", " 9090 ")
        ])).unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:9090".parse::<SocketAddr>().unwrap());

    }

    #[test]
    fn test_bad_port_is_rejected() {

        let err = ServerConfig::from_lookup(lookup_in(&[("PORT", "eighty")])).unwrap_err();

        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));

    }

    #[test]
    fn test_bad_host_is_rejected() {

        let err = ServerConfig::from_lookup(lookup_in(&[("HOST", "localhost")])).unwrap_err();

        assert_eq!(err, ConfigError::InvalidHost("localhost".to_string()));

    }

}
