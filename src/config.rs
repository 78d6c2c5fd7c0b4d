use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3005;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Only an unset or empty `PORT` falls back to [`DEFAULT_PORT`]; any
    /// other value, including whitespace, must parse as a port.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) if !value.is_empty() => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn missing_port_uses_default() {
        let cfg = config_with(&[]).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.listen_addr(), "0.0.0.0:3005".parse().unwrap());
    }

    #[test]
    fn empty_port_uses_default() {
        assert_eq!(config_with(&[("PORT", "")]).unwrap().port, 3005);
    }

    #[test]
    fn whitespace_port_is_rejected() {
        for raw in ["  ", " 8080 ", "8080\n"] {
            let err = config_with(&[("PORT", raw)]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == raw));
        }
    }

    #[test]
    fn port_override_is_respected() {
        let cfg = config_with(&[("PORT", "8080")]).unwrap();
        assert_eq!(cfg.listen_addr(), "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_with(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "not-a-port"));

        assert!(config_with(&[("PORT", "70000")]).is_err());
    }
}
