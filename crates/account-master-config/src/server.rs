//! HTTP listener configuration.
//!
//! # Environment Variables
//!
//! - `SERVER_HOST`: Interface to bind (default: `0.0.0.0`)
//! - `SERVER_PORT`: Port to bind (default: `3000`)
//! - `REQUEST_TIMEOUT_SECS`: Upper bound on a single request (default: 5)
//! - `SHUTDOWN_TIMEOUT_SECS`: Grace period for in-flight requests on shutdown (default: 3)

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout: Duration::from_secs(5),
            shutdown_timeout: Duration::from_secs(3),
        }
    }
}

impl ServerConfig {
    /// Reads the listener settings from the process environment.
    ///
    /// Unset or unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: var("SERVER_HOST")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.host),
            port: var("SERVER_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            request_timeout: var("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            shutdown_timeout: var("SHUTDOWN_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.shutdown_timeout),
        }
    }

    /// `host:port` suitable for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_vars(vars(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_reads_all_values() {
        let config = ServerConfig::from_vars(vars(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8081"),
            ("REQUEST_TIMEOUT_SECS", "10"),
            ("SHUTDOWN_TIMEOUT_SECS", "1"),
        ]));

        assert_eq!(config.address(), "127.0.0.1:8081");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = ServerConfig::from_vars(vars(&[("SERVER_PORT", "not-a-port")]));
        assert_eq!(config.port, 3000);
    }
}
