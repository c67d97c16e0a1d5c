use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Dataset read when neither an argument nor `LAUNCH_DASH_DATA` names one.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

/// Startup settings shared by the desktop and server binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl DashboardConfig {
    /// Read the process arguments and environment:
    ///
    /// - first positional argument, else `LAUNCH_DASH_DATA`: data file
    /// - `HOST`, `PORT`: server bind address
    pub fn from_env() -> Self {
        Self::from_sources(env::args().nth(1), |key| env::var(key).ok())
    }

    fn from_sources(arg: Option<String>, var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_path = arg
            .or_else(|| var("LAUNCH_DASH_DATA"))
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);
        let host = var("HOST").unwrap_or(defaults.host);
        let port = var("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            data_path,
            host,
            port,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_dash_conventions() {
        let cfg = DashboardConfig::from_sources(None, vars(&[]));
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.bind_addr().unwrap().to_string(), "127.0.0.1:8050");
    }

    #[test]
    fn argument_wins_over_environment() {
        let cfg = DashboardConfig::from_sources(
            Some("launches.parquet".into()),
            vars(&[("LAUNCH_DASH_DATA", "other.csv")]),
        );
        assert_eq!(cfg.data_path, PathBuf::from("launches.parquet"));

        let cfg = DashboardConfig::from_sources(None, vars(&[("LAUNCH_DASH_DATA", "other.csv")]));
        assert_eq!(cfg.data_path, PathBuf::from("other.csv"));
    }

    #[test]
    fn unparseable_port_falls_back() {
        let cfg = DashboardConfig::from_sources(None, vars(&[("HOST", "0.0.0.0"), ("PORT", "eighty")]));
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn bad_host_is_reported() {
        let cfg = DashboardConfig::from_sources(None, vars(&[("HOST", "not a host")]));
        assert!(cfg.bind_addr().is_err());
    }
}
