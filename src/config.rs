use std::path::PathBuf;

use crate::telemetry::{LogLevel, DEFAULT_MIN_LEVEL};

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = DEFAULT_MIN_LEVEL;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u64_with_bounds(&lookup, "PORT", DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(&lookup, "SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_non_empty_string(&lookup, "LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(DEFAULT_PORT as u16),
            dist_dir,
            log_level,
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn parse_u64_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
    bounds: (u64, u64),
) -> u64 {
    lookup(name)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.index_file(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn valid_values_are_used() {
        let config = config_from(&[
            ("PORT", " 3000 "),
            ("SITE_DIST_DIR", "public"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_range_or_garbage_falls_back() {
        assert_eq!(config_from(&[("PORT", "0")]).port, 8080);
        assert_eq!(config_from(&[("PORT", "70000")]).port, 8080);
        assert_eq!(config_from(&[("PORT", "http")]).port, 8080);
        assert_eq!(config_from(&[("LOG_LEVEL", "verbose")]).log_level, LogLevel::Info);
    }

    #[test]
    fn blank_dist_dir_is_ignored() {
        let config = config_from(&[("SITE_DIST_DIR", "   ")]);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }
}
