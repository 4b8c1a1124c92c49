//! Web server configuration

use maxarea_common::Limits;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

/// Environment variable naming a TOML config file
pub const CONFIG_ENV: &str = "MAXAREA_CONFIG";

/// Web server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// HTTP listen address
    pub listen: SocketAddr,

    /// Bounds applied to submitted heights
    pub limits: Limits,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::LOCALHOST, 5000)),
            limits: Limits::default(),
        }
    }
}

impl WebConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// File named by `MAXAREA_CONFIG` (if any), then environment overrides.
    pub fn from_env() -> anyhow::Result<Self> {
        let base = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `MAXAREA_WEB_ADDR`, `MAXAREA_MAX_HEIGHT` and `MAXAREA_MAX_LEN`.
    pub fn with_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(addr) = get("MAXAREA_WEB_ADDR") {
            self.listen = addr
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid MAXAREA_WEB_ADDR {:?}: {}", addr, e))?;
        }
        if let Some(v) = get("MAXAREA_MAX_HEIGHT") {
            self.limits.max_height = v
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid MAXAREA_MAX_HEIGHT {:?}: {}", v, e))?;
        }
        if let Some(v) = get("MAXAREA_MAX_LEN") {
            self.limits.max_len = v
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid MAXAREA_MAX_LEN {:?}: {}", v, e))?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let cfg = WebConfig::default();
        assert_eq!(cfg.listen.to_string(), "127.0.0.1:5000");
        assert_eq!(cfg.limits.max_height, 10_000);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = WebConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, WebConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/maxarea.toml");
        let mut cfg = WebConfig::default();
        cfg.listen = "0.0.0.0:8080".parse().unwrap();
        cfg.limits.max_len = 50;

        cfg.save(&path).unwrap();
        assert_eq!(WebConfig::load(&path).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maxarea.toml");
        std::fs::write(&path, "[limits]\nmax_height = 99\n").unwrap();

        let cfg = WebConfig::load(&path).unwrap();
        assert_eq!(cfg.limits.max_height, 99);
        assert_eq!(cfg.limits.max_len, maxarea_common::DEFAULT_MAX_LEN);
        assert_eq!(cfg.listen, WebConfig::default().listen);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("MAXAREA_WEB_ADDR", "127.0.0.1:9000"),
            ("MAXAREA_MAX_HEIGHT", " 20 "),
            ("MAXAREA_MAX_LEN", ""),
        ]
        .into_iter()
        .collect();

        let cfg = WebConfig::default()
            .with_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(cfg.listen.port(), 9000);
        assert_eq!(cfg.limits.max_height, 20);
        assert_eq!(cfg.limits.max_len, maxarea_common::DEFAULT_MAX_LEN);
    }

    #[test]
    fn test_bad_override_is_an_error() {
        let err = WebConfig::default()
            .with_overrides(|k| (k == "MAXAREA_MAX_LEN").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("MAXAREA_MAX_LEN"));
    }
}
