use crate::error::{FwkitError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Services flagged as weak when they appear in "Services & Applications".
pub const DEFAULT_WEAK_PROTOCOLS: &[&str] = &["HTTP", "FTP", "TELNET", "RDP", "POP3", "IMAP"];

/// Review tuning, loadable from a TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    pub weak_protocols: Vec<String>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            weak_protocols: DEFAULT_WEAK_PROTOCOLS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ReviewConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| FwkitError::Config(format!("Failed to parse review config: {}", e)))
    }

    /// Resolve the active config: explicit path, then the FWKIT_CONFIG
    /// env var, then XDG `fwkit/review.toml`, then compiled-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(env_path) = std::env::var("FWKIT_CONFIG") {
            return Self::from_file(PathBuf::from(env_path));
        }

        if let Some(path) = xdg::BaseDirectories::with_prefix("fwkit")
            .ok()
            .and_then(|xdg| xdg.find_config_file("review.toml"))
        {
            log::debug!("loading review config from {}", path.display());
            return Self::from_file(path);
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weak_protocols() {
        let config = ReviewConfig::default();
        assert!(config.weak_protocols.iter().any(|p| p == "TELNET"));
        assert_eq!(config.weak_protocols.len(), 6);
    }

    #[test]
    fn test_from_toml_overrides_list() {
        let config = ReviewConfig::from_toml(r#"weak_protocols = ["SSH", "SNMP"]"#).unwrap();
        assert_eq!(config.weak_protocols, vec!["SSH", "SNMP"]);
    }

    #[test]
    fn test_from_toml_empty_keeps_defaults() {
        let config = ReviewConfig::from_toml("").unwrap();
        assert_eq!(config.weak_protocols.len(), 6);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review.toml");
        std::fs::write(&path, r#"weak_protocols = ["FTP"]"#).unwrap();

        let config = ReviewConfig::from_file(&path).unwrap();
        assert_eq!(config.weak_protocols, vec!["FTP"]);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = ReviewConfig::from_toml("weak_protocols = 5").unwrap_err();
        assert!(matches!(err, FwkitError::Config(_)));
    }
}
