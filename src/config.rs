//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Skip animations (page fade, smooth scroll, card reveals)
    pub reduced_motion: Option<bool>,
    /// Section to open on start, by nav label or id ("contact", "blog", ...)
    pub start_section: Option<String>,
    /// Show keyboard hints in the status bar
    pub show_hints: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("sa", "nakhla", "nakhla-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(false)
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.reduced_motion.is_none());
        assert!(config.start_section.is_none());
        assert!(config.show_hints.is_none());
        assert!(!config.reduced_motion());
        assert!(config.show_hints());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            reduced_motion: Some(true),
            start_section: Some("contact".to_string()),
            show_hints: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.reduced_motion, Some(true));
        assert_eq!(parsed.start_section, Some("contact".to_string()));
        assert_eq!(parsed.show_hints, Some(false));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.reduced_motion.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"reduced_motion": true, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.reduced_motion, Some(true));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
