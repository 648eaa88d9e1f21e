use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::ApiKey;

/// Host configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory exported documents are written to.
    pub output_dir: PathBuf,
    /// Outline font used by the rasterizer. Export is unavailable without one.
    pub font_path: Option<PathBuf>,
    pub anthropic_api_key: Option<ApiKey>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output_dir = PathBuf::from(optional("RESUME_OUTPUT_DIR").unwrap_or_else(|| ".".to_string()));
        if output_dir.exists() && !output_dir.is_dir() {
            anyhow::bail!("RESUME_OUTPUT_DIR '{}' is not a directory", output_dir.display());
        }

        let font_path = optional("RESUME_FONT_PATH").map(PathBuf::from);
        if let Some(path) = &font_path {
            std::fs::metadata(path)
                .with_context(|| format!("RESUME_FONT_PATH '{}' is not readable", path.display()))?;
        }

        Ok(Config {
            output_dir,
            font_path,
            anthropic_api_key: optional("ANTHROPIC_API_KEY").and_then(ApiKey::new),
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.font_path.is_none());
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_blank_api_key_is_none() {
        let config = Config::from_lookup(lookup(&[("ANTHROPIC_API_KEY", "  ")])).unwrap();
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_reads_all_values() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("Inter.ttf");
        std::fs::write(&font, b"font").unwrap();
        let out = dir.path().to_string_lossy().to_string();
        let font_str = font.to_string_lossy().to_string();

        let config = Config::from_lookup(lookup(&[
            ("RESUME_OUTPUT_DIR", &out),
            ("RESUME_FONT_PATH", &font_str),
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.output_dir, dir.path());
        assert_eq!(config.font_path.as_deref(), Some(font.as_path()));
        assert_eq!(config.anthropic_api_key.unwrap().expose(), "sk-test");
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_missing_font_file_is_an_error() {
        let err = Config::from_lookup(lookup(&[("RESUME_FONT_PATH", "/nonexistent/font.ttf")])).unwrap_err();
        assert!(err.to_string().contains("RESUME_FONT_PATH"));
    }

    #[test]
    fn test_output_dir_must_be_a_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert!(Config::from_lookup(lookup(&[("RESUME_OUTPUT_DIR", &path)])).is_err());
    }
}
