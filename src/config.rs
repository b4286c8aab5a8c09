//! Host application configuration.
//!
//! Loaded from a TOML, YAML or JSON file (chosen by extension) with
//! environment overrides applied on top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding `bootstrap_serve_local`.
pub const SERVE_LOCAL_ENV: &str = "BOOTSTRAP_SERVE_LOCAL";

/// Environment variable overriding `bootstrap_static_folder`.
pub const STATIC_FOLDER_ENV: &str = "BOOTSTRAP_STATIC_FOLDER";

/// Default URL path for the application's static files.
pub const DEFAULT_STATIC_URL_PATH: &str = "/static";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL path of the application's static files. The Bootstrap asset
    /// namespace is mounted at `/bootstrap` followed by this path.
    #[serde(default = "default_static_url_path")]
    pub static_url_path: String,

    /// Serve the bundled files instead of the CDN. Unset until the
    /// extension is initialised, which defaults it to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_serve_local: Option<bool>,

    /// Folder to serve the Bootstrap files from instead of the copy
    /// compiled into the crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_static_folder: Option<PathBuf>,

    /// File this config was loaded from.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

fn default_static_url_path() -> String {
    DEFAULT_STATIC_URL_PATH.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            static_url_path: default_static_url_path(),
            bootstrap_serve_local: None,
            bootstrap_static_folder: None,
            source_path: None,
        }
    }
}

impl AppConfig {
    /// Load from `path` if given, otherwise start from defaults; environment
    /// overrides apply either way.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_path(path).await?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Load configuration from a specific file path.
    pub async fn load_from_path(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config = Self::parse(&contents, ext)?;
        config.source_path = Some(path.to_path_buf());
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse config text in the format named by `ext`.
    pub fn parse(contents: &str, ext: &str) -> Result<Self> {
        match ext {
            "toml" => toml::from_str(contents)
                .map_err(|e| Error::Config(format!("Failed to parse TOML config: {}", e))),
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| Error::Config(format!("Failed to parse YAML config: {}", e))),
            _ => serde_json::from_str(contents)
                .map_err(|e| Error::Config(format!("Failed to parse JSON config: {}", e))),
        }
    }

    /// Apply `BOOTSTRAP_SERVE_LOCAL` and `BOOTSTRAP_STATIC_FOLDER`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(SERVE_LOCAL_ENV).ok().as_deref(),
            std::env::var(STATIC_FOLDER_ENV).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, serve_local: Option<&str>, static_folder: Option<&str>) -> Self {
        if let Some(raw) = serve_local.filter(|s| !s.is_empty()) {
            match parse_flag(raw) {
                Some(flag) => {
                    tracing::debug!("Using {} from environment: {}", SERVE_LOCAL_ENV, flag);
                    self.bootstrap_serve_local = Some(flag);
                }
                None => tracing::warn!("Ignoring {}={:?}: not a boolean", SERVE_LOCAL_ENV, raw),
            }
        }

        if let Some(folder) = static_folder.filter(|s| !s.is_empty()) {
            tracing::debug!("Using {} from environment: {}", STATIC_FOLDER_ENV, folder);
            self.bootstrap_static_folder = Some(PathBuf::from(folder));
        }

        self
    }

    /// Set `bootstrap_serve_local` to `false` unless already set, and return
    /// the effective value.
    pub fn set_default_serve_local(&mut self) -> bool {
        *self.bootstrap_serve_local.get_or_insert(false)
    }

    /// Serving mode; unset counts as CDN.
    pub fn serve_local(&self) -> bool {
        self.bootstrap_serve_local.unwrap_or(false)
    }

    /// Directory used for resolving relative paths: the config file's
    /// parent if loaded from a file.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Override folder with `~` expanded and relative paths resolved
    /// against the config file's directory (or the working directory).
    /// `None` means the compiled-in copy is served.
    pub fn static_folder(&self) -> Option<PathBuf> {
        let folder = self.bootstrap_static_folder.as_ref()?;
        let raw = folder.to_string_lossy();
        let expanded = shellexpand::tilde(raw.as_ref());
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            return Some(path.to_path_buf());
        }

        Some(match self.base_dir() {
            Some(base) => base.join(path),
            None => std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(path),
        })
    }

    /// Effective configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }
}

/// Parse `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`, case-insensitively.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.static_url_path, "/static");
        assert_eq!(config.bootstrap_serve_local, None);
        assert!(!config.serve_local());
        assert_eq!(config.bootstrap_static_folder, None);
        assert_eq!(config.static_folder(), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_set_default_keeps_explicit_value() {
        let mut config = AppConfig::default();
        assert!(!config.set_default_serve_local());
        assert_eq!(config.bootstrap_serve_local, Some(false));

        let mut config = AppConfig {
            bootstrap_serve_local: Some(true),
            ..AppConfig::default()
        };
        assert!(config.set_default_serve_local());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(Some("true"), Some("/srv/bootstrap"));
        assert_eq!(config.bootstrap_serve_local, Some(true));
        assert_eq!(config.static_folder(), Some(PathBuf::from("/srv/bootstrap")));

        let config = AppConfig {
            bootstrap_serve_local: Some(true),
            ..AppConfig::default()
        }
        .with_overrides(Some("nonsense"), Some(""));
        assert_eq!(config.bootstrap_serve_local, Some(true));
        assert_eq!(config.bootstrap_static_folder, None);
    }

    #[test]
    fn test_parse_formats() {
        let toml = AppConfig::parse("bootstrap_serve_local = true\n", "toml").unwrap();
        assert_eq!(toml.bootstrap_serve_local, Some(true));
        assert_eq!(toml.static_url_path, "/static");

        let yaml = AppConfig::parse("static_url_path: /assets\n", "yml").unwrap();
        assert_eq!(yaml.static_url_path, "/assets");
        assert_eq!(yaml.bootstrap_serve_local, None);

        let json =
            AppConfig::parse(r#"{"bootstrap_static_folder": "vendor"}"#, "json").unwrap();
        assert_eq!(json.bootstrap_static_folder, Some(PathBuf::from("vendor")));
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = AppConfig::parse("bootstrap_serve_local = [", "toml").unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("TOML")));
    }

    #[tokio::test]
    async fn test_load_from_path_resolves_relative_folder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.toml");
        std::fs::write(
            &path,
            "bootstrap_serve_local = true\nbootstrap_static_folder = \"vendor/bootstrap\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from_path(&path).await.unwrap();
        assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
        assert_eq!(
            config.static_folder(),
            Some(dir.path().join("vendor/bootstrap"))
        );
        assert!(config.serve_local());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = AppConfig::load_from_path(&dir.path().join("missing.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_to_json_reports_effective_values() {
        let mut config = AppConfig::default();
        config.set_default_serve_local();
        let json: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

        assert_eq!(json["bootstrap_serve_local"], false);
        assert_eq!(json["static_url_path"], "/static");
        assert!(json.get("bootstrap_static_folder").is_none());
        assert!(json.get("source_path").is_none());
    }

    // The only test that touches these variables; others call `load_from_path`
    // or `parse`, which never read the environment.
    #[tokio::test]
    async fn test_load_applies_environment_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.toml");
        std::fs::write(&path, "bootstrap_serve_local = false\n").unwrap();

        std::env::set_var(SERVE_LOCAL_ENV, "true");
        std::env::set_var(STATIC_FOLDER_ENV, "/srv/bootstrap");
        let from_defaults = AppConfig::load(None).await;
        let from_file = AppConfig::load(Some(&path)).await;
        std::env::remove_var(SERVE_LOCAL_ENV);
        std::env::remove_var(STATIC_FOLDER_ENV);

        let from_defaults = from_defaults.unwrap();
        assert_eq!(from_defaults.bootstrap_serve_local, Some(true));
        assert_eq!(
            from_defaults.static_folder(),
            Some(PathBuf::from("/srv/bootstrap"))
        );

        let from_file = from_file.unwrap();
        assert_eq!(from_file.bootstrap_serve_local, Some(true));
        assert!(from_file.serve_local());
    }
}
