use std::sync::LazyLock;

use thiserror::Error;

/// Site-wide settings fixed at compile time so the server render and the
/// hydrated client agree on every URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteConfig {
    /// Prefix for static assets, either empty or `/`-led without a trailing `/`.
    pub base_path: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base path must be a path, not a URL: {0}")]
    NotAPath(String),
    #[error("base path contains whitespace: {0:?}")]
    Whitespace(String),
}

pub static SITE: LazyLock<SiteConfig> = LazyLock::new(|| {
    let raw = option_env!("PUBLIC_URL").unwrap_or_default();
    SiteConfig::from_base_path(raw).unwrap_or_else(|e| {
        log::warn!("ignoring PUBLIC_URL: {e}");
        SiteConfig::default()
    })
});

impl SiteConfig {
    pub fn from_base_path(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_path: normalize_base_path(raw)?,
        })
    }

    /// Resolve a `public/` file against the base path.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path.trim_start_matches('/'))
    }
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return Err(ConfigError::Whitespace(raw.to_string()));
    }
    if trimmed.contains("://") {
        return Err(ConfigError::NotAPath(raw.to_string()));
    }
    let trimmed = trimmed.trim_matches('/');
    if trimmed.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("/{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_path() {
        let site = SiteConfig::from_base_path("").unwrap();
        assert_eq!(site.base_path, "");
        assert_eq!(site.asset_url("resume.pdf"), "/resume.pdf");
        assert_eq!(site.asset_url("/resume.pdf"), "/resume.pdf");
    }

    #[test]
    fn test_base_path_normalized() {
        for raw in ["portfolio", "/portfolio", "/portfolio/", " portfolio/ "] {
            let site = SiteConfig::from_base_path(raw).unwrap();
            assert_eq!(site.base_path, "/portfolio", "raw = {raw:?}");
        }
        let site = SiteConfig::from_base_path("/a/b/").unwrap();
        assert_eq!(site.asset_url("demo-shell.jpg"), "/a/b/demo-shell.jpg");
    }

    #[test]
    fn test_shell_assets_follow_base_path() {
        use crate::content::{FAVICON_FILE, RESUME_FILE};

        let site = SiteConfig::from_base_path("/portfolio").unwrap();
        assert_eq!(site.asset_url(FAVICON_FILE), "/portfolio/favicon.ico");
        assert_eq!(site.asset_url(RESUME_FILE), "/portfolio/resume.pdf");
    }

    #[test]
    fn test_invalid_base_paths() {
        assert_eq!(
            SiteConfig::from_base_path("https://example.com"),
            Err(ConfigError::NotAPath("https://example.com".to_string()))
        );
        assert!(matches!(
            SiteConfig::from_base_path("my site"),
            Err(ConfigError::Whitespace(_))
        ));
    }
}
