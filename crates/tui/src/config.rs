use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const CREATE_URL_ENV: &str = "PDIFF_CREATE_URL";
pub const POST_IMAGE_URL_ENV: &str = "PDIFF_POST_IMAGE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub create_url: String,
    pub post_image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub connect_timeout_seconds: u64,
    pub timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            create_url: "http://localhost:8080/create-site".to_string(),
            post_image_url: "http://localhost:8080/post-image".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: 5,
            timeout_seconds: 20,
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Using default config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(CREATE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.server.create_url = url.trim().to_string();
        }
        if let Some(url) = lookup(POST_IMAGE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.server.post_image_url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_endpoint("server.create_url", &self.server.create_url)?;
        validate_endpoint("server.post_image_url", &self.server.post_image_url)?;
        if self.http.connect_timeout_seconds == 0 {
            return Err(anyhow!(
                "http.connect_timeout_seconds must be greater than zero"
            ));
        }
        if self.http.timeout_seconds == 0 {
            return Err(anyhow!("http.timeout_seconds must be greater than zero"));
        }
        Ok(())
    }
}

fn validate_endpoint(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| anyhow!("{field} is not a valid URL ({value}): {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(anyhow!("{field} must use http or https, got {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            create_url = "https://pdiff.example.com/create-site"
            "#,
        )
        .expect("parse config");

        assert_eq!(config.server.create_url, "https://pdiff.example.com/create-site");
        assert_eq!(config.server.post_image_url, "http://localhost:8080/post-image");
        assert_eq!(config.http.timeout_seconds, 20);
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::default();
        config.apply_overrides(|name| match name {
            CREATE_URL_ENV => Some(" http://other:9000/create-site ".to_string()),
            POST_IMAGE_URL_ENV => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.server.create_url, "http://other:9000/create-site");
        assert_eq!(config.server.post_image_url, "http://localhost:8080/post-image");
    }

    #[test]
    fn validate_rejects_bad_endpoints() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.server.create_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.server.create_url = "ftp://example.com/create-site".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeouts() {
        let mut config = Config::default();
        config.http.connect_timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.http.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = Config::load_or_default(Path::new("/nonexistent/pdiff/config.toml"));
        assert_eq!(config.server.create_url, "http://localhost:8080/create-site");
    }
}
