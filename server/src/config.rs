use anyhow::Context;
use config::{ConfigBuilder, Environment, File, builder::DefaultState};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use types::Result;
use url::Url;

const CONFIG_FILE: &str = "threadle";
const ENV_PREFIX: &str = "THREADLE";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Base URL of the remote blog service, e.g. `https://api.threadle.example`.
    pub blog_service_url: Url,
    #[serde(deserialize_with = "secret")]
    pub session_secret: SecretString,
    #[serde(default)]
    pub secure_cookies: bool,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    /// Load from `threadle.toml` (optional), then `THREADLE_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            config::Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        Ok(builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?)
    }
}

fn default_log_filter() -> String {
    "info".into()
}

fn secret<'de, D>(deserializer: D) -> std::result::Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use config::FileFormat;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    const BASE: &str = r#"
        blog_service_url = "http://localhost:5000"
        session_secret = "abc"
    "#;

    fn load(toml: &str, vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_builder(
            config::Config::builder()
                .add_source(File::from_str(toml, FileFormat::Toml))
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .try_parsing(true)
                        .source(Some(vars)),
                ),
        )
    }

    #[test]
    fn reads_toml_with_defaults() {
        let config = load(BASE, &[]).unwrap();

        assert_eq!(config.blog_service_url.as_str(), "http://localhost:5000/");
        assert_eq!(config.session_secret.expose_secret(), "abc");
        assert!(!config.secure_cookies);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn environment_overrides_file() {
        let config = load(
            BASE,
            &[
                ("THREADLE_BLOG_SERVICE_URL", "https://blogs.example.com"),
                ("THREADLE_SECURE_COOKIES", "true"),
            ],
        )
        .unwrap();

        assert_eq!(config.blog_service_url.host_str(), Some("blogs.example.com"));
        assert!(config.secure_cookies);
    }

    #[test]
    fn missing_service_url_is_an_error() {
        let error = load(r#"session_secret = "abc""#, &[]).unwrap_err();

        assert!(error.message.starts_with("invalid configuration"));
    }
}
