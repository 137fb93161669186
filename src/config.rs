use std::{env, fmt::Display, str::FromStr, time::Duration};

use derive_more::{Display, Error};
use log::{info, warn};
use reqwest::Url;

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "invalid value for {}: {}", key, message)]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Root of the events API; GraphQL is served under `graphql`.
    pub api_url: Url,
    pub bind_addr: String,
    pub port: u16,
    pub api_timeout: Duration,
    /// How long a page waits for its query before answering with the
    /// loading page.
    pub loading_patience: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|key| env::var(key).ok())
    }

    fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url: String = try_load(&lookup, "EVENTS_API_URL", "http://127.0.0.1:8000/")?;
        Ok(Self {
            api_url: parse_api_url(&api_url)?,
            bind_addr: try_load(&lookup, "BIND_ADDR", "127.0.0.1")?,
            port: try_load(&lookup, "PORT", "8080")?,
            api_timeout: Duration::from_secs(try_load(&lookup, "API_TIMEOUT_SECS", "10")?),
            loading_patience: Duration::from_millis(try_load(
                &lookup,
                "LOADING_PATIENCE_MS",
                "3000",
            )?),
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid { key, message: e.to_string() }
    })
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw).map_err(|e| ConfigError::Invalid {
        key: "EVENTS_API_URL",
        message: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::Invalid {
            key: "EVENTS_API_URL",
            message: format!("{raw} cannot be used as a base url"),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::load(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = load(&[]).unwrap();
        assert_eq!(settings.api_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(settings.bind_addr, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.api_timeout, Duration::from_secs(10));
        assert_eq!(settings.loading_patience, Duration::from_millis(3000));
    }

    #[test]
    fn api_url_gains_trailing_slash() {
        let settings = load(&[("EVENTS_API_URL", "https://events.example.com/api")]).unwrap();
        assert_eq!(
            settings.api_url.join("graphql").unwrap().as_str(),
            "https://events.example.com/api/graphql"
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid value for PORT"));
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        assert!(load(&[("EVENTS_API_URL", "not a url")]).is_err());
    }
}
