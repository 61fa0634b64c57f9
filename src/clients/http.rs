use std::time::Duration;

use log::debug;
use reqwest::{Client, Url};

use crate::clients::errors::{Error, Result};

/// Request timeout in whole seconds
pub const TIMEOUT_ENV: &str = "LYRICSTATS_TIMEOUT_SECS";
/// User agent sent with every request
pub const USER_AGENT_ENV: &str = "LYRICSTATS_USER_AGENT";

const DEFAULT_TIMEOUT_SECS: u64 = 5;

fn default_user_agent() -> String {
    format!("lyricstats/{}", env!("CARGO_PKG_VERSION"))
}

/// Reads an optional environment variable, treating blank values as unset
pub(crate) fn optional_env(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(Error::from(err)),
    }
}

pub(crate) fn parse_timeout(raw: Option<&str>) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::ConfigurationError(format!(
            "{TIMEOUT_ENV} must be a positive number of seconds, got {raw:?}"
        ))),
    }
}

/// Parses a service base URL. A trailing slash is added so relative joins
/// keep the last path segment.
pub(crate) fn parse_base_url(var_name: &str, raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized).map_err(|e| {
        Error::ConfigurationError(format!("{var_name} is not a valid URL ({raw:?}): {e}"))
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::ConfigurationError(format!(
            "{var_name} cannot be used as a base URL: {raw:?}"
        )));
    }
    Ok(url)
}

/// Build the HTTP client shared by all API clients from environment variables
pub fn try_default_client() -> Result<Client> {
    let timeout = parse_timeout(optional_env(TIMEOUT_ENV)?.as_deref())?;
    let user_agent = optional_env(USER_AGENT_ENV)?.unwrap_or_else(default_user_agent);
    debug!("Building HTTP client (timeout: {timeout:?}, user agent: {user_agent})");

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_to_five_seconds() {
        assert_eq!(parse_timeout(None).unwrap(), Duration::from_secs(5));
        assert_eq!(parse_timeout(Some("12")).unwrap(), Duration::from_secs(12));
    }

    #[test]
    fn invalid_timeout_is_a_configuration_error() {
        for raw in ["0", "-3", "soon"] {
            assert!(matches!(
                parse_timeout(Some(raw)),
                Err(Error::ConfigurationError(_))
            ));
        }
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = parse_base_url("X", "https://musicbrainz.org/ws/2").unwrap();
        assert_eq!(url.as_str(), "https://musicbrainz.org/ws/2/");
        assert_eq!(url.join("artist").unwrap().path(), "/ws/2/artist");
    }

    #[test]
    fn unusable_base_url_is_rejected() {
        assert!(parse_base_url("X", "not a url").is_err());
        assert!(parse_base_url("X", "mailto:someone@example.com").is_err());
    }
}
