//! Client configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and parsed once at startup.
//! Parsing goes through a lookup function so tests can feed arbitrary maps.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://preservation.test";

pub const ENV_API_BASE_URL: &str = "PRESERVATION_API_BASE_URL";
pub const ENV_WITH_CREDENTIALS: &str = "PRESERVATION_WITH_CREDENTIALS";
pub const ENV_AUTH_HEADER_SYNC: &str = "PRESERVATION_AUTH_HEADER_SYNC";
pub const ENV_MALFORMED_USER: &str = "PRESERVATION_MALFORMED_USER";
pub const ENV_LOG_LEVEL: &str = "PRESERVATION_LOG_LEVEL";

/// Errors produced while parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value outside its accepted set.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// The API base URL is not an absolute http(s) URL.
    #[error("invalid API base URL: {0:?}")]
    InvalidUrl(String),
}

/// When the `Authorization` default header on the API client is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthHeaderSync {
    /// Only from the token persisted at startup; later sign-ins leave the
    /// client untouched.
    #[default]
    BootOnly,
    /// Also on every sign-in and sign-out.
    Live,
}

/// What to do when the persisted `user` entry cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedUserPolicy {
    /// Treat the user as absent and keep going.
    #[default]
    Discard,
    /// Fail session initialization.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub with_credentials: bool,
    pub auth_header_sync: AuthHeaderSync,
    pub malformed_user: MalformedUserPolicy,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            with_credentials: true,
            auth_header_sync: AuthHeaderSync::default(),
            malformed_user: MalformedUserPolicy::default(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// Optional:
    /// - `PRESERVATION_API_BASE_URL`: default `http://preservation.test`
    /// - `PRESERVATION_WITH_CREDENTIALS`: `true` (default) or `false`
    /// - `PRESERVATION_AUTH_HEADER_SYNC`: `boot_only` (default) or `live`
    /// - `PRESERVATION_MALFORMED_USER`: `discard` (default) or `fail`
    /// - `PRESERVATION_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any variable holds an unsupported value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            let value = match var {
                ENV_API_BASE_URL => option_env!("PRESERVATION_API_BASE_URL"),
                ENV_WITH_CREDENTIALS => option_env!("PRESERVATION_WITH_CREDENTIALS"),
                ENV_AUTH_HEADER_SYNC => option_env!("PRESERVATION_AUTH_HEADER_SYNC"),
                ENV_MALFORMED_USER => option_env!("PRESERVATION_MALFORMED_USER"),
                ENV_LOG_LEVEL => option_env!("PRESERVATION_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any variable holds an unsupported value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = parse_base_url(lookup(ENV_API_BASE_URL).as_deref())?;
        let with_credentials = parse_bool(ENV_WITH_CREDENTIALS, lookup(ENV_WITH_CREDENTIALS).as_deref(), true)?;
        let auth_header_sync = parse_header_sync(lookup(ENV_AUTH_HEADER_SYNC).as_deref())?;
        let malformed_user = parse_malformed_user(lookup(ENV_MALFORMED_USER).as_deref())?;
        let log_level = parse_log_level(lookup(ENV_LOG_LEVEL).as_deref())?;

        Ok(Self { api_base_url, with_credentials, auth_header_sync, malformed_user, log_level })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(raw.to_owned()));
    }
    let trimmed = raw.trim_end_matches('/');
    if trimmed.ends_with(':') || trimmed.ends_with("//") {
        return Err(ConfigError::InvalidUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_bool(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    match non_blank(raw).map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("true" | "1" | "yes") => Ok(true),
        Some("false" | "0" | "no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidValue { var, value: other.to_owned() }),
    }
}

fn parse_header_sync(raw: Option<&str>) -> Result<AuthHeaderSync, ConfigError> {
    match non_blank(raw).map(str::to_ascii_lowercase).as_deref() {
        None | Some("boot_only") => Ok(AuthHeaderSync::BootOnly),
        Some("live") => Ok(AuthHeaderSync::Live),
        Some(other) => Err(ConfigError::InvalidValue { var: ENV_AUTH_HEADER_SYNC, value: other.to_owned() }),
    }
}

fn parse_malformed_user(raw: Option<&str>) -> Result<MalformedUserPolicy, ConfigError> {
    match non_blank(raw).map(str::to_ascii_lowercase).as_deref() {
        None | Some("discard") => Ok(MalformedUserPolicy::Discard),
        Some("fail") => Ok(MalformedUserPolicy::Fail),
        Some(other) => Err(ConfigError::InvalidValue { var: ENV_MALFORMED_USER, value: other.to_owned() }),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(log::Level::Info);
    };
    raw.parse::<log::Level>()
        .map_err(|_| ConfigError::InvalidValue { var: ENV_LOG_LEVEL, value: raw.to_owned() })
}
