//! Session configuration

use std::fmt;
use std::time::Duration;

use crate::error::{ApiError, Result};

/// Where and how to reach the gateway
#[derive(Clone)]
pub struct SessionConfig {
    /// Gateway host name or address
    /// Default: "fritz.box"
    pub hostname: String,

    /// Default: 80
    pub port: u16,

    /// Use https instead of http
    /// Default: false
    pub use_tls: bool,

    /// Login user; gateways in "password only" mode take none
    /// Default: None
    pub username: Option<String>,

    /// Default: empty
    pub password: String,

    /// Path of the session endpoint
    /// Default: "/login_sid.lua"
    pub login_path: String,

    /// Path of the home-automation command endpoint
    /// Default: "/webservices/homeautoswitch.lua"
    pub command_path: String,

    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Default: 10 seconds
    pub read_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hostname: "fritz.box".to_string(),
            port: 80,
            use_tls: false,
            username: None,
            password: String::new(),
            login_path: "/login_sid.lua".to_string(),
            command_path: "/webservices/homeautoswitch.lua".to_string(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
        }
    }
}

impl SessionConfig {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, username: Option<&str>, password: impl Into<String>) -> Self {
        self.username = username.filter(|u| !u.is_empty()).map(str::to_string);
        self.password = password.into();
        self
    }

    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    pub fn with_paths(mut self, login_path: impl Into<String>, command_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self.command_path = command_path.into();
        self
    }

    /// Build a configuration from environment variables
    ///
    /// - `AHA_HOST`: host name (default "fritz.box")
    /// - `AHA_PORT`: port (default 80, or 443 with TLS)
    /// - `AHA_TLS`: "1" or "true" to use https
    /// - `AHA_USERNAME`, `AHA_PASSWORD`: credentials
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup("AHA_HOST") {
            config.hostname = host;
        }
        config.use_tls = matches!(lookup("AHA_TLS").as_deref(), Some("1") | Some("true"));
        config.port = match lookup("AHA_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|e| ApiError::Config(format!("AHA_PORT '{}': {}", port, e)))?,
            None if config.use_tls => 443,
            None => 80,
        };
        config.username = lookup("AHA_USERNAME").filter(|u| !u.is_empty());
        config.password = lookup("AHA_PASSWORD").unwrap_or_default();

        Ok(config)
    }

    /// `scheme://host:port`
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.hostname, self.port)
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url(), self.login_path)
    }

    pub fn command_url(&self) -> String {
        format!("{}{}", self.base_url(), self.command_path)
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("use_tls", &self.use_tls)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("login_path", &self.login_path)
            .field("command_path", &self.command_path)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}
