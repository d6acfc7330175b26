//! Server configuration.
//!
//! Configuration values come from the environment in production and from
//! builders in tests; nothing is hardcoded in handlers.

use std::net::{Ipv4Addr, SocketAddr};

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Dev origins the API accepts cross-origin requests from by default.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:3000", "http://localhost:5173"];

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to bind.
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Create configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the allowed CORS origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }

    /// Read configuration from the environment.
    ///
    /// - `PORT`: TCP port (default 8080; non-numeric values fall back)
    /// - `ALLOWED_ORIGINS`: comma-separated origin list
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        if let Ok(origins) = std::env::var("ALLOWED_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if !origins.is_empty() {
                config.allowed_origins = origins;
            }
        }

        config
    }

    /// Socket address to bind (all interfaces).
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
