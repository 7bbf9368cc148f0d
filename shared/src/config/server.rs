//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_parse};

/// Bind address and CORS settings for the HTTP server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Origin allowed by the CORS layer
    pub allowed_origin: String,
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env_opt("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: env_parse("SERVER_PORT", 3000),
            allowed_origin: env_opt("FRONTEND_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
        }
    }

    /// Address string suitable for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
