use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use plan_schema::{SchemaResult, SchemaValidator};

use crate::error::{ServerError, ServerResult};

/// Port used when neither a config file nor `PORT` provides one.
pub const DEFAULT_PORT: u16 = 3000;

/// Path prefix the plan endpoints are mounted under by default.
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Prefix for the plan routes. Empty mounts them at the root.
    pub api_prefix: String,
    /// Schema file to validate plans against; `None` uses the built-in one.
    pub schema_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            api_prefix: DEFAULT_API_PREFIX.into(),
            schema_path: None,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> ServerResult<Self> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Overlay `PORT`, `SCHEMA_PATH` and `API_PREFIX` from the process
    /// environment.
    pub fn apply_env(self) -> ServerResult<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlay environment settings using a custom variable lookup.
    pub fn apply_env_with<F>(mut self, lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| ServerError::Config(format!("invalid PORT {port:?}: {e}")))?;
            self.bind_addr.set_port(port);
        }
        if let Some(path) = lookup("SCHEMA_PATH").filter(|p| !p.is_empty()) {
            self.schema_path = Some(PathBuf::from(path));
        }
        if let Some(prefix) = lookup("API_PREFIX") {
            self.api_prefix = prefix;
        }
        Ok(self)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }

    /// The route prefix with a leading slash and no trailing slash, or an
    /// empty string when routes are mounted at the root.
    pub fn normalized_prefix(&self) -> String {
        let trimmed = self.api_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Compile the configured schema, or the built-in one.
    pub fn load_validator(&self) -> SchemaResult<SchemaValidator> {
        match &self.schema_path {
            Some(path) => SchemaValidator::from_path(path),
            None => SchemaValidator::builtin(),
        }
    }
}
