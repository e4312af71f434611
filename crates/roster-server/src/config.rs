use std::net::SocketAddr;
use std::path::Path;

use roster_employee::{PageSizing, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration, usually read from a TOML file.
///
/// Keys missing from the file keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Page size used when a list request does not specify a valid one.
    pub default_page_size: usize,
    /// Largest page a single list request may ask for. Unset means no cap;
    /// larger requests are rejected rather than shortened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: None,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn validate(&self) -> ServerResult<()> {
        if self.default_page_size == 0 {
            return Err(ServerError::Config("default_page_size must be positive".into()));
        }
        if let Some(max) = self.max_page_size {
            if max < self.default_page_size {
                return Err(ServerError::Config(format!(
                    "max_page_size ({max}) is smaller than default_page_size ({})",
                    self.default_page_size
                )));
            }
        }
        Ok(())
    }

    pub fn page_sizing(&self) -> PageSizing {
        PageSizing {
            default: self.default_page_size,
            max: self.max_page_size,
        }
    }
}
