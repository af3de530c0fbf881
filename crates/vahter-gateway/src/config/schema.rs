use std::net::SocketAddr;

use serde::Deserialize;
use vahter_core::error::{Result, VahterError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VahterConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub page: PageSection,
}

impl Default for VahterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            page: PageSection::default(),
        }
    }
}

impl VahterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VahterError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.page.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            VahterError::BadRequest(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSection {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for PageSection {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl PageSection {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(VahterError::BadRequest("page.title must not be empty".into()));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_title() -> String {
    "Vahter".into()
}
