//! Registry source resolution: local file vs remote URL.
//!
//! The decision is made exactly once, at the boundary, by classifying the
//! location string. Later stages only see the resolved `RegistrySource`.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{RegistryError, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the registry document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    /// A registry file on the local filesystem.
    Local(PathBuf),
    /// A registry fetched over HTTP(S).
    Remote(String),
}

impl RegistrySource {
    /// Classify a location string. Anything starting with `http` (which
    /// covers both `http://` and `https://`) is treated as a URL, everything
    /// else as a local path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http") {
            RegistrySource::Remote(location.to_string())
        } else {
            RegistrySource::Local(PathBuf::from(location))
        }
    }
}

impl fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrySource::Local(path) => write!(f, "{}", path.display()),
            RegistrySource::Remote(url) => f.write_str(url),
        }
    }
}

/// Read the raw registry document from its source.
///
/// Single attempt, no retries; any failure is fatal to the run.
pub fn read_source(source: &RegistrySource) -> Result<String> {
    match source {
        RegistrySource::Local(path) => {
            if !path.is_file() {
                return Err(RegistryError::FileNotFound { path: path.clone() });
            }
            Ok(std::fs::read_to_string(path)?)
        }
        RegistrySource::Remote(url) => fetch_remote(url),
    }
}

fn fetch_remote(url: &str) -> Result<String> {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(FETCH_TIMEOUT))
        .build();
    let agent = ureq::Agent::new_with_config(config);

    let mut response = agent.get(url).call().map_err(|e| RegistryError::FetchFailed {
        url: url.to_string(),
        detail: e.to_string(),
    })?;

    response
        .body_mut()
        .read_to_string()
        .map_err(|e| RegistryError::FetchFailed {
            url: url.to_string(),
            detail: e.to_string(),
        })
}
