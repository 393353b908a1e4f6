// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use once_cell::sync::Lazy;
use std::sync::RwLock;
use thiserror::Error;

use log::warn;

use crate::capability::Capabilities;
use crate::sys;

const DEFAULT_LOOKUP_BUFFER: usize = 1024;

/// Settings applied to every [`crate::Posix`] built with `Posix::new`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacadeConfig {
    /// Capabilities masked out even if the host offers them.
    pub disabled: Capabilities,
    /// Initial buffer size for reentrant passwd/group lookups.
    pub lookup_buffer: usize,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self::from_vars(
            std::env::var("POSIXKIT_DISABLE").ok().as_deref(),
            std::env::var("POSIXKIT_LOOKUP_BUFFER").ok().as_deref(),
        )
    }
}

impl FacadeConfig {
    fn from_vars(disable: Option<&str>, lookup_buffer: Option<&str>) -> Self {
        let disabled = match disable.map(Capabilities::parse_list) {
            Some(Ok(caps)) => caps,
            Some(Err(e)) => {
                warn!("ignoring POSIXKIT_DISABLE: {e}");
                Capabilities::empty()
            }
            None => Capabilities::empty(),
        };
        let fallback = sys::suggested_lookup_buffer().unwrap_or(DEFAULT_LOOKUP_BUFFER);
        let lookup_buffer = match lookup_buffer.map(|v| v.trim().parse::<usize>()) {
            Some(Ok(n)) if n > 0 => n,
            Some(_) => {
                warn!("ignoring POSIXKIT_LOOKUP_BUFFER: expected a positive byte count");
                fallback
            }
            None => fallback,
        };
        Self {
            disabled,
            lookup_buffer,
        }
    }

    /// Capabilities left after applying the mask to what the host offers.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::detect() - self.disabled
    }
}

static CONFIG: Lazy<RwLock<FacadeConfig>> = Lazy::new(|| RwLock::new(FacadeConfig::default()));

/// Errors produced by facade config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("facade config lock poisoned")]
    LockPoisoned,
}

/// Replace the global facade configuration.
pub fn set_config(cfg: FacadeConfig) -> Result<(), ConfigError> {
    let mut guard = CONFIG.write().map_err(|_| ConfigError::LockPoisoned)?;
    *guard = cfg;
    Ok(())
}

/// Get a clone of the current configuration.
pub fn get_config() -> Result<FacadeConfig, ConfigError> {
    CONFIG
        .read()
        .map_err(|_| ConfigError::LockPoisoned)
        .map(|g| g.clone())
}
