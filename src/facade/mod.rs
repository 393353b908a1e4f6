// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! The [`Posix`] facade.
//!
//! Each method forwards to exactly one primitive with the same name and
//! argument order. Methods are grouped by concern across the submodules;
//! they all live on the one `Posix` type.

mod fs;
mod identity;
mod lookup;
mod process;
mod system;
mod terminal;

use crate::capability::Capabilities;
use crate::config::{self, FacadeConfig};
use crate::errno::{self, Errno};

/// Call-through access to the host's process, credential, terminal and
/// filesystem-node primitives.
///
/// The only state is fixed at construction: which guarded primitives may be
/// called, and how large a buffer reentrant lookups start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posix {
    caps: Capabilities,
    lookup_buffer: usize,
}

impl Default for Posix {
    fn default() -> Self {
        Self::new()
    }
}

impl Posix {
    /// Build a facade from the global [`FacadeConfig`].
    pub fn new() -> Self {
        Self::from_config(&config::get_config().unwrap_or_default())
    }

    pub fn from_config(cfg: &FacadeConfig) -> Self {
        Self {
            caps: cfg.capabilities(),
            lookup_buffer: cfg.lookup_buffer,
        }
    }

    /// Same facade with an explicit capability mask.
    ///
    /// Primitives outside `caps` fail with `Unsupported` without being called.
    pub fn with_capabilities(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Last OS error on this thread.
    pub fn errno(&self) -> Errno {
        Errno::last()
    }

    /// Alias of [`Posix::errno`].
    pub fn get_last_error(&self) -> Errno {
        Errno::last()
    }

    /// Message for an error number; `"Success"` for 0.
    pub fn strerror(&self, code: i32) -> String {
        errno::strerror(code)
    }
}
