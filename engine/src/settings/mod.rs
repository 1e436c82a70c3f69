//! Theme registry
//!
//! Holds the UI theme label. There is exactly one process-wide registry,
//! created lazily on first access through [`ThemeRegistry::global`] and kept
//! alive until the process exits. Code that wants to stay testable takes a
//! `&ThemeRegistry` parameter instead, so a locally constructed registry can
//! be passed in its place.
//!
//! # Examples
//!
//! ```
//! use examhub_engine::settings::ThemeRegistry;
//!
//! let registry = ThemeRegistry::new();
//! assert_eq!(registry.theme(), "Default");
//!
//! registry.set_theme("Dark");
//! assert_eq!(registry.theme(), "Dark");
//! ```

use sdk::errors::EngineError;
use sdk::sink::OutputSink;
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Theme every registry starts with
pub const DEFAULT_THEME: &str = "Default";

static GLOBAL_REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

/// Registry holding the current theme label
#[derive(Debug)]
pub struct ThemeRegistry {
    // The lock only exists so the global can live in a static.
    theme: RwLock<String>,
}

impl ThemeRegistry {
    /// Create a registry with the default theme
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME)
    }

    /// Create a registry with a specific starting theme
    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: RwLock::new(theme.into()),
        }
    }

    /// The process-wide registry, created on first call
    pub fn global() -> &'static ThemeRegistry {
        GLOBAL_REGISTRY.get_or_init(|| {
            debug!("Creating global theme registry");
            ThemeRegistry::new()
        })
    }

    /// Current theme label
    pub fn theme(&self) -> String {
        self.theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the theme label. No validation is applied.
    pub fn set_theme(&self, theme: impl Into<String>) {
        let theme = theme.into();
        debug!(theme = %theme, "Theme changed");
        *self.theme.write().unwrap_or_else(PoisonError::into_inner) = theme;
    }

    /// Emit `Current theme: <theme>`
    pub fn report(&self, sink: &mut dyn OutputSink) -> Result<(), EngineError> {
        sink.emit("settings", &format!("Current theme: {}", self.theme()))
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
