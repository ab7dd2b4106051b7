//! Error types shared by the theme resolver and config loader.
//!
//! ERROR HANDLING
//! ==============
//! Only [`ThemeError::InvalidPreference`] and [`ConfigError`] are ever
//! returned to a caller. Store and DOM failures are logged by the resolver
//! and absorbed so page operation continues.

/// Failure raised while resolving, persisting, or applying a theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The value is not one of `light`, `dark`, or `system`.
    #[error("invalid theme preference: {0:?}")]
    InvalidPreference(String),
    /// The persistence store rejected a read or write.
    #[error("preference store unavailable: {0}")]
    StoreUnavailable(String),
    /// A required DOM element could not be found.
    #[error("missing DOM target: {0}")]
    MissingDomTarget(&'static str),
}

/// Error returned by [`crate::config::UiConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for [`crate::config::UiConfig`].
    #[error("failed to parse ui config: {0}")]
    Parse(#[from] serde_json::Error),
}
