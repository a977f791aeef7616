use thiserror::Error;

/// Errors surfaced by the configuration provider
///
/// Almost every failure in the config flow is recovered locally with a
/// fallback; these are the ones that reach the caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Cache-only load with nothing (valid) cached. The UI answers this by
    /// asking the user for an access code.
    #[error("No cached configuration; an access code is required")]
    NoCachedConfig,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
