//! Error types for the shared UI crate.
//!
//! Rendering never fails; the only fallible surface is switching the UI language.

use thiserror::Error;

/// Result type alias for fallible UI operations.
pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors raised while changing the active locale.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The tag is not a syntactically valid BCP 47 language identifier.
    #[error("invalid language tag: {tag}")]
    InvalidTag { tag: String },

    /// The tag is valid but no localization bundle is embedded for it.
    #[error("language not bundled: {0}")]
    Unavailable(String),

    /// Loading the embedded bundle failed.
    #[error("failed to load localization bundle: {0}")]
    Load(#[from] i18n_embed::I18nEmbedError),
}
