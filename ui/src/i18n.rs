//! Internationalization (i18n) support for `bookworm-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/bookworm-ui.ftl   (fallback/reference)
//!   es-ES/bookworm-ui.ftl
//!   fr-FR/bookworm-ui.ftl
//! ```
//!
//! Usage in a component (the loader selects languages on first use; `init()`
//! only forces that early):
//! ```ignore
//! use crate::t;
//! let tagline = t!("tagline");
//! ```
//!
//! To add a new locale, copy `en-US/bookworm-ui.ftl` to `i18n/<lang-id>/bookworm-ui.ftl`,
//! translate the values (keep IDs identical) and register it in `tests/i18n_missing_keys.rs`.
//!
//! Desktop/native builds ask the OS for preferred languages; WASM builds read
//! `navigator.languages`.
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::error::{I18nError, Result};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup routes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "bookworm-ui";

/// Fallback language tag, always bundled.
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
///
/// Bundles for the requested languages are selected on first access, so any
/// `t!` lookup works without an explicit [`init`] call.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    let requested = requested_languages();
    match i18n_embed::select(&loader, &Localizations, &requested) {
        Ok(selected) => tracing::debug!(?selected, "loaded localization bundles"),
        Err(err) => {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback")
        }
    }
    loader
});

/// Initialize i18n (idempotent). Forces the loader so bundles are parsed up front.
pub fn init() {
    Lazy::force(&LOADER);
}

/// Switch language at runtime.
///
/// The tag must parse and name an embedded locale; otherwise the current
/// language is left untouched.
pub fn set_language(tag: &str) -> Result<()> {
    init();
    let lang: LanguageIdentifier = tag.parse().map_err(|_| I18nError::InvalidTag {
        tag: tag.to_string(),
    })?;
    let canonical = lang.to_string();
    if !available_languages().contains(&canonical) {
        return Err(I18nError::Unavailable(canonical));
    }
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    tracing::info!(language = %canonical, "switched UI language");
    Ok(())
}

/// Tag of the language currently used for lookups.
pub fn current_language() -> String {
    init();
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
