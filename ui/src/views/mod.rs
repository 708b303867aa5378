mod discover;
mod not_found;
mod publish;
mod search;
mod subscriptions;

pub use discover::Discover;
pub use not_found::NotFound;
pub use publish::Publish;
pub use search::SearchResults;
pub use subscriptions::Subscriptions;

use dioxus::prelude::*;

/// Reads the global language code (if the platform provided one) so the calling
/// view re-renders when the locale changes elsewhere.
pub(crate) fn use_lang_marker() -> String {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    lang_code.as_ref().map(|s| s()).unwrap_or_default()
}
