//! Text shown above a set of search results.

/// Word appended after the search term. Not localized.
pub const SEARCH_SUFFIX: &str = "Images";

/// Heading text for `term`: the term verbatim, a space, then `"Images"`.
///
/// The term is not trimmed, validated or escaped; escaping is left to the renderer.
pub fn heading_text(term: &str) -> String {
    format!("{term} {SEARCH_SUFFIX}")
}
