use dioxus::prelude::*;

use crate::core::search::heading_text;

/// Heading above search results: the term followed by "Images".
#[component]
pub fn SearchHeading(search_term: String) -> Element {
    let text = heading_text(&search_term);
    tracing::trace!(term = %search_term, "SearchHeading render");

    rsx! {
        div { class: "search-heading",
            h2 { "{text}" }
        }
    }
}
