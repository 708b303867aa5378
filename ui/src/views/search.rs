use dioxus::prelude::*;

use super::use_lang_marker;
use crate::components::SearchHeading;

/// Route target for `/search/:term`.
#[component]
pub fn SearchResults(term: String) -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-search",
            SearchHeading { search_term: term }
            p { class: "page-search__intro", {crate::t!("search-intro")} }
        }
    }
}
