use dioxus::prelude::*;

use super::use_lang_marker;

#[component]
pub fn Discover() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-discover",
            h1 { {crate::t!("page-discover-title")} }
            p { {crate::t!("page-discover-intro")} }
        }
    }
}
