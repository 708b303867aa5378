use dioxus::prelude::*;

use super::use_lang_marker;

#[component]
pub fn Publish() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-publish",
            h1 { {crate::t!("page-publish-title")} }
            p { {crate::t!("page-publish-intro")} }
        }
    }
}
