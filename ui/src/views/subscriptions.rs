use dioxus::prelude::*;

use super::use_lang_marker;

#[component]
pub fn Subscriptions() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-subscriptions",
            h1 { {crate::t!("page-subscriptions-title")} }
            p { {crate::t!("page-subscriptions-intro")} }
        }
    }
}
