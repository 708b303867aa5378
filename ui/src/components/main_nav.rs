use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::nav::NavDestination;
use crate::i18n;
use crate::t;

/// Platform hook for router-aware links.
///
/// `ui` does not know any platform's `Route` enum, so a platform registers a
/// builder that turns a [`NavDestination`] into a router `Link` whose only child
/// is the label it receives. Active-link highlighting is the router's
/// job (`Link { active_class: .. }`); nothing here inspects the current location.
///
/// ```ignore
/// fn nav_link(dest: NavDestination, label: &str) -> Element {
///     rsx!(Link { class: "navbar__link", active_class: "navbar__link--active", to: route_for(dest), "{label}" })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder `MainNav` renders plain anchors.
pub struct NavBuilder {
    pub link: fn(dest: NavDestination, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Register the platform link builder. The first registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_ok() {
        tracing::debug!("registered platform nav builder");
    } else {
        tracing::trace!("nav builder already registered; ignoring");
    }
}

fn plain_link(dest: NavDestination, label: &str) -> Element {
    rsx!(a { class: "navbar__link", href: dest.path(), "{label}" })
}

/// Main navigation bar: brand, the three fixed destinations and a locale switcher.
#[component]
pub fn MainNav() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    tracing::trace!(lang = %current_lang(), "MainNav render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, "language switch rejected"),
        }
    };

    let link = NAV_BUILDER.get().map(|b| b.link).unwrap_or(plain_link);
    let tagline = t!("tagline");

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker re-renders the navbar when the global language changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Bookworm" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "main-nav navbar__links", aria_label: t!("nav-label"),
                    ul {
                        for dest in NavDestination::ALL {
                            li { key: "{dest.slug()}", {link(dest, dest.label())} }
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
