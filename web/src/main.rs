use dioxus::prelude::*;

use ui::components::main_nav::{register_nav, NavBuilder};
use ui::components::MainNav;
use ui::views::{Discover, NotFound, Publish, SearchResults, Subscriptions};
use ui::NavDestination;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Discover {})]
    #[layout(WebNav)]
        #[route("/subscriptions")]
        Subscriptions {},
        #[route("/discover")]
        Discover {},
        #[route("/publish")]
        Publish {},
        #[route("/search/:term")]
        SearchResults { term: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

// Shared theme (ui/assets/theme/main.css), inlined so the bundle has no extra asset.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Router target for each fixed navigation entry.
fn route_for(dest: NavDestination) -> Route {
    match dest {
        NavDestination::Subscriptions => Route::Subscriptions {},
        NavDestination::Discover => Route::Discover {},
        NavDestination::Publish => Route::Publish {},
    }
}

fn nav_link(dest: NavDestination, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: route_for(dest),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    // Global language code; MainNav updates it and views subscribe to it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_hook(|| tracing::info!(lang = %lang_code.peek().as_str(), "bookworm web app mounted"));

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount of the routed subtree on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared `MainNav` above the routed page.
#[component]
fn WebNav() -> Element {
    rsx! {
        MainNav {}
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn nav_routes_render_as_destination_paths() {
        for dest in NavDestination::ALL {
            assert_eq!(route_for(dest).to_string(), dest.path());
        }
    }

    #[test]
    fn search_route_carries_term() {
        let route = Route::from_str("/search/Fiction").ok();
        assert_eq!(
            route,
            Some(Route::SearchResults {
                term: "Fiction".to_string()
            })
        );
        assert_eq!(
            Route::SearchResults {
                term: "Poetry".to_string()
            }
            .to_string(),
            "/search/Poetry"
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = Route::from_str("/no/such/page").ok();
        assert!(matches!(route, Some(Route::NotFound { .. })));
    }
}
