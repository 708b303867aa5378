//! Nav labels and the search heading suffix stay English whatever language the
//! loader picked from the environment, and survive a runtime language switch.
//!
//! Runs in its own process so nothing has touched the i18n loader beforehand.

use dioxus::prelude::*;
use ui::components::{MainNav, SearchHeading};

fn heading(term: &str) -> String {
    dioxus_ssr::render_element(rsx! { SearchHeading { search_term: term.to_string() } })
}

fn nav() -> String {
    dioxus_ssr::render_element(rsx! { MainNav {} })
}

fn assert_fixed_strings(context: &str) {
    let fiction = heading("Fiction");
    assert!(
        fiction.contains("<h2>Fiction Images</h2>"),
        "{context}: unexpected heading {fiction}"
    );
    let empty = heading("");
    assert!(
        empty.contains("<h2> Images</h2>"),
        "{context}: unexpected heading {empty}"
    );

    let html = nav();
    let positions: Vec<usize> = [">Subscriptions</a>", ">Discover</a>", ">Publish</a>"]
        .iter()
        .map(|label| {
            html.find(label)
                .unwrap_or_else(|| panic!("{context}: missing {label} in {html}"))
        })
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "{context}: labels out of order in {html}"
    );
}

#[test]
fn fixed_strings_ignore_environment_and_language_switches() {
    // First render in this process: no prior init or set_language.
    assert_fixed_strings("startup language");

    ui::i18n::set_language("es-ES").unwrap();
    assert_fixed_strings("es-ES");

    ui::i18n::set_language("fr-FR").unwrap();
    assert_fixed_strings("fr-FR");

    ui::i18n::set_language("en-US").unwrap();
    assert_fixed_strings("en-US");
}

#[test]
fn heading_text_needs_no_loader() {
    assert_eq!(ui::core::search::heading_text("Fiction"), "Fiction Images");
    assert_eq!(ui::core::search::heading_text(""), " Images");
}
