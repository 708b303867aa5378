//! Shared UI crate for Bookworm. Components, views and localization live here;
//! platform crates only supply the router.

pub mod core;
pub mod error;
pub mod i18n;
pub mod views;

pub mod components {
    // Main navigation bar (components/main_nav.rs)
    pub mod main_nav;
    pub use main_nav::register_nav;
    pub use main_nav::MainNav;
    pub use main_nav::NavBuilder;

    mod search_heading;
    pub use search_heading::SearchHeading;
}

pub use crate::core::nav::NavDestination;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
