//! The fixed set of primary navigation destinations.

/// One entry of the main navigation.
///
/// The list is compiled in: three destinations, always rendered in the order of
/// [`NavDestination::ALL`] with the same labels whatever the UI language.
/// Platforms map each variant onto their own `Route`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDestination {
    Subscriptions,
    Discover,
    Publish,
}

impl NavDestination {
    /// Display order.
    pub const ALL: [NavDestination; 3] = [Self::Subscriptions, Self::Discover, Self::Publish];

    /// Absolute route path this entry links to.
    pub fn path(self) -> &'static str {
        match self {
            Self::Subscriptions => "/subscriptions",
            Self::Discover => "/discover",
            Self::Publish => "/publish",
        }
    }

    /// Path without the leading slash; stable key for keyed lists.
    pub fn slug(self) -> &'static str {
        &self.path()[1..]
    }

    /// Link text. Not localized.
    pub fn label(self) -> &'static str {
        match self {
            Self::Subscriptions => "Subscriptions",
            Self::Discover => "Discover",
            Self::Publish => "Publish",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destinations_keep_fixed_order_and_paths() {
        let paths: Vec<_> = NavDestination::ALL.iter().map(|d| d.path()).collect();
        assert_eq!(paths, ["/subscriptions", "/discover", "/publish"]);
    }

    #[test]
    fn slugs_are_paths_without_slash() {
        for dest in NavDestination::ALL {
            assert_eq!(format!("/{}", dest.slug()), dest.path());
        }
    }

    #[test]
    fn labels_are_fixed() {
        let labels: Vec<_> = NavDestination::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["Subscriptions", "Discover", "Publish"]);
    }
}
