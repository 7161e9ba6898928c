//! Page sections and their stable identifiers
//!
//! The site is a single page divided into four fixed regions. The set is
//! closed at build time; navigation, anchor lookup, and the active-link
//! highlight are all keyed by [`Section`].

use serde::{Deserialize, Serialize};

/// One of the four fixed regions of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Landing hero with the product pitch
    Home,
    /// "Our Vision" statement
    Vision,
    /// "About Us" company description
    About,
    /// Contact details and the inquiry form
    Contact,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Section {
    /// All sections in page order. The first entry is the initial
    /// active section.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Vision,
        Section::About,
        Section::Contact,
    ];

    /// Stable DOM id for this section's region
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Vision => "vision",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Human-readable label shown in navigation controls
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Vision => "Vision",
            Section::About => "About",
            Section::Contact => "Contact Us",
        }
    }

    /// Resolve a DOM id back to its section
    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn from_id_resolves_every_section() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn from_id_rejects_unknown() {
        assert_eq!(Section::from_id("pricing"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn first_section_is_home() {
        assert_eq!(Section::ALL[0], Section::Home);
    }
}
