//! Site content model
//!
//! The marketing copy rendered by the landing crate, kept as data so the
//! words live in one place and could be swapped from JSON without touching
//! the components.
//!
//! # Example
//!
//! ```rust
//! use orion_ui::content::SiteContent;
//!
//! let content = SiteContent::default();
//! assert_eq!(content.company, "Orion Labs");
//! ```

use serde::{Deserialize, Serialize};

/// A single value proposition shown on the home section
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueProp {
    /// One-sentence pitch
    pub text: String,
}

/// How to reach the company
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Inquiry address, rendered as a `mailto:` link
    pub email: String,
    /// Display phone number
    pub phone: String,
    /// Postal address, single line
    pub address: String,
}

/// All copy rendered by the site
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Company name used in the header wordmark and footer
    pub company: String,
    /// Intro line on the home section
    pub tagline: String,
    /// Bulleted product capabilities on the home section
    pub value_props: Vec<ValueProp>,
    /// "Our Vision" paragraph
    pub vision: String,
    /// "About Us" paragraph
    pub about: String,
    /// Contact section details
    pub contact: ContactDetails,
    /// Year shown in the footer copyright line
    pub copyright_year: u16,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            company: "Orion Labs".into(),
            tagline: "We are developing a next-generation logistics system that:".into(),
            value_props: vec![
                ValueProp {
                    text: "Provides predictive capabilities for logistics planning.".into(),
                },
                ValueProp {
                    text: "Enables the creation and visualization of ad hoc logistics networks."
                        .into(),
                },
                ValueProp {
                    text: "Automatically predicts and pre-fills required paperwork for \
                           organizations and partners."
                        .into(),
                },
            ],
            vision: "We aim to be the leader in predictive logistics, using cutting-edge \
                     software to enhance visibility, optimize resource allocation, and \
                     transform supply chain operations."
                .into(),
            about: "At Orion Labs, we are redefining the logistics landscape with predictive \
                    technologies that anticipate paperwork requirements and streamline the \
                    setup of ad hoc logistics networks. Our solutions empower organizations \
                    to move faster, smarter, and more efficiently."
                .into(),
            contact: ContactDetails {
                email: "contact@orionlabs.com".into(),
                phone: "(123) 456-7890".into(),
                address: "1234 Orion Labs Street, Austin, TX 78701".into(),
            },
            copyright_year: 2025,
        }
    }
}
