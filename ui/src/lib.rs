//! # orion-ui
//!
//! Navigation core and content model for the Orion Labs marketing site.
//!
//! The site itself is rendered by the `orion-landing` crate; everything
//! with observable behavior lives here so it can be exercised on the host
//! without a browser:
//!
//! - [`Section`] - the closed set of page regions
//! - [`SectionNavigator`] - active-section / menu state and the
//!   `navigate_to` / `toggle_menu` operations
//! - [`ScrollAnchor`] / [`AnchorLookup`] - the seam between navigation
//!   state and the view layer's scroll targets
//! - [`content::SiteContent`] - the marketing copy as data
//!
//! ## Quick Start
//!
//! ```rust
//! use orion_ui::{AnchorLookup, ScrollAnchor, Section, SectionNavigator};
//!
//! struct NoopAnchor;
//!
//! impl ScrollAnchor for NoopAnchor {
//!     fn bring_into_view(&self) {}
//! }
//!
//! struct Anchors;
//!
//! impl AnchorLookup for Anchors {
//!     type Anchor = NoopAnchor;
//!
//!     fn anchor(&self, _section: Section) -> Option<NoopAnchor> {
//!         Some(NoopAnchor)
//!     }
//! }
//!
//! let mut nav = SectionNavigator::new();
//! nav.navigate_to(Section::Contact, &Anchors).unwrap();
//! assert!(nav.is_current(Section::Contact));
//! ```
//!
//! The view layer decides what an anchor is. In the landing crate it is a
//! mounted DOM element behind a `NodeRef`; in tests it is a recorder.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod content;
mod navigator;
mod section;

pub use navigator::{AnchorLookup, ScrollAnchor, SectionNavigator, StaleAnchor};
pub use section::Section;
