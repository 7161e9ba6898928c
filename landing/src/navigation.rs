//! View-layer wiring for section navigation
//!
//! Anchors are `NodeRef`s owned here and attached by the section
//! components; `NodeRef::get` is `None` while a section is unmounted, so
//! the navigator's stale-anchor precondition falls out of the handle type.

use leptos::html;
use leptos::prelude::*;
use orion_ui::{AnchorLookup, ScrollAnchor, Section, SectionNavigator};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Mounted DOM region used as a scroll target
pub struct DomAnchor(web_sys::HtmlElement);

impl ScrollAnchor for DomAnchor {
    fn bring_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.0
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// One `NodeRef` per section, attached by the section components
#[derive(Clone, Copy)]
pub struct SectionRefs {
    home: NodeRef<html::Section>,
    vision: NodeRef<html::Section>,
    about: NodeRef<html::Section>,
    contact: NodeRef<html::Section>,
}

impl SectionRefs {
    pub fn new() -> Self {
        Self {
            home: NodeRef::new(),
            vision: NodeRef::new(),
            about: NodeRef::new(),
            contact: NodeRef::new(),
        }
    }

    pub fn node_ref(&self, section: Section) -> NodeRef<html::Section> {
        match section {
            Section::Home => self.home,
            Section::Vision => self.vision,
            Section::About => self.about,
            Section::Contact => self.contact,
        }
    }
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorLookup for SectionRefs {
    type Anchor = DomAnchor;

    fn anchor(&self, section: Section) -> Option<DomAnchor> {
        self.node_ref(section).get_untracked().map(DomAnchor)
    }
}

/// Shared navigation handle provided to every component via context
#[derive(Clone, Copy)]
pub struct NavContext {
    nav: RwSignal<SectionNavigator>,
    refs: SectionRefs,
}

impl NavContext {
    pub fn new(refs: SectionRefs) -> Self {
        Self {
            nav: RwSignal::new(SectionNavigator::new()),
            refs,
        }
    }

    /// Smooth-scroll to `section` and mark it active. A section that is
    /// not mounted yet is a silent no-op.
    pub fn navigate_to(&self, section: Section) {
        let refs = self.refs;
        self.nav.update(|nav| {
            let _ = nav.navigate_to(section, &refs);
        });
    }

    pub fn toggle_menu(&self) {
        self.nav.update(|nav| nav.toggle_menu());
    }

    /// Reactive: whether `section` is the active one
    pub fn is_current(&self, section: Section) -> bool {
        self.nav.with(|nav| nav.is_current(section))
    }

    /// Reactive: whether the mobile drawer is open
    pub fn menu_open(&self) -> bool {
        self.nav.with(|nav| nav.menu_open())
    }
}
