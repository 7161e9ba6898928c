//! Section navigation state
//!
//! [`SectionNavigator`] holds the two pieces of UI state the site has
//! (which section is active, whether the mobile menu is open) and the
//! operations that change them. Scrolling itself is delegated to anchor
//! handles owned by the view layer; the navigator looks one up per call
//! and never manages its lifecycle.

use crate::Section;
use thiserror::Error;

/// Scroll target handle supplied by the view layer
pub trait ScrollAnchor {
    /// Request a smooth scroll that brings the anchored region into view.
    ///
    /// A later request supersedes an in-flight one; the animation is the
    /// platform's concern, not tracked here.
    fn bring_into_view(&self);
}

/// Keyed lookup from [`Section`] to its currently mounted anchor
///
/// The view layer owns the anchors and re-registers them on every mount
/// cycle. `anchor` returns `None` exactly while the section is unmounted.
pub trait AnchorLookup {
    /// Handle type produced by the lookup
    type Anchor: ScrollAnchor;

    /// The anchor for `section`, if it is currently mounted
    fn anchor(&self, section: Section) -> Option<Self::Anchor>;
}

/// The requested section has no mounted anchor
///
/// The only error the navigator produces. Callers recover by doing
/// nothing: there is no target to scroll to and no state was touched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no mounted anchor for section '{0}'")]
pub struct StaleAnchor(
    /// Section whose anchor was missing
    pub Section,
);

/// Active-section and menu state plus the operations the nav bar exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionNavigator {
    active_section: Section,
    menu_open: bool,
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionNavigator {
    /// Initial state: first section active, menu closed
    pub fn new() -> Self {
        Self {
            active_section: Section::ALL[0],
            menu_open: false,
        }
    }

    /// Section currently highlighted in navigation
    pub fn active_section(&self) -> Section {
        self.active_section
    }

    /// Whether the mobile menu drawer is open
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Derived display rule: a nav control for `section` is marked
    /// "current" iff this returns true. Recomputed per render, never
    /// stored alongside the state.
    pub fn is_current(&self, section: Section) -> bool {
        self.active_section == section
    }

    /// Scroll to `section` and make it active, closing the menu
    ///
    /// Looks up the section's anchor in `anchors`. If the section is not
    /// mounted, returns [`StaleAnchor`] and leaves all state unchanged.
    /// Repeat calls with the already-active section re-trigger the scroll
    /// but are value-idempotent.
    pub fn navigate_to<L: AnchorLookup>(
        &mut self,
        section: Section,
        anchors: &L,
    ) -> Result<(), StaleAnchor> {
        let anchor = anchors.anchor(section).ok_or(StaleAnchor(section))?;
        anchor.bring_into_view();
        self.active_section = section;
        self.menu_open = false;
        Ok(())
    }

    /// Flip the mobile menu open/closed
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Anchor that records scroll requests instead of touching a DOM
    struct TestAnchor {
        section: Section,
        log: Rc<RefCell<Vec<Section>>>,
    }

    impl ScrollAnchor for TestAnchor {
        fn bring_into_view(&self) {
            self.log.borrow_mut().push(self.section);
        }
    }

    struct TestAnchors {
        mounted: Vec<Section>,
        log: Rc<RefCell<Vec<Section>>>,
    }

    impl TestAnchors {
        fn all_mounted() -> Self {
            Self {
                mounted: Section::ALL.to_vec(),
                log: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn without(section: Section) -> Self {
            let mut anchors = Self::all_mounted();
            anchors.mounted.retain(|s| *s != section);
            anchors
        }

        fn scrolls(&self) -> Vec<Section> {
            self.log.borrow().clone()
        }
    }

    impl AnchorLookup for TestAnchors {
        type Anchor = TestAnchor;

        fn anchor(&self, section: Section) -> Option<TestAnchor> {
            self.mounted.contains(&section).then(|| TestAnchor {
                section,
                log: Rc::clone(&self.log),
            })
        }
    }

    #[test]
    fn navigate_sets_active_and_closes_menu() {
        let anchors = TestAnchors::all_mounted();

        for section in Section::ALL {
            let mut nav = SectionNavigator::new();
            nav.toggle_menu();

            nav.navigate_to(section, &anchors).unwrap();
            assert_eq!(nav.active_section(), section);
            assert_eq!(nav.menu_open(), false);
        }
    }

    #[test]
    fn navigate_is_idempotent_in_value() {
        let anchors = TestAnchors::all_mounted();
        let mut nav = SectionNavigator::new();

        nav.navigate_to(Section::About, &anchors).unwrap();
        let after_first = nav;
        nav.navigate_to(Section::About, &anchors).unwrap();

        assert_eq!(nav, after_first);
        // The scroll is still re-triggered each time.
        assert_eq!(anchors.scrolls(), vec![Section::About, Section::About]);
    }

    #[test]
    fn stale_anchor_is_a_no_op() {
        let anchors = TestAnchors::without(Section::Contact);
        let mut nav = SectionNavigator::new();
        nav.toggle_menu();
        let before = nav;

        let result = nav.navigate_to(Section::Contact, &anchors);

        assert_eq!(result, Err(StaleAnchor(Section::Contact)));
        assert_eq!(nav, before);
        assert_eq!(anchors.scrolls(), Vec::<Section>::new());
    }

    #[test]
    fn toggle_menu_is_an_involution() {
        let mut nav = SectionNavigator::new();

        for _ in 0..2 {
            let before = nav.menu_open();
            nav.toggle_menu();
            nav.toggle_menu();
            assert_eq!(nav.menu_open(), before);
            nav.toggle_menu();
        }
    }

    #[test]
    fn exactly_one_section_is_current() {
        let anchors = TestAnchors::all_mounted();
        let mut nav = SectionNavigator::new();

        for section in Section::ALL {
            nav.navigate_to(section, &anchors).unwrap();
            let current: Vec<_> = Section::ALL
                .iter()
                .copied()
                .filter(|s| nav.is_current(*s))
                .collect();
            assert_eq!(current, vec![section]);
        }
    }

    #[test]
    fn open_menu_then_navigate() {
        let anchors = TestAnchors::all_mounted();
        let mut nav = SectionNavigator::new();
        assert_eq!(nav.active_section(), Section::Home);
        assert_eq!(nav.menu_open(), false);

        nav.toggle_menu();
        assert_eq!(nav.active_section(), Section::Home);
        assert_eq!(nav.menu_open(), true);

        nav.navigate_to(Section::Contact, &anchors).unwrap();
        assert_eq!(nav.active_section(), Section::Contact);
        assert_eq!(nav.menu_open(), false);
    }

    #[test]
    fn later_navigation_supersedes_earlier() {
        let anchors = TestAnchors::all_mounted();
        let mut nav = SectionNavigator::new();

        nav.navigate_to(Section::Vision, &anchors).unwrap();
        nav.navigate_to(Section::Contact, &anchors).unwrap();

        // Both scrolls were requested; the last one wins the state.
        assert_eq!(anchors.scrolls(), vec![Section::Vision, Section::Contact]);
        assert_eq!(nav.active_section(), Section::Contact);
    }
}
