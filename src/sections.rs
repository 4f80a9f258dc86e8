//! Section bookkeeping for the single-page layout: which section the reader is
//! looking at, and how to get to another one.
//!
//! Everything here talks to the page through [`Viewport`], so the logic runs the
//! same against the live DOM and against the in-memory fake used in tests.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Page sections in document order.
pub const SECTIONS: [Section; 4] = [
    Section {
        id: "home",
        label: "Home",
    },
    Section {
        id: "about",
        label: "About",
    },
    Section {
        id: "projects",
        label: "Projects",
    },
    Section {
        id: "contact",
        label: "Contact",
    },
];

pub fn section_by_id(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Vertical span of an anchor in document coordinates, half-open at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// The page primitives the section logic depends on.
pub trait Viewport {
    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;
    /// Geometry of the anchor element with `id`, if it is in the document.
    fn extent(&self, id: &str) -> Option<Extent>;
    /// Request a smooth scroll to the anchor with `id`. Returns false if there
    /// is no such anchor. The scroll itself is not awaited.
    fn scroll_into_view(&self, id: &str) -> bool;
    /// Request a smooth scroll back to the top of the page.
    fn scroll_to_top(&self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Offset past which the navigation bar switches to its scrolled look.
    pub threshold: f64,
    /// Distance below the top of the viewport used to pick the active section.
    pub probe_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            probe_offset: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub active_section: &'static str,
    pub is_past_threshold: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            active_section: SECTIONS[0].id,
            is_past_threshold: false,
        }
    }
}

/// Picks the first section whose extent contains `probe`, falling back to
/// `previous` when none does. Sections without an extent are skipped.
pub fn active_section<F>(
    sections: &'static [Section],
    extent_of: F,
    probe: f64,
    previous: &'static str,
) -> &'static str
where
    F: Fn(&str) -> Option<Extent>,
{
    sections
        .iter()
        .find(|s| extent_of(s.id).is_some_and(|e| e.contains(probe)))
        .map(|s| s.id)
        .unwrap_or(previous)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    config: ScrollConfig,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Recompute the scroll state from the current viewport. Called on every
    /// scroll event and once at mount.
    pub fn on_scroll<V: Viewport>(&mut self, viewport: &V) -> ScrollState {
        let y = viewport.scroll_y();
        let active = active_section(
            &SECTIONS,
            |id| viewport.extent(id),
            y + self.config.probe_offset,
            self.state.active_section,
        );
        if active != self.state.active_section {
            log::debug!("active section {} -> {}", self.state.active_section, active);
        }
        self.state = ScrollState {
            active_section: active,
            is_past_threshold: y > self.config.threshold,
        };
        self.state
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SectionNavigator<V> {
    viewport: V,
}

impl<V: Viewport> SectionNavigator<V> {
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    /// Smooth-scroll to `section_id`. A missing anchor is a silent no-op.
    pub fn go_to(&self, section_id: &str) -> bool {
        let issued = self.viewport.scroll_into_view(section_id);
        if !issued {
            log::debug!("no anchor for section {section_id}");
        }
        issued
    }

    /// Like [`Self::go_to`], then runs `after` once the scroll has been
    /// requested. Overlays use this to close themselves.
    pub fn go_to_then<F: FnOnce()>(&self, section_id: &str, after: F) -> bool {
        let issued = self.go_to(section_id);
        if issued {
            after();
        }
        issued
    }

    pub fn go_to_top(&self) {
        self.viewport.scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeViewport {
        scroll_y: Cell<f64>,
        anchors: HashMap<&'static str, Extent>,
        scroll_requests: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        /// The four sections stacked with the given heights, starting at 0.
        fn stacked(heights: [f64; 4]) -> Self {
            let mut anchors = HashMap::new();
            let mut top = 0.0;
            for (section, height) in SECTIONS.iter().zip(heights) {
                anchors.insert(section.id, Extent::new(top, height));
                top += height;
            }
            Self {
                anchors,
                ..Default::default()
            }
        }
    }

    impl Viewport for &FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn extent(&self, id: &str) -> Option<Extent> {
            self.anchors.get(id).copied()
        }

        fn scroll_into_view(&self, id: &str) -> bool {
            if !self.anchors.contains_key(id) {
                return false;
            }
            self.scroll_requests.borrow_mut().push(id.to_string());
            true
        }

        fn scroll_to_top(&self) {
            self.scroll_requests.borrow_mut().push("top".to_string());
        }
    }

    #[test]
    fn test_threshold_flag() {
        let vp = FakeViewport::stacked([800.0, 900.0, 1200.0, 700.0]);
        let mut tracker = ScrollTracker::default();
        for (y, past) in [(0.0, false), (50.0, false), (50.5, true), (3000.0, true)] {
            vp.scroll_y.set(y);
            assert_eq!(tracker.on_scroll(&&vp).is_past_threshold, past, "y = {y}");
        }
    }

    #[test]
    fn test_active_section_uses_probe() {
        let vp = FakeViewport::stacked([800.0, 900.0, 1200.0, 700.0]);
        let mut tracker = ScrollTracker::default();

        vp.scroll_y.set(0.0);
        assert_eq!(tracker.on_scroll(&&vp).active_section, "home");

        // probe = 800 lands exactly on the top of about
        vp.scroll_y.set(600.0);
        assert_eq!(tracker.on_scroll(&&vp).active_section, "about");

        vp.scroll_y.set(599.0);
        assert_eq!(tracker.on_scroll(&&vp).active_section, "home");

        vp.scroll_y.set(1500.0);
        assert_eq!(tracker.on_scroll(&&vp).active_section, "projects");

        vp.scroll_y.set(2800.0);
        assert_eq!(tracker.on_scroll(&&vp).active_section, "contact");
    }

    #[test]
    fn test_active_section_retained_when_nothing_matches() {
        let vp = FakeViewport::stacked([800.0, 900.0, 1200.0, 700.0]);
        let mut tracker = ScrollTracker::default();

        vp.scroll_y.set(2800.0);
        assert_eq!(tracker.on_scroll(&&vp).active_section, "contact");

        // probe beyond the last section: keep what we had
        vp.scroll_y.set(10_000.0);
        let state = tracker.on_scroll(&&vp);
        assert_eq!(state.active_section, "contact");
        assert!(state.is_past_threshold);
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let mut vp = FakeViewport::stacked([800.0, 900.0, 1200.0, 700.0]);
        vp.anchors.remove("about");
        let mut tracker = ScrollTracker::default();

        vp.scroll_y.set(1500.0);
        assert_eq!(tracker.on_scroll(&&vp).active_section, "projects");

        // inside where about would have been: nothing matches, stay on projects
        vp.scroll_y.set(700.0);
        assert_eq!(tracker.on_scroll(&&vp).active_section, "projects");
    }

    #[test]
    fn test_no_anchors_keeps_default() {
        let vp = FakeViewport::default();
        let mut tracker = ScrollTracker::default();
        vp.scroll_y.set(400.0);
        let state = tracker.on_scroll(&&vp);
        assert_eq!(state.active_section, "home");
        assert!(state.is_past_threshold);
    }

    #[test]
    fn test_active_section_pure() {
        let extents = |id: &str| match id {
            "home" => Some(Extent::new(0.0, 100.0)),
            "about" => Some(Extent::new(100.0, 100.0)),
            _ => None,
        };
        assert_eq!(active_section(&SECTIONS, extents, 99.9, "contact"), "home");
        assert_eq!(active_section(&SECTIONS, extents, 100.0, "contact"), "about");
        assert_eq!(active_section(&SECTIONS, extents, 200.0, "contact"), "contact");
        assert_eq!(active_section(&SECTIONS, extents, -1.0, "about"), "about");
    }

    #[test]
    fn test_go_to_missing_anchor_is_noop() {
        let mut vp = FakeViewport::stacked([800.0, 900.0, 1200.0, 700.0]);
        vp.anchors.remove("projects");
        let mut tracker = ScrollTracker::default();
        let before = tracker.on_scroll(&&vp);

        let nav = SectionNavigator::new(&vp);
        assert!(!nav.go_to("projects"));
        assert!(vp.scroll_requests.borrow().is_empty());
        assert_eq!(tracker.state(), before);
    }

    #[test]
    fn test_go_to_requests_scroll() {
        let vp = FakeViewport::stacked([800.0, 900.0, 1200.0, 700.0]);
        let nav = SectionNavigator::new(&vp);
        assert!(nav.go_to("contact"));
        nav.go_to_top();
        assert_eq!(*vp.scroll_requests.borrow(), vec!["contact", "top"]);
    }

    #[test]
    fn test_go_to_then_runs_after_scroll_request() {
        let vp = FakeViewport::stacked([800.0, 900.0, 1200.0, 700.0]);
        let nav = SectionNavigator::new(&vp);
        let closed_after = Cell::new(None);
        nav.go_to_then("about", || {
            closed_after.set(Some(vp.scroll_requests.borrow().len()));
        });
        assert_eq!(closed_after.get(), Some(1));

        let closed = Cell::new(false);
        assert!(!nav.go_to_then("nowhere", || closed.set(true)));
        assert!(!closed.get());
    }

    #[test]
    fn test_section_lookup() {
        assert_eq!(section_by_id("projects").map(|s| s.label), Some("Projects"));
        assert!(section_by_id("blog").is_none());
    }
}
