use anyhow::{Result, bail};
use tracing::debug;

use crate::{config::ScrollConfig, nav::NavItem};

/// Vertical extent of a rendered section, covering `[top, top + height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Read-only view of the rendered layout.
///
/// Returns `None` when the anchor is not currently rendered.
pub trait LayoutQuery {
    fn section_geometry(&self, anchor: &str) -> Option<SectionGeometry>;
}

pub trait Viewport {
    fn scroll_offset(&self) -> f64;

    fn width(&self) -> f64;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    pub active_anchor: String,
    pub navbar_visible: bool,
    pub last_scroll_offset: f64,
}

impl ScrollState {
    // before the first scroll event: first section active, bar shown
    pub fn initial(items: &[NavItem]) -> Self {
        ScrollState {
            active_anchor: items
                .first()
                .map(|item| item.anchor.clone())
                .unwrap_or_default(),
            navbar_visible: true,
            last_scroll_offset: 0.0,
        }
    }
}

// scroll-driven navbar state
//
// the tracker owns the ordered anchor list and the current ScrollState.  geometry is queried on
// every event instead of being cached, since responsive reflow moves sections around
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    anchors: Vec<String>,
    config: ScrollConfig,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(items: &[NavItem], config: ScrollConfig) -> Result<Self> {
        if items.is_empty() {
            bail!("scroll tracker needs at least one section");
        }

        Ok(ScrollTracker {
            anchors: items.iter().map(|item| item.anchor.clone()).collect(),
            config,
            state: ScrollState::initial(items),
        })
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn on_scroll<L: LayoutQuery + ?Sized>(
        &mut self,
        current_offset: f64,
        viewport_width: f64,
        layout: &L,
    ) -> &ScrollState {
        let next = self.advance(&self.state, current_offset, viewport_width, layout);

        if next.active_anchor != self.state.active_anchor {
            debug!(from = %self.state.active_anchor, to = %next.active_anchor, "active section changed");
        }

        self.state = next;
        &self.state
    }

    pub fn observe<V, L>(&mut self, viewport: &V, layout: &L) -> &ScrollState
    where
        V: Viewport + ?Sized,
        L: LayoutQuery + ?Sized,
    {
        self.on_scroll(viewport.scroll_offset(), viewport.width(), layout)
    }

    /// Computes the state following `prev` for a scroll event, without mutating anything.
    pub fn advance<L: LayoutQuery + ?Sized>(
        &self,
        prev: &ScrollState,
        current_offset: f64,
        viewport_width: f64,
        layout: &L,
    ) -> ScrollState {
        let navbar_visible =
            self.navbar_visible(current_offset, prev.last_scroll_offset, viewport_width);

        // no match keeps the previous section highlighted rather than flickering to a default
        let active_anchor = self
            .section_at(current_offset + self.config.lookahead, layout)
            .map(str::to_owned)
            .unwrap_or_else(|| prev.active_anchor.clone());

        ScrollState {
            active_anchor,
            navbar_visible,
            last_scroll_offset: current_offset,
        }
    }

    fn navbar_visible(&self, current_offset: f64, last_offset: f64, viewport_width: f64) -> bool {
        if viewport_width >= self.config.mobile_breakpoint {
            return true;
        }

        !(current_offset > last_offset && current_offset > self.config.hide_threshold)
    }

    // first section in declared order wins, sections that are not rendered are skipped
    fn section_at<L: LayoutQuery + ?Sized>(&self, position: f64, layout: &L) -> Option<&str> {
        self.anchors
            .iter()
            .find(|anchor| {
                layout
                    .section_geometry(anchor)
                    .is_some_and(|geometry| geometry.contains(position))
            })
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashMap};

    use super::*;

    const NARROW: f64 = 400.0;
    const WIDE: f64 = 1280.0;

    struct FakeLayout {
        sections: HashMap<&'static str, SectionGeometry>,
        queries: Cell<usize>,
    }

    impl FakeLayout {
        fn new(sections: &[(&'static str, f64, f64)]) -> Self {
            FakeLayout {
                sections: sections
                    .iter()
                    .map(|&(anchor, top, height)| (anchor, SectionGeometry { top, height }))
                    .collect(),
                queries: Cell::new(0),
            }
        }

        fn standard() -> Self {
            FakeLayout::new(&[
                ("#hero", 0.0, 300.0),
                ("#about", 300.0, 400.0),
                ("#skills", 700.0, 300.0),
            ])
        }
    }

    impl LayoutQuery for FakeLayout {
        fn section_geometry(&self, anchor: &str) -> Option<SectionGeometry> {
            self.queries.set(self.queries.get() + 1);
            self.sections.get(anchor).copied()
        }
    }

    struct FakeViewport {
        offset: f64,
        width: f64,
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn width(&self) -> f64 {
            self.width
        }
    }

    fn items() -> Vec<NavItem> {
        vec![
            NavItem::new("Home", "#hero", None),
            NavItem::new("About", "#about", None),
            NavItem::new("Skills", "#skills", None),
        ]
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(&items(), ScrollConfig::default()).unwrap()
    }

    #[test]
    fn initial_state() {
        let tracker = tracker();

        assert_eq!(
            tracker.state(),
            &ScrollState {
                active_anchor: String::from("#hero"),
                navbar_visible: true,
                last_scroll_offset: 0.0,
            }
        );
    }

    #[test]
    fn needs_at_least_one_item() {
        assert!(ScrollTracker::new(&[], ScrollConfig::default()).is_err());
    }

    #[test]
    fn narrow_viewport_hides_on_downward_scroll_past_threshold() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        let visibility: Vec<bool> = [0.0, 50.0, 150.0, 140.0, 200.0, 60.0]
            .into_iter()
            .map(|offset| tracker.on_scroll(offset, NARROW, &layout).navbar_visible)
            .collect();

        assert_eq!(visibility, vec![true, true, false, true, false, true]);
    }

    #[test]
    fn wide_viewport_always_visible() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        for offset in [0.0, 50.0, 150.0, 400.0, 900.0, 120.0, 2000.0] {
            assert!(tracker.on_scroll(offset, WIDE, &layout).navbar_visible);
        }
    }

    #[test]
    fn widening_the_viewport_shows_the_bar_again() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        tracker.on_scroll(50.0, NARROW, &layout);
        assert!(!tracker.on_scroll(300.0, NARROW, &layout).navbar_visible);
        assert!(tracker.on_scroll(400.0, WIDE, &layout).navbar_visible);
    }

    #[test]
    fn last_offset_tracks_every_event() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        tracker.on_scroll(500.0, WIDE, &layout);
        assert_eq!(tracker.state().last_scroll_offset, 500.0);

        // downward relative to the wide-viewport event
        assert!(!tracker.on_scroll(600.0, NARROW, &layout).navbar_visible);
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        tracker.on_scroll(50.0, 768.0, &layout);
        assert!(tracker.on_scroll(300.0, 768.0, &layout).navbar_visible);
        assert!(!tracker.on_scroll(400.0, 767.0, &layout).navbar_visible);
    }

    #[test]
    fn lookahead_selects_upcoming_section() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        assert_eq!(tracker.on_scroll(250.0, WIDE, &layout).active_anchor, "#about");
        assert_eq!(tracker.on_scroll(199.0, WIDE, &layout).active_anchor, "#hero");
        assert_eq!(tracker.on_scroll(600.0, WIDE, &layout).active_anchor, "#skills");
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        tracker.on_scroll(250.0, WIDE, &layout);
        assert_eq!(tracker.on_scroll(-150.0, WIDE, &layout).active_anchor, "#about");
        assert_eq!(tracker.on_scroll(5000.0, WIDE, &layout).active_anchor, "#about");
    }

    #[test]
    fn first_declared_section_wins_on_overlap() {
        let mut tracker = tracker();
        let layout = FakeLayout::new(&[
            ("#hero", 0.0, 300.0),
            ("#about", 200.0, 400.0),
            ("#skills", 200.0, 400.0),
        ]);

        assert_eq!(tracker.on_scroll(150.0, WIDE, &layout).active_anchor, "#hero");
        assert_eq!(tracker.on_scroll(250.0, WIDE, &layout).active_anchor, "#about");
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut tracker = tracker();
        let layout = FakeLayout::new(&[("#hero", 0.0, 300.0), ("#skills", 700.0, 300.0)]);

        assert_eq!(tracker.on_scroll(700.0, WIDE, &layout).active_anchor, "#skills");

        // would have been #about, which is not rendered
        assert_eq!(tracker.on_scroll(350.0, WIDE, &layout).active_anchor, "#skills");
    }

    #[test]
    fn geometry_is_queried_on_every_event() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        tracker.on_scroll(600.0, WIDE, &layout);
        let after_first = layout.queries.get();
        tracker.on_scroll(600.0, WIDE, &layout);

        assert_eq!(after_first, 3);
        assert_eq!(layout.queries.get(), 6);
    }

    #[test]
    fn scan_stops_at_first_match() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        tracker.on_scroll(0.0, WIDE, &layout);
        assert_eq!(layout.queries.get(), 1);
    }

    #[test]
    fn advance_is_idempotent() {
        let tracker = tracker();
        let layout = FakeLayout::standard();
        let prev = ScrollState {
            active_anchor: String::from("#hero"),
            navbar_visible: true,
            last_scroll_offset: 120.0,
        };

        let first = tracker.advance(&prev, 250.0, NARROW, &layout);
        let second = tracker.advance(&prev, 250.0, NARROW, &layout);

        assert_eq!(first, second);
        assert_eq!(first.active_anchor, "#about");
        assert!(!first.navbar_visible);
        assert_eq!(first.last_scroll_offset, 250.0);
    }

    #[test]
    fn observe_reads_the_viewport() {
        let mut tracker = tracker();
        let layout = FakeLayout::standard();

        let state = tracker.observe(&FakeViewport { offset: 650.0, width: NARROW }, &layout);

        assert_eq!(state.active_anchor, "#skills");
        assert!(!state.navbar_visible);
        assert_eq!(state.last_scroll_offset, 650.0);
    }

    #[test]
    fn custom_thresholds() {
        let config = ScrollConfig {
            mobile_breakpoint: 1024.0,
            hide_threshold: 10.0,
            lookahead: 0.0,
        };
        let mut tracker = ScrollTracker::new(&items(), config).unwrap();
        let layout = FakeLayout::standard();

        let state = tracker.on_scroll(20.0, 900.0, &layout);
        assert!(!state.navbar_visible);

        // without lookahead, 250 is still inside the hero section
        assert_eq!(tracker.on_scroll(250.0, WIDE, &layout).active_anchor, "#hero");
    }
}
