//! Scroll-reactive navigation state
//!
//! Pure state machine behind the landing page navbar. It knows nothing about
//! the DOM: section geometry and viewport scrolling are supplied through the
//! [`SectionGeometryProvider`] and [`ViewportScroller`] capabilities, so the
//! whole algorithm runs against synthetic geometry in tests.
//!
//! # Overview
//!
//! - **scrolled**: `offset > scroll_threshold` (strict)
//! - **active section**: first registry entry whose box straddles the
//!   reference line; kept as-is when nothing straddles it
//! - **menu**: mobile overlay flag, closed after every completed navigation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default scroll offset (px) after which the navbar switches to its scrolled style
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Default distance (px) of the active-section reference line from the viewport top
pub const DEFAULT_REFERENCE_LINE: f64 = 100.0;

/// Sections eligible for link highlighting, in page order
pub const DEFAULT_SECTIONS: [&str; 4] = ["features", "how-it-works", "pricing", "faq"];

/// Navigation errors
///
/// None of these ever reach the user; navigation failures only affect
/// cosmetic highlighting and are dropped after being logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("section '{0}' is not registered")]
    UnknownSection(String),

    #[error("section '{0}' is not mounted")]
    NotMounted(String),

    #[error("section '{0}' is registered more than once")]
    DuplicateSection(String),
}

/// Tunable pixel constants for the navbar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub scroll_threshold: f64,
    pub reference_line: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            reference_line: DEFAULT_REFERENCE_LINE,
        }
    }
}

/// Viewport-relative vertical extent of a section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the box crosses the horizontal line `line` px below the viewport top
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Supplies bounding boxes of mounted sections
pub trait SectionGeometryProvider {
    fn bounding_box_of(&self, id: &str) -> Result<SectionBox, NavError>;
}

/// Reads and drives the viewport scroll position
pub trait ViewportScroller {
    /// Current vertical scroll offset in px
    fn scroll_offset(&self) -> f64;

    /// Animate the viewport to the absolute vertical offset `top`
    fn smooth_scroll_to(&self, top: f64);
}

/// Ordered, duplicate-free list of section identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRegistry {
    ids: Vec<String>,
}

impl SectionRegistry {
    /// Build a registry, rejecting duplicate identifiers
    pub fn new<I, S>(ids: I) -> Result<Self, NavError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if collected.contains(&id) {
                return Err(NavError::DuplicateSection(id));
            }
            collected.push(id);
        }
        Ok(Self { ids: collected })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|registered| registered == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// First registered section straddling `line`, skipping unmounted ones
    pub fn section_at(&self, line: f64, geometry: &impl SectionGeometryProvider) -> Option<&str> {
        self.iter().find(|id| {
            geometry
                .bounding_box_of(id)
                .map(|rect| rect.straddles(line))
                .unwrap_or(false)
        })
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self {
            ids: DEFAULT_SECTIONS.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Derived navbar appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled: bool,
    pub active_section: Option<String>,
}

/// Mobile navigation overlay flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// All navigation state owned by the navbar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    config: NavConfig,
    registry: SectionRegistry,
    scroll: ScrollState,
    menu: MenuState,
}

impl NavigationState {
    pub fn new(config: NavConfig, registry: SectionRegistry) -> Self {
        Self {
            config,
            registry,
            scroll: ScrollState::default(),
            menu: MenuState::default(),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.scrolled
    }

    pub fn active_section(&self) -> Option<&str> {
        self.scroll.active_section.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.open
    }

    /// Recompute the scroll state for the viewport offset `offset`.
    ///
    /// Returns `true` if anything changed.
    pub fn on_scroll(&mut self, offset: f64, geometry: &impl SectionGeometryProvider) -> bool {
        let scrolled = offset > self.config.scroll_threshold;
        let active = self
            .registry
            .section_at(self.config.reference_line, geometry)
            .map(str::to_owned);

        let mut changed = false;
        if self.scroll.scrolled != scrolled {
            self.scroll.scrolled = scrolled;
            changed = true;
        }
        if let Some(id) = active {
            if self.scroll.active_section.as_deref() != Some(id.as_str()) {
                self.scroll.active_section = Some(id);
                changed = true;
            }
        }
        changed
    }

    /// Smooth-scroll to section `id` and close the mobile menu.
    ///
    /// Unknown or unmounted sections leave the state untouched.
    pub fn scroll_to_section(
        &mut self,
        id: &str,
        geometry: &impl SectionGeometryProvider,
        scroller: &impl ViewportScroller,
    ) {
        match self.scroll_target(id, geometry, scroller) {
            Ok(top) => {
                scroller.smooth_scroll_to(top);
                self.menu.close();
            }
            Err(err) => tracing::debug!("navigation skipped: {}", err),
        }
    }

    fn scroll_target(
        &self,
        id: &str,
        geometry: &impl SectionGeometryProvider,
        scroller: &impl ViewportScroller,
    ) -> Result<f64, NavError> {
        if !self.registry.contains(id) {
            return Err(NavError::UnknownSection(id.to_string()));
        }
        let rect = geometry.bounding_box_of(id)?;
        Ok(scroller.scroll_offset() + rect.top)
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }
}

/// Anchor id for a navigation label: lower-cased, whitespace replaced by `-`
pub fn section_anchor(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Synthetic geometry keyed by section id
    #[derive(Default)]
    struct FakeGeometry {
        boxes: HashMap<&'static str, SectionBox>,
    }

    impl FakeGeometry {
        fn with(mut self, id: &'static str, top: f64, bottom: f64) -> Self {
            self.boxes.insert(id, SectionBox::new(top, bottom));
            self
        }
    }

    impl SectionGeometryProvider for FakeGeometry {
        fn bounding_box_of(&self, id: &str) -> Result<SectionBox, NavError> {
            self.boxes
                .get(id)
                .copied()
                .ok_or_else(|| NavError::NotMounted(id.to_string()))
        }
    }

    struct FakeScroller {
        offset: f64,
        calls: RefCell<Vec<f64>>,
    }

    impl FakeScroller {
        fn at(offset: f64) -> Self {
            Self {
                offset,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ViewportScroller for FakeScroller {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.calls.borrow_mut().push(top);
        }
    }

    fn abc_state() -> NavigationState {
        let registry = SectionRegistry::new(["a", "b", "c"]).unwrap();
        NavigationState::new(NavConfig::default(), registry)
    }

    // ========================================================================
    // Scrolled flag
    // ========================================================================

    #[test]
    fn test_scrolled_is_strictly_above_threshold() {
        let mut state = NavigationState::default();
        let geometry = FakeGeometry::default();

        state.on_scroll(0.0, &geometry);
        assert!(!state.is_scrolled());

        state.on_scroll(50.0, &geometry);
        assert!(!state.is_scrolled());

        state.on_scroll(50.5, &geometry);
        assert!(state.is_scrolled());

        state.on_scroll(49.0, &geometry);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_scrolled_uses_configured_threshold() {
        let config = NavConfig {
            scroll_threshold: 200.0,
            ..NavConfig::default()
        };
        let mut state = NavigationState::new(config, SectionRegistry::default());
        let geometry = FakeGeometry::default();

        state.on_scroll(150.0, &geometry);
        assert!(!state.is_scrolled());

        state.on_scroll(201.0, &geometry);
        assert!(state.is_scrolled());
    }

    // ========================================================================
    // Active section
    // ========================================================================

    #[test]
    fn test_active_section_is_the_one_straddling_the_line() {
        let mut state = abc_state();
        let geometry = FakeGeometry::default()
            .with("a", -600.0, -10.0)
            .with("b", -10.0, 500.0)
            .with("c", 500.0, 1200.0);

        state.on_scroll(900.0, &geometry);
        assert_eq!(state.active_section(), Some("b"));
    }

    #[test]
    fn test_active_section_boundaries_are_inclusive() {
        let mut state = abc_state();

        state.on_scroll(0.0, &FakeGeometry::default().with("c", 100.0, 400.0));
        assert_eq!(state.active_section(), Some("c"));

        state.on_scroll(0.0, &FakeGeometry::default().with("a", -300.0, 100.0));
        assert_eq!(state.active_section(), Some("a"));
    }

    #[test]
    fn test_active_section_ties_go_to_registry_order() {
        let mut state = abc_state();
        let geometry = FakeGeometry::default()
            .with("c", 0.0, 300.0)
            .with("b", 50.0, 150.0);

        state.on_scroll(400.0, &geometry);
        assert_eq!(state.active_section(), Some("b"));
    }

    #[test]
    fn test_active_section_kept_when_nothing_matches() {
        let mut state = abc_state();
        state.on_scroll(400.0, &FakeGeometry::default().with("a", 0.0, 300.0));
        assert_eq!(state.active_section(), Some("a"));

        let gap = FakeGeometry::default()
            .with("a", -800.0, -200.0)
            .with("b", 300.0, 900.0);
        let changed = state.on_scroll(1000.0, &gap);
        assert_eq!(state.active_section(), Some("a"));
        assert!(!changed);
    }

    #[test]
    fn test_active_section_none_before_any_match() {
        let mut state = abc_state();
        state.on_scroll(0.0, &FakeGeometry::default().with("a", 600.0, 900.0));
        assert_eq!(state.active_section(), None);
    }

    #[test]
    fn test_active_section_skips_unmounted_sections() {
        let mut state = abc_state();
        let geometry = FakeGeometry::default().with("c", 0.0, 200.0);

        state.on_scroll(300.0, &geometry);
        assert_eq!(state.active_section(), Some("c"));
    }

    #[test]
    fn test_active_section_uses_configured_reference_line() {
        let config = NavConfig {
            reference_line: 10.0,
            ..NavConfig::default()
        };
        let registry = SectionRegistry::new(["a", "b"]).unwrap();
        let mut state = NavigationState::new(config, registry);
        let geometry = FakeGeometry::default()
            .with("a", -100.0, 50.0)
            .with("b", 50.0, 300.0);

        state.on_scroll(300.0, &geometry);
        assert_eq!(state.active_section(), Some("a"));
    }

    #[test]
    fn test_on_scroll_is_idempotent() {
        let mut state = abc_state();
        let geometry = FakeGeometry::default().with("b", 0.0, 400.0);

        assert!(state.on_scroll(120.0, &geometry));
        let snapshot = state.clone();

        for _ in 0..5 {
            assert!(!state.on_scroll(120.0, &geometry));
        }
        assert_eq!(state, snapshot);
    }

    // ========================================================================
    // scroll_to_section
    // ========================================================================

    #[test]
    fn test_scroll_to_unknown_section_is_noop() {
        let mut state = NavigationState::default();
        state.toggle_menu();
        let before = state.clone();
        let scroller = FakeScroller::at(0.0);

        state.scroll_to_section(
            "nonexistent",
            &FakeGeometry::default().with("nonexistent", 10.0, 20.0),
            &scroller,
        );

        assert_eq!(state, before);
        assert!(scroller.calls.borrow().is_empty());
    }

    #[test]
    fn test_scroll_to_unmounted_section_is_noop() {
        let mut state = NavigationState::default();
        state.toggle_menu();
        let scroller = FakeScroller::at(0.0);

        state.scroll_to_section("pricing", &FakeGeometry::default(), &scroller);

        assert!(state.is_menu_open());
        assert!(scroller.calls.borrow().is_empty());
    }

    #[test]
    fn test_scroll_to_section_closes_menu() {
        let mut state = NavigationState::default();
        state.toggle_menu();
        assert!(state.is_menu_open());

        let geometry = FakeGeometry::default().with("features", 700.0, 1500.0);
        state.scroll_to_section("features", &geometry, &FakeScroller::at(0.0));

        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_scroll_to_section_aligns_top_edge() {
        let mut state = NavigationState::default();
        let geometry = FakeGeometry::default().with("pricing", -250.0, 600.0);
        let scroller = FakeScroller::at(1000.0);

        state.scroll_to_section("pricing", &geometry, &scroller);

        assert_eq!(*scroller.calls.borrow(), vec![750.0]);
    }

    #[test]
    fn test_scroll_to_section_leaves_scroll_state_alone() {
        let mut state = NavigationState::default();
        let geometry = FakeGeometry::default().with("faq", 2000.0, 2600.0);

        state.scroll_to_section("faq", &geometry, &FakeScroller::at(0.0));

        assert!(!state.is_scrolled());
        assert_eq!(state.active_section(), None);
    }

    // ========================================================================
    // Menu
    // ========================================================================

    #[test]
    fn test_menu_starts_closed() {
        assert!(!NavigationState::default().is_menu_open());
    }

    #[test]
    fn test_menu_toggle_twice_round_trips() {
        let mut state = NavigationState::default();
        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_close_menu_is_a_set() {
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.open);
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.open);
    }

    // ========================================================================
    // Registry, config, anchors
    // ========================================================================

    #[test]
    fn test_registry_rejects_duplicates() {
        let err = SectionRegistry::new(["features", "faq", "features"]).unwrap_err();
        assert_eq!(err, NavError::DuplicateSection("features".to_string()));
    }

    #[test]
    fn test_registry_keeps_order() {
        let registry = SectionRegistry::new(["b", "a", "c"]).unwrap();
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_default_registry_matches_page_sections() {
        let registry = SectionRegistry::default();
        assert_eq!(registry.iter().collect::<Vec<_>>(), DEFAULT_SECTIONS.to_vec());
        assert!(registry.contains("how-it-works"));
        assert!(!registry.contains("hero"));
    }

    #[test]
    fn test_nav_config_defaults() {
        let config = NavConfig::default();
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.reference_line, 100.0);
    }

    #[test]
    fn test_nav_config_partial_json_falls_back_to_defaults() {
        let config: NavConfig = serde_json::from_str(r#"{"reference_line": 80.0}"#).unwrap();
        assert_eq!(config.reference_line, 80.0);
        assert_eq!(config.scroll_threshold, DEFAULT_SCROLL_THRESHOLD);
    }

    #[test]
    fn test_section_anchor_from_label() {
        assert_eq!(section_anchor("Features"), "features");
        assert_eq!(section_anchor("How it works"), "how-it-works");
        assert_eq!(section_anchor("FAQ"), "faq");
    }

    #[test]
    fn test_nav_error_messages() {
        assert_eq!(
            NavError::UnknownSection("x".into()).to_string(),
            "section 'x' is not registered"
        );
        assert_eq!(
            NavError::NotMounted("faq".into()).to_string(),
            "section 'faq' is not mounted"
        );
    }
}
