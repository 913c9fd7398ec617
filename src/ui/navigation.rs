//! Reactive wrapper around the navigation state machine
//!
//! Provides:
//! - NavContext with memoized `scrolled`, active section and menu flags
//! - A window scroll listener bound to the owning component's lifetime
//! - DOM-backed section geometry and smooth scrolling

use leptos::prelude::*;

use crate::core::{NavConfig, NavigationState, SectionRegistry};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[cfg(not(feature = "ssr"))]
use crate::core::{NavError, SectionBox, SectionGeometryProvider, ViewportScroller};

/// Navigation state handle for the navbar and its links
#[derive(Clone, Copy)]
pub struct NavContext {
    state: RwSignal<NavigationState>,
    /// Whether the page is scrolled past the threshold
    pub scrolled: Memo<bool>,
    /// Section currently under the reference line
    pub active_section: Memo<Option<String>>,
    /// Whether the mobile overlay is visible
    pub menu_open: Memo<bool>,
}

impl NavContext {
    fn new(config: NavConfig, registry: SectionRegistry) -> Self {
        let state = RwSignal::new(NavigationState::new(config, registry));

        Self {
            state,
            scrolled: Memo::new(move |_| state.with(|s| s.is_scrolled())),
            active_section: Memo::new(move |_| {
                state.with(|s| s.active_section().map(str::to_owned))
            }),
            menu_open: Memo::new(move |_| state.with(|s| s.is_menu_open())),
        }
    }

    /// Whether `id` is the highlighted section (reactive)
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section
            .with(|active| active.as_deref() == Some(id))
    }

    /// Recompute scroll state from the live viewport
    pub fn refresh(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let offset = WindowScroller.scroll_offset();
            self.state
                .maybe_update(|s| s.on_scroll(offset, &DomSectionGeometry));
        }
    }

    /// Smooth-scroll to a registered section and close the mobile menu.
    ///
    /// Nothing to scroll during server rendering.
    #[cfg_attr(feature = "ssr", allow(unused_variables))]
    pub fn scroll_to_section(&self, id: &str) {
        #[cfg(not(feature = "ssr"))]
        self.state
            .update(|s| s.scroll_to_section(id, &DomSectionGeometry, &WindowScroller));
    }

    pub fn toggle_menu(&self) {
        self.state.update(|s| s.toggle_menu());
    }

    pub fn close_menu(&self) {
        self.state.maybe_update(|s| {
            let was_open = s.is_menu_open();
            s.close_menu();
            was_open
        });
    }
}

/// Create navigation state owned by the calling component.
///
/// The window scroll listener lives exactly as long as the caller's reactive
/// owner and is removed in its cleanup.
pub fn use_scroll_navigation(config: NavConfig, registry: SectionRegistry) -> NavContext {
    let ctx = NavContext::new(config, registry);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle = window_event_listener(scroll, move |_| ctx.refresh());
        on_cleanup(move || handle.remove());

        // Runs after hydration so a page restored mid-scroll is highlighted
        Effect::new(move |_| ctx.refresh());
    }

    ctx
}

/// Section geometry read from the live document
#[cfg(not(feature = "ssr"))]
struct DomSectionGeometry;

#[cfg(not(feature = "ssr"))]
impl SectionGeometryProvider for DomSectionGeometry {
    fn bounding_box_of(&self, id: &str) -> Result<SectionBox, NavError> {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .ok_or_else(|| NavError::NotMounted(id.to_string()))?;

        let rect = element.get_bounding_client_rect();
        Ok(SectionBox::new(rect.top(), rect.bottom()))
    }
}

#[cfg(not(feature = "ssr"))]
struct WindowScroller;

#[cfg(not(feature = "ssr"))]
impl ViewportScroller for WindowScroller {
    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default()
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn with_nav<T>(f: impl FnOnce(NavContext) -> T) -> T {
        let owner = Owner::new();
        owner.with(|| f(use_scroll_navigation(NavConfig::default(), SectionRegistry::default())))
    }

    #[test]
    fn test_close_menu_hides_overlay() {
        with_nav(|nav| {
            nav.toggle_menu();
            assert!(nav.menu_open.get_untracked());

            nav.close_menu();
            assert!(!nav.menu_open.get_untracked());

            nav.close_menu();
            assert!(!nav.menu_open.get_untracked());
        });
    }

    #[test]
    fn test_scroll_to_section_is_inert_on_server() {
        with_nav(|nav| {
            nav.toggle_menu();
            nav.scroll_to_section("faq");

            assert!(nav.menu_open.get_untracked());
            assert_eq!(nav.active_section.get_untracked(), None);
        });
    }
}
