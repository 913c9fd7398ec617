//! Sticky navigation bar
//!
//! Switches to a frosted style once the page is scrolled, highlights the link
//! of the section under the reference line and owns the mobile overlay.

use leptos::prelude::*;

use crate::core::{NavConfig, SectionRegistry, section_anchor};
use crate::ui::common::{Button, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::{NavContext, use_scroll_navigation};

/// Navigation labels in page order
pub const NAV_LABELS: [&str; 4] = ["Features", "How it works", "Pricing", "FAQ"];

pub fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 w-full z-50 transition-all duration-300 border-b \
         bg-[#0B0D10]/80 backdrop-blur-md border-white/10 py-4"
    } else {
        "fixed top-0 w-full z-50 transition-all duration-300 border-b \
         bg-transparent border-transparent py-6"
    }
}

fn desktop_link_class(active: bool) -> &'static str {
    if active {
        "text-white transition-colors"
    } else {
        "hover:text-white transition-colors"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "text-white py-2 block font-medium"
    } else {
        "text-white/80 py-2 block"
    }
}

/// Page navigation bar
#[component]
pub fn Navbar(
    /// Scroll threshold and reference line
    #[prop(optional)]
    config: NavConfig,
) -> impl IntoView {
    let nav = use_scroll_navigation(config, SectionRegistry::default());

    view! {
        <nav class=move || navbar_class(nav.scrolled.get())>
            <div class="max-w-7xl mx-auto px-6 flex items-center justify-between">
                <Logo />

                // Desktop navigation
                <div class="hidden md:flex items-center gap-8 text-sm font-medium text-white/60">
                    {NAV_LABELS
                        .into_iter()
                        .map(|label| view! { <NavLink nav=nav label=label mobile=false /> })
                        .collect_view()}
                </div>

                <div class="hidden md:flex items-center gap-4">
                    <a href="#" class="text-sm font-medium text-white/80 hover:text-white">"Log in"</a>
                    <Button variant=ButtonVariant::Primary class="py-2 px-4 text-sm">
                        "Join Waitlist"
                    </Button>
                </div>

                // Mobile menu toggle
                <button
                    class="md:hidden"
                    on:click=move |_| nav.toggle_menu()
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || nav.menu_open.get().to_string()
                >
                    {move || {
                        if nav.menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile navigation overlay
            <Show when=move || nav.menu_open.get()>
                <div class="md:hidden absolute top-full left-0 w-full bg-[#0B0D10] border-b border-white/10 p-6 flex flex-col gap-4">
                    {NAV_LABELS
                        .into_iter()
                        .map(|label| view! { <NavLink nav=nav label=label mobile=true /> })
                        .collect_view()}
                    <Button
                        variant=ButtonVariant::Primary
                        class="w-full"
                        on_click=Callback::new(move |_| nav.close_menu())
                    >
                        "Join Waitlist"
                    </Button>
                </div>
            </Show>
        </nav>
    }
}

/// Anchor link that scrolls smoothly to its section
#[component]
fn NavLink(nav: NavContext, label: &'static str, mobile: bool) -> impl IntoView {
    let anchor = section_anchor(label);
    let href = format!("#{}", anchor);
    let active_anchor = anchor.clone();

    let class = move || {
        let active = nav.is_active(&active_anchor);
        if mobile {
            mobile_link_class(active)
        } else {
            desktop_link_class(active)
        }
    };

    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                nav.scroll_to_section(&anchor);
            }
        >
            {label}
        </a>
    }
}

/// Brand mark and wordmark
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 font-bold text-xl tracking-tight">
            <div class="w-8 h-8 bg-gradient-to-tr from-white to-gray-500 rounded-lg flex items-center justify-center text-black">
                "Q"
            </div>
            "QueryIO"
        </div>
    }
}
