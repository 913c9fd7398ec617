use leptos::prelude::*;

/// Padded, centered page section
///
/// Sections with an `id` double as in-page anchor targets for the navbar.
#[component]
pub fn Section(
    /// Anchor id
    #[prop(optional)]
    id: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("px-6 py-20 md:py-32 max-w-7xl mx-auto {}", class)>
            {children()}
        </section>
    }
}
