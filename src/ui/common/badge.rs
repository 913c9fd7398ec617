use leptos::prelude::*;

/// Uppercase pill label shown above headlines
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-block px-3 py-1 mb-6 text-xs font-semibold tracking-wider text-blue-400 uppercase
                     bg-blue-500/10 rounded-full border border-blue-500/20">
            {children()}
        </span>
    }
}
