//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Respond with a real 404 status during server rendering
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen bg-[#0B0D10] text-white/90 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="text-white/60 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-white text-black hover:bg-gray-200 font-medium rounded-lg transition-colors"
                >
                    "Back to QueryIO"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-white/30">"© 2024 QueryIO Inc."</p>
            </div>
        </div>
    }
}
