use leptos::prelude::*;

/// SVG icon served from `public/icons`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CODE: &str = "code";
    pub const DATABASE: &str = "database";
    pub const LAYOUT: &str = "layout";
    pub const MENU: &str = "menu";
    pub const SHIELD_CHECK: &str = "shield-check";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";
}
