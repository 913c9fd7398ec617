use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Solid white call-to-action with glow
    #[default]
    Primary,
    /// Bordered, transparent background
    Outline,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-white text-black hover:bg-gray-200 shadow-[0_0_20px_rgba(255,255,255,0.3)]"
            }
            ButtonVariant::Outline => "border border-white/10 text-white hover:bg-white/5",
        }
    }
}

const BASE_CLASSES: &str = "px-6 py-3 rounded-lg font-medium transition-all duration-200 \
     flex items-center justify-center gap-2 text-sm md:text-base";

/// Full class list for a variant plus caller-supplied extras
pub fn button_classes(variant: ButtonVariant, extra: &str) -> String {
    if extra.is_empty() {
        format!("{} {}", BASE_CLASSES, variant.class())
    } else {
        format!("{} {} {}", BASE_CLASSES, variant.class(), extra)
    }
}

/// Marketing button with variants
#[component]
pub fn Button(
    /// Visual variant
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// HTML button type
    #[prop(default = "button")]
    button_type: &'static str,
    /// Optional click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_classes(variant, class)
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(())
                }
            }
        >
            {children()}
        </button>
    }
}
