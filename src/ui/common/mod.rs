//! Reusable presentational building blocks

pub mod badge;
pub mod button;
pub mod section;

pub use badge::Badge;
pub use button::{Button, ButtonVariant};
pub use section::Section;
