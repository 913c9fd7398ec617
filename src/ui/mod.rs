pub mod common;
pub mod icon;
pub mod navbar;
pub mod navigation;
pub mod pages;

pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use navigation::{NavContext, use_scroll_navigation};
