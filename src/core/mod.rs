//! Target-independent logic shared by the server and the browser bundle

#[cfg(feature = "ssr")]
pub mod config;
pub mod navigation;

pub use navigation::*;
