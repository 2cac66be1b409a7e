//! Browser services.
//!
//! # Services
//!
//! - [`api`] - `Backend` implementation over `gloo-net`
//! - [`files`] - picked file handles
//! - [`storage`] - local storage for bearer tokens

pub mod api;
pub mod files;
pub mod storage;

pub use api::GlooBackend;
pub use files::BrowserFile;
