//! # NEWMECLASS - website client core
//!
//! Flow controllers, data model and backend client behind the NEWMECLASS
//! website. The Leptos frontend renders these controllers; the
//! `newmeclass` CLI drives them against a live backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Frontend   │────▶│    Flows    │────▶│   Backend   │────▶ REST API
//! │  (Leptos)   │     │   (rules)   │     │   (trait)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            ▲              gloo-net / reqwest
//!                     ┌─────────────┐
//!                     │     CLI     │
//!                     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use newmeclass::{Carousel, Config, HttpBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = HttpBackend::new(Config::from_env().unwrap()).unwrap();
//!     let carousel = Carousel::load(&backend).await;
//!     println!("{} slides", carousel.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per concern
//! - [`config`] - Constants and runtime configuration
//! - [`models`] - Records exchanged with the backend
//! - [`api`] - `Backend` trait, endpoints, native client
//! - [`flows`] - Page state machines

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Backend access
pub mod api;

// Page flows
pub mod flows;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    ApiError, ApiResult, ClientError, ClientResult, ConfigError, EditorError, EditorResult,
    UploadError, ValidationError, ValidationResult, WizardError, WizardResult,
};

// =============================================================================
// Re-exports - Config
// =============================================================================

pub use config::Config;

// =============================================================================
// Re-exports - Backend
// =============================================================================

pub use api::{Backend, LocalFile, ProofUpload, UploadSource};

#[cfg(feature = "native")]
pub use api::http::HttpBackend;

// =============================================================================
// Re-exports - Flows
// =============================================================================

pub use flows::{
    AccessPolicy, Advance, BackendAccess, Carousel, ContactForm, DenyAll, LoginForm, PaymentPage,
    PaymentView, PopupQueue, RegistrationForm, SlideSource, TeamEditor, TestWizard, Toast, ToastKind, WizardState,
};
