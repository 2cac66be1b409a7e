//! UI components shared by the pages.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Footer`] - Contact details and links
//! - [`ToastViewport`] - Notification stack
//! - [`MaintenanceGate`] - Replaces public pages during maintenance
//!
//! # Landing Components
//! - [`HeroCarousel`] - Auto-advancing slide show
//! - [`PopupBanner`] - Once-a-day promotional popup
//! - [`AboutSection`], [`ServicesSection`], [`BenefitsSection`], [`VisionSection`]

mod footer;
mod header;
mod hero;
mod maintenance;
mod popup;
mod sections;
mod toast;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use maintenance::*;
pub use popup::*;
pub use sections::*;
pub use toast::*;
