//! Page flow controllers.
//!
//! Each controller is a plain state value plus the rules for changing it.
//! Nothing here touches the DOM or timers; the frontend renders the state
//! and forwards events, the CLI and tests drive it directly.
//!
//! - [`carousel`] - hero slides, auto-advance, hover pause
//! - [`wizard`] - personality test with the premium gate
//! - [`payment`] - proof validation and upload
//! - [`team`] - admin board/team/partner lists
//! - [`forms`] - contact, registration, admin login
//! - [`articles`] - listing filters and detail lookup
//! - [`popup`] - home page popup banners
//! - [`maintenance`] - maintenance mode gate

pub mod articles;
pub mod carousel;
pub mod forms;
pub mod maintenance;
pub mod payment;
pub mod popup;
pub mod team;
pub mod wizard;
mod toast;

pub use carousel::{Carousel, SlideSource};
pub use forms::{ContactForm, LoginForm, RegistrationForm, Submitted};
pub use maintenance::maintenance_notice;
pub use payment::{validate_proof, PaymentForm, PaymentPage, PaymentView, ProofSent};
pub use popup::PopupQueue;
pub use team::{CommitOutcome, Entry, EntryForm, PendingWrite, TeamEditor};
pub use toast::{Toast, ToastKind};
pub use wizard::{AccessPolicy, Advance, BackendAccess, DenyAll, TestWizard, WizardState};
