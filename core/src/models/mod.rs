//! Domain models exchanged with the backend.
//!
//! All records are plain serde types with camelCase JSON keys. The client
//! never holds the authoritative copy of any of them.
//!
//! # Categories
//!
//! - **Landing** - [`Slide`] and the fallback slide set, popup [`Banner`]s
//! - **Tests** - [`Question`], [`Answer`], [`TestResult`], [`TestAccess`]
//! - **Content** - [`Article`]
//! - **Payments** - [`Payment`], [`PaymentStatus`]
//! - **Settings** - [`SiteSettings`], [`TeamMember`], [`TeamList`]
//! - **Submissions** - contact and registration request/response bodies
//! - **Auth** - admin login

mod article;
mod auth;
mod banner;
mod payment;
mod question;
mod settings;
mod slide;
mod submission;

pub use article::*;
pub use auth::*;
pub use banner::*;
pub use payment::*;
pub use question::*;
pub use settings::*;
pub use slide::*;
pub use submission::*;

use serde::{Deserialize, Deserializer};

/// Backend ids arrive either as `id` or as Mongo-style `_id`, and either as
/// strings or numbers. Normalise to a string.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// The backend stores free-form dicts and writes `null` for cleared
/// fields. Read those as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
