//! Backend API surface.
//!
//! [`Backend`] names every REST endpoint the site consumes. Flow
//! controllers are generic over it, so the same code runs against the
//! browser client (`gloo-net`, in the frontend crate), the native client
//! ([`http::HttpBackend`], feature `native`) and the in-memory test double.
//!
//! # Endpoints
//!
//! | Method | Path                                             | Auth  |
//! |--------|--------------------------------------------------|-------|
//! | GET    | `/api/settings`                                  |       |
//! | PUT    | `/api/settings`                                  | admin |
//! | POST   | `/api/settings/upload/team`                      | admin |
//! | GET    | `/api/website-content/hero-slides`               |       |
//! | GET    | `/api/banners?type=popup&isActive=true`          |       |
//! | GET    | `/api/articles`, `/api/articles/{id}`            |       |
//! | POST   | `/api/contact`                                   |       |
//! | POST   | `/api/registrations`                             |       |
//! | GET    | `/api/personality-tests/questions/{type}`        |       |
//! | POST   | `/api/personality-tests/submit`                  |       |
//! | GET    | `/api/test-access/check`                         | user  |
//! | GET    | `/api/payments/registration/{id}`                |       |
//! | POST   | `/api/payments/upload-proof`                     |       |
//! | POST   | `/api/admin/login`                               |       |
//! | GET    | `/api/health`                                    |       |

pub mod endpoints;
mod upload;

#[cfg(feature = "native")]
pub mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use upload::*;

use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    AdminCredentials, AdminToken, Article, Banner, ContactRequest, ContactResponse, Payment, QuestionSet,
    RegistrationRequest, RegistrationResponse, SettingsPatch, SiteSettings, Slide, TestAccess,
    TestResult, TestSubmission, UploadProofResponse,
};

/// Every backend call the site makes.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// one thread.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// File handle type accepted by the multipart endpoints.
    type File: UploadSource;

    async fn settings(&self) -> ApiResult<SiteSettings>;

    /// Partial update; list fields are replaced whole.
    async fn update_settings(&self, patch: &SettingsPatch) -> ApiResult<()>;

    /// Store a team photo, returning its URL.
    async fn upload_team_photo(&self, file: &Self::File) -> ApiResult<String>;

    async fn hero_slides(&self) -> ApiResult<Vec<Slide>>;

    /// Active popup banners in display order.
    async fn popup_banners(&self) -> ApiResult<Vec<Banner>>;

    async fn articles(&self) -> ApiResult<Vec<Article>>;

    async fn article(&self, id: &str) -> ApiResult<Article>;

    async fn create_contact(&self, request: &ContactRequest) -> ApiResult<ContactResponse>;

    async fn create_registration(
        &self,
        request: &RegistrationRequest,
    ) -> ApiResult<RegistrationResponse>;

    async fn questions(&self, test_type: &str, include_premium: bool) -> ApiResult<QuestionSet>;

    async fn submit_test(&self, submission: &TestSubmission) -> ApiResult<TestResult>;

    /// Entitlements of the logged-in user.
    async fn test_access(&self) -> ApiResult<TestAccess>;

    /// Payment for a registration; `None` when nothing was uploaded yet.
    async fn payment_for_registration(&self, registration_id: &str) -> ApiResult<Option<Payment>>;

    async fn upload_payment_proof(
        &self,
        upload: &ProofUpload<Self::File>,
    ) -> ApiResult<UploadProofResponse>;

    async fn admin_login(&self, credentials: &AdminCredentials) -> ApiResult<AdminToken>;

    async fn health(&self) -> ApiResult<Value>;
}

/// Build an [`ApiError`] from a failed response body.
///
/// FastAPI sends `{"detail": "..."}`; validation failures send a list under
/// `detail`, which is kept as JSON text.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| match json.get("detail") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && trimmed.len() <= 200).then(|| trimmed.to_string())
        });
    ApiError::Status { status, detail }
}

/// Decode a JSON body, mapping failures to [`ApiError::Decode`].
pub fn decode<T: serde::de::DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(ApiError::from)
}
