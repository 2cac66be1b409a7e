//! Browser implementation of the backend API using `gloo-net`.
//!
//! Every request races a `gloo-timers` timeout; admin and user tokens are
//! read from local storage at call time.

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use web_sys::FormData;

use newmeclass::api::{decode, endpoints, error_from_body, Backend, ProofUpload};
use newmeclass::config::{ADMIN_TOKEN_KEY, USER_TOKEN_KEY};
use newmeclass::models::{
    AdminCredentials, AdminToken, Article, Banner, ContactRequest, ContactResponse, Payment, QuestionSet,
    RegistrationRequest, RegistrationResponse, SettingsPatch, SiteSettings, Slide, TestAccess,
    TestResult, TestSubmission, UploadProofResponse,
};
use newmeclass::{ApiError, ApiResult, Config};

use super::files::BrowserFile;
use super::storage;
use crate::config::client_config;

/// `gloo-net`-backed [`Backend`].
#[derive(Clone)]
pub struct GlooBackend {
    config: Config,
}

impl Default for GlooBackend {
    fn default() -> Self {
        Self::new(client_config())
    }
}

fn network(e: impl std::fmt::Display) -> ApiError {
    ApiError::Network(e.to_string())
}

fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

impl GlooBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Display URL for a backend-relative asset.
    pub fn asset_url(&self, path: &str) -> String {
        self.config.asset_url(path)
    }

    async fn with_timeout<T>(&self, request: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
        let millis = self.config.request_timeout.as_millis().min(u32::MAX as u128) as u32;
        let timeout = TimeoutFuture::new(millis);
        pin_mut!(request);
        pin_mut!(timeout);
        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::warn!("⏱️ Request timed out");
                Err(ApiError::Timeout(self.config.request_timeout.as_secs()))
            }
        }
    }

    async fn send(&self, request: Request) -> ApiResult<String> {
        self.with_timeout(async move {
            let response = request.send().await.map_err(network)?;
            let status = response.status();
            let body = response.text().await.map_err(network)?;
            if !response.ok() {
                return Err(error_from_body(status, &body));
            }
            Ok(body)
        })
        .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log::debug!("→ GET {}", path);
        let request = Request::get(&self.config.url(path)).build().map_err(network)?;
        decode(&self.send(request).await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> ApiResult<T> {
        log::debug!("→ POST {}", path);
        let request = Request::post(&self.config.url(path))
            .json(payload)
            .map_err(network)?;
        decode(&self.send(request).await?)
    }

    fn authorized(builder: RequestBuilder, key: &str) -> ApiResult<RequestBuilder> {
        let token = storage::get(key).ok_or(ApiError::Unauthorized)?;
        Ok(builder.header("Authorization", &format!("Bearer {}", token)))
    }
}

impl Backend for GlooBackend {
    type File = BrowserFile;

    async fn settings(&self) -> ApiResult<SiteSettings> {
        self.get_json(endpoints::SETTINGS).await
    }

    async fn update_settings(&self, patch: &SettingsPatch) -> ApiResult<()> {
        let builder = Self::authorized(Request::put(&self.config.url(endpoints::SETTINGS)), ADMIN_TOKEN_KEY)?;
        log::debug!("→ PUT {}", endpoints::SETTINGS);
        self.send(builder.json(patch).map_err(network)?).await?;
        Ok(())
    }

    async fn upload_team_photo(&self, file: &BrowserFile) -> ApiResult<String> {
        let builder = Self::authorized(
            Request::post(&self.config.url(endpoints::TEAM_PHOTO_UPLOAD)),
            ADMIN_TOKEN_KEY,
        )?;
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file.as_file(), &file.name())
            .map_err(js_error)?;

        let body = self.send(builder.body(form).map_err(network)?).await?;
        let json: Value = decode(&body)?;
        json.get("url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ApiError::Decode("upload response has no url".to_string()))
    }

    async fn hero_slides(&self) -> ApiResult<Vec<Slide>> {
        self.get_json(endpoints::HERO_SLIDES).await
    }

    async fn popup_banners(&self) -> ApiResult<Vec<Banner>> {
        self.get_json(endpoints::POPUP_BANNERS).await
    }

    async fn articles(&self) -> ApiResult<Vec<Article>> {
        self.get_json(endpoints::ARTICLES).await
    }

    async fn article(&self, id: &str) -> ApiResult<Article> {
        self.get_json(&endpoints::article(id)).await
    }

    async fn create_contact(&self, request: &ContactRequest) -> ApiResult<ContactResponse> {
        self.post_json(endpoints::CONTACT, request).await
    }

    async fn create_registration(
        &self,
        request: &RegistrationRequest,
    ) -> ApiResult<RegistrationResponse> {
        self.post_json(endpoints::REGISTRATIONS, request).await
    }

    async fn questions(&self, test_type: &str, include_premium: bool) -> ApiResult<QuestionSet> {
        self.get_json(&endpoints::questions(test_type, include_premium)).await
    }

    async fn submit_test(&self, submission: &TestSubmission) -> ApiResult<TestResult> {
        self.post_json(endpoints::TEST_SUBMIT, submission).await
    }

    async fn test_access(&self) -> ApiResult<TestAccess> {
        let builder = Self::authorized(Request::get(&self.config.url(endpoints::TEST_ACCESS)), USER_TOKEN_KEY)?;
        decode(&self.send(builder.build().map_err(network)?).await?)
    }

    async fn payment_for_registration(&self, registration_id: &str) -> ApiResult<Option<Payment>> {
        self.get_json(&endpoints::payment_for_registration(registration_id)).await
    }

    async fn upload_payment_proof(
        &self,
        upload: &ProofUpload<BrowserFile>,
    ) -> ApiResult<UploadProofResponse> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", upload.file.as_file(), &upload.file.name())
            .map_err(js_error)?;
        for (name, value) in upload.text_fields() {
            form.append_with_str(name, &value).map_err(js_error)?;
        }

        log::debug!("→ POST {}", endpoints::PAYMENT_UPLOAD);
        let request = Request::post(&self.config.url(endpoints::PAYMENT_UPLOAD))
            .body(form)
            .map_err(network)?;
        decode(&self.send(request).await?)
    }

    async fn admin_login(&self, credentials: &AdminCredentials) -> ApiResult<AdminToken> {
        self.post_json(endpoints::ADMIN_LOGIN, credentials).await
    }

    async fn health(&self) -> ApiResult<Value> {
        self.get_json(endpoints::HEALTH).await
    }
}
