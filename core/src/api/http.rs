//! Native backend client built on `reqwest`.
//!
//! Used by the CLI and host-side tooling. Tokens are passed in explicitly
//! instead of being read from browser storage.

use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{decode, endpoints, error_from_body, Backend, LocalFile, ProofUpload};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    AdminCredentials, AdminToken, Article, Banner, ContactRequest, ContactResponse, Payment, QuestionSet,
    RegistrationRequest, RegistrationResponse, SettingsPatch, SiteSettings, Slide, TestAccess,
    TestResult, TestSubmission, UploadProofResponse,
};

/// `reqwest`-backed [`Backend`].
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: Config,
    admin_token: Option<String>,
    user_token: Option<String>,
}

impl HttpBackend {
    /// Create a client; the configured timeout applies to every request.
    pub fn new(config: Config) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            client,
            config,
            admin_token: None,
            user_token: None,
        })
    }

    /// Token sent on admin endpoints.
    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    /// Token sent on user endpoints.
    pub fn with_user_token(mut self, token: impl Into<String>) -> Self {
        self.user_token = Some(token.into());
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn map_err(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(self.config.request_timeout.as_secs())
        } else {
            ApiError::Network(e.to_string())
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(|e| self.map_err(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_err(e))?;
        debug!("← {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!("→ GET {}", path);
        let body = self.send(self.client.get(self.config.url(path))).await?;
        decode(&body)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> ApiResult<T> {
        debug!("→ POST {}", path);
        let body = self
            .send(self.client.post(self.config.url(path)).json(payload))
            .await?;
        decode(&body)
    }

    fn bearer(token: &Option<String>) -> ApiResult<String> {
        token
            .as_ref()
            .map(|t| format!("Bearer {}", t))
            .ok_or(ApiError::Unauthorized)
    }
}

fn file_part(file: &LocalFile) -> ApiResult<Part> {
    Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.media_type)
        .map_err(|e| ApiError::Network(e.to_string()))
}

impl Backend for HttpBackend {
    type File = LocalFile;

    async fn settings(&self) -> ApiResult<SiteSettings> {
        self.get_json(endpoints::SETTINGS).await
    }

    async fn update_settings(&self, patch: &SettingsPatch) -> ApiResult<()> {
        let auth = Self::bearer(&self.admin_token)?;
        debug!("→ PUT {}", endpoints::SETTINGS);
        self.send(
            self.client
                .put(self.config.url(endpoints::SETTINGS))
                .header("Authorization", auth)
                .json(patch),
        )
        .await?;
        Ok(())
    }

    async fn upload_team_photo(&self, file: &LocalFile) -> ApiResult<String> {
        let auth = Self::bearer(&self.admin_token)?;
        let form = Form::new().part("file", file_part(file)?);
        debug!("→ POST {} ({} bytes)", endpoints::TEAM_PHOTO_UPLOAD, file.bytes.len());
        let body = self
            .send(
                self.client
                    .post(self.config.url(endpoints::TEAM_PHOTO_UPLOAD))
                    .header("Authorization", auth)
                    .multipart(form),
            )
            .await?;

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
        let auth = Self::bearer(&self.user_token)?;
        debug!("→ GET {}", endpoints::TEST_ACCESS);
        let body = self
            .send(
                self.client
                    .get(self.config.url(endpoints::TEST_ACCESS))
                    .header("Authorization", auth),
            )
            .await?;
        decode(&body)
    }

    async fn payment_for_registration(&self, registration_id: &str) -> ApiResult<Option<Payment>> {
        self.get_json(&endpoints::payment_for_registration(registration_id)).await
    }

    async fn upload_payment_proof(
        &self,
        upload: &ProofUpload<LocalFile>,
    ) -> ApiResult<UploadProofResponse> {
        let mut form = Form::new().part("file", file_part(&upload.file)?);
        for (name, value) in upload.text_fields() {
            form = form.text(name, value);
        }
        debug!("→ POST {} ({} bytes)", endpoints::PAYMENT_UPLOAD, upload.file.bytes.len());
        let body = self
            .send(self.client.post(self.config.url(endpoints::PAYMENT_UPLOAD)).multipart(form))
            .await?;
        decode(&body)
    }

    async fn admin_login(&self, credentials: &AdminCredentials) -> ApiResult<AdminToken> {
        self.post_json(endpoints::ADMIN_LOGIN, credentials).await
    }

    async fn health(&self) -> ApiResult<Value> {
        self.get_json(endpoints::HEALTH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_requires_token() {
        assert_eq!(HttpBackend::bearer(&None), Err(ApiError::Unauthorized));
        assert_eq!(
            HttpBackend::bearer(&Some("abc".into())).unwrap(),
            "Bearer abc"
        );
    }

    #[tokio::test]
    async fn test_admin_call_without_token_fails_locally() {
        let backend = HttpBackend::new(Config::default()).unwrap();
        let result = backend.update_settings(&SettingsPatch::new()).await;
        assert_eq!(result, Err(ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) is closed on test hosts.
        let backend = HttpBackend::new(Config::new("http://127.0.0.1:9").unwrap()).unwrap();
        let result = backend.health().await;
        assert!(matches!(result, Err(ApiError::Network(_)) | Err(ApiError::Timeout(_))));
    }
}
