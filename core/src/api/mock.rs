//! Scriptable in-memory [`Backend`] that records every call.

use std::cell::RefCell;

use serde_json::{json, Value};

use super::{Backend, LocalFile, ProofUpload};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    AdminCredentials, AdminToken, Article, Banner, ContactRequest, ContactResponse, Payment, QuestionSet,
    RegistrationRequest, RegistrationResponse, SettingsPatch, SiteSettings, Slide, TestAccess,
    TestResult, TestSubmission, UploadProofResponse,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Settings,
    UpdateSettings(SettingsPatch),
    UploadTeamPhoto(String),
    HeroSlides,
    PopupBanners,
    Articles,
    Article(String),
    Contact(ContactRequest),
    Registration(RegistrationRequest),
    Questions { test_type: String, include_premium: bool },
    SubmitTest(TestSubmission),
    TestAccess,
    PaymentFor(String),
    UploadProof(ProofUpload<LocalFile>),
    AdminLogin(AdminCredentials),
    Health,
}

/// Responses are cloned on every call, except `settings` which pops
/// scripted values until one is left.
pub(crate) struct MockBackend {
    pub calls: RefCell<Vec<Call>>,
    pub settings: RefCell<Vec<ApiResult<SiteSettings>>>,
    pub update_settings: RefCell<ApiResult<()>>,
    pub team_photo: RefCell<ApiResult<String>>,
    pub slides: RefCell<ApiResult<Vec<Slide>>>,
    pub popups: RefCell<ApiResult<Vec<Banner>>>,
    pub articles: RefCell<ApiResult<Vec<Article>>>,
    pub article: RefCell<ApiResult<Article>>,
    pub contact: RefCell<ApiResult<ContactResponse>>,
    pub registration: RefCell<ApiResult<RegistrationResponse>>,
    pub questions: RefCell<ApiResult<QuestionSet>>,
    pub submit: RefCell<ApiResult<TestResult>>,
    pub access: RefCell<ApiResult<TestAccess>>,
    pub payment: RefCell<ApiResult<Option<Payment>>>,
    pub upload: RefCell<ApiResult<UploadProofResponse>>,
    pub login: RefCell<ApiResult<AdminToken>>,
}

fn not_found() -> ApiError {
    ApiError::Status { status: 404, detail: Some("Not found".to_string()) }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            settings: RefCell::new(vec![Ok(SiteSettings::default())]),
            update_settings: RefCell::new(Ok(())),
            team_photo: RefCell::new(Ok("/uploads/team/photo.png".to_string())),
            slides: RefCell::new(Ok(Vec::new())),
            popups: RefCell::new(Ok(Vec::new())),
            articles: RefCell::new(Ok(Vec::new())),
            article: RefCell::new(Err(not_found())),
            contact: RefCell::new(Ok(ContactResponse {
                id: "c1".to_string(),
                status: "new".to_string(),
                message: None,
            })),
            registration: RefCell::new(Ok(RegistrationResponse {
                id: "r1".to_string(),
                name: String::new(),
                email: String::new(),
                test_status: "pending".to_string(),
                message: None,
            })),
            questions: RefCell::new(Ok(QuestionSet {
                success: true,
                test_type: String::new(),
                total_questions: 0,
                free_questions: 0,
                premium_questions: 0,
                questions: Vec::new(),
            })),
            submit: RefCell::new(Err(ApiError::Network("not scripted".to_string()))),
            access: RefCell::new(Err(ApiError::Unauthorized)),
            payment: RefCell::new(Ok(None)),
            upload: RefCell::new(Ok(UploadProofResponse {
                success: true,
                payment_id: Some("p1".to_string()),
                message: Some("Payment proof uploaded successfully".to_string()),
            })),
            login: RefCell::new(Err(ApiError::Status {
                status: 401,
                detail: Some("Invalid credentials".to_string()),
            })),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

/// Apply a settings patch the way the backend does: top-level fields are
/// replaced.
fn apply_patch(settings: &SiteSettings, patch: &SettingsPatch) -> SiteSettings {
    let mut value = serde_json::to_value(settings).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        for (key, v) in patch {
            map.insert(key.clone(), v.clone());
        }
    }
    serde_json::from_value(value).unwrap_or_else(|_| settings.clone())
}

impl Backend for MockBackend {
    type File = LocalFile;

    async fn settings(&self) -> ApiResult<SiteSettings> {
        self.record(Call::Settings);
        let mut queue = self.settings.borrow_mut();
        if queue.len() > 1 {
            queue.remove(0)
        } else {
            queue[0].clone()
        }
    }

    async fn update_settings(&self, patch: &SettingsPatch) -> ApiResult<()> {
        self.record(Call::UpdateSettings(patch.clone()));
        let result = self.update_settings.borrow().clone();
        if result.is_ok() {
            for entry in self.settings.borrow_mut().iter_mut() {
                if let Ok(current) = entry {
                    *current = apply_patch(current, patch);
                }
            }
        }
        result
    }

    async fn upload_team_photo(&self, file: &LocalFile) -> ApiResult<String> {
        self.record(Call::UploadTeamPhoto(file.name.clone()));
        self.team_photo.borrow().clone()
    }

    async fn hero_slides(&self) -> ApiResult<Vec<Slide>> {
        self.record(Call::HeroSlides);
        self.slides.borrow().clone()
    }

    async fn popup_banners(&self) -> ApiResult<Vec<Banner>> {
        self.record(Call::PopupBanners);
        self.popups.borrow().clone()
    }

    async fn articles(&self) -> ApiResult<Vec<Article>> {
        self.record(Call::Articles);
        self.articles.borrow().clone()
    }

    async fn article(&self, id: &str) -> ApiResult<Article> {
        self.record(Call::Article(id.to_string()));
        self.article.borrow().clone()
    }

    async fn create_contact(&self, request: &ContactRequest) -> ApiResult<ContactResponse> {
        self.record(Call::Contact(request.clone()));
        self.contact.borrow().clone()
    }

    async fn create_registration(
        &self,
        request: &RegistrationRequest,
    ) -> ApiResult<RegistrationResponse> {
        self.record(Call::Registration(request.clone()));
        self.registration.borrow().clone()
    }

    async fn questions(&self, test_type: &str, include_premium: bool) -> ApiResult<QuestionSet> {
        self.record(Call::Questions {
            test_type: test_type.to_string(),
            include_premium,
        });
        self.questions.borrow().clone()
    }

    async fn submit_test(&self, submission: &TestSubmission) -> ApiResult<TestResult> {
        self.record(Call::SubmitTest(submission.clone()));
        self.submit.borrow().clone()
    }

    async fn test_access(&self) -> ApiResult<TestAccess> {
        self.record(Call::TestAccess);
        self.access.borrow().clone()
    }

    async fn payment_for_registration(&self, registration_id: &str) -> ApiResult<Option<Payment>> {
        self.record(Call::PaymentFor(registration_id.to_string()));
        self.payment.borrow().clone()
    }

    async fn upload_payment_proof(
        &self,
        upload: &ProofUpload<LocalFile>,
    ) -> ApiResult<UploadProofResponse> {
        self.record(Call::UploadProof(upload.clone()));
        self.upload.borrow().clone()
    }

    async fn admin_login(&self, credentials: &AdminCredentials) -> ApiResult<AdminToken> {
        self.record(Call::AdminLogin(credentials.clone()));
        self.login.borrow().clone()
    }

    async fn health(&self) -> ApiResult<Value> {
        self.record(Call::Health);
        Ok(json!({"status": "healthy"}))
    }
}
