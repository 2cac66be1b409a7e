//! Payment proof upload flow.

use log::{debug, warn};

use crate::api::{Backend, ProofUpload, UploadSource};
use crate::config::{ALLOWED_PROOF_TYPES, MAX_PROOF_SIZE};
use crate::error::{ApiResult, UploadError, ValidationError, ValidationResult};
use crate::models::{Payment, PaymentStatus, SiteSettings};

/// Check a proof file before anything is sent.
pub fn validate_proof<F: UploadSource>(file: Option<&F>) -> ValidationResult<()> {
    let file = file.ok_or(ValidationError::NoFile)?;

    let media_type = file.media_type().to_ascii_lowercase();
    if !ALLOWED_PROOF_TYPES.contains(&media_type.as_str()) {
        return Err(ValidationError::FileType(file.file_name()));
    }

    let size = file.size();
    if size > MAX_PROOF_SIZE {
        return Err(ValidationError::FileTooLarge {
            size,
            limit: MAX_PROOF_SIZE,
        });
    }
    Ok(())
}

/// What the payment page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentView {
    /// Continue to the test.
    Approved,
    /// Waiting for review; form hidden.
    Pending { proof_url: Option<String> },
    /// Form shown with the reviewer's reason.
    Rejected { reason: Option<String> },
    /// Nothing uploaded yet; form shown.
    NotSubmitted,
    /// The proof was accepted but the status could not be re-read; form
    /// hidden so the proof is not sent twice.
    Unconfirmed,
}

impl PaymentView {
    pub fn from_payment(payment: Option<&Payment>) -> Self {
        match payment {
            None => PaymentView::NotSubmitted,
            Some(p) => match p.status {
                PaymentStatus::Approved => PaymentView::Approved,
                PaymentStatus::Pending => PaymentView::Pending {
                    proof_url: p.payment_proof_url.clone(),
                },
                PaymentStatus::Rejected => PaymentView::Rejected {
                    reason: p.rejection_reason.clone(),
                },
            },
        }
    }

    pub fn shows_upload_form(&self) -> bool {
        matches!(self, PaymentView::Rejected { .. } | PaymentView::NotSubmitted)
    }

    /// Route for the continue button, when there is one.
    pub fn continue_route(&self) -> Option<&'static str> {
        matches!(self, PaymentView::Approved).then_some("/test")
    }
}

/// Inputs of the upload form other than the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub payment_method: String,
    pub notes: String,
}

/// State of the payment page for one registration.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentPage {
    pub registration_id: String,
    pub settings: SiteSettings,
    pub payment: Option<Payment>,
    pub form: PaymentForm,
    /// Set when an accepted upload could not be followed by a status read.
    pub unconfirmed: bool,
}

/// A proof the backend accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofSent {
    pub message: String,
    /// Status read back after the upload; `None` when that read failed.
    pub refreshed: Option<Option<Payment>>,
}

impl PaymentPage {
    /// Fetch settings and payment concurrently. A failed settings fetch
    /// falls back to defaults; a failed payment fetch is treated as
    /// nothing uploaded.
    pub async fn load<B: Backend>(backend: &B, registration_id: &str) -> Self {
        let (settings, payment) = futures::join!(
            backend.settings(),
            backend.payment_for_registration(registration_id)
        );

        let settings = settings.unwrap_or_else(|e| {
            warn!("payment: settings unavailable, using defaults: {}", e);
            SiteSettings::default()
        });
        let payment = payment.unwrap_or_else(|e| {
            warn!("payment: status unavailable: {}", e);
            None
        });

        Self::with(registration_id, settings, payment)
    }

    /// Like [`PaymentPage::load`], but any failed fetch is an error.
    pub async fn fetch<B: Backend>(backend: &B, registration_id: &str) -> ApiResult<Self> {
        let (settings, payment) = futures::try_join!(
            backend.settings(),
            backend.payment_for_registration(registration_id)
        )?;
        Ok(Self::with(registration_id, settings, payment))
    }

    fn with(registration_id: &str, settings: SiteSettings, payment: Option<Payment>) -> Self {
        Self {
            registration_id: registration_id.to_string(),
            settings,
            payment,
            form: PaymentForm::default(),
            unconfirmed: false,
        }
    }

    pub fn view(&self) -> PaymentView {
        if self.unconfirmed {
            return PaymentView::Unconfirmed;
        }
        PaymentView::from_payment(self.payment.as_ref())
    }

    /// Fold an accepted upload in and clear the form. Returns the message
    /// to show.
    pub fn apply_sent(&mut self, sent: ProofSent) -> String {
        match sent.refreshed {
            Some(payment) => {
                self.payment = payment;
                self.unconfirmed = false;
            }
            None => self.unconfirmed = true,
        }
        self.form = PaymentForm::default();
        sent.message
    }

    pub fn amount(&self) -> f64 {
        self.settings.payment_amount
    }

    /// Validate the form and build the multipart body.
    pub fn prepare_upload<F: UploadSource>(&self, file: Option<F>) -> ValidationResult<ProofUpload<F>> {
        validate_proof(file.as_ref())?;
        if self.form.payment_method.trim().is_empty() {
            return Err(ValidationError::NoPaymentMethod);
        }
        let file = file.ok_or(ValidationError::NoFile)?;
        let notes = self.form.notes.trim();

        Ok(ProofUpload {
            file,
            registration_id: self.registration_id.clone(),
            payment_amount: self.amount(),
            payment_method: self.form.payment_method.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }

    /// Validate, upload and refresh the status. Returns the backend's
    /// confirmation message.
    pub async fn upload<B: Backend>(
        &mut self,
        backend: &B,
        file: Option<B::File>,
    ) -> Result<String, UploadError> {
        let upload = self.prepare_upload(file)?;
        let sent = send_proof(backend, &upload).await?;
        Ok(self.apply_sent(sent))
    }
}

/// Post a validated proof, then re-fetch the payment status. Once the
/// backend has accepted the proof a failed re-fetch is not an error.
pub async fn send_proof<B: Backend>(
    backend: &B,
    upload: &ProofUpload<B::File>,
) -> Result<ProofSent, UploadError> {
    let response = backend.upload_payment_proof(upload).await?;
    if !response.success {
        let message = response
            .message
            .unwrap_or_else(|| "Gagal mengupload bukti pembayaran".to_string());
        return Err(UploadError::Rejected(message));
    }
    debug!("payment: proof uploaded as {:?}", response.payment_id);

    let refreshed = match backend.payment_for_registration(&upload.registration_id).await {
        Ok(payment) => Some(payment),
        Err(e) => {
            warn!("payment: proof accepted but status refresh failed: {}", e);
            None
        }
    };
    let message = response
        .message
        .unwrap_or_else(|| "Bukti pembayaran berhasil diupload".to_string());
    Ok(ProofSent { message, refreshed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockBackend};
    use crate::api::LocalFile;
    use crate::error::ApiError;

    const MB: usize = 1024 * 1024;

    fn file(name: &str, media_type: &str, size: usize) -> LocalFile {
        LocalFile::new(name, media_type, vec![0u8; size])
    }

    fn payment(status: PaymentStatus) -> Payment {
        Payment {
            id: "p1".into(),
            registration_id: "reg1".into(),
            status,
            payment_amount: 50000.0,
            payment_method: "QRIS".into(),
            payment_proof_url: Some("/uploads/payments/p1.png".into()),
            rejection_reason: None,
            notes: None,
            uploaded_at: None,
        }
    }

    async fn page(backend: &MockBackend) -> PaymentPage {
        let mut page = PaymentPage::load(backend, "reg1").await;
        page.form.payment_method = "Transfer Bank".into();
        backend.calls.borrow_mut().clear();
        page
    }

    fn upload_count(backend: &MockBackend) -> usize {
        backend.count(|c| matches!(c, Call::UploadProof(_)))
    }

    #[test]
    fn test_validate_proof() {
        assert_eq!(validate_proof::<LocalFile>(None), Err(ValidationError::NoFile));
        assert!(validate_proof(Some(&file("a.jpg", "image/jpeg", 10))).is_ok());
        assert!(validate_proof(Some(&file("a.png", "IMAGE/PNG", 5 * MB))).is_ok());
        assert_eq!(
            validate_proof(Some(&file("a.png", "image/png", 5 * MB + 1))),
            Err(ValidationError::FileTooLarge {
                size: (5 * MB + 1) as u64,
                limit: MAX_PROOF_SIZE
            })
        );
    }

    #[tokio::test]
    async fn test_large_file_rejected_without_request() {
        let backend = MockBackend::new();
        let mut page = page(&backend).await;

        let err = page
            .upload(&backend, Some(file("bukti.png", "image/png", 6 * MB)))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Validation(ValidationError::FileTooLarge { .. })));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_gif_rejected_without_request() {
        let backend = MockBackend::new();
        let mut page = page(&backend).await;

        let err = page
            .upload(&backend, Some(file("bukti.gif", "image/gif", 1000)))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            UploadError::Validation(ValidationError::FileType("bukti.gif".into()))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_method_rejected() {
        let backend = MockBackend::new();
        let mut page = page(&backend).await;
        page.form.payment_method.clear();

        let err = page
            .upload(&backend, Some(file("bukti.png", "image/png", 1000)))
            .await
            .unwrap_err();
        assert_eq!(err, UploadError::Validation(ValidationError::NoPaymentMethod));
        assert_eq!(upload_count(&backend), 0);
    }

    #[tokio::test]
    async fn test_valid_png_uploads_once_and_refetches() {
        let backend = MockBackend::new();
        let mut page = page(&backend).await;
        page.form.notes = "  transfer dari BCA ".into();
        *backend.payment.borrow_mut() = Ok(Some(payment(PaymentStatus::Pending)));

        let message = page
            .upload(&backend, Some(file("bukti.png", "image/png", 4 * MB)))
            .await
            .unwrap();
        assert_eq!(message, "Payment proof uploaded successfully");
        assert_eq!(upload_count(&backend), 1);

        let calls = backend.calls();
        let Call::UploadProof(sent) = &calls[0] else {
            panic!("expected upload first");
        };
        assert_eq!(sent.registration_id, "reg1");
        assert_eq!(sent.payment_amount, 50000.0);
        assert_eq!(sent.notes.as_deref(), Some("transfer dari BCA"));
        assert_eq!(calls[1], Call::PaymentFor("reg1".into()));

        assert!(matches!(page.view(), PaymentView::Pending { .. }));
        assert!(!page.view().shows_upload_form());
    }

    #[tokio::test]
    async fn test_failed_refresh_after_upload_hides_form() {
        let backend = MockBackend::new();
        let mut page = page(&backend).await;
        *backend.payment.borrow_mut() = Err(ApiError::Timeout(15));

        let message = page
            .upload(&backend, Some(file("bukti.png", "image/png", 1000)))
            .await
            .unwrap();
        assert_eq!(message, "Payment proof uploaded successfully");
        assert_eq!(upload_count(&backend), 1);
        assert_eq!(page.view(), PaymentView::Unconfirmed);
        assert!(!page.view().shows_upload_form());
        assert!(page.form.payment_method.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reports_failures() {
        let backend = MockBackend::new();
        *backend.payment.borrow_mut() = Err(ApiError::Network("offline".into()));

        let err = PaymentPage::fetch(&backend, "reg1").await.unwrap_err();
        assert_eq!(err, ApiError::Network("offline".into()));
    }

    #[tokio::test]
    async fn test_unsuccessful_response_keeps_form() {
        let backend = MockBackend::new();
        let mut page = page(&backend).await;
        backend.upload.borrow_mut().as_mut().unwrap().success = false;

        let err = page
            .upload(&backend, Some(file("bukti.jpg", "image/jpeg", 1000)))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Rejected(_)));
        assert_eq!(page.form.payment_method, "Transfer Bank");
        assert!(page.view().shows_upload_form());
        assert_eq!(backend.count(|c| matches!(c, Call::PaymentFor(_))), 0);
    }

    #[tokio::test]
    async fn test_load_falls_back_on_failures() {
        let backend = MockBackend::new();
        *backend.settings.borrow_mut() = vec![Err(ApiError::Timeout(15))];
        *backend.payment.borrow_mut() = Err(ApiError::Network("offline".into()));

        let page = PaymentPage::load(&backend, "reg1").await;
        assert_eq!(page.amount(), 50000.0);
        assert_eq!(page.view(), PaymentView::NotSubmitted);
    }

    #[test]
    fn test_views() {
        let mut rejected = payment(PaymentStatus::Rejected);
        rejected.rejection_reason = Some("Bukti tidak jelas".into());
        assert_eq!(
            PaymentView::from_payment(Some(&rejected)),
            PaymentView::Rejected { reason: Some("Bukti tidak jelas".into()) }
        );
        let approved = PaymentView::from_payment(Some(&payment(PaymentStatus::Approved)));
        assert_eq!(approved.continue_route(), Some("/test"));
        assert!(!approved.shows_upload_form());
    }
}
