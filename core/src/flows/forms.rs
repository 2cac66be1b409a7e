//! Contact, registration and admin login forms.

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::Backend;
use crate::error::{ValidationError, ValidationResult};
use crate::flows::Toast;
use crate::models::{
    AdminCredentials, AdminToken, ContactRequest, ContactResponse, RegistrationRequest,
    RegistrationResponse,
};

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// `local@domain.tld` shape check. The backend does the real validation.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .is_some_and(|re| re.is_match(email.trim()))
}

fn required(value: &str, field: &'static str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn email(value: &str) -> ValidationResult<String> {
    let value = required(value, "email")?;
    if !is_valid_email(&value) {
        return Err(ValidationError::InvalidEmail(value));
    }
    Ok(value)
}

fn validation_toast(e: &ValidationError) -> Toast {
    match e {
        ValidationError::InvalidEmail(_) => Toast::error("Email Tidak Valid", e.user_message()),
        _ => Toast::error("Data Tidak Lengkap", e.user_message()),
    }
}

/// A successful submission: the toast to show and the backend's reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted<T> {
    pub toast: Toast,
    pub response: T,
}

// =============================================================================
// Contact
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> ValidationResult<ContactRequest> {
        Ok(ContactRequest {
            name: required(&self.name, "name")?,
            email: email(&self.email)?,
            phone: optional(&self.phone),
            subject: optional(&self.subject),
            message: required(&self.message, "message")?,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate and send. Clears the form on success; keeps it otherwise.
    pub async fn submit<B: Backend>(
        &mut self,
        backend: &B,
    ) -> Result<Submitted<ContactResponse>, Toast> {
        let request = self.validate().map_err(|e| validation_toast(&e))?;

        match backend.create_contact(&request).await {
            Ok(response) => {
                info!("✅ Contact message sent ({})", response.id);
                self.clear();
                let description = response
                    .message
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "Terima kasih telah menghubungi kami.".to_string());
                Ok(Submitted {
                    toast: Toast::success("Pesan Terkirim!", description),
                    response,
                })
            }
            Err(e) => {
                warn!("contact submission failed: {}", e);
                Err(Toast::error(
                    "Gagal Mengirim",
                    e.user_message("Terjadi kesalahan. Silakan coba lagi."),
                ))
            }
        }
    }
}

// =============================================================================
// Registration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    /// From the `ref` query parameter.
    pub recommender_id: String,
}

impl RegistrationForm {
    /// Empty form, prefilled with a referral code when the page URL has one.
    pub fn with_referral(referral: Option<&str>) -> Self {
        Self {
            recommender_id: referral.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ValidationResult<RegistrationRequest> {
        Ok(RegistrationRequest {
            name: required(&self.name, "name")?,
            email: email(&self.email)?,
            recommender_id: optional(&self.recommender_id),
        })
    }

    pub async fn submit<B: Backend>(
        &mut self,
        backend: &B,
    ) -> Result<Submitted<RegistrationResponse>, Toast> {
        let request = self.validate().map_err(|e| validation_toast(&e))?;

        match backend.create_registration(&request).await {
            Ok(response) => {
                info!("✅ Registration created ({})", response.id);
                self.clear();
                let description = response
                    .message
                    .clone()
                    .unwrap_or_else(|| "Silakan lanjutkan ke pembayaran.".to_string());
                Ok(Submitted {
                    toast: Toast::success("Pendaftaran Berhasil!", description),
                    response,
                })
            }
            Err(e) => {
                warn!("registration failed: {}", e);
                Err(Toast::error(
                    "Pendaftaran Gagal",
                    e.user_message("Terjadi kesalahan. Silakan coba lagi."),
                ))
            }
        }
    }

    pub fn clear(&mut self) {
        let referral = std::mem::take(&mut self.recommender_id);
        *self = Self::with_referral(Some(&referral));
    }
}

/// Payment page for a fresh registration.
pub fn payment_route(registration_id: &str) -> String {
    format!("/payment/{}", registration_id)
}

// =============================================================================
// Admin Login
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationResult<AdminCredentials> {
        Ok(AdminCredentials {
            email: email(&self.email)?,
            password: required(&self.password, "password")?,
        })
    }

    /// Exchange credentials for a token. The password is cleared either way.
    pub async fn submit<B: Backend>(&mut self, backend: &B) -> Result<AdminToken, Toast> {
        let credentials = self.validate().map_err(|e| validation_toast(&e))?;
        let result = backend.admin_login(&credentials).await;
        self.password.clear();

        result.map_err(|e| {
            warn!("admin login failed: {}", e);
            Toast::error("Login Gagal", e.user_message("Email atau password salah"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockBackend};
    use crate::error::ApiError;
    use crate::flows::ToastKind;

    fn contact(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email(" ana@sub.example.co.id "));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[tokio::test]
    async fn test_contact_success_clears_form() {
        let backend = MockBackend::new();
        backend.contact.borrow_mut().as_mut().unwrap().message = Some("Terima kasih".into());

        let mut form = contact("Ana", "ana@example.com", "Hi");
        let submitted = form.submit(&backend).await.unwrap();

        assert_eq!(submitted.toast.kind, ToastKind::Success);
        assert_eq!(submitted.toast.title, "Pesan Terkirim!");
        assert!(submitted.toast.description.contains("Terima kasih"));
        assert_eq!(form, ContactForm::default());
        assert_eq!(
            backend.calls(),
            vec![Call::Contact(ContactRequest {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                phone: None,
                subject: None,
                message: "Hi".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_contact_default_message() {
        let backend = MockBackend::new();
        let mut form = contact("Ana", "ana@example.com", "Hi");
        let submitted = form.submit(&backend).await.unwrap();
        assert_eq!(submitted.toast.description, "Terima kasih telah menghubungi kami.");
    }

    #[tokio::test]
    async fn test_contact_missing_field_no_request() {
        let backend = MockBackend::new();
        let mut form = contact("Ana", "ana@example.com", "   ");

        let toast = form.submit(&backend).await.unwrap_err();
        assert_eq!(toast.title, "Data Tidak Lengkap");
        assert_eq!(toast.description, "Mohon isi semua field yang wajib");
        assert!(backend.calls().is_empty());
        assert_eq!(form.name, "Ana");
    }

    #[tokio::test]
    async fn test_contact_failure_keeps_form() {
        let backend = MockBackend::new();
        *backend.contact.borrow_mut() = Err(ApiError::Status {
            status: 422,
            detail: Some("Email sudah terdaftar".into()),
        });

        let mut form = contact("Ana", "ana@example.com", "Hi");
        let toast = form.submit(&backend).await.unwrap_err();
        assert!(toast.is_error());
        assert_eq!(toast.description, "Email sudah terdaftar");
        assert_eq!(form.message, "Hi");
    }

    #[tokio::test]
    async fn test_registration_with_referral() {
        let backend = MockBackend::new();
        let mut form = RegistrationForm::with_referral(Some("REF42"));
        form.name = "Budi".into();
        form.email = "budi@example.com".into();

        let submitted = form.submit(&backend).await.unwrap();
        assert_eq!(payment_route(&submitted.response.id), "/payment/r1");
        assert_eq!(form.recommender_id, "REF42");
        assert!(form.name.is_empty());

        let Call::Registration(sent) = &backend.calls()[0] else {
            panic!("expected registration");
        };
        assert_eq!(sent.recommender_id.as_deref(), Some("REF42"));
    }

    #[tokio::test]
    async fn test_registration_invalid_email() {
        let backend = MockBackend::new();
        let mut form = RegistrationForm {
            name: "Budi".into(),
            email: "budi".into(),
            recommender_id: String::new(),
        };
        let toast = form.submit(&backend).await.unwrap_err();
        assert_eq!(toast.title, "Email Tidak Valid");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_clears_password() {
        let backend = MockBackend::new();
        let mut form = LoginForm {
            email: "admin@newmeclass.com".into(),
            password: "wrong".into(),
        };
        let toast = form.submit(&backend).await.unwrap_err();
        assert_eq!(toast.description, "Invalid credentials");
        assert!(form.password.is_empty());
        assert_eq!(form.email, "admin@newmeclass.com");
    }
}
