use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::article::deserialize_naive_utc;
use super::deserialize_id;

/// Review state of an uploaded payment proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl PaymentStatus {
    /// Badge label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Menunggu Approval",
            PaymentStatus::Approved => "Disetujui",
            PaymentStatus::Rejected => "Ditolak",
        }
    }

    /// Badge class for the status pill.
    pub fn css_class(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "badge-pending",
            PaymentStatus::Approved => "badge-approved",
            PaymentStatus::Rejected => "badge-rejected",
        }
    }
}

/// Payment record for one registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(alias = "_id", deserialize_with = "deserialize_id", default)]
    pub id: String,
    #[serde(default)]
    pub registration_id: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_amount: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_proof_url: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_naive_utc")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Response of `POST /api/payments/upload-proof`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProofResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Methods offered in the payment form.
pub const PAYMENT_METHODS: &[&str] = &["Transfer Bank", "E-Wallet", "QRIS"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_deserialization() {
        let json = r#"{
            "_id": "p1",
            "registrationId": "r1",
            "userId": "r1",
            "userName": "Ana",
            "userEmail": "ana@example.com",
            "paymentAmount": 50000.0,
            "paymentMethod": "Transfer Bank",
            "paymentProofUrl": "/uploads/payments/x.png",
            "status": "rejected",
            "rejectionReason": "Nominal tidak sesuai",
            "uploadedAt": "2025-02-01T10:00:00.123456"
        }"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.status, PaymentStatus::Rejected);
        assert_eq!(payment.rejection_reason.as_deref(), Some("Nominal tidak sesuai"));
        assert!(payment.uploaded_at.is_some());
    }

    #[test]
    fn test_null_payment_is_none() {
        let payment: Option<Payment> = serde_json::from_str("null").unwrap();
        assert!(payment.is_none());
    }
}
