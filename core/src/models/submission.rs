use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

/// Confirmation for a contact submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/registrations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommender_id: Option<String>,
}

/// Confirmation for a test registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub test_status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_skipped() {
        let req = RegistrationRequest {
            name: "Budi".into(),
            email: "budi@example.com".into(),
            recommender_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("recommenderId").is_none());
    }

    #[test]
    fn test_contact_response_with_minimal_body() {
        let resp: ContactResponse = serde_json::from_str(r#"{"message": "Terima kasih"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Terima kasih"));
    }
}
