use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::api::endpoints::encode_component;
use super::null_as_default;
use crate::config::DEFAULT_PAYMENT_AMOUNT;

/// One of the three team listings stored on the settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamList {
    BoardOfDirectors,
    TeamSupport,
    Partners,
}

impl TeamList {
    /// Tab order in the admin screen.
    pub const ALL: [TeamList; 3] = [
        TeamList::BoardOfDirectors,
        TeamList::TeamSupport,
        TeamList::Partners,
    ];

    /// Field name on the settings document.
    pub fn field_name(&self) -> &'static str {
        match self {
            TeamList::BoardOfDirectors => "boardOfDirectors",
            TeamList::TeamSupport => "teamSupport",
            TeamList::Partners => "partners",
        }
    }

    /// Short tab id.
    pub fn tab_id(&self) -> &'static str {
        match self {
            TeamList::BoardOfDirectors => "bod",
            TeamList::TeamSupport => "team",
            TeamList::Partners => "partners",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            TeamList::BoardOfDirectors => "Board of Directors",
            TeamList::TeamSupport => "Team Support",
            TeamList::Partners => "Mitra Yayasan & Korporasi",
        }
    }

    /// Parse a tab id.
    pub fn from_tab_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|list| list.tab_id() == id)
    }
}

/// Team member, board member or partner entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TeamMember {
    pub fn new(name: &str, position: &str) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            ..Self::default()
        }
    }
}

/// Site-wide settings document.
///
/// Fields this client does not use are kept in `extra` so a round trip
/// never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default = "default_site_name", deserialize_with = "site_name_or_default")]
    pub site_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub whatsapp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instagram: String,
    #[serde(default = "default_payment_amount", deserialize_with = "payment_amount_or_default")]
    pub payment_amount: f64,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_account_number: Option<String>,
    #[serde(default)]
    pub bank_account_name: Option<String>,
    #[serde(default)]
    pub payment_instructions: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub require_payment: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub maintenance_message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub board_of_directors: Vec<TeamMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_support: Vec<TeamMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub partners: Vec<TeamMember>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_site_name() -> String {
    "NEWME CLASS".to_string()
}

fn default_payment_amount() -> f64 {
    DEFAULT_PAYMENT_AMOUNT
}

fn site_name_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::deserialize(deserializer)?.unwrap_or_else(default_site_name))
}

fn payment_amount_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::deserialize(deserializer)?.unwrap_or(DEFAULT_PAYMENT_AMOUNT))
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            email: "newmeclass@gmail.com".to_string(),
            phone: "0895.0267.1691".to_string(),
            whatsapp: "6289502671691".to_string(),
            address: String::new(),
            instagram: "@newmeclass".to_string(),
            payment_amount: DEFAULT_PAYMENT_AMOUNT,
            bank_name: None,
            bank_account_number: None,
            bank_account_name: None,
            payment_instructions: None,
            require_payment: true,
            maintenance_mode: false,
            maintenance_message: None,
            board_of_directors: Vec::new(),
            team_support: Vec::new(),
            partners: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl SiteSettings {
    /// Entries of one team listing.
    pub fn team_list(&self, list: TeamList) -> &[TeamMember] {
        match list {
            TeamList::BoardOfDirectors => &self.board_of_directors,
            TeamList::TeamSupport => &self.team_support,
            TeamList::Partners => &self.partners,
        }
    }

    /// WhatsApp click-to-chat link with a greeting prefilled.
    pub fn whatsapp_link(&self) -> String {
        let source = if !self.whatsapp.is_empty() { &self.whatsapp } else { &self.phone };
        let digits: String = source.chars().filter(|c| c.is_ascii_digit()).collect();
        let number = match digits.strip_prefix("62") {
            Some(_) => digits.clone(),
            None => format!("62{}", digits.trim_start_matches('0')),
        };
        let greeting = format!(
            "Halo {}, saya ingin bertanya tentang program Anda.",
            self.site_name
        );
        format!("https://wa.me/{}?text={}", number, encode_component(&greeting))
    }
}

/// Body of `PUT /api/settings`: field name to new value.
pub type SettingsPatch = Map<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_keep_unknown_fields() {
        let json = json!({
            "siteName": "NEWME CLASS",
            "paymentAmount": 75000.0,
            "primaryColor": "#FFD700",
            "partners": [{"name": "Yayasan A", "position": "Mitra", "photo": ""}]
        });
        let settings: SiteSettings = serde_json::from_value(json).unwrap();
        assert_eq!(settings.payment_amount, 75000.0);
        assert_eq!(settings.partners[0].name, "Yayasan A");
        assert_eq!(settings.extra["primaryColor"], "#FFD700");

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["primaryColor"], "#FFD700");
    }

    #[test]
    fn test_missing_payment_amount_defaults() {
        let settings: SiteSettings = serde_json::from_value(json!({})).unwrap();
        assert_eq!(settings.payment_amount, DEFAULT_PAYMENT_AMOUNT);
        assert_eq!(settings.site_name, "NEWME CLASS");
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let json = r#"{
            "siteName": null,
            "instagram": null,
            "paymentAmount": null,
            "requirePayment": null,
            "teamSupport": null,
            "partners": [{"name": "Mitra", "position": "Partner", "photo": null, "description": null}]
        }"#;
        let settings: SiteSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.site_name, "NEWME CLASS");
        assert_eq!(settings.instagram, "");
        assert_eq!(settings.payment_amount, DEFAULT_PAYMENT_AMOUNT);
        assert!(!settings.require_payment);
        assert!(settings.team_support.is_empty());
        assert_eq!(settings.partners[0].name, "Mitra");
        assert_eq!(settings.partners[0].photo, "");
    }

    #[test]
    fn test_team_list_names() {
        assert_eq!(TeamList::from_tab_id("bod"), Some(TeamList::BoardOfDirectors));
        assert_eq!(TeamList::TeamSupport.field_name(), "teamSupport");
        assert_eq!(TeamList::from_tab_id("nope"), None);
    }

    #[test]
    fn test_whatsapp_link() {
        let settings = SiteSettings {
            whatsapp: String::new(),
            phone: "0895.0267.1691".into(),
            ..SiteSettings::default()
        };
        let link = settings.whatsapp_link();
        assert!(link.starts_with("https://wa.me/6289502671691?text=Halo%20NEWME%20CLASS"));
    }
}
