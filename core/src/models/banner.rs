use serde::{Deserialize, Serialize};

use super::{deserialize_id, null_as_default};

/// Promotional banner. Only `popup` banners are shown by this site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(alias = "_id", deserialize_with = "deserialize_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
}

fn default_active() -> bool {
    true
}
