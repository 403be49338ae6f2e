use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Activity — A call, meeting, email or task logged against the CRM
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub subject: String,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    /// Planned, Completed, ...
    pub status: Option<String>,
    /// ISO-8601 local date-time as sent by the API.
    pub scheduled_date: Option<String>,
    pub description: Option<String>,
}
