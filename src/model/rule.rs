use serde::{Deserialize, Serialize};

/// Template for a booking that occupies exactly one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotRule {
    pub hour: u32,
    pub duration_hours: u32,
    pub title: String,
    // Owner display name; shown nowhere and never used for matching.
    pub user: String,
    pub target_resource_id: u32,
}

/// Template for one logical booking that occupies several resources at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiResourceRule {
    pub hour: u32,
    pub duration_hours: u32,
    pub title: String,
    pub resource_ids: Vec<u32>,
}

impl MultiResourceRule {
    /// Correlation key shared by every event this rule produces.
    pub fn group_id(&self) -> String {
        format!("{}-{}", self.title, self.hour)
    }
}
