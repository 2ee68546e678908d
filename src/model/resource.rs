use serde::{Deserialize, Serialize};

/// A bookable room or lab, shown as a column in resource-aware views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub resource_id: u32,
    pub resource_title: String,
}

impl Resource {
    pub fn new(resource_id: u32, resource_title: impl Into<String>) -> Self {
        Self { resource_id, resource_title: resource_title.into() }
    }
}
