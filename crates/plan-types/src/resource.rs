use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::PlanId;
use crate::tag::VersionTag;

/// A stored plan: the payload exactly as submitted plus its version tag.
///
/// Serializes as `{"data": ..., "etag": "..."}`, the body returned when a
/// plan is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub data: Value,
    #[serde(rename = "etag")]
    pub version_tag: VersionTag,
}

impl Resource {
    pub fn new(data: Value, version_tag: VersionTag) -> Self {
        Self { data, version_tag }
    }

    /// The identifier carried by the payload, if it has a valid one.
    pub fn id(&self) -> Option<PlanId> {
        PlanId::from_payload(&self.data).ok()
    }
}
