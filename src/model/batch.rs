use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 6,
        "name": "Q4 Marketing Team",
        "status": "PENDING"
    })
)]
pub struct Batch {
    #[schema(example = 6)]
    pub id: u64,

    #[schema(example = "Q4 Marketing Team")]
    pub name: String,

    /// Payment status as reported by the backend.
    #[serde(default)]
    #[schema(example = "PENDING", nullable = true)]
    pub status: Option<String>,
}

/// Body of batch create/rename, both on the console surface and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BatchName {
    #[schema(example = "Q4 Marketing Team")]
    pub name: String,
}
