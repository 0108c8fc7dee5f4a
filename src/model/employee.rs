use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 12,
        "name": "Asha Rao",
        "salaryAmount": 85000.0,
        "bankDetails": "HDFC0001234 / 50100012345678",
        "paymentRef": "OCT-SAL",
        "yourRef": null,
        "notes": null,
        "batchId": 6
    })
)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub salary_amount: f64,
    pub bank_details: String,

    #[serde(default)]
    #[schema(nullable = true)]
    pub payment_ref: Option<String>,

    #[serde(default)]
    #[schema(nullable = true)]
    pub your_ref: Option<String>,

    #[serde(default)]
    #[schema(nullable = true)]
    pub notes: Option<String>,

    /// Batch this employee is assigned to, if any.
    #[serde(default)]
    #[schema(nullable = true)]
    pub batch_id: Option<u64>,
}

impl Employee {
    pub fn is_assigned_to(&self, batch_id: u64) -> bool {
        self.batch_id == Some(batch_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[schema(example = "Asha Rao")]
    pub name: String,

    #[schema(example = 85000.0)]
    pub salary_amount: f64,

    #[schema(example = "HDFC0001234 / 50100012345678")]
    pub bank_details: String,

    #[serde(default)]
    pub payment_ref: Option<String>,

    #[serde(default)]
    pub your_ref: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    /// Accepts a number, a numeric string, `""` or `null`; blank means unassigned.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(value_type = Option<u64>, example = 6)]
    pub batch_id: Option<u64>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
