use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "001-223344-55")]
    pub number: String,

    #[schema(example = 2500000.0)]
    pub balance: f64,
}
