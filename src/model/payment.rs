use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use utoipa::ToSchema;

use crate::model::Batch;
use crate::utils::format::format_us_date;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumIter,
)]
pub enum PayrollType {
    #[default]
    #[serde(rename = "Monthly Salary")]
    #[strum(serialize = "Monthly Salary")]
    MonthlySalary,
    Bonus,
    Commission,
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumIter,
)]
pub enum Currency {
    #[default]
    #[serde(rename = "INR")]
    #[strum(serialize = "INR")]
    Inr,
    #[serde(rename = "USD")]
    #[strum(serialize = "USD")]
    Usd,
}

/// Payload posted to `/batches/{id}/initiate-payment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "debitAccount": "001-223344-55",
        "payrollType": "Monthly Salary",
        "currency": "INR",
        "batchId": 6,
        "batchName": "Q4 Marketing Team",
        "date": "10/16/2026"
    })
)]
pub struct PaymentDetails {
    pub debit_account: String,
    pub payroll_type: PayrollType,
    pub currency: Currency,
    pub batch_id: u64,
    pub batch_name: String,
    /// Initiation date, `M/D/YYYY`.
    pub date: String,
}

impl PaymentDetails {
    pub fn new(
        batch: &Batch,
        debit_account: &str,
        payroll_type: PayrollType,
        currency: Currency,
        date: NaiveDate,
    ) -> Self {
        Self {
            debit_account: debit_account.trim().to_string(),
            payroll_type,
            currency,
            batch_id: batch.id,
            batch_name: batch.name.clone(),
            date: format_us_date(date),
        }
    }
}
