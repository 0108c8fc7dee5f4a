use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{Batch, Currency, PaymentDetails, PayrollType};

/// Fields of the payment dialog.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    /// Account number of the account to debit.
    #[serde(default)]
    #[schema(example = "001-223344-55")]
    pub debit_account: String,

    #[serde(default)]
    pub payroll_type: PayrollType,

    #[serde(default)]
    pub currency: Currency,
}

impl PaymentForm {
    pub fn details_for(&self, batch: &Batch, date: NaiveDate) -> PaymentDetails {
        PaymentDetails::new(batch, &self.debit_account, self.payroll_type, self.currency, date)
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptions {
    pub payroll_types: Vec<PayrollType>,
    pub currencies: Vec<Currency>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct UploadQuery {
    /// Original file name; its extension must be `.xlsx` or `.csv`.
    pub file_name: String,
}
