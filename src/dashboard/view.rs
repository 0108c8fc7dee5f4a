use serde::Serialize;
use utoipa::ToSchema;

use super::state::DashboardState;
use crate::model::{BankAccount, Batch, Currency, Employee, PaymentDetails};
use crate::utils::format::format_amount;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchView {
    pub batch: Batch,
    pub assigned_count: usize,
    pub employee_ids: Vec<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptView {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    /// `delete_batch` or `delete_employee`.
    pub kind: Option<String>,
    pub target_id: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDialogView {
    pub is_open: bool,
    pub is_processing: bool,
    pub batch: Option<Batch>,
    pub employees: Vec<Employee>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditDialogView {
    pub is_open: bool,
    pub batch: Option<Batch>,
}

/// Everything the dashboard renders, in one snapshot.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub loading: bool,
    pub error: Option<String>,
    pub batches: Vec<BatchView>,
    pub employees: Vec<Employee>,
    pub bank_accounts: Vec<BankAccount>,
    /// Action kinds with a request in flight.
    pub pending: Vec<String>,
    pub prompt: PromptView,
    pub payment: PaymentDialogView,
    pub edit: EditDialogView,
}

impl From<&DashboardState> for DashboardView {
    fn from(state: &DashboardState) -> Self {
        let batches = state
            .batches
            .iter()
            .map(|batch| {
                let employee_ids: Vec<u64> =
                    state.employees_in_batch(batch.id).map(|e| e.id).collect();
                BatchView {
                    batch: batch.clone(),
                    assigned_count: employee_ids.len(),
                    employee_ids,
                }
            })
            .collect();

        let payment_employees = match &state.payment_batch {
            Some(batch) => state.employees_in_batch(batch.id).cloned().collect(),
            None => Vec::new(),
        };

        DashboardView {
            loading: state.is_loading(),
            error: state.error.clone(),
            batches,
            employees: state.employees.clone(),
            bank_accounts: state.bank_accounts.clone(),
            pending: state.pending.iter().map(|a| a.to_string()).collect(),
            prompt: PromptView {
                is_open: state.prompt.is_open(),
                title: state.prompt.title.clone(),
                message: state.prompt.message.clone(),
                kind: state.prompt.target.as_ref().map(|t| t.to_string()),
                target_id: state.prompt.target.as_ref().map(|t| t.entity_id()),
            },
            payment: PaymentDialogView {
                is_open: state.payment_batch.is_some(),
                is_processing: state.pending.contains(&super::state::Action::InitiatePayment),
                batch: state.payment_batch.clone(),
                employees: payment_employees,
            },
            edit: EditDialogView {
                is_open: state.edit_batch.is_some(),
                batch: state.edit_batch.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewLine {
    pub employee_id: u64,
    pub name: String,
    pub bank_details: String,
    pub amount: f64,
    pub payment_ref: Option<String>,
}

/// Summary shown before a payment is submitted.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPreview {
    pub details: PaymentDetails,
    pub lines: Vec<PreviewLine>,
    pub payee_count: usize,
    pub total_amount: f64,
    /// Balance of the chosen debit account, when it is a known account.
    pub available_balance: Option<f64>,
    /// e.g. `INR 2,500,000.00`.
    pub available_balance_label: Option<String>,
    pub sufficient_funds: Option<bool>,
}

impl PaymentPreview {
    pub fn build(
        details: PaymentDetails,
        employees: &[&Employee],
        accounts: &[BankAccount],
    ) -> Self {
        let lines: Vec<PreviewLine> = employees
            .iter()
            .map(|e| PreviewLine {
                employee_id: e.id,
                name: e.name.clone(),
                bank_details: e.bank_details.clone(),
                amount: e.salary_amount,
                payment_ref: e.payment_ref.clone(),
            })
            .collect();
        let total_amount: f64 = lines.iter().map(|l| l.amount).sum();

        let available_balance = accounts
            .iter()
            .find(|a| a.number == details.debit_account)
            .map(|a| a.balance);

        PaymentPreview {
            payee_count: lines.len(),
            total_amount,
            available_balance,
            available_balance_label: available_balance
                .map(|balance| balance_label(details.currency, balance)),
            sufficient_funds: available_balance.map(|balance| balance >= total_amount),
            details,
            lines,
        }
    }
}

fn balance_label(currency: Currency, balance: f64) -> String {
    format!("{} {}", currency, format_amount(balance))
}
