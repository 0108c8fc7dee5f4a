use std::sync::{Mutex, PoisonError};

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use super::state::{Action, ConfirmPrompt, ConfirmTarget, DashboardState};
use super::view::{DashboardView, PaymentPreview};
use crate::client::{ApiError, BackendClient};
use crate::error::ConsoleError;
use crate::model::{BankAccount, Batch, Employee, NewEmployee, PaymentDetails};
use crate::models::PaymentForm;
use crate::utils::upload::{INVALID_FILE_TYPE, is_supported_spreadsheet};

pub const NO_ASSIGNED_EMPLOYEES: &str =
    "Cannot initiate payment: No employees are assigned to this batch.";
const BATCH_EMPTY: &str = "Cannot submit payment: The batch has no assigned employees.";
const DEBIT_ACCOUNT_REQUIRED: &str = "Cannot submit payment: a debit account is required.";
const NO_PAYMENT_DIALOG: &str = "No batch is selected for payment.";
const EMPTY_BATCH_NAME: &str = "Batch name cannot be empty.";

/// Client-side copy of the backend's batches, employees and bank accounts,
/// plus the dialog state around them.
///
/// Collections change only after the backend answers. The state lock is
/// never held across a request.
pub struct Dashboard {
    client: BackendClient,
    state: Mutex<DashboardState>,
}

/// Marks an action as in flight until dropped.
struct Pending<'a> {
    dashboard: &'a Dashboard,
    action: Action,
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        let action = self.action;
        self.dashboard.with_state(|s| s.pending.remove(&action));
    }
}

fn batch_not_loaded(batch_id: u64) -> ConsoleError {
    ConsoleError::NotFound(format!("Batch {batch_id} is not loaded"))
}

fn employee_not_loaded(employee_id: u64) -> ConsoleError {
    ConsoleError::NotFound(format!("Employee {employee_id} is not loaded"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Dashboard {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            state: Mutex::new(DashboardState::default()),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn view(&self) -> DashboardView {
        self.with_state(|s| DashboardView::from(&*s))
    }

    pub fn bank_accounts(&self) -> Vec<BankAccount> {
        self.with_state(|s| s.bank_accounts.clone())
    }

    /// Claim `action` and clear the current error.
    fn begin(&self, action: Action) -> Result<Pending<'_>, ConsoleError> {
        self.with_state(|s| -> Result<(), ConsoleError> {
            if !s.pending.insert(action) {
                return Err(ConsoleError::Busy(action));
            }
            s.error = None;
            Ok(())
        })?;
        Ok(Pending {
            dashboard: self,
            action,
        })
    }

    fn fail(&self, context: &str, err: ApiError) -> ConsoleError {
        let message = format!("{context}: {err}");
        error!(error = %err, "{}", context);
        self.with_state(|s| s.error = Some(message.clone()));
        ConsoleError::Backend(message)
    }

    fn reject(&self, reason: &str) -> ConsoleError {
        warn!(reason, "Dashboard action refused");
        self.with_state(|s| s.error = Some(reason.to_string()));
        ConsoleError::Rejected(reason.to_string())
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    /// Fetch all three collections; nothing is replaced unless all succeed.
    pub async fn load(&self) -> Result<(), ConsoleError> {
        let _pending = self.begin(Action::Load)?;
        self.fetch_all()
            .await
            .map_err(|e| self.fail("Failed to load data", e))
    }

    async fn fetch_all(&self) -> Result<(), ApiError> {
        let (batches, employees, accounts) = futures::try_join!(
            self.client.list_batches(),
            self.client.list_employees(),
            self.client.list_bank_accounts()
        )?;
        info!(
            batches = batches.len(),
            employees = employees.len(),
            bank_accounts = accounts.len(),
            "Dashboard data loaded"
        );
        self.with_state(|s| s.replace_all(batches, employees, accounts));
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Batches
    // ---------------------------------------------------------------------

    pub async fn add_batch(&self, name: &str) -> Result<Batch, ConsoleError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.reject(EMPTY_BATCH_NAME));
        }
        let _pending = self.begin(Action::AddBatch)?;
        let batch = self
            .client
            .create_batch(name)
            .await
            .map_err(|e| self.fail("Failed to add batch", e))?;
        info!(batch_id = batch.id, "Batch created");
        self.with_state(|s| s.insert_batch(batch.clone()));
        Ok(batch)
    }

    pub fn open_edit_batch(&self, batch_id: u64) -> Result<(), ConsoleError> {
        self.with_state(|s| -> Result<(), ConsoleError> {
            let batch = s.batch(batch_id).cloned().ok_or_else(|| batch_not_loaded(batch_id))?;
            s.edit_batch = Some(batch);
            Ok(())
        })
    }

    pub fn close_edit_batch(&self) {
        self.with_state(|s| s.edit_batch = None);
    }

    /// Rename through the edit dialog; the dialog stays open on failure.
    pub async fn rename_batch(&self, batch_id: u64, name: &str) -> Result<Batch, ConsoleError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.reject(EMPTY_BATCH_NAME));
        }
        let _pending = self.begin(Action::RenameBatch)?;
        let batch = self
            .client
            .rename_batch(batch_id, name)
            .await
            .map_err(|e| self.fail("Failed to update batch name", e))?;
        info!(batch_id = batch.id, "Batch renamed");
        self.with_state(|s| {
            if s.payment_batch.as_ref().is_some_and(|b| b.id == batch.id) {
                s.payment_batch = Some(batch.clone());
            }
            s.replace_batch(batch.clone());
            s.edit_batch = None;
        });
        Ok(batch)
    }

    pub fn request_delete_batch(&self, batch_id: u64) -> Result<(), ConsoleError> {
        self.with_state(|s| -> Result<(), ConsoleError> {
            let batch = s.batch(batch_id).cloned().ok_or_else(|| batch_not_loaded(batch_id))?;
            let assigned = s.assigned_count(batch_id);
            s.prompt = ConfirmPrompt::delete_batch(batch, assigned);
            Ok(())
        })
    }

    async fn delete_batch(&self, batch: &Batch) -> Result<(), ConsoleError> {
        let _pending = self.begin(Action::DeleteBatch)?;
        self.client
            .delete_batch(batch.id)
            .await
            .map_err(|e| self.fail("Failed to delete batch", e))?;
        info!(batch_id = batch.id, "Batch deleted");
        self.with_state(|s| {
            s.remove_batch(batch.id);
            if s.payment_batch.as_ref().is_some_and(|b| b.id == batch.id) {
                s.payment_batch = None;
            }
            if s.edit_batch.as_ref().is_some_and(|b| b.id == batch.id) {
                s.edit_batch = None;
            }
            s.prompt.close_for(&ConfirmTarget::DeleteBatch(batch.clone()));
        });
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Employees
    // ---------------------------------------------------------------------

    pub async fn add_employee(&self, employee: &NewEmployee) -> Result<Employee, ConsoleError> {
        let _pending = self.begin(Action::AddEmployee)?;
        let created = self
            .client
            .add_employee(employee)
            .await
            .map_err(|e| self.fail("Failed to add employee", e))?;
        info!(employee_id = created.id, "Employee created");
        self.with_state(|s| s.insert_employee(created.clone()));
        Ok(created)
    }

    pub fn request_delete_employee(&self, employee_id: u64) -> Result<(), ConsoleError> {
        self.with_state(|s| -> Result<(), ConsoleError> {
            let employee = s
                .employee(employee_id)
                .cloned()
                .ok_or_else(|| employee_not_loaded(employee_id))?;
            s.prompt = ConfirmPrompt::delete_employee(employee);
            Ok(())
        })
    }

    async fn delete_employee(&self, employee: &Employee) -> Result<(), ConsoleError> {
        let _pending = self.begin(Action::DeleteEmployee)?;
        self.client
            .delete_employee(employee.id)
            .await
            .map_err(|e| self.fail("Failed to delete employee", e))?;
        info!(employee_id = employee.id, "Employee deleted");
        self.with_state(|s| {
            s.remove_employee(employee.id);
            s.prompt.close_for(&ConfirmTarget::DeleteEmployee(employee.clone()));
        });
        Ok(())
    }

    pub async fn assign_employee(
        &self,
        employee_id: u64,
        batch_id: u64,
    ) -> Result<Employee, ConsoleError> {
        let _pending = self.begin(Action::AssignEmployee)?;
        let updated = self
            .client
            .assign_employee(employee_id, batch_id)
            .await
            .map_err(|e| self.fail("Failed to assign employee", e))?;
        self.with_state(|s| s.replace_employee(updated.clone()));
        Ok(updated)
    }

    pub async fn unassign_employee(&self, employee_id: u64) -> Result<Employee, ConsoleError> {
        let _pending = self.begin(Action::UnassignEmployee)?;
        let updated = self
            .client
            .unassign_employee(employee_id)
            .await
            .map_err(|e| self.fail("Failed to unassign employee", e))?;
        self.with_state(|s| s.replace_employee(updated.clone()));
        Ok(updated)
    }

    /// The backend may create any number of employees and a batch, so a
    /// successful upload re-fetches everything instead of patching.
    pub async fn bulk_upload(&self, file_name: &str, contents: Vec<u8>) -> Result<(), ConsoleError> {
        if !is_supported_spreadsheet(file_name) {
            return Err(self.reject(INVALID_FILE_TYPE));
        }
        let _pending = self.begin(Action::BulkUpload)?;
        self.client
            .bulk_upload_employees(file_name, contents)
            .await
            .map_err(|e| self.fail("Bulk upload failed", e))?;
        info!(file_name, "Bulk upload accepted, refreshing dashboard");
        self.fetch_all()
            .await
            .map_err(|e| self.fail("Failed to load data", e))
    }

    // ---------------------------------------------------------------------
    // Confirmation prompt
    // ---------------------------------------------------------------------

    /// Run the prompt's action. A closed prompt makes this a no-op; on
    /// failure the prompt stays open.
    pub async fn confirm_prompt(&self) -> Result<(), ConsoleError> {
        let target = self.with_state(|s| s.prompt.target.clone());
        match target {
            None => Ok(()),
            Some(ConfirmTarget::DeleteBatch(batch)) => self.delete_batch(&batch).await,
            Some(ConfirmTarget::DeleteEmployee(employee)) => self.delete_employee(&employee).await,
        }
    }

    pub fn cancel_prompt(&self) {
        self.with_state(|s| s.prompt = ConfirmPrompt::default());
    }

    // ---------------------------------------------------------------------
    // Payment
    // ---------------------------------------------------------------------

    /// Open the payment dialog. Purely local; refused when nobody is
    /// assigned to the batch.
    pub fn open_payment(&self, batch_id: u64) -> Result<(), ConsoleError> {
        self.with_state(|s| -> Result<(), ConsoleError> {
            let batch = s.batch(batch_id).cloned().ok_or_else(|| batch_not_loaded(batch_id))?;
            if s.assigned_count(batch_id) == 0 {
                s.error = Some(NO_ASSIGNED_EMPLOYEES.to_string());
                return Err(ConsoleError::Rejected(NO_ASSIGNED_EMPLOYEES.to_string()));
            }
            s.payment_batch = Some(batch);
            s.error = None;
            Ok(())
        })
    }

    pub fn close_payment(&self) {
        self.with_state(|s| s.payment_batch = None);
    }

    pub fn payment_preview(&self, form: &PaymentForm) -> Result<PaymentPreview, ConsoleError> {
        self.with_state(|s| -> Option<PaymentPreview> {
            let batch = s.payment_batch.as_ref()?;
            let details = form.details_for(batch, today());
            let employees: Vec<&Employee> = s.employees_in_batch(batch.id).collect();
            Some(PaymentPreview::build(details, &employees, &s.bank_accounts))
        })
        .ok_or_else(|| ConsoleError::Rejected(NO_PAYMENT_DIALOG.to_string()))
    }

    /// Submit the payment for the batch in the dialog. The backend decides
    /// whether it is processed; the returned batch replaces the cached one.
    pub async fn confirm_payment(&self, form: &PaymentForm) -> Result<Batch, ConsoleError> {
        let checked = self.with_state(|s| -> Result<PaymentDetails, &'static str> {
            let batch = s.payment_batch.as_ref().ok_or(NO_PAYMENT_DIALOG)?;
            if s.assigned_count(batch.id) == 0 {
                return Err(BATCH_EMPTY);
            }
            if form.debit_account.trim().is_empty() {
                return Err(DEBIT_ACCOUNT_REQUIRED);
            }
            Ok(form.details_for(batch, today()))
        });
        let details = checked.map_err(|reason| self.reject(reason))?;

        let _pending = self.begin(Action::InitiatePayment)?;
        let updated = self
            .client
            .initiate_payment(details.batch_id, &details)
            .await
            .map_err(|e| self.fail("Failed to initiate payment", e))?;
        info!(batch_id = updated.id, status = ?updated.status, "Payment initiated");
        self.with_state(|s| {
            s.replace_batch(updated.clone());
            s.payment_batch = None;
        });
        Ok(updated)
    }

    /// Drafts are not persisted anywhere; this only logs and closes the dialog.
    pub fn draft_payment(&self, form: &PaymentForm) -> Result<PaymentDetails, ConsoleError> {
        let details = self.with_state(|s| -> Option<PaymentDetails> {
            let details = form.details_for(s.payment_batch.as_ref()?, today());
            s.payment_batch = None;
            s.error = None;
            Some(details)
        });
        let details = details.ok_or_else(|| self.reject(NO_PAYMENT_DIALOG))?;
        log::info!("Draft details: {:?}", details);
        Ok(details)
    }
}
