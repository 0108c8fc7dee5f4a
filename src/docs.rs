use crate::api::{batch, dashboard, employee, payment};
use crate::dashboard::{DashboardView, PaymentPreview};
use crate::dashboard::view::{BatchView, EditDialogView, PaymentDialogView, PreviewLine, PromptView};
use crate::model::{BankAccount, Batch, BatchName, Currency, Employee, NewEmployee, PaymentDetails, PayrollType};
use crate::models::{PaymentForm, PaymentOptions};
use crate::utils::upload::UploadFormat;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Console",
        version = "0.1.0",
        description = r#"
## Payroll batch dashboard

Local console over a remote payroll backend. It caches **batches**,
**employees** and **bank accounts**, and keeps them in step with the backend
after every action.

### Behaviour
- Every action answers with the full dashboard view
- Deleting a batch or an employee only opens a confirmation prompt;
  `POST /dashboard/prompt/confirm` performs it
- Payments go through the payment dialog: open it on a batch, preview,
  then confirm or save a draft
- Bulk upload sends the spreadsheet to the backend and reloads everything

### Errors
Failures answer `{"error": "..."}`; the same message is shown in the
dashboard view until the next action.
"#
    ),
    paths(
        dashboard::get_dashboard,
        dashboard::reload,
        dashboard::bank_accounts,
        dashboard::confirm_prompt,
        dashboard::cancel_prompt,
        batch::add_batch,
        batch::rename_batch,
        batch::request_delete_batch,
        batch::open_edit_batch,
        batch::close_edit_batch,
        batch::open_payment,
        employee::add_employee,
        employee::request_delete_employee,
        employee::assign_employee,
        employee::unassign_employee,
        employee::bulk_upload,
        employee::bulk_upload_format,
        payment::payment_options,
        payment::preview_payment,
        payment::confirm_payment,
        payment::draft_payment,
        payment::close_payment,
    ),
    components(
        schemas(
            Batch,
            BatchName,
            Employee,
            NewEmployee,
            BankAccount,
            PayrollType,
            Currency,
            PaymentDetails,
            PaymentForm,
            PaymentOptions,
            PaymentPreview,
            PreviewLine,
            DashboardView,
            BatchView,
            PromptView,
            PaymentDialogView,
            EditDialogView,
            UploadFormat,
        )
    ),
    tags(
        (name = "Dashboard", description = "Snapshot, reload and confirmation prompt"),
        (name = "Batch", description = "Batch creation, renaming and deletion"),
        (name = "Employee", description = "Employees, assignment and bulk upload"),
        (name = "Payment", description = "Payment dialog")
    )
)]
pub struct ApiDoc;

/// Mount point the handlers document their paths under.
const DOCUMENTED_PREFIX: &str = "/dashboard";

impl ApiDoc {
    /// The document with its paths moved under `prefix`, matching where
    /// `routes::configure` mounted them.
    pub fn at_prefix(prefix: &str) -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        let prefix = prefix.trim_end_matches('/');
        let paths = std::mem::take(&mut doc.paths.paths);
        doc.paths.paths = paths
            .into_iter()
            .map(|(path, item)| {
                let rest = path.strip_prefix(DOCUMENTED_PREFIX).unwrap_or(&path);
                let moved = format!("{prefix}{rest}");
                if moved.is_empty() {
                    ("/".to_string(), item)
                } else {
                    (moved, item)
                }
            })
            .collect();
        doc
    }
}
