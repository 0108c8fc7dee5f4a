use actix_web::{HttpResponse, web};
use strum::IntoEnumIterator;

use crate::dashboard::Dashboard;
use crate::error::ConsoleError;
use crate::model::{Currency, PayrollType};
use crate::models::{PaymentForm, PaymentOptions};

/// Choices offered by the payment dialog
#[utoipa::path(
    get,
    path = "/dashboard/payment/options",
    responses(
        (status = 200, body = PaymentOptions)
    ),
    tag = "Payment"
)]
pub async fn payment_options() -> HttpResponse {
    HttpResponse::Ok().json(PaymentOptions {
        payroll_types: PayrollType::iter().collect(),
        currencies: Currency::iter().collect(),
    })
}

/// Summarise the payment for the open dialog
#[utoipa::path(
    post,
    path = "/dashboard/payment/preview",
    request_body = PaymentForm,
    responses(
        (status = 200, body = crate::dashboard::PaymentPreview),
        (status = 422, description = "No payment dialog is open")
    ),
    tag = "Payment"
)]
pub async fn preview_payment(
    dashboard: web::Data<Dashboard>,
    form: web::Json<PaymentForm>,
) -> Result<HttpResponse, ConsoleError> {
    let preview = dashboard.payment_preview(&form)?;
    Ok(HttpResponse::Ok().json(preview))
}

/// Submit the payment
#[utoipa::path(
    post,
    path = "/dashboard/payment/confirm",
    request_body = PaymentForm,
    responses(
        (status = 200, description = "Backend accepted; batch status updated", body = crate::dashboard::DashboardView),
        (status = 409, description = "A payment is already being submitted"),
        (status = 422, description = "Dialog closed, batch empty or debit account missing"),
        (status = 502, description = "Backend failure; dialog stays open")
    ),
    tag = "Payment"
)]
pub async fn confirm_payment(
    dashboard: web::Data<Dashboard>,
    form: web::Json<PaymentForm>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.confirm_payment(&form).await?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Close the dialog keeping nothing but a log line
#[utoipa::path(
    post,
    path = "/dashboard/payment/draft",
    request_body = PaymentForm,
    responses(
        (status = 200, description = "The draft payload that was logged", body = crate::model::PaymentDetails),
        (status = 422, description = "No payment dialog is open")
    ),
    tag = "Payment"
)]
pub async fn draft_payment(
    dashboard: web::Data<Dashboard>,
    form: web::Json<PaymentForm>,
) -> Result<HttpResponse, ConsoleError> {
    let details = dashboard.draft_payment(&form)?;
    Ok(HttpResponse::Ok().json(details))
}

/// Close the payment dialog
#[utoipa::path(
    post,
    path = "/dashboard/payment/close",
    responses(
        (status = 200, body = crate::dashboard::DashboardView)
    ),
    tag = "Payment"
)]
pub async fn close_payment(dashboard: web::Data<Dashboard>) -> HttpResponse {
    dashboard.close_payment();
    HttpResponse::Ok().json(dashboard.view())
}
