use actix_web::{HttpResponse, web};

use crate::dashboard::Dashboard;
use crate::error::ConsoleError;

/// Current dashboard snapshot
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Collections, dialogs and the current error", body = crate::dashboard::DashboardView)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(dashboard: web::Data<Dashboard>) -> HttpResponse {
    HttpResponse::Ok().json(dashboard.view())
}

/// Re-fetch batches, employees and bank accounts
#[utoipa::path(
    post,
    path = "/dashboard/reload",
    responses(
        (status = 200, body = crate::dashboard::DashboardView),
        (status = 409, description = "A load is already running"),
        (status = 502, description = "Backend failure; previous collections kept")
    ),
    tag = "Dashboard"
)]
pub async fn reload(dashboard: web::Data<Dashboard>) -> Result<HttpResponse, ConsoleError> {
    dashboard.load().await?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Bank accounts fetched at load time
#[utoipa::path(
    get,
    path = "/dashboard/bank-accounts",
    responses(
        (status = 200, body = [crate::model::BankAccount])
    ),
    tag = "Dashboard"
)]
pub async fn bank_accounts(dashboard: web::Data<Dashboard>) -> HttpResponse {
    HttpResponse::Ok().json(dashboard.bank_accounts())
}

/// Run the action behind the open confirmation prompt
#[utoipa::path(
    post,
    path = "/dashboard/prompt/confirm",
    responses(
        (status = 200, description = "Action done, or no prompt was open", body = crate::dashboard::DashboardView),
        (status = 502, description = "Backend failure; prompt stays open")
    ),
    tag = "Dashboard"
)]
pub async fn confirm_prompt(
    dashboard: web::Data<Dashboard>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.confirm_prompt().await?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Dismiss the confirmation prompt
#[utoipa::path(
    post,
    path = "/dashboard/prompt/cancel",
    responses(
        (status = 200, body = crate::dashboard::DashboardView)
    ),
    tag = "Dashboard"
)]
pub async fn cancel_prompt(dashboard: web::Data<Dashboard>) -> HttpResponse {
    dashboard.cancel_prompt();
    HttpResponse::Ok().json(dashboard.view())
}
