use actix_web::{HttpResponse, web};

use crate::dashboard::Dashboard;
use crate::error::ConsoleError;
use crate::model::BatchName;

/// Create Batch
#[utoipa::path(
    post,
    path = "/dashboard/batches",
    request_body = BatchName,
    responses(
        (status = 201, description = "Batch created and listed first", body = crate::dashboard::DashboardView),
        (status = 422, description = "Blank name"),
        (status = 502, description = "Backend failure", body = Object, example = json!({
            "error": "Failed to add batch: HTTP error! Status: 400 - Batch name already exists"
        }))
    ),
    tag = "Batch"
)]
pub async fn add_batch(
    dashboard: web::Data<Dashboard>,
    payload: web::Json<BatchName>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.add_batch(&payload.name).await?;
    Ok(HttpResponse::Created().json(dashboard.view()))
}

/// Rename Batch (confirms the edit dialog)
#[utoipa::path(
    put,
    path = "/dashboard/batches/{batch_id}",
    request_body = BatchName,
    params(
        ("batch_id", description = "Batch ID")
    ),
    responses(
        (status = 200, body = crate::dashboard::DashboardView),
        (status = 502, description = "Backend failure; edit dialog stays open")
    ),
    tag = "Batch"
)]
pub async fn rename_batch(
    dashboard: web::Data<Dashboard>,
    path: web::Path<u64>,
    payload: web::Json<BatchName>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.rename_batch(path.into_inner(), &payload.name).await?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Ask for confirmation before deleting a batch
#[utoipa::path(
    delete,
    path = "/dashboard/batches/{batch_id}",
    params(
        ("batch_id", description = "Batch ID")
    ),
    responses(
        (status = 200, description = "Confirmation prompt opened", body = crate::dashboard::DashboardView),
        (status = 404, description = "Batch not loaded")
    ),
    tag = "Batch"
)]
pub async fn request_delete_batch(
    dashboard: web::Data<Dashboard>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.request_delete_batch(path.into_inner())?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Open the edit dialog for a batch
#[utoipa::path(
    post,
    path = "/dashboard/batches/{batch_id}/edit",
    params(
        ("batch_id", description = "Batch ID")
    ),
    responses(
        (status = 200, body = crate::dashboard::DashboardView),
        (status = 404, description = "Batch not loaded")
    ),
    tag = "Batch"
)]
pub async fn open_edit_batch(
    dashboard: web::Data<Dashboard>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.open_edit_batch(path.into_inner())?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Close the edit dialog
#[utoipa::path(
    post,
    path = "/dashboard/edit/close",
    responses(
        (status = 200, body = crate::dashboard::DashboardView)
    ),
    tag = "Batch"
)]
pub async fn close_edit_batch(dashboard: web::Data<Dashboard>) -> HttpResponse {
    dashboard.close_edit_batch();
    HttpResponse::Ok().json(dashboard.view())
}

/// Open the payment dialog for a batch
#[utoipa::path(
    post,
    path = "/dashboard/batches/{batch_id}/payment",
    params(
        ("batch_id", description = "Batch ID")
    ),
    responses(
        (status = 200, body = crate::dashboard::DashboardView),
        (status = 404, description = "Batch not loaded"),
        (status = 422, description = "No employees are assigned to the batch")
    ),
    tag = "Payment"
)]
pub async fn open_payment(
    dashboard: web::Data<Dashboard>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.open_payment(path.into_inner())?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}
