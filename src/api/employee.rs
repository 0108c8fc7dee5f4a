use actix_web::{HttpResponse, web};

use crate::dashboard::Dashboard;
use crate::error::ConsoleError;
use crate::model::NewEmployee;
use crate::models::UploadQuery;
use crate::utils::upload::UploadFormat;

/// Create Employee
#[utoipa::path(
    post,
    path = "/dashboard/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created and listed first", body = crate::dashboard::DashboardView),
        (status = 502, description = "Backend failure", body = Object, example = json!({
            "error": "Failed to add employee: HTTP error! Status: 400 - Salary amount must be positive"
        }))
    ),
    tag = "Employee"
)]
pub async fn add_employee(
    dashboard: web::Data<Dashboard>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.add_employee(&payload).await?;
    Ok(HttpResponse::Created().json(dashboard.view()))
}

/// Ask for confirmation before deleting an employee
#[utoipa::path(
    delete,
    path = "/dashboard/employees/{employee_id}",
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Confirmation prompt opened", body = crate::dashboard::DashboardView),
        (status = 404, description = "Employee not loaded")
    ),
    tag = "Employee"
)]
pub async fn request_delete_employee(
    dashboard: web::Data<Dashboard>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.request_delete_employee(path.into_inner())?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Assign an employee to a batch
#[utoipa::path(
    put,
    path = "/dashboard/employees/{employee_id}/assign/{batch_id}",
    params(
        ("employee_id", description = "Employee ID"),
        ("batch_id", description = "Batch ID")
    ),
    responses(
        (status = 200, body = crate::dashboard::DashboardView),
        (status = 502, description = "Backend failure")
    ),
    tag = "Employee"
)]
pub async fn assign_employee(
    dashboard: web::Data<Dashboard>,
    path: web::Path<(u64, u64)>,
) -> Result<HttpResponse, ConsoleError> {
    let (employee_id, batch_id) = path.into_inner();
    dashboard.assign_employee(employee_id, batch_id).await?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Remove an employee from its batch
#[utoipa::path(
    put,
    path = "/dashboard/employees/{employee_id}/unassign",
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, body = crate::dashboard::DashboardView),
        (status = 502, description = "Backend failure")
    ),
    tag = "Employee"
)]
pub async fn unassign_employee(
    dashboard: web::Data<Dashboard>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.unassign_employee(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Bulk upload employees from a spreadsheet
///
/// The request body is the raw file. The backend parses it and creates a
/// batch named after the file; the dashboard then reloads everything.
#[utoipa::path(
    post,
    path = "/dashboard/employees/bulk-upload",
    params(UploadQuery),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Uploaded and reloaded", body = crate::dashboard::DashboardView),
        (status = 422, description = "Not an .xlsx or .csv file"),
        (status = 502, description = "Backend rejected the file")
    ),
    tag = "Employee"
)]
pub async fn bulk_upload(
    dashboard: web::Data<Dashboard>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, ConsoleError> {
    dashboard.bulk_upload(&query.file_name, body.to_vec()).await?;
    Ok(HttpResponse::Ok().json(dashboard.view()))
}

/// Expected spreadsheet headers
#[utoipa::path(
    get,
    path = "/dashboard/employees/bulk-upload",
    responses(
        (status = 200, body = UploadFormat)
    ),
    tag = "Employee"
)]
pub async fn bulk_upload_format() -> HttpResponse {
    HttpResponse::Ok().json(UploadFormat::spreadsheet())
}
