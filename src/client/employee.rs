use reqwest::multipart::{Form, Part};
use tracing::instrument;

use super::{ApiError, BackendClient, handle_response, require_body};
use crate::model::{Employee, NewEmployee};

impl BackendClient {
    #[instrument(name = "backend_list_employees", skip(self))]
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let path = "/employees";
        let resp = self.http.get(self.url(path)).send().await?;
        require_body(path, handle_response(path, resp).await?)
    }

    #[instrument(name = "backend_add_employee", skip(self, employee), fields(name = %employee.name))]
    pub async fn add_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        let path = "/employees";
        let resp = self.http.post(self.url(path)).json(employee).send().await?;
        require_body(path, handle_response(path, resp).await?)
    }

    #[instrument(name = "backend_delete_employee", skip(self))]
    pub async fn delete_employee(&self, employee_id: u64) -> Result<(), ApiError> {
        let path = format!("/employees/{employee_id}");
        let resp = self.http.delete(self.url(&path)).send().await?;
        handle_response::<serde_json::Value>(&path, resp).await?;
        Ok(())
    }

    #[instrument(name = "backend_assign_employee", skip(self))]
    pub async fn assign_employee(
        &self,
        employee_id: u64,
        batch_id: u64,
    ) -> Result<Employee, ApiError> {
        let path = format!("/employees/{employee_id}/assign/{batch_id}");
        let resp = self.http.put(self.url(&path)).send().await?;
        require_body(&path, handle_response(&path, resp).await?)
    }

    #[instrument(name = "backend_unassign_employee", skip(self))]
    pub async fn unassign_employee(&self, employee_id: u64) -> Result<Employee, ApiError> {
        let path = format!("/employees/{employee_id}/unassign");
        let resp = self.http.put(self.url(&path)).send().await?;
        require_body(&path, handle_response(&path, resp).await?)
    }

    /// The reply is ignored; callers re-fetch everything afterwards.
    #[instrument(name = "backend_bulk_upload", skip(self, contents), fields(bytes = contents.len()))]
    pub async fn bulk_upload_employees(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<(), ApiError> {
        let path = "/employees/bulk-upload";
        let form = Form::new().part("file", Part::bytes(contents).file_name(file_name.to_string()));
        let resp = self.http.post(self.url(path)).multipart(form).send().await?;
        handle_response::<serde_json::Value>(path, resp).await?;
        Ok(())
    }
}
