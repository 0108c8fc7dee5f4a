use tracing::instrument;

use super::{ApiError, BackendClient, handle_response, require_body};
use crate::model::{Batch, BatchName, PaymentDetails};

impl BackendClient {
    #[instrument(name = "backend_list_batches", skip(self))]
    pub async fn list_batches(&self) -> Result<Vec<Batch>, ApiError> {
        let path = "/batches";
        let resp = self.http.get(self.url(path)).send().await?;
        require_body(path, handle_response(path, resp).await?)
    }

    #[instrument(name = "backend_create_batch", skip(self))]
    pub async fn create_batch(&self, name: &str) -> Result<Batch, ApiError> {
        let path = "/batches";
        let resp = self
            .http
            .post(self.url(path))
            .json(&BatchName { name: name.to_string() })
            .send()
            .await?;
        require_body(path, handle_response(path, resp).await?)
    }

    #[instrument(name = "backend_rename_batch", skip(self))]
    pub async fn rename_batch(&self, batch_id: u64, name: &str) -> Result<Batch, ApiError> {
        let path = format!("/batches/{batch_id}");
        let resp = self
            .http
            .put(self.url(&path))
            .json(&BatchName { name: name.to_string() })
            .send()
            .await?;
        require_body(&path, handle_response(&path, resp).await?)
    }

    #[instrument(name = "backend_delete_batch", skip(self))]
    pub async fn delete_batch(&self, batch_id: u64) -> Result<(), ApiError> {
        let path = format!("/batches/{batch_id}");
        let resp = self.http.delete(self.url(&path)).send().await?;
        handle_response::<serde_json::Value>(&path, resp).await?;
        Ok(())
    }

    #[instrument(name = "backend_initiate_payment", skip(self, details))]
    pub async fn initiate_payment(
        &self,
        batch_id: u64,
        details: &PaymentDetails,
    ) -> Result<Batch, ApiError> {
        let path = format!("/batches/{batch_id}/initiate-payment");
        let resp = self.http.post(self.url(&path)).json(details).send().await?;
        require_body(&path, handle_response(&path, resp).await?)
    }
}
