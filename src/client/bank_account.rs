use tracing::instrument;

use super::{ApiError, BackendClient, handle_response, require_body};
use crate::model::BankAccount;

impl BackendClient {
    #[instrument(name = "backend_list_bank_accounts", skip(self))]
    pub async fn list_bank_accounts(&self) -> Result<Vec<BankAccount>, ApiError> {
        let path = "/bank-accounts";
        let resp = self.http.get(self.url(path)).send().await?;
        require_body(path, handle_response(path, resp).await?)
    }
}
