//! PayFlow API methods

use crate::client::{ClientError, PayflowClient};
use crate::types::{
    ClientDirectory, ClientProfile, LogEntry, LoginRequest, LoginResponse, ManualImportRequest,
    ManualImportResponse, OdooTestRequest, OdooTestResponse, StatusResponse,
};
use reqwest::Method;

impl PayflowClient {
    /// Check a password against the server
    pub async fn login(&self, password: &str) -> Result<LoginResponse, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/login")
            .json(&LoginRequest {
                password: password.to_string(),
            });
        self.execute(request).await
    }

    /// Latest synchronisation runs, newest first
    pub async fn list_logs(&self) -> Result<Vec<LogEntry>, ClientError> {
        let request = self.request(Method::GET, "/api/logs");
        self.execute(request).await
    }

    /// Configured clients, Odoo passwords masked
    pub async fn list_clients(&self) -> Result<ClientDirectory, ClientError> {
        let request = self.request(Method::GET, "/api/clients");
        self.execute(request).await
    }

    /// Create or update a client
    pub async fn save_client(
        &self,
        doc_id: &str,
        profile: &ClientProfile,
    ) -> Result<StatusResponse, ClientError> {
        let request = self
            .request(Method::POST, &format!("/api/clients/{doc_id}"))
            .json(profile);
        self.execute(request).await
    }

    /// Verify Odoo credentials and list the companies and journals they reach
    pub async fn test_odoo(&self, req: &OdooTestRequest) -> Result<OdooTestResponse, ClientError> {
        let request = self.request(Method::POST, "/api/test-odoo").json(req);
        self.execute(request).await
    }

    /// Import the given months of one client
    pub async fn manual_import(
        &self,
        req: &ManualImportRequest,
    ) -> Result<ManualImportResponse, ClientError> {
        let request = self.request(Method::POST, "/api/import/manual").json(req);
        self.execute(request).await
    }
}
