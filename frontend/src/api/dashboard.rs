use super::{
    client::ApiClient,
    types::{ApiError, DashboardSnapshot},
};

impl ApiClient {
    pub async fn get_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        let url = self.endpoint("/dashboard/").await;
        self.request_json(self.http_client().get(url)).await
    }
}
