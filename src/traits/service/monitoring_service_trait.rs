use crate::common::*;

use crate::model::count_request::*;

#[async_trait]
pub trait MonitoringService {
    async fn run(&self, request: &CountRequest) -> Result<Vec<String>, anyhow::Error>;
}
