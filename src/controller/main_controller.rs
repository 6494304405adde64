use crate::common::*;

use crate::model::count_request::*;

use crate::traits::service::monitoring_service_trait::*;

#[derive(Debug, new)]
pub struct MainController<M: MonitoringService> {
    monitoring_service: Arc<M>,
}

impl<M> MainController<M>
where
    M: MonitoringService + Send + Sync + 'static,
{
    #[doc = "Runs one monitoring invocation and logs every alarm that went out."]
    pub async fn main_task(&self, request: &CountRequest) -> anyhow::Result<Vec<String>> {
        info!("Monitoring request: {:?}", request);

        let messages: Vec<String> = self.monitoring_service.run(request).await?;

        for message in &messages {
            info!("Alarm sent: {}", message);
        }

        Ok(messages)
    }
}
