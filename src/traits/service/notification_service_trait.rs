use crate::common::*;

#[async_trait]
pub trait NotificationService {
    async fn send_alarm(&self, message: &str, button_url: &str) -> Result<(), anyhow::Error>;
}
