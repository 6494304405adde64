use crate::common::*;

use crate::traits::repository::slack_repository_trait::*;
use crate::traits::service::notification_service_trait::*;

#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct NotificationServiceImpl<S: SlackRepository> {
    slack_repository: Arc<S>,
}

#[async_trait]
impl<S> NotificationService for NotificationServiceImpl<S>
where
    S: SlackRepository + Sync + Send,
{
    #[doc = "Delivers one alarm with its dashboard button to the chat channel."]
    async fn send_alarm(&self, message: &str, button_url: &str) -> Result<(), anyhow::Error> {
        self.slack_repository
            .send_message(message, Some(button_url))
            .await?;

        info!("Successfully sent alarm message");

        Ok(())
    }
}
