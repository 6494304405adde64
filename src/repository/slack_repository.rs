use crate::common::*;

use crate::enums::monitor_error::*;

use crate::traits::repository::slack_repository_trait::*;

/* Client 를 전역적으로 사용하기 위한 변수 선언 */
static REQ_CLIENT: once_lazy<Client> = once_lazy::new(Client::new);

const USER_NAME: &str = "log-monitor-to-slack";
const ICON_EMOJI: &str = ":octopus:";
const BUTTON_LABEL: &str = "Go to Kibana";
const ATTACHMENT_COLOR: &str = "#F35A00";

#[doc = "Builds the webhook payload: channel, text, username, icon and one button attachment."]
pub fn build_webhook_body(channel: &str, text: &str, button_url: Option<&str>) -> Value {
    let mut body: Value = serde_json::json!({
        "channel": channel,
        "icon_emoji": ICON_EMOJI,
        "text": text,
        "username": USER_NAME,
    });

    if let Some(url) = button_url {
        body["attachments"] = serde_json::json!([
            {
                "fallback": format!("Kibana URL: {}", url),
                "color": ATTACHMENT_COLOR,
                "actions": [
                    {
                        "type": "button",
                        "text": BUTTON_LABEL,
                        "url": url
                    }
                ]
            }
        ]);
    }

    body
}

#[derive(Clone, Debug, Getters, new)]
#[getset(get = "pub")]
pub struct SlackRepositoryImpl {
    pub webhook_url: String,
    pub channel: String,
}

impl SlackRepositoryImpl {
    #[doc = "Rejects a send before any network call when a required field is empty."]
    fn validate(&self, message: &str) -> Result<(), anyhow::Error> {
        if self.channel.is_empty() {
            return Err(
                MonitorError::InvalidNotificationRequest("Channel must not be empty".to_string())
                    .into(),
            );
        }

        if message.is_empty() {
            return Err(
                MonitorError::InvalidNotificationRequest("Message must not be empty".to_string())
                    .into(),
            );
        }

        if self.webhook_url.is_empty() {
            return Err(MonitorError::InvalidNotificationRequest(
                "Web Hook URL must not be empty".to_string(),
            )
            .into());
        }

        Ok(())
    }
}

#[async_trait]
impl SlackRepository for SlackRepositoryImpl {
    #[doc = "Posts one message to the webhook. The response body is logged, not interpreted."]
    async fn send_message(
        &self,
        message: &str,
        button_url: Option<&str>,
    ) -> Result<(), anyhow::Error> {
        self.validate(message)?;

        let body: Value = build_webhook_body(&self.channel, message, button_url);

        info!(
            "Executing HTTP Request. URL: {}. Body: {}",
            self.webhook_url, body
        );

        let response: reqwest::Response = REQ_CLIENT
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                MonitorError::NotificationDelivery(format!(
                    "[SlackRepositoryImpl::send_message] {:?}",
                    e
                ))
            })?;

        let response_text: String = response.text().await.unwrap_or_default();
        info!("HTTP Response body: {}", response_text);

        Ok(())
    }
}
