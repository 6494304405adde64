use crate::common::*;

#[async_trait]
pub trait SlackRepository {
    async fn send_message(
        &self,
        message: &str,
        button_url: Option<&str>,
    ) -> Result<(), anyhow::Error>;
}
