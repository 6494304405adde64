use crate::common::*;

#[derive(Serialize, Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct SlackConfig {
    pub webhook_url: String,
    pub channel: String,
}
