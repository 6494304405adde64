use crate::common::*;

fn default_max_prefix_length() -> usize {
    200
}

#[doc = "Tunables of the anomaly checks."]
#[derive(Serialize, Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct MonitorConfig {
    #[serde(default = "default_max_prefix_length")]
    pub max_prefix_length: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            max_prefix_length: default_max_prefix_length(),
        }
    }
}
