use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::configs::{elastic_config::*, monitor_config::*, slack_config::*};

use crate::env_configuration::env_config::*;

static SERVER_CONFIG: once_lazy<Arc<Config>> =
    once_lazy::new(|| Arc::new(initialize_server_config()));

#[doc = "Function to initialize System configuration information instances"]
pub fn initialize_server_config() -> Config {
    info!("initialize_server_config() START!");

    let system_config: Config = Config::new();
    system_config
}

#[doc = "Elasticsearch config 정보"]
pub fn get_elastic_config_info() -> Arc<ElasticConfig> {
    let elastic_config: &Arc<ElasticConfig> = &SERVER_CONFIG.elastic;
    Arc::clone(elastic_config)
}

#[doc = "Slack config 정보"]
pub fn get_slack_config_info() -> Arc<SlackConfig> {
    let slack_config: &Arc<SlackConfig> = &SERVER_CONFIG.slack;
    Arc::clone(slack_config)
}

#[doc = "Monitor config 정보"]
pub fn get_monitor_config_info() -> Arc<MonitorConfig> {
    let monitor_config: &Arc<MonitorConfig> = &SERVER_CONFIG.monitor;
    Arc::clone(monitor_config)
}

#[derive(Debug)]
pub struct Config {
    pub elastic: Arc<ElasticConfig>,
    pub slack: Arc<SlackConfig>,
    pub monitor: Arc<MonitorConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConfigNotSafe {
    pub elastic: ElasticConfig,
    pub slack: SlackConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
}

impl Config {
    pub fn new() -> Self {
        let system_config: ConfigNotSafe =
            match read_toml_from_file::<ConfigNotSafe>(&SYSTEM_CONFIG_PATH) {
                Ok(system_config) => system_config,
                Err(e) => {
                    error!(
                        "[Error][Config::new()] Failed to retrieve information 'system_config'. : {:?}",
                        e
                    );
                    panic!(
                        "[Error][Config::new()] Failed to retrieve information 'system_config'. : {:?}",
                        e
                    );
                }
            };

        Config {
            elastic: Arc::new(system_config.elastic),
            slack: Arc::new(system_config.slack),
            monitor: Arc::new(system_config.monitor),
        }
    }
}
