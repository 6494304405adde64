pub mod config;
pub mod elastic_config;
pub mod monitor_config;
pub mod slack_config;
