use crate::common::*;

pub const DEFAULT_ENVIRONMENT: &str = "prod";
pub const DEFAULT_INTERVAL: &str = "1h";

#[doc = "Invocation input. Every field is optional; defaults are applied once at workflow entry."]
#[derive(Debug, Clone, Default, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct CountRequest {
    pub host: Option<String>,
    pub environment: Option<String>,
    pub interval: Option<String>,
}

impl CountRequest {
    #[doc = "Resolves the effective environment, falling back to 'prod'."]
    pub fn resolve_environment(&self) -> String {
        self.environment
            .clone()
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
    }

    #[doc = "Resolves the effective interval, falling back to '1h'."]
    pub fn resolve_interval(&self) -> String {
        self.interval
            .clone()
            .unwrap_or_else(|| DEFAULT_INTERVAL.to_string())
    }
}
