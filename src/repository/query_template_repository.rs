use crate::common::*;

use crate::enums::monitor_error::*;

use crate::traits::repository::query_template_repository_trait::*;

use crate::utils_modules::io_utils::*;

pub const COUNT_LOGS_TEMPLATE: &str = "count_logs";
pub const COUNT_ERRORS_TEMPLATE: &str = "count_errors";
pub const SEARCH_ERRORS_TEMPLATE: &str = "search_errors";
pub const COUNT_TRUNCATED_MESSAGES_TEMPLATE: &str = "count_truncated_messages";

const ENVIRONMENT_SLOT: &str = "{environment}";
const INTERVAL_SLOT: &str = "{interval}";

#[doc = "Loads query templates from a static directory and substitutes the two named slots."]
/*
    Templates are JSON files named `<template_name>.json`. Each must contain
    both the `{environment}` and `{interval}` placeholders; a template
    missing a slot is a configuration error, not a runtime condition.
*/
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct QueryTemplateRepositoryImpl {
    pub template_dir: PathBuf,
}

impl QueryTemplateRepository for QueryTemplateRepositoryImpl {
    #[doc = "Renders the named template into a finished query body."]
    /// # Arguments
    /// * `template_name` - Template file name without the `.json` suffix
    /// * `environment`   - Logical deployment tag
    /// * `interval`      - Duration string, e.g. `1h`, `7d`
    ///
    /// # Returns
    /// * Result<Value, anyhow::Error> - Parsed query body
    fn render(
        &self,
        template_name: &str,
        environment: &str,
        interval: &str,
    ) -> Result<Value, anyhow::Error> {
        let template_path: PathBuf = self.template_dir.join(format!("{}.json", template_name));

        if !template_path.exists() {
            return Err(MonitorError::TemplateNotFound(
                template_path.display().to_string(),
            )
            .into());
        }

        let template_text: String = read_file_to_string(&template_path)?;

        info!("Query template '{}': {}", template_name, template_text);

        for slot in [ENVIRONMENT_SLOT, INTERVAL_SLOT] {
            if !template_text.contains(slot) {
                return Err(MonitorError::TemplateRender {
                    name: template_name.to_string(),
                    reason: format!("substitution slot '{}' is missing", slot),
                }
                .into());
            }
        }

        let query_text: String = template_text
            .replace(ENVIRONMENT_SLOT, environment)
            .replace(INTERVAL_SLOT, interval);

        info!("Rendered query: {}", query_text);

        let query: Value =
            serde_json::from_str(&query_text).map_err(|e| MonitorError::TemplateRender {
                name: template_name.to_string(),
                reason: format!("rendered text is not valid JSON: {:?}", e),
            })?;

        Ok(query)
    }
}
