use crate::common::*;

pub trait QueryTemplateRepository {
    fn render(
        &self,
        template_name: &str,
        environment: &str,
        interval: &str,
    ) -> Result<Value, anyhow::Error>;
}
