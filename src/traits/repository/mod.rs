pub mod es_repository_trait;
pub mod query_template_repository_trait;
pub mod slack_repository_trait;
