pub mod es_repository;
pub mod query_template_repository;
pub mod slack_repository;
