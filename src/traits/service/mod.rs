pub mod monitoring_service_trait;
pub mod notification_service_trait;
