pub mod monitoring_service;
pub mod notification_service;
