use thiserror::Error;

#[doc = "Failure classes of a single monitoring invocation."]
/*
    Template and backend errors abort the invocation.
    Notification errors are recovered at the workflow boundary.
*/
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("query template not found: {0}")]
    TemplateNotFound(String),

    #[error("query template '{name}' could not be rendered: {reason}")]
    TemplateRender { name: String, reason: String },

    #[error("search backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("unexpected search backend response: {0}")]
    BackendResponse(String),

    #[error("invalid notification request: {0}")]
    InvalidNotificationRequest(String),

    #[error("notification delivery failed: {0}")]
    NotificationDelivery(String),
}
