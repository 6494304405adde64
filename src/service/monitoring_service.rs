use crate::common::*;

use crate::model::configs::monitor_config::*;
use crate::model::count_request::*;
use crate::model::error_group::*;

use crate::repository::query_template_repository::*;

use crate::traits::repository::{es_repository_trait::*, query_template_repository_trait::*};
use crate::traits::service::{monitoring_service_trait::*, notification_service_trait::*};

use crate::utils_modules::kibana_utils::*;

#[doc = "Decision workflow: count logs, count errors, group them, check truncated messages."]
#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct MonitoringServiceImpl<Q: QueryTemplateRepository, E: EsRepository, N: NotificationService>
{
    query_template_repository: Arc<Q>,
    es_repository: Arc<E>,
    notification_service: Arc<N>,
    kibana_host: String,
    monitor_config: MonitorConfig,
}

impl<Q, E, N> MonitoringServiceImpl<Q, E, N>
where
    Q: QueryTemplateRepository + Sync + Send,
    E: EsRepository + Sync + Send,
    N: NotificationService + Sync + Send,
{
    #[doc = "Renders one count template and executes it."]
    async fn execute_count(
        &self,
        template_name: &str,
        environment: &str,
        interval: &str,
    ) -> Result<u64, anyhow::Error> {
        let query: Value = self
            .query_template_repository
            .render(template_name, environment, interval)?;

        let count: u64 = self.es_repository.get_count(&query).await?;

        info!("{} count: {}", template_name, count);

        Ok(count)
    }

    #[doc = "Sends one alarm. Delivery failure is logged, never escalated."]
    /*
        The anomaly was already established from the counts; a lost
        notification must not fail the whole invocation.
    */
    async fn dispatch_alarm(&self, message: &str, button_url: &str) {
        if let Err(e) = self
            .notification_service
            .send_alarm(message, button_url)
            .await
        {
            error!(
                "[MonitoringServiceImpl::dispatch_alarm] Failed to deliver alarm: {:?}",
                e
            );
        }
    }

    async fn handle_no_logs_found(&self, environment: &str, interval: &str) -> String {
        let message: String = format!(
            "No log entries found in *{}* environment in the last *{}*",
            environment, interval
        );

        let kibana_url: String = build_discover_url(&self.kibana_host, interval, environment);

        self.dispatch_alarm(&message, &kibana_url).await;

        message
    }

    async fn handle_errors_found(
        &self,
        environment: &str,
        interval: &str,
        errors_count: u64,
    ) -> Result<String, anyhow::Error> {
        let search_query: Value =
            self.query_template_repository
                .render(SEARCH_ERRORS_TEMPLATE, environment, interval)?;

        let messages: Vec<String> = self.es_repository.get_search_messages(&search_query).await?;

        let error_group: ErrorGroup =
            ErrorGroup::from_messages(&messages, *self.monitor_config.max_prefix_length());

        let message_details: String = error_group
            .sorted_entries()
            .into_iter()
            .map(|(prefix, count)| format!("\u{2022} *{}*: {}", count, prefix))
            .collect::<Vec<String>>()
            .join("\n");

        let message: String = format!(
            "*{}* errors found in *{}* environment in the last *{}*\n>>>\n {}",
            errors_count, environment, interval, message_details
        );

        let kibana_url: String = build_errors_url(&self.kibana_host, interval, environment);

        self.dispatch_alarm(&message, &kibana_url).await;

        Ok(message)
    }

    async fn handle_truncated_messages_found(
        &self,
        environment: &str,
        interval: &str,
        truncated_count: u64,
    ) -> String {
        let message: String = format!(
            "*{}* messages truncated in *{}* environment in the last *{}*",
            truncated_count, environment, interval
        );

        let kibana_url: String =
            build_truncated_messages_url(&self.kibana_host, interval, environment);

        self.dispatch_alarm(&message, &kibana_url).await;

        message
    }
}

#[async_trait]
impl<Q, E, N> MonitoringService for MonitoringServiceImpl<Q, E, N>
where
    Q: QueryTemplateRepository + Sync + Send,
    E: EsRepository + Sync + Send,
    N: NotificationService + Sync + Send,
{
    #[doc = "Runs one monitoring invocation and returns every alarm message it composed."]
    /// # Arguments
    /// * `request` - Invocation input; absent fields fall back to defaults
    ///
    /// # Returns
    /// * Result<Vec<String>, anyhow::Error> - Sent messages in decision order
    async fn run(&self, request: &CountRequest) -> Result<Vec<String>, anyhow::Error> {
        let environment: String = request.resolve_environment();
        let interval: String = request.resolve_interval();

        let mut messages: Vec<String> = Vec::new();

        let log_entries_count: u64 = self
            .execute_count(COUNT_LOGS_TEMPLATE, &environment, &interval)
            .await?;

        if log_entries_count == 0 {
            let message: String = self.handle_no_logs_found(&environment, &interval).await;
            messages.push(message);
            return Ok(messages);
        }

        let errors_count: u64 = self
            .execute_count(COUNT_ERRORS_TEMPLATE, &environment, &interval)
            .await?;

        if errors_count > 0 {
            let message: String = self
                .handle_errors_found(&environment, &interval, errors_count)
                .await?;
            messages.push(message);
        }

        let truncated_count: u64 = self
            .execute_count(COUNT_TRUNCATED_MESSAGES_TEMPLATE, &environment, &interval)
            .await?;

        if truncated_count > 0 {
            let message: String = self
                .handle_truncated_messages_found(&environment, &interval, truncated_count)
                .await;
            messages.push(message);
        }

        if messages.is_empty() {
            info!("NO message was sent to slack");
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::monitor_error::*;
    use std::sync::Mutex;

    /* template mock: renders to a body tagging which template was asked for */
    struct StubTemplateRepository;

    impl QueryTemplateRepository for StubTemplateRepository {
        fn render(
            &self,
            template_name: &str,
            environment: &str,
            interval: &str,
        ) -> Result<Value, anyhow::Error> {
            Ok(serde_json::json!({
                "template": template_name,
                "environment": environment,
                "interval": interval,
            }))
        }
    }

    /* backend mock: fixed counts per template plus canned search hits */
    struct StubEsRepository {
        log_count: u64,
        error_count: u64,
        truncated_count: u64,
        hit_messages: Vec<String>,
    }

    #[async_trait]
    impl EsRepository for StubEsRepository {
        async fn get_count(&self, es_query: &Value) -> Result<u64, anyhow::Error> {
            match es_query["template"].as_str() {
                Some(COUNT_LOGS_TEMPLATE) => Ok(self.log_count),
                Some(COUNT_ERRORS_TEMPLATE) => Ok(self.error_count),
                Some(COUNT_TRUNCATED_MESSAGES_TEMPLATE) => Ok(self.truncated_count),
                other => Err(anyhow!("unexpected count template: {:?}", other)),
            }
        }

        async fn get_search_messages(
            &self,
            _es_query: &Value,
        ) -> Result<Vec<String>, anyhow::Error> {
            Ok(self.hit_messages.clone())
        }
    }

    struct FailingEsRepository;

    #[async_trait]
    impl EsRepository for FailingEsRepository {
        async fn get_count(&self, _es_query: &Value) -> Result<u64, anyhow::Error> {
            Err(MonitorError::BackendUnavailable("connection refused".to_string()).into())
        }

        async fn get_search_messages(
            &self,
            _es_query: &Value,
        ) -> Result<Vec<String>, anyhow::Error> {
            Err(MonitorError::BackendUnavailable("connection refused".to_string()).into())
        }
    }

    /* notification mock: records what would have gone to the webhook */
    struct RecordingNotificationService {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl RecordingNotificationService {
        fn new(fail: bool) -> Self {
            RecordingNotificationService {
                sent: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl NotificationService for RecordingNotificationService {
        async fn send_alarm(&self, message: &str, button_url: &str) -> Result<(), anyhow::Error> {
            if self.fail {
                return Err(
                    MonitorError::NotificationDelivery("webhook unreachable".to_string()).into(),
                );
            }

            self.sent
                .lock()
                .unwrap()
                .push((message.to_string(), button_url.to_string()));
            Ok(())
        }
    }

    fn workflow(
        es: StubEsRepository,
        notifications: Arc<RecordingNotificationService>,
    ) -> MonitoringServiceImpl<StubTemplateRepository, StubEsRepository, RecordingNotificationService>
    {
        MonitoringServiceImpl::new(
            Arc::new(StubTemplateRepository),
            Arc::new(es),
            notifications,
            "https://kibana.example.com".to_string(),
            MonitorConfig::default(),
        )
    }

    #[tokio::test]
    async fn zero_logs_sends_the_no_logs_message_and_stops() {
        let notifications: Arc<RecordingNotificationService> =
            Arc::new(RecordingNotificationService::new(false));
        let service = workflow(
            StubEsRepository {
                log_count: 0,
                error_count: 99,
                truncated_count: 99,
                hit_messages: vec![],
            },
            Arc::clone(&notifications),
        );

        let request: CountRequest = CountRequest::new(
            Some("http://localhost:9999".to_string()),
            Some("prod".to_string()),
            Some("1s".to_string()),
        );

        let messages: Vec<String> = service.run(&request).await.unwrap();

        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("No log entries found in *prod* environment in the last *1s*"));

        let sent = notifications.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.contains("from:now-1s"));
    }

    #[tokio::test]
    async fn errors_are_grouped_ranked_and_reported() {
        let notifications: Arc<RecordingNotificationService> =
            Arc::new(RecordingNotificationService::new(false));

        let mut hits: Vec<String> = vec!["timeout calling contacts".to_string(); 5];
        hits.extend(vec!["null pointer in mapper".to_string(); 3]);

        let service = workflow(
            StubEsRepository {
                log_count: 120,
                error_count: 8,
                truncated_count: 0,
                hit_messages: hits,
            },
            Arc::clone(&notifications),
        );

        let request: CountRequest =
            CountRequest::new(None, Some("prod".to_string()), Some("7d".to_string()));

        let messages: Vec<String> = service.run(&request).await.unwrap();

        assert_eq!(messages.len(), 1);
        let message: &String = &messages[0];

        assert!(message.contains("*8* errors found in *prod* environment in the last *7d*"));

        let first_bullet: usize = message.find("\u{2022} *5*: timeout calling contacts").unwrap();
        let second_bullet: usize = message.find("\u{2022} *3*: null pointer in mapper").unwrap();
        assert!(first_bullet < second_bullet);
    }

    #[tokio::test]
    async fn no_errors_but_truncated_messages_sends_exactly_one_message() {
        let notifications: Arc<RecordingNotificationService> =
            Arc::new(RecordingNotificationService::new(false));
        let service = workflow(
            StubEsRepository {
                log_count: 50,
                error_count: 0,
                truncated_count: 4,
                hit_messages: vec![],
            },
            Arc::clone(&notifications),
        );

        let request: CountRequest =
            CountRequest::new(None, Some("prod".to_string()), Some("1h".to_string()));

        let messages: Vec<String> = service.run(&request).await.unwrap();

        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("*4* messages truncated in *prod* environment in the last *1h*"));
        assert!(!messages[0].contains("errors found"));
    }

    #[tokio::test]
    async fn errors_and_truncated_messages_yield_two_messages_in_order() {
        let notifications: Arc<RecordingNotificationService> =
            Arc::new(RecordingNotificationService::new(false));
        let service = workflow(
            StubEsRepository {
                log_count: 50,
                error_count: 2,
                truncated_count: 1,
                hit_messages: vec!["boom".to_string(), "boom".to_string()],
            },
            Arc::clone(&notifications),
        );

        let messages: Vec<String> = service.run(&CountRequest::default()).await.unwrap();

        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("errors found"));
        assert!(messages[1].contains("messages truncated"));
    }

    #[tokio::test]
    async fn healthy_run_sends_nothing() {
        let notifications: Arc<RecordingNotificationService> =
            Arc::new(RecordingNotificationService::new(false));
        let service = workflow(
            StubEsRepository {
                log_count: 100,
                error_count: 0,
                truncated_count: 0,
                hit_messages: vec![],
            },
            Arc::clone(&notifications),
        );

        let messages: Vec<String> = service.run(&CountRequest::default()).await.unwrap();

        assert!(messages.is_empty());
        assert!(notifications.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn defaults_flow_into_the_message_text() {
        let notifications: Arc<RecordingNotificationService> =
            Arc::new(RecordingNotificationService::new(false));
        let service = workflow(
            StubEsRepository {
                log_count: 0,
                error_count: 0,
                truncated_count: 0,
                hit_messages: vec![],
            },
            Arc::clone(&notifications),
        );

        let messages: Vec<String> = service.run(&CountRequest::default()).await.unwrap();

        assert!(messages[0].contains("No log entries found in *prod* environment in the last *1h*"));
    }

    #[tokio::test]
    async fn backend_failure_aborts_with_no_messages() {
        let notifications: Arc<RecordingNotificationService> =
            Arc::new(RecordingNotificationService::new(false));
        let service = MonitoringServiceImpl::new(
            Arc::new(StubTemplateRepository),
            Arc::new(FailingEsRepository),
            Arc::clone(&notifications),
            "https://kibana.example.com".to_string(),
            MonitorConfig::default(),
        );

        let err: anyhow::Error = service.run(&CountRequest::default()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MonitorError>(),
            Some(MonitorError::BackendUnavailable(_))
        ));
        assert!(notifications.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_does_not_abort_the_invocation() {
        let notifications: Arc<RecordingNotificationService> =
            Arc::new(RecordingNotificationService::new(true));
        let service = workflow(
            StubEsRepository {
                log_count: 0,
                error_count: 0,
                truncated_count: 0,
                hit_messages: vec![],
            },
            Arc::clone(&notifications),
        );

        let messages: Vec<String> = service.run(&CountRequest::default()).await.unwrap();

        /* the composed message is still reported even though delivery failed */
        assert_eq!(messages.len(), 1);
    }
}
