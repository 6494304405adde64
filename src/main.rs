/*
    Scheduled job that checks whether a log store received entries recently
    and alerts a Slack channel when something is off: no log entries at all,
    errors in the window, or truncated messages in the window.

    One process run is one invocation; the external scheduler provides the
    cadence and any retry policy.
*/
mod common;
use common::*;

mod controller;
use controller::main_controller::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{monitoring_service::*, notification_service::*};

mod model;
use model::configs::config::*;
use model::configs::{elastic_config::*, monitor_config::*, slack_config::*};
use model::count_request::*;

mod repository;
use repository::es_repository::*;
use repository::query_template_repository::*;
use repository::slack_repository::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod enums;

#[doc = "Reads the invocation request from the first CLI argument, if any."]
fn parse_request() -> CountRequest {
    match std::env::args().nth(1) {
        Some(raw) => match serde_json::from_str::<CountRequest>(&raw) {
            Ok(request) => request,
            Err(e) => {
                error!("[main::parse_request] Invalid request argument: {:?}", e);
                panic!("[main::parse_request] Invalid request argument: {:?}", e);
            }
        },
        None => CountRequest::default(),
    }
}

#[tokio::main]
async fn main() {
    /* config 설정 전역 적용 */
    dotenv().ok();

    /* 전역 로거설정 */
    set_global_logger();

    info!("Start Log Monitoring Program");

    let request: CountRequest = parse_request();

    let elastic_config: Arc<ElasticConfig> = get_elastic_config_info();
    let slack_config: Arc<SlackConfig> = get_slack_config_info();
    let monitor_config: Arc<MonitorConfig> = get_monitor_config_info();

    /* The request host wins over the configured default endpoint. */
    let host: String = request
        .host()
        .clone()
        .unwrap_or_else(|| elastic_config.default_host().clone());

    let es_repository: EsRepositoryImpl =
        EsRepositoryImpl::new(&host, elastic_config.es_id(), elastic_config.es_pw())
            .unwrap_or_else(|e| {
                error!("[main()] Unable to create the search backend client.: {:?}", e);
                panic!("[main()] Unable to create the search backend client.: {:?}", e);
            });

    let query_template_repository: QueryTemplateRepositoryImpl =
        QueryTemplateRepositoryImpl::new(PathBuf::from(QUERY_TEMPLATE_PATH.as_str()));

    let slack_repository: SlackRepositoryImpl = SlackRepositoryImpl::new(
        slack_config.webhook_url().clone(),
        slack_config.channel().clone(),
    );

    /* Dependency Injection */
    let notification_service: Arc<NotificationServiceImpl<SlackRepositoryImpl>> =
        Arc::new(NotificationServiceImpl::new(Arc::new(slack_repository)));

    let monitoring_service: Arc<
        MonitoringServiceImpl<
            QueryTemplateRepositoryImpl,
            EsRepositoryImpl,
            NotificationServiceImpl<SlackRepositoryImpl>,
        >,
    > = Arc::new(MonitoringServiceImpl::new(
        Arc::new(query_template_repository),
        Arc::new(es_repository),
        notification_service,
        elastic_config.kibana_host().clone(),
        monitor_config.as_ref().clone(),
    ));

    let controller: MainController<
        MonitoringServiceImpl<
            QueryTemplateRepositoryImpl,
            EsRepositoryImpl,
            NotificationServiceImpl<SlackRepositoryImpl>,
        >,
    > = MainController::new(monitoring_service);

    match controller.main_task(&request).await {
        Ok(messages) if messages.is_empty() => {
            info!("Monitoring run finished: no anomalies found");
        }
        Ok(messages) => {
            info!("Monitoring run finished: {} alarm(s) sent", messages.len());
        }
        Err(e) => {
            error!("[main] Monitoring run failed: {:?}", e);
            std::process::exit(1);
        }
    }
}
