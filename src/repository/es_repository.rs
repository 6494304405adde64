use crate::common::*;

use crate::enums::monitor_error::*;

use crate::model::elastic_dto::search_response::*;

use crate::traits::repository::es_repository_trait::*;

#[derive(Debug, Getters, Clone)]
#[getset(get = "pub")]
pub struct EsRepositoryImpl {
    pub host: String,
    pub es_client: Elasticsearch,
}

impl EsRepositoryImpl {
    #[doc = "Search backend connection 생성자"]
    /// # Arguments
    /// * `host`    - Backend endpoint, scheme included
    /// * `es_id`   - Optional basic-auth id (empty string disables auth)
    /// * `es_pw`   - Optional basic-auth password
    ///
    /// # Returns
    /// * Result<Self, anyhow::Error>
    pub fn new(host: &str, es_id: &str, es_pw: &str) -> Result<Self, anyhow::Error> {
        let es_url: Url = Url::parse(host)
            .map_err(|e| anyhow!("[EsRepositoryImpl::new] invalid host '{}': {:?}", host, e))?;

        let conn_pool: SingleNodeConnectionPool = SingleNodeConnectionPool::new(es_url);

        let mut builder: TransportBuilder =
            TransportBuilder::new(conn_pool).timeout(Duration::from_secs(30));

        if !es_id.is_empty() && !es_pw.is_empty() {
            builder = builder.auth(EsCredentials::Basic(es_id.to_string(), es_pw.to_string()));
        }

        let transport: EsTransport = builder
            .build()
            .map_err(|e| anyhow!("[EsRepositoryImpl::new] {:?}", e))?;

        Ok(EsRepositoryImpl {
            host: host.to_string(),
            es_client: Elasticsearch::new(transport),
        })
    }
}

#[async_trait]
impl EsRepository for EsRepositoryImpl {
    #[doc = "POST the query body to the `_count` endpoint and parse the top-level count field."]
    /// # Arguments
    /// * `es_query` - Finished query body
    ///
    /// # Returns
    /// * Result<u64, anyhow::Error> - 문서 개수
    async fn get_count(&self, es_query: &Value) -> Result<u64, anyhow::Error> {
        info!("Executing count request against {}: {}", self.host, es_query);

        let response: Response = self
            .es_client
            .count(CountParts::None)
            .body(es_query)
            .send()
            .await
            .map_err(|e| {
                MonitorError::BackendUnavailable(format!(
                    "[EsRepositoryImpl::get_count] {}: {:?}",
                    self.host, e
                ))
            })?;

        if !response.status_code().is_success() {
            let status = response.status_code();
            let error_body: String = response.text().await.unwrap_or_default();
            return Err(MonitorError::BackendResponse(format!(
                "[EsRepositoryImpl::get_count] status {}: {}",
                status, error_body
            ))
            .into());
        }

        let body: Value = response.json().await.map_err(|e| {
            MonitorError::BackendResponse(format!("[EsRepositoryImpl::get_count] {:?}", e))
        })?;

        info!("Count response: {}", body);

        let parsed: CountResponse = serde_json::from_value(body).map_err(|e| {
            MonitorError::BackendResponse(format!(
                "[EsRepositoryImpl::get_count] missing or invalid 'count' field: {:?}",
                e
            ))
        })?;

        Ok(parsed.count)
    }

    #[doc = "POST the query body to the `_search` endpoint and collect `hits.hits[]._source.message`."]
    /// # Arguments
    /// * `es_query` - Finished query body
    ///
    /// # Returns
    /// * Result<Vec<String>, anyhow::Error> - Raw hit messages (hits without a message field are skipped)
    async fn get_search_messages(&self, es_query: &Value) -> Result<Vec<String>, anyhow::Error> {
        info!(
            "Executing search request against {}: {}",
            self.host, es_query
        );

        let response: Response = self
            .es_client
            .search(SearchParts::None)
            .body(es_query)
            .send()
            .await
            .map_err(|e| {
                MonitorError::BackendUnavailable(format!(
                    "[EsRepositoryImpl::get_search_messages] {}: {:?}",
                    self.host, e
                ))
            })?;

        if !response.status_code().is_success() {
            let status = response.status_code();
            let error_body: String = response.text().await.unwrap_or_default();
            return Err(MonitorError::BackendResponse(format!(
                "[EsRepositoryImpl::get_search_messages] status {}: {}",
                status, error_body
            ))
            .into());
        }

        let parsed: SearchResponse<LogEntrySource> = response.json().await.map_err(|e| {
            MonitorError::BackendResponse(format!(
                "[EsRepositoryImpl::get_search_messages] {:?}",
                e
            ))
        })?;

        let messages: Vec<String> = parsed
            .hits
            .hits
            .into_iter()
            .filter_map(|hit| hit._source.message)
            .collect();

        info!("Search response hit count: {}", messages.len());

        Ok(messages)
    }
}
