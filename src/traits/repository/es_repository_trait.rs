use crate::common::*;

#[async_trait]
pub trait EsRepository {
    async fn get_count(&self, es_query: &Value) -> Result<u64, anyhow::Error>;
    async fn get_search_messages(&self, es_query: &Value) -> Result<Vec<String>, anyhow::Error>;
}
