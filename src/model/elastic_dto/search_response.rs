use crate::common::*;

#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    pub hits: HitsWrapper<T>,
}

#[derive(Debug, Deserialize)]
pub struct HitsWrapper<T> {
    pub hits: Vec<SearchHit<T>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit<T> {
    pub _source: T,
}

#[doc = "Source document of a log entry hit. Only the message field is consumed."]
#[derive(Debug, Deserialize)]
pub struct LogEntrySource {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
