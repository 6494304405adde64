pub use std::collections::HashMap;
pub use std::path::{Path, PathBuf};
pub use std::sync::Arc;

pub use tokio::time::Duration;

pub use log::{error, info, warn};

pub use flexi_logger::{Age, Cleanup, Criterion, Duplicate, FileSpec, Logger, Naming};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;

pub use elasticsearch::auth::Credentials as EsCredentials;
pub use elasticsearch::http::response::Response;
pub use elasticsearch::http::transport::{
    SingleNodeConnectionPool, Transport as EsTransport, TransportBuilder,
};
pub use elasticsearch::http::Url;
pub use elasticsearch::{CountParts, Elasticsearch, SearchParts};

pub use reqwest::Client;

pub use anyhow::{anyhow, Result};

pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use once_cell::sync::Lazy as once_lazy;
