use crate::common::*;

#[doc = "Search backend connection information."]
/*
    `default_host` is used when the invocation request carries no host
    override. Empty id/pw means the transport runs without credentials;
    request signing is delegated to the execution environment.
*/
#[derive(Serialize, Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct ElasticConfig {
    pub default_host: String,
    pub es_id: String,
    pub es_pw: String,
    pub kibana_host: String,
}
