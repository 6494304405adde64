#[doc = "Literal the log shipper stamps on messages it had to cut."]
pub const TRUNCATED_MESSAGE_MARKER: &str = "[truncated message]";

#[doc = "Kibana discover link scoped to the environment's log group and the interval."]
pub fn build_discover_url(kibana_host: &str, interval: &str, environment: &str) -> String {
    format!(
        "{}/_plugin/kibana/app/kibana#/discover/?\
         _g=(refreshInterval:(display:Off,pause:!f,value:0),\
         time:(from:now-{},mode:quick,to:now))\
         &_a=(columns:!(level,message),filters:!(('$state':(store:appState),\
         meta:(alias:!n,disabled:!f,key:'@log_group',negate:!f,\
         params:(query:{},type:phrase),type:phrase,value:{}),\
         query:(match:('@log_group':(query:{},type:phrase))))),\
         interval:auto,query:(language:lucene,query:''),sort:!('@timestamp',desc))",
        kibana_host, interval, environment, environment, environment
    )
}

#[doc = "Discover link additionally filtered to ERROR-level entries."]
pub fn build_errors_url(kibana_host: &str, interval: &str, environment: &str) -> String {
    format!(
        "{}/_plugin/kibana/app/kibana#/discover/?\
         _g=(refreshInterval:(display:Off,pause:!f,value:0),\
         time:(from:now-{},mode:quick,to:now))\
         &_a=(columns:!(level,message),filters:!(('$state':(store:appState),\
         meta:(alias:!n,disabled:!f,key:level,negate:!f,\
         params:(query:ERROR,type:phrase),type:phrase,value:ERROR),\
         query:(match:(level:(query:ERROR,type:phrase)))),\
         ('$state':(store:appState),\
         meta:(alias:!n,disabled:!f,key:'@log_group',negate:!f,\
         params:(query:{},type:phrase),type:phrase,value:{}),\
         query:(match:('@log_group':(query:{},type:phrase))))),\
         interval:auto,query:(language:lucene,query:''),sort:!('@timestamp',desc))",
        kibana_host, interval, environment, environment, environment
    )
}

#[doc = "Discover link filtered by the truncated-message marker. Spaces are percent-encoded."]
pub fn build_truncated_messages_url(
    kibana_host: &str,
    interval: &str,
    environment: &str,
) -> String {
    let url: String = format!(
        "{}/_plugin/kibana/app/kibana#/discover/?\
         _g=(refreshInterval:(display:Off,pause:!f,value:0),\
         time:(from:now-{},mode:quick,to:now))\
         &_a=(columns:!(_source),filters:!(('$state':(store:appState),\
         meta:(alias:!n,disabled:!f,key:'@log_group',negate:!f,\
         params:(query:{},type:phrase),type:phrase,value:{}),\
         query:(match:('@log_group':(query:{},type:phrase)))),\
         ('$state':(store:appState),\
         meta:(alias:!n,disabled:!f,key:'@message',negate:!f,\
         params:(query:'{marker}',type:phrase),type:phrase,value:'{marker}'),\
         query:(match:('@message':(query:'{marker}',type:phrase))))),\
         interval:auto,query:(language:lucene,query:''),sort:!('@timestamp',desc))",
        kibana_host,
        interval,
        environment,
        environment,
        environment,
        marker = TRUNCATED_MESSAGE_MARKER
    );

    url.replace(' ', "%20")
}
