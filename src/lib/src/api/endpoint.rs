use crate::config::RemoteConfig;

/// Uri for listing one page of a collection, relative to the remote root
pub fn records_uri(collection: &str, page: usize, per_page: usize, sort: &str) -> String {
    let collection = urlencoding::encode(collection);
    let sort = urlencoding::encode(sort);
    format!("/api/collections/{collection}/records?page={page}&perPage={per_page}&sort={sort}")
}

pub fn url_from_config(config: &RemoteConfig, uri: &str) -> String {
    format!("{}://{}{}", config.scheme, config.host, uri)
}
