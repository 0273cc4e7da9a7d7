use crate::api;
use crate::api::client;
use crate::config::RemoteConfig;
use crate::constants;
use crate::error::ZenithError;
use crate::model::PageResult;
use crate::view::ListLogsResponse;

/// List one page of log records from the remote source.
///
/// Every call requests [`constants::DEFAULT_PAGE_SIZE`] records sorted
/// newest first; neither is caller-configurable. The raw response is
/// projected down to [`PageResult`] and nothing else is retained.
pub async fn list(config: &RemoteConfig, page: usize) -> Result<PageResult, ZenithError> {
    let uri = api::endpoint::records_uri(
        constants::LOGS_COLLECTION,
        page,
        constants::DEFAULT_PAGE_SIZE,
        constants::DEFAULT_SORT,
    );
    let url = api::endpoint::url_from_config(config, &uri);
    log::debug!("api::client::logs::list requesting {url}");

    let client = client::new()?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: Result<ListLogsResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(val) => Ok(val.into_page_result()),
        Err(err) => Err(ZenithError::fetch(format!(
            "api::client::logs::list error parsing response from {url}\n\nErr {err:?} \n\n{body}"
        ))),
    }
}
