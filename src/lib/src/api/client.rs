//! # API Client - HTTP plumbing for the remote list source
//!

use crate::constants;
use crate::error::ZenithError;
use crate::view::ErrorResponse;
use reqwest::{Client, ClientBuilder};
use std::time;

const VERSION: &str = constants::ZENITH_VERSION;
const USER_AGENT: &str = "Zenith";

pub mod logs;

// TODO: pool a single client per Dashboard instead of constructing one
// per request so we get keep-alive across page changes
pub fn new() -> Result<Client, ZenithError> {
    match builder()
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(ZenithError::HTTP(reqwest_err)),
    }
}

fn builder() -> ClientBuilder {
    Client::builder().user_agent(user_agent())
}

fn user_agent() -> String {
    format!("{USER_AGENT}/{VERSION}")
}

/// Reads the response body, raising a fetch error when the remote
/// reported failure. The remote's own error message is carried through
/// when its error body parses.
pub async fn parse_json_body(url: &str, res: reqwest::Response) -> Result<String, ZenithError> {
    let status = res.status();
    let body = res.text().await?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if status.is_success() {
        return Ok(body);
    }

    let response: Result<ErrorResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(response) => Err(ZenithError::fetch(format!(
            "Failed to fetch logs: {}",
            response.message
        ))),
        Err(err) => {
            log::debug!("Err: {}", err);
            Err(ZenithError::fetch(format!(
                "Err status [{status}] from url {url}\n\n'{body}'"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_carries_version() {
        let agent = user_agent();
        assert!(agent.starts_with("Zenith/"));
        assert!(agent.len() > "Zenith/".len());
    }

    #[tokio::test]
    async fn test_parse_json_body_surfaces_remote_message() -> Result<(), ZenithError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/bad")
            .with_status(400)
            .with_body(r#"{"code":400,"message":"Something went wrong.","data":{}}"#)
            .create_async()
            .await;

        let url = format!("{}/bad", server.url());
        let res = reqwest::get(&url).await?;
        let err = parse_json_body(&url, res).await.unwrap_err();
        mock.assert_async().await;

        let msg = format!("{err}");
        assert!(msg.contains("Failed to fetch logs"));
        assert!(msg.contains("Something went wrong."));
        Ok(())
    }

    #[tokio::test]
    async fn test_parse_json_body_handles_non_json_errors() -> Result<(), ZenithError> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/oops")
            .with_status(502)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let url = format!("{}/oops", server.url());
        let res = reqwest::get(&url).await?;
        let err = parse_json_body(&url, res).await.unwrap_err();
        assert!(matches!(err, ZenithError::Fetch(_)));
        assert!(format!("{err}").contains("502"));
        Ok(())
    }
}
