use std::time::Duration;

use anyhow::{Context, Result};
use metamon_protocol::{Endpoint, SUCCESS_CODE, Session, decode_response, decode_status};
use serde::Serialize;
use serde::de::DeserializeOwned;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.99 Safari/537.36";
const ACCESS_TOKEN_HEADER: &str = "accesstoken";

/// HTTP client for the game API.
///
/// Holds only the connection pool and base URL; the account's session is
/// passed into each call.
#[derive(Debug, Clone)]
pub struct HttpGameClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGameClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST with query parameters and decode the response payload
    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        session: Option<&Session>,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let mut request = self.http.post(endpoint.url(&self.base_url)).query(params);
        if let Some(session) = session {
            request = request.header(ACCESS_TOKEN_HEADER, &session.access_token);
        }

        let body = self.send(endpoint, request).await?;
        decode_response(&body)
            .with_context(|| format!("Failed to decode {} response", endpoint.path()))
    }

    /// POST a payload-less command and require a success code
    pub(crate) async fn command(
        &self,
        endpoint: Endpoint,
        session: &Session,
        params: &[(&str, &str)],
    ) -> Result<()> {
        let request = self
            .http
            .post(endpoint.url(&self.base_url))
            .query(params)
            .header(ACCESS_TOKEN_HEADER, &session.access_token);

        let body = self.send(endpoint, request).await?;
        check_status(endpoint, &body)
    }

    /// POST a JSON body as a command and require a success code
    pub(crate) async fn command_json<B: Serialize>(
        &self,
        endpoint: Endpoint,
        session: &Session,
        body: &B,
    ) -> Result<()> {
        let request = self
            .http
            .post(endpoint.url(&self.base_url))
            .header(ACCESS_TOKEN_HEADER, &session.access_token)
            .json(body);

        let body = self.send(endpoint, request).await?;
        check_status(endpoint, &body)
    }

    async fn send(&self, endpoint: Endpoint, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send {} request", endpoint.path()))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("{} returned HTTP {}", endpoint.path(), status);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response", endpoint.path()))?;

        tracing::debug!(endpoint = endpoint.path(), body = %body, "Response");
        Ok(body)
    }
}

fn check_status(endpoint: Endpoint, body: &str) -> Result<()> {
    let code = decode_status(body)
        .with_context(|| format!("Failed to decode {} response", endpoint.path()))?;

    tracing::info!(endpoint = endpoint.path(), code = %code, "Command result");

    if code != SUCCESS_CODE {
        anyhow::bail!("{} answered with code {}", endpoint.path(), code);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = HttpGameClient::new("http://localhost:8080/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(Endpoint::UpdateMonster, r#"{"code":"SUCCESS"}"#).is_ok());

        let err = check_status(Endpoint::UpdateMonster, r#"{"code":"EXP_NOT_ENOUGH"}"#).unwrap_err();
        assert!(err.to_string().contains("EXP_NOT_ENOUGH"));

        assert!(check_status(Endpoint::ComposeMonsterEgg, "oops").is_err());
    }
}
