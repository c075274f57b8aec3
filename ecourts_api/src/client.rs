//! HTTP client for the eCourts services portal.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use url::Url;

use crate::{config::PortalConfig, endpoint::Endpoint, form::PortalForm, types::PortalResponse, Error};

/// HTTP client for the portal's pages and AJAX handlers.
///
/// One `reqwest::Client` is built up front and reused for every call, so the
/// connection pool and the portal's session cookie are shared. Cloning is
/// cheap and clones share that state. Requests carry browser-like headers,
/// including `X-Requested-With`, without which the AJAX handlers answer with
/// a full page instead of a fragment.
#[derive(Clone)]
pub struct Client {
    /// Base URL without a trailing slash.
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the production portal.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(PortalConfig::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(PortalConfig::default().with_base_url(base_url))
    }

    pub fn with_config(config: PortalConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(default_headers())
            .cookie_store(true)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_url(&self, endpoint: Endpoint) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_url, endpoint.path()).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed for {}: {}", endpoint, e);
            Error::InvalidUrl(e.to_string())
        })
    }

    /// Issues a GET against `endpoint`.
    pub async fn get(&self, endpoint: Endpoint) -> Result<PortalResponse, Error> {
        let url = self.get_url(endpoint)?;
        tracing::debug!(url = %url, "GET {}", endpoint);
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| send_error(endpoint, e))?;
        read_response(endpoint, resp).await
    }

    /// Issues a form-encoded POST against `endpoint`.
    pub async fn post_form<F>(&self, endpoint: Endpoint, form: &F) -> Result<PortalResponse, Error>
    where
        F: PortalForm + ?Sized,
    {
        let url = self.get_url(endpoint)?;
        let body = form.encode();
        tracing::debug!(url = %url, body = %body, "POST {}", endpoint);
        let resp = self
            .http
            .post(url)
            .header(
                CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .body(body)
            .send()
            .await
            .map_err(|e| send_error(endpoint, e))?;
        read_response(endpoint, resp).await
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/javascript, */*; q=0.01"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));
    headers
}

async fn read_response(endpoint: Endpoint, resp: reqwest::Response) -> Result<PortalResponse, Error> {
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = resp.bytes().await.map_err(|e| {
        tracing::error!("Failed to read {} response body: {}", endpoint, e);
        if e.is_timeout() {
            Error::Timeout
        } else {
            Error::RequestFailed
        }
    })?;

    if !status.is_success() {
        let snippet = truncate_body(&String::from_utf8_lossy(&body));
        tracing::error!("{} request failed with status {}: {}", endpoint, status, snippet);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        });
    }

    Ok(PortalResponse {
        status: status.as_u16(),
        content_type,
        body: body.to_vec(),
    })
}

fn send_error(endpoint: Endpoint, e: reqwest::Error) -> Error {
    if e.is_timeout() {
        tracing::error!("{} request timed out: {}", endpoint, e);
        Error::Timeout
    } else {
        tracing::error!("Failed to send {} request: {}", endpoint, e);
        Error::RequestFailed
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...[truncated]", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("Not Found"), "Not Found");
    }

    #[test]
    fn truncate_body_cuts_on_char_boundary() {
        let body = "न".repeat(2500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.trim_end_matches("...[truncated]").chars().count(), 2000);
    }

    #[test]
    fn with_base_url_trims_slash() {
        let client = Client::with_base_url("http://127.0.0.1:1/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:1");
    }

    #[test]
    fn endpoint_urls_are_joined_onto_base() {
        let client = Client::new().unwrap();
        let url = client.get_url(Endpoint::Districts).unwrap();
        assert_eq!(
            url.as_str(),
            "https://services.ecourts.gov.in/ecourtindia_v6/ajax/get_district.php"
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let client = Client::with_base_url("not a url").unwrap();
        assert!(matches!(
            client.get_url(Endpoint::Courts),
            Err(Error::InvalidUrl(_))
        ));
    }
}
