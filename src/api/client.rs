// Quote API HTTP client.
// Handles request headers, status checking, and response processing.

use reqwest::{
    Client, Response, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{CollectiveError, FetchError, Result};

pub const DEFAULT_QUOTE_URL: &str = "https://dummyjson.com/quotes/random";

/// Client for the random-quote endpoint.
///
/// No request timeout is configured; a stalled request is bounded only by the
/// transport's own defaults.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: Client,
    url: Url,
}

impl QuoteClient {
    /// Create a client for the given endpoint URL.
    pub fn new(url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("quote-collective"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FetchError::Network)?;

        Self::with_client(client, url)
    }

    /// Wrap an already configured `reqwest` client.
    pub fn with_client(client: Client, url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| CollectiveError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CollectiveError::InvalidUrl(format!(
                "{url}: unsupported scheme `{}`",
                url.scheme()
            )));
        }
        Ok(Self { client, url })
    }

    /// The endpoint this client requests.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Make a GET request to the endpoint.
    pub async fn get(&self) -> std::result::Result<Response, FetchError> {
        let response = self.client.get(self.url.clone()).send().await?;
        check_response(response)
    }
}

/// Any 2xx status passes; everything else is an HTTP error.
fn check_response(response: Response) -> std::result::Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Http(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_parses() {
        let client = QuoteClient::new(DEFAULT_QUOTE_URL).unwrap();
        assert_eq!(client.url().host_str(), Some("dummyjson.com"));
        assert_eq!(client.url().path(), "/quotes/random");
    }

    #[test]
    fn test_rejects_garbage_url() {
        let err = QuoteClient::new("not a url").unwrap_err();
        assert!(matches!(err, CollectiveError::InvalidUrl(_)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = QuoteClient::new("ftp://example.com/quotes").unwrap_err();
        assert!(matches!(err, CollectiveError::InvalidUrl(_)));
    }
}
