// Quote API endpoint functions.
// Typed fetch for the random-quote endpoint.

use tracing::debug;

use crate::error::FetchError;

use super::client::QuoteClient;
use super::types::Quote;

impl QuoteClient {
    /// Fetch one random quote.
    ///
    /// The body is read as text first so an undecodable payload surfaces as
    /// `FetchError::Decode` rather than a transport error.
    pub async fn random_quote(&self) -> Result<Quote, FetchError> {
        let response = self.get().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "quote response received");

        let quote: Quote = serde_json::from_str(&body)?;
        Ok(quote)
    }
}
