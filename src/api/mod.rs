// Quote API module.
// Provides the HTTP client and response types for the random-quote service.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{DEFAULT_QUOTE_URL, QuoteClient};
pub use types::Quote;

/// Local stand-in for the quote service, shared by the fetch tests.
#[cfg(test)]
pub mod testing {
    use axum::{Json, Router, http::StatusCode, routing::get};
    use reqwest::Client;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    use super::QuoteClient;

    async fn random_quote() -> Json<Value> {
        Json(json!({ "id": 42, "quote": "life is short", "author": "Anon" }))
    }

    async fn broken() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
    }

    async fn garbage() -> &'static str {
        "<html>definitely not json</html>"
    }

    /// Serve `/quotes/random`, `/broken` and `/garbage` on an ephemeral port.
    pub async fn spawn_quote_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new()
            .route("/quotes/random", get(random_quote))
            .route("/broken", get(broken))
            .route("/garbage", get(garbage));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    /// A URL on a port nothing listens on.
    pub async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/quotes/random")
    }

    /// Client that bypasses any proxy configured in the environment.
    pub fn client_for(url: &str) -> QuoteClient {
        let client = Client::builder().no_proxy().build().unwrap();
        QuoteClient::with_client(client, url).unwrap()
    }
}
