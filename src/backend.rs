//! HTTP client for the chat server (POST /chat).

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::ChatConfig;
use crate::error::{ConfigError, TransportError};

/// Anything that can answer a chat message with a JSON body.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, message: &str) -> Result<Value, TransportError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

pub struct HttpBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &ChatConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ConfigError::HttpClient)?;
        Ok(Self {
            endpoint: config.chat_endpoint(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send(&self, message: &str) -> Result<Value, TransportError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
    use std::time::Duration;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn backend(base_url: &str, timeout_secs: Option<u64>) -> HttpBackend {
        let cli = Cli {
            base_url: base_url.to_string(),
            timeout_secs,
            light: false,
            log_file: None,
        };
        HttpBackend::new(&ChatConfig::from_cli(&cli).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn posts_message_and_returns_body() {
        let router = Router::new().route(
            "/chat",
            post(|Json(body): Json<Value>| async move {
                let message = body["message"].as_str().unwrap_or_default().to_string();
                Json(json!({ "response": format!("echo: {message}") }))
            }),
        );
        let base = serve(router).await;
        let client = backend(&format!("{base}/"), None);
        assert_eq!(client.endpoint(), format!("{base}/chat"));

        let body = client.send("Hello").await.unwrap();
        assert_eq!(body, json!({ "response": "echo: Hello" }));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let router = Router::new().route("/chat", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let base = serve(router).await;

        let err = backend(&base, None).send("Hello").await.unwrap_err();
        assert_eq!(err, TransportError::Status { status: 500 });
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let router = Router::new().route("/chat", post(|| async { "not json" }));
        let base = serve(router).await;

        let err = backend(&base, None).send("Hello").await.unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = backend(&format!("http://{addr}"), None).send("Hello").await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }

    #[tokio::test]
    async fn configured_timeout_applies() {
        let router = Router::new().route(
            "/chat",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "response": "late" }))
            }),
        );
        let base = serve(router).await;

        let err = backend(&base, Some(1)).send("Hello").await.unwrap_err();
        assert_eq!(err, TransportError::Timeout);
    }
}
