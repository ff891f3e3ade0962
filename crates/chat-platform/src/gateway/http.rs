//! HTTP gateway adapter.
//!
//! Posts the session's request to the `/chat` endpoint with browser
//! `fetch()` via gloo-net. No timeout is applied here; a hung request only
//! ends when the browser's own network stack gives up.

use async_trait::async_trait;
use gloo_net::http::Request;

use chat_core::gateway::decode_reply;
use chat_core::ports::GatewayPort;
use chat_types::{
    ChatError, Result,
    config::{GatewayConfig, DEFAULT_ENDPOINT},
    wire::ChatRequest,
};

pub struct HttpGateway {
    endpoint: String,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Self {
        let endpoint = config.endpoint.trim();
        let endpoint = if endpoint.is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            endpoint.to_string()
        };
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl GatewayPort for HttpGateway {
    async fn send(&self, req: ChatRequest) -> Result<String> {
        let body = serde_json::to_string(&req)?;

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let ok = response.ok();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        log::debug!("Gateway replied HTTP {} ({} bytes)", status, text.len());
        decode_reply(ok, status, &text)
    }

    fn gateway_name(&self) -> &str {
        "http"
    }
}
