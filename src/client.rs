use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::classify::{ResponseKind, classify};
use crate::config::ChatConfig;
use crate::conversation::ConversationState;
use crate::correlation::{self, CORRELATION_HEADER};
use crate::error::{ChatError, Result};
use crate::normalize;
use crate::streaming::{RawFrame, StreamAssembler};

/// Outbound request body for one chat turn.
#[derive(Serialize)]
struct OutboundMessage<'a> {
    message: &'a str,
}

/// The response reconciliation engine.
///
/// Owns the HTTP client and the endpoint; borrows the caller's
/// [`ConversationState`] mutably for the duration of each send, so appends
/// and sealing are strictly sequential. One turn at a time: a send while a
/// request is outstanding is rejected, not queued.
pub struct WorkflowClient {
    http: Client,
    endpoint: String,
}

impl WorkflowClient {
    pub fn new(config: ChatConfig) -> Result<Self> {
        // No overall timeout: a streaming turn runs until the transport
        // closes. Only connection establishment is bounded.
        let http = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ChatError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    /// Dispatch one user message and reconcile the reply into `state`.
    ///
    /// Precondition failures (blank input, malformed endpoint, a turn
    /// already in flight) are rejected before any network activity or state
    /// mutation. Any failure after the turn begins seals the open message
    /// with the normalized error text and `is_error` set; the pending flag
    /// is cleared on every exit path. The returned error can be rendered
    /// with [`normalize::user_message`] for a standalone banner.
    pub async fn send(&self, state: &mut ConversationState, input: &str) -> Result<()> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ChatError::Config("Message is empty".to_string()));
        }
        if !self.endpoint.starts_with("http") {
            return Err(ChatError::Config(format!(
                "Endpoint must start with http: {}",
                self.endpoint
            )));
        }
        if state.pending() {
            return Err(ChatError::Busy);
        }

        state.begin_turn(input);

        match self.dispatch(state, input).await {
            Ok(()) => {
                state.seal();
                Ok(())
            }
            Err(e) => {
                let banner = normalize::user_message(&e);
                state.seal_with_error(&banner);
                Err(e)
            }
        }
    }

    async fn dispatch(&self, state: &mut ConversationState, input: &str) -> Result<()> {
        let body = serde_json::to_vec(&OutboundMessage { message: input })?;

        let mut request = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body);

        if let Some(id) = state.correlation_id() {
            debug!(correlation_id = %id, "Attaching correlation id");
            request = request.header(CORRELATION_HEADER, id);
        }

        info!(endpoint = %self.endpoint, "Dispatching chat turn");

        let response = request
            .send()
            .await
            .map_err(|e| ChatError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        info!(%status, "Workflow responded");

        correlation::observe(state, response.headers());

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        match classify(response.headers()) {
            ResponseKind::SingleObject => {
                let bytes = response.bytes().await.map_err(|e| {
                    ChatError::Transport(format!("Failed to read response body: {}", e))
                })?;
                let frame: RawFrame = serde_json::from_slice(&bytes)?;
                if let Some(text) = frame.text {
                    state.set_open_text(&text);
                }
                Ok(())
            }
            ResponseKind::EventStream => {
                let mut assembler = StreamAssembler::new();
                let mut stream = response.bytes_stream();

                // End of stream is the transport closing; there is no
                // in-band terminal frame.
                while let Some(chunk) = stream.next().await {
                    let chunk = chunk
                        .map_err(|e| ChatError::Transport(format!("Stream read failed: {}", e)))?;
                    for fragment in assembler.feed(&chunk) {
                        state.append_open(&fragment);
                    }
                }
                Ok(())
            }
        }
    }
}
