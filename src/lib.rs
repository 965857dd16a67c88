//! # Workflow Chat
//!
//! A client for exchanging chat turns with a remote workflow endpoint.
//!
//! ## Overview
//!
//! The crate centers on the response reconciliation engine: it dispatches a
//! user message, classifies the reply shape (single JSON object vs. chunked
//! event stream), incrementally reassembles streamed text into the open
//! message, recovers a correlation identifier for multi-turn continuity, and
//! normalizes heterogeneous error payloads into one user-facing string.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use workflow_chat::{ChatConfig, ConversationState, WorkflowClient};
//!
//! # async fn run() -> workflow_chat::Result<()> {
//! let config = ChatConfig {
//!     endpoint: "https://flows.example.com/webhook/chat".to_string(),
//! };
//! config.validate()?;
//!
//! let client = WorkflowClient::new(config)?;
//! let mut state = ConversationState::new();
//!
//! client.send(&mut state, "Hello!").await?;
//! println!("{}", state.last_text());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Endpoint configuration loading and validation
//! - [`error`] - Error types and handling
//! - [`conversation`] - The message log and pending flag
//! - [`classify`] - Single-object vs. event-stream routing
//! - [`streaming`] - Line buffering, frame parsing, and reassembly
//! - [`correlation`] - Session correlation id propagation
//! - [`normalize`] - User-facing error messages
//! - [`client`] - The engine that ties it together

pub mod classify;
pub mod client;
pub mod config;
pub mod conversation;
pub mod correlation;
pub mod error;
pub mod normalize;
pub mod streaming;

pub use client::WorkflowClient;
pub use config::ChatConfig;
pub use conversation::{ConversationState, Message, Sender};
pub use error::{ChatError, Result};
