/// Who produced a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation log.
///
/// Text is mutable while the message is open (receiving streamed appends)
/// and immutable once sealed. Identity is positional: a message is its
/// index in the log, there is no durable key.
#[derive(Clone, Debug)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub is_error: bool,
}

impl Message {
    fn user(text: &str) -> Self {
        Self {
            sender: Sender::User,
            text: text.to_string(),
            is_error: false,
        }
    }

    fn bot(text: &str) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.to_string(),
            is_error: false,
        }
    }
}

const SEED_GREETING: &str = "Hi! How can I help you today?";

/// The ordered message log and pending flag for a single conversation.
///
/// Owned by the session controller and passed `&mut` into the engine; all
/// mutation happens inside the request-handling routine, so the borrow
/// checker enforces the single-writer discipline and no locking is needed.
///
/// Invariants:
/// - at most one message is open, it is the last element, and its sender
///   is [`Sender::Bot`];
/// - `pending` is true iff a message is open or a request is in flight
///   before the placeholder exists.
#[derive(Debug)]
pub struct ConversationState {
    correlation_id: Option<String>,
    messages: Vec<Message>,
    pending: bool,
    open: bool,
}

impl ConversationState {
    /// Create a fresh conversation with the seed greeting.
    pub fn new() -> Self {
        Self {
            correlation_id: None,
            messages: vec![Message::bot(SEED_GREETING)],
            pending: false,
            open: false,
        }
    }

    /// "New chat": drop the log, the correlation id, and any in-flight
    /// bookkeeping, leaving a single seed message.
    pub fn reset(&mut self) {
        self.correlation_id = None;
        self.messages = vec![Message::bot(SEED_GREETING)];
        self.pending = false;
        self.open = false;
    }

    /// Append the user's message and an empty open bot placeholder, and
    /// raise the pending flag. The caller must have checked the pending
    /// gate first.
    pub fn begin_turn(&mut self, user_text: &str) {
        self.messages.push(Message::user(user_text));
        self.messages.push(Message::bot(""));
        self.open = true;
        self.pending = true;
    }

    /// Mark the request as in flight before the placeholder exists.
    pub fn mark_pending(&mut self) {
        self.pending = true;
    }

    /// Append a streamed fragment to the open message.
    pub fn append_open(&mut self, fragment: &str) {
        if self.open
            && let Some(last) = self.messages.last_mut()
        {
            last.text.push_str(fragment);
        }
    }

    /// Replace the open message's text (single-object path: set, not append).
    pub fn set_open_text(&mut self, text: &str) {
        if self.open
            && let Some(last) = self.messages.last_mut()
        {
            last.text = text.to_string();
        }
    }

    /// Seal the open message and clear the pending flag.
    pub fn seal(&mut self) {
        self.open = false;
        self.pending = false;
    }

    /// Seal the open message with an error text. Always clears the pending
    /// flag, even when no message is open.
    pub fn seal_with_error(&mut self, text: &str) {
        if self.open
            && let Some(last) = self.messages.last_mut()
        {
            last.text = text.to_string();
            last.is_error = true;
        }
        self.seal();
    }

    /// Store a correlation id, first non-empty value wins. Once set it is
    /// never overwritten for the lifetime of the session.
    pub fn record_correlation(&mut self, id: &str) {
        if self.correlation_id.is_none() && !id.is_empty() {
            tracing::debug!(correlation_id = %id, "Captured correlation id");
            self.correlation_id = Some(id.to_string());
        }
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Text of the last message, for rendering after a turn completes.
    pub fn last_text(&self) -> &str {
        self.messages.last().map(|m| m.text.as_str()).unwrap_or("")
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
