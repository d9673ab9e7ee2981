//! Assistant panel state: the chat transcript and its single in-flight
//! request guard
//!
//! The transcript is append-only and session-scoped. Requests are sequence
//! numbered: a completion only lands if it echoes the live sequence, so a
//! reply from before a restart race can never corrupt the transcript. An
//! in-flight request is never cancelled; its reply is appended whenever it
//! arrives, even if the user has switched tabs meanwhile.

use omnihub_core::ChatMessage;

/// A request handed to the assistant task runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRequest {
    pub seq: u64,
    pub prompt: String,
}

/// Assistant panel state
#[derive(Debug)]
pub struct AssistantPanel {
    transcript: Vec<ChatMessage>,
    pub input: String,
    loading: bool,
    in_flight: Option<u64>,
    seq: u64,
}

impl Default for AssistantPanel {
    fn default() -> Self {
        Self {
            transcript: vec![ChatMessage::greeting()],
            input: String::new(),
            loading: false,
            in_flight: None,
            seq: 0,
        }
    }
}

impl AssistantPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript entries in chronological order.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the current input.
    ///
    /// Blank input and submissions while a request is in flight are no-ops.
    /// Otherwise the user message is appended, the input cleared, and the
    /// request to run is returned.
    pub fn submit(&mut self) -> Option<AssistantRequest> {
        let prompt = self.input.trim().to_string();
        if prompt.is_empty() || self.loading {
            return None;
        }

        self.transcript.push(ChatMessage::user(prompt.clone()));
        self.input.clear();
        self.loading = true;
        self.seq += 1;
        self.in_flight = Some(self.seq);

        Some(AssistantRequest {
            seq: self.seq,
            prompt,
        })
    }

    /// Append the assistant reply for request `seq` and clear the loading
    /// flag. Replies for any other sequence are dropped.
    pub fn complete(&mut self, seq: u64, reply: impl Into<String>) {
        if self.in_flight != Some(seq) {
            tracing::debug!(seq, "Dropping stale assistant reply");
            return;
        }
        self.transcript.push(ChatMessage::assistant(reply));
        self.loading = false;
        self.in_flight = None;
    }
}
