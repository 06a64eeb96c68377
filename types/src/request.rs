//! Chat completion request shape and the option modifiers applied to it.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Request body for a chat completion call.
///
/// Clients build this from the prompt pair and then apply the caller's
/// [`RequestOptions`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    /// Build a request with the system message first. An empty system prompt
    /// is omitted.
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: &str, system_prompt: &str) -> Self {
        let mut messages = Vec::with_capacity(2);
        if !system_prompt.is_empty() {
            messages.push(ChatMessage::new(ChatRole::System, system_prompt));
        }
        messages.push(ChatMessage::new(ChatRole::User, prompt));
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }
}

pub type RequestOption = Box<dyn FnOnce(&mut ChatCompletionRequest) + Send>;

/// Ordered list of modifiers for a [`ChatCompletionRequest`].
///
/// Intermediaries forward this value as-is; only the client that builds the
/// request consumes it.
#[derive(Default)]
pub struct RequestOptions(Vec<RequestOption>);

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary modifier.
    #[must_use]
    pub fn with(
        mut self,
        option: impl FnOnce(&mut ChatCompletionRequest) + Send + 'static,
    ) -> Self {
        self.0.push(Box::new(option));
        self
    }

    #[must_use]
    pub fn model(self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.with(move |req| req.model = model)
    }

    #[must_use]
    pub fn temperature(self, temperature: f32) -> Self {
        self.with(move |req| req.temperature = Some(temperature))
    }

    #[must_use]
    pub fn max_tokens(self, max_tokens: u32) -> Self {
        self.with(move |req| req.max_tokens = Some(max_tokens))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply every modifier in insertion order.
    pub fn apply(self, request: &mut ChatCompletionRequest) {
        for option in self.0 {
            option(request);
        }
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("len", &self.0.len())
            .finish()
    }
}
