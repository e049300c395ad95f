pub mod openai;

use crate::errors::Txt2SqlError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// The reply to a single chat-completion exchange.
///
/// `content` is the assistant message extracted from the first choice, and
/// `raw` is the unparsed response body exactly as the API returned it.
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    pub content: String,
    pub raw: String,
}

/// A trait for interacting with a chat-completion API.
///
/// This defines a common interface for sending a system/user prompt pair to a
/// Large Language Model and receiving its reply.
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug + DynClone {
    /// Sends a system and user prompt and returns the model's completion.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<ChatCompletion, Txt2SqlError>;
}

dyn_clone::clone_trait_object!(ChatProvider);
