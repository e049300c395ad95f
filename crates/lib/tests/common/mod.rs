#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as a mock chat
//! provider, to ensure tests are isolated and repeatable.

use async_trait::async_trait;
use std::sync::{Arc, Once, RwLock};
use txt2sql::providers::{ChatCompletion, ChatProvider};
use txt2sql::Txt2SqlError;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

// --- Mock Chat Provider for Logic Testing ---

#[derive(Clone, Debug)]
pub struct MockChatProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    pub responses: Arc<RwLock<Vec<ChatCompletion>>>,
}

impl MockChatProvider {
    pub fn new(responses: Vec<ChatCompletion>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    /// Convenience constructor that wraps plain assistant replies in a
    /// chat-completion response body.
    pub fn with_contents(contents: Vec<&str>) -> Self {
        let responses = contents
            .into_iter()
            .map(|content| ChatCompletion {
                content: content.to_string(),
                raw: serde_json::json!({
                    "choices": [{"message": {"role": "assistant", "content": content}}]
                })
                .to_string(),
            })
            .collect();
        Self::new(responses)
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<ChatCompletion, Txt2SqlError> {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Ok(ChatCompletion {
                content: "Default mock response".to_string(),
                raw: "{}".to_string(),
            })
        }
    }
}
