use crate::errors::Txt2SqlError;
use crate::providers::{openai::OpenAiCompatProvider, ChatProvider};
use std::fmt;

/// A client that converts natural-language questions into SQL statements
/// using a chat-completion provider.
pub struct Txt2SqlClient {
    pub(crate) provider: Box<dyn ChatProvider>,
}

impl fmt::Debug for Txt2SqlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Txt2SqlClient")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

/// A builder for creating `Txt2SqlClient` instances.
///
/// The common path configures an OpenAI-compatible endpoint with `api_url`,
/// `api_key`, and `model`. A custom [`ChatProvider`] can be injected instead,
/// which is how the tests swap in a mock.
#[derive(Default)]
pub struct Txt2SqlClientBuilder {
    api_url: String,
    api_key: String,
    model: String,
    provider: Option<Box<dyn ChatProvider>>,
}

impl fmt::Debug for Txt2SqlClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Txt2SqlClientBuilder")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl Txt2SqlClientBuilder {
    /// Creates a new `Txt2SqlClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full chat-completions endpoint URL.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the API key sent as a bearer token.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Replaces the chat provider entirely, bypassing the endpoint fields.
    pub fn provider(mut self, provider: Box<dyn ChatProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Builds the `Txt2SqlClient`.
    ///
    /// Fails with a `Missing*` error when no provider override is set and one
    /// of the endpoint fields is empty.
    pub fn build(self) -> Result<Txt2SqlClient, Txt2SqlError> {
        if let Some(provider) = self.provider {
            return Ok(Txt2SqlClient { provider });
        }

        if self.api_url.is_empty() {
            return Err(Txt2SqlError::MissingApiUrl);
        }
        if self.api_key.is_empty() {
            return Err(Txt2SqlError::MissingApiKey);
        }
        if self.model.is_empty() {
            return Err(Txt2SqlError::MissingModelName);
        }

        let provider = OpenAiCompatProvider::new(self.api_url, self.api_key, self.model)?;
        Ok(Txt2SqlClient {
            provider: Box::new(provider),
        })
    }
}
