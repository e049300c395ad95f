//! # Natural Language to SQL
//!
//! This crate provides a client to convert natural-language questions into
//! SQL statements by sending the question and a database schema description
//! to an OpenAI-compatible chat-completion API.

pub mod errors;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::Txt2SqlError;
pub use types::{Txt2SqlClient, Txt2SqlClientBuilder};

use prompts::{build_system_prompt, extract_sql};
use tracing::{debug, info};

impl Txt2SqlClient {
    /// Converts a natural-language question into a SQL statement.
    ///
    /// Builds the system prompt from `schema`, sends it together with the
    /// question to the chat provider, and strips Markdown code fences from
    /// the reply before returning it.
    pub async fn convert_to_sql(
        &self,
        question: &str,
        schema: &str,
    ) -> Result<String, Txt2SqlError> {
        info!("[convert_to_sql] received question: {question:?}");

        let system_prompt = build_system_prompt(schema);
        debug!(system_prompt = %system_prompt, user_prompt = %question, "--> Sending prompts to chat provider");

        let completion = self.provider.complete(&system_prompt, question).await?;
        debug!("<-- Reply from chat provider: {}", completion.content);

        Ok(extract_sql(&completion.content))
    }

    /// Converts a question like `convert_to_sql`, but returns the raw
    /// response body from the API instead of the extracted statement.
    pub async fn convert_to_sql_raw(
        &self,
        question: &str,
        schema: &str,
    ) -> Result<String, Txt2SqlError> {
        info!("[convert_to_sql_raw] received question: {question:?}");

        let system_prompt = build_system_prompt(schema);
        let completion = self.provider.complete(&system_prompt, question).await?;

        Ok(completion.raw)
    }
}
