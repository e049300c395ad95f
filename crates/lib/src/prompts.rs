//! # Default Prompt Templates
//!
//! This module contains the fixed system-prompt template used for SQL
//! generation, plus the helpers that fill it in and clean up model replies.

/// The system prompt for the SQL generation task.
///
/// Placeholder: `{schema}`
pub const SQL_GENERATION_SYSTEM_PROMPT: &str = r#"You are an expert SQL generation assistant. Using the provided database schema and the user's question, write an accurate and efficient SQL query.

Database schema:
{schema}

Follow these rules:
1. Output only the SQL statement, without any explanation or extra text.
2. Make sure the SQL is syntactically correct and follows standard SQL.
3. Use appropriate JOIN clauses to connect related tables.
4. Include the WHERE conditions needed to filter the results.
5. If the question involves a time range, use suitable date functions.
6. Prefer EXISTS over IN subqueries for better performance.
7. Avoid SELECT *; list the specific columns that are needed.

Generate the SQL statement for the schema and question above:"#;

/// Builds the system prompt by embedding the schema description.
pub fn build_system_prompt(schema: &str) -> String {
    SQL_GENERATION_SYSTEM_PROMPT.replace("{schema}", schema)
}

/// Extracts a SQL statement from a model reply.
///
/// Strips a leading ```` ```sql ```` or ```` ``` ```` marker and a trailing
/// ```` ``` ```` marker, then trims surrounding whitespace. A reply without
/// fences passes through trimmed; a leading fence with no closing fence is
/// still stripped.
pub fn extract_sql(raw: &str) -> String {
    let mut sql = raw.trim();
    if let Some(rest) = sql.strip_prefix("```sql") {
        sql = rest;
    } else if let Some(rest) = sql.strip_prefix("```") {
        sql = rest;
    }
    if let Some(rest) = sql.strip_suffix("```") {
        sql = rest;
    }
    sql.trim().to_string()
}
