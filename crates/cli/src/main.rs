//! # txt2sql CLI
//!
//! This is the main entry point for the `txt2sql` command-line interface. It
//! loads the API endpoint settings from a YAML file, sends the question and
//! schema to the configured chat-completion API, and prints the result.

mod config;

use anyhow::{bail, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use txt2sql::Txt2SqlClientBuilder;

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a natural-language question into SQL", long_about = None)]
struct Cli {
    /// The natural-language question to convert
    question: String,

    /// Path of the YAML configuration file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Inline database schema description to embed in the prompt
    #[arg(long, conflicts_with = "schema_file")]
    schema: Option<String>,

    /// Path of a file containing the schema description
    #[arg(long)]
    schema_file: Option<PathBuf>,

    /// Print the raw API response body instead of the extracted SQL
    #[arg(long)]
    raw: bool,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let config = config::load(&cli.config);
    let api_url = config.api.chat_completions_url();
    info!("api_uri {}, model {}", api_url, config.api.llm_model_name);

    let schema = match (&cli.schema, &cli.schema_file) {
        (Some(schema), _) => schema.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => bail!("either --schema or --schema-file is required"),
    };

    let client = Txt2SqlClientBuilder::new()
        .api_url(api_url)
        .api_key(config.api.llm_api_key.clone())
        .model(config.api.llm_model_name.clone())
        .build()?;

    let output = if cli.raw {
        client.convert_to_sql_raw(&cli.question, &schema).await?
    } else {
        client.convert_to_sql(&cli.question, &schema).await?
    };

    println!("{output}");
    Ok(())
}
