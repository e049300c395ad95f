use dotenvy::dotenv;
use std::env;
use txt2sql::Txt2SqlClientBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging and load .env file
    tracing_subscriber::fmt::init();
    dotenv().ok();

    // --- Command-line argument parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} '<question>'", args[0]);
        eprintln!();
        eprintln!(
            "Example: {} 'Which users placed orders over 1000 in the last month?'",
            args[0]
        );
        return Ok(());
    }
    let question = &args[1];

    // --- Configuration from environment variables ---
    let api_url = env::var("LLM_API_URL").expect("LLM_API_URL environment variable not set");
    let api_key = env::var("LLM_API_KEY").expect("LLM_API_KEY environment variable not set");
    let model = env::var("LLM_MODEL_NAME").unwrap_or_else(|_| "deepseek-chat".to_string());

    // A sample schema to ground the generation.
    let schema = "Tables:\n\
        1. users: id (int, primary key), name (varchar), email (varchar), created_at (datetime)\n\
        2. orders: id (int, primary key), user_id (int, foreign key), amount (decimal), status (varchar), order_date (datetime)\n\
        3. products: id (int, primary key), name (varchar), price (decimal)\n\
        4. order_items: id (int, primary key), order_id (int, foreign key), product_id (int, foreign key), quantity (int)";

    let client = Txt2SqlClientBuilder::new()
        .api_url(api_url)
        .api_key(api_key)
        .model(model)
        .build()?;

    match client.convert_to_sql(question, schema).await {
        Ok(sql) => {
            println!("--- Generated SQL ---");
            println!("{sql}");
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(())
}
