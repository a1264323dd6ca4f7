use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Command-line client for the query relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a query and print the answer
    Ask {
        /// Query text; multiple words are joined with spaces
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Check that the relay is up
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Ask { query } => {
            let res = client
                .post(format!("{base}/query"))
                .json(&serde_json::json!({ "query": query.join(" ") }))
                .send()
                .await?;
            print_answer(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{base}/health")).send().await?;
            let status = res.status();
            let text = res.text().await?;
            if status.is_success() {
                println!("{text}");
            } else {
                eprintln!("Error: relay returned status {status}: {text}");
            }
        }
    }

    Ok(())
}

async fn print_answer(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: relay returned status {status}");
        if let Ok(text) = res.text().await {
            eprintln!("Response: {text}");
        }
        return Ok(());
    }

    let answer: Value = res.json().await?;
    let field = |name: &str| answer.get(name).and_then(Value::as_str).unwrap_or("").to_string();
    println!("Source: {}", field("source"));
    println!("Response: {}", field("response"));
    Ok(())
}
