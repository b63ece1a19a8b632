use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "stringsvc-cli")]
#[command(about = "Command-line client for the string service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a string to uppercase
    Uppercase {
        /// Input string (may be empty)
        #[arg(default_value = "")]
        input: String,
    },
    /// Count the bytes in a string
    Count {
        /// Input string (may be empty)
        #[arg(default_value = "")]
        input: String,
    },
    /// Check service liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Uppercase { input } => {
            client
                .post(format!("{}/uppercase", base))
                .json(&json!({ "str": input }))
                .send()
                .await?
        }
        Commands::Count { input } => {
            client
                .post(format!("{}/count", base))
                .json(&json!({ "str": input }))
                .send()
                .await?
        }
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
