use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pathwise::config::load_config;
use pathwise::observability::init_logging;
use pathwise::ServiceConfig;
use pathwise_blog::{BlogClient, NewPost};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "blog-cli")]
#[command(about = "Command-line client for the blog API", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides `[service] host` from the config
    #[arg(long)]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with posts
    Posts {
        #[command(subcommand)]
        command: PostCommands,
    },
}

#[derive(Subcommand)]
enum PostCommands {
    /// List every post
    List,
    /// Show one post
    Show { id: u64 },
    /// List the comments on a post
    Comments { id: u64 },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
        #[arg(long, default_value_t = 1)]
        user_id: u64,
    },
    /// Delete a post
    Delete { id: u64 },
}

const DEFAULT_HOST: &str = "https://jsonplaceholder.typicode.com";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(host) = cli.host {
        config.service.host = Some(host);
    }
    if config.service.host.is_none() {
        config.service.host = Some(DEFAULT_HOST.to_string());
    }

    init_logging(&config.logging);
    tracing::debug!(host = ?config.service.host, "blog-cli starting");

    let client = BlogClient::from_config(&config)?;

    match cli.command {
        Commands::Posts { command } => match command {
            PostCommands::List => print_json(&client.posts().await?)?,
            PostCommands::Show { id } => print_json(&client.post(id).await?)?,
            PostCommands::Comments { id } => print_json(&client.comments(id).await?)?,
            PostCommands::Create { title, body, user_id } => {
                let post = NewPost { user_id, title, body };
                print_json(&client.create_post(&post).await?)?
            }
            PostCommands::Delete { id } => {
                client.delete_post(id).await?;
                println!("Deleted post {id}");
            }
        },
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
