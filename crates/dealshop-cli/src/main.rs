mod commands;
mod render;

use clap::{Parser, Subcommand};
use dealshop_core::Store;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dealshop")]
#[command(about = "Browse deals from Flipkart, Myntra, and Meesho")]
struct Cli {
    /// Backend base URL; overrides DEALSHOP_API_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every product in the catalog.
    List,
    /// Show one store's products, optionally filtered by title or category.
    Store {
        store: Store,
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show a single product by id.
    Get { id: i64 },
    /// Search the catalog. A blank query lists everything.
    Search {
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },
    /// Interactive catalog: each line typed on stdin becomes the search text.
    Browse,
    /// Check that the backend is up.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let mut config = dealshop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url.trim_end_matches('/').to_owned();
    }
    tracing::info!(base_url = %config.api_base_url, env = %config.env, "using backend");

    let client = dealshop_client::ApiClient::from_config(&config)?;
    match cli.command {
        Commands::List => commands::list(client).await,
        Commands::Store { store, filter } => commands::store(client, store, filter).await,
        Commands::Get { id } => commands::get(&client, id).await,
        Commands::Search { query } => commands::search(&client, &query.join(" ")).await,
        Commands::Browse => commands::browse(client, config.search_debounce_ms).await,
        Commands::Health => commands::health(&client).await,
    }
}
