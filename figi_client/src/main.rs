use anyhow::{Context, Result};
use clap::Parser;
use figi_client::{
    cli::{
        commands::{Cli, Commands},
        params::load_batch,
    },
    client::ApiClient,
    config::ClientConfig,
    models::{Query, SearchRequest},
    printer::{render_batch, render_search, render_summary},
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ClientConfig::from_toml_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?
            .with_env_overrides(),
        None => ClientConfig::from_env(),
    };
    let client = ApiClient::new(config)?;
    info!(
        base_url = %client.base_url(),
        authenticated = client.has_api_key(),
        "client ready"
    );

    match cli.command {
        Commands::Search { query, start, raw } => {
            if raw {
                println!("{}", client.search(&query)?);
            } else {
                let request = SearchRequest { query, start };
                let page = client.search_page(&request)?;
                println!("{}", render_search(&page));
            }
        }

        Commands::Map(args) => {
            let queries = vec![Query::from(args)];
            let results = client.map(&queries)?;
            print!("{}", render_batch(&queries, &results));
        }

        Commands::Batch { source, input } => {
            let queries = load_batch(source, input.as_deref())?;
            let results = client.map(&queries)?;
            print!("{}", render_batch(&queries, &results));

            // Summary goes to stderr so stdout stays machine-readable
            eprintln!("{}", render_summary(&results));
        }
    }

    Ok(())
}
