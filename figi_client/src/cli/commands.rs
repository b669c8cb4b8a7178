use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::Query;

#[derive(Parser)]
#[command(author, version, about = "Look up instruments through the OpenFIGI API")]
pub struct Cli {
    /// Optional TOML config file (base_url, mapping_path, search_path, api_key, timeout_secs)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Free-text search (e.g. "APPLE")
    Search {
        /// Search text
        query: String,

        /// Cursor from a previous page's "next"
        #[arg(long)]
        start: Option<String>,

        /// Print the raw response body instead of a formatted report
        #[arg(long, conflicts_with = "start")]
        raw: bool,
    },

    /// Map a single identifier
    Map(MapArgs),

    /// Map a batch of identifiers given as a JSON array of mapping jobs
    Batch {
        /// Source of batch parameters: file, stdin, or json
        #[arg(long, value_enum, default_value_t = BatchSource::Stdin)]
        source: BatchSource,

        /// Path to JSON file (when source=file) or inline JSON string (when source=json)
        #[arg(long)]
        input: Option<String>,
    },
}

#[derive(Args)]
pub struct MapArgs {
    /// Identifier type, e.g. ID_ISIN, ID_BB_GLOBAL, TICKER
    #[arg(long)]
    pub id_type: String,

    /// Identifier value, e.g. US4592001014
    #[arg(long)]
    pub id_value: String,

    /// Exchange code, e.g. US
    #[arg(long)]
    pub exch_code: Option<String>,

    /// Market identifier code, e.g. XNYS
    #[arg(long)]
    pub mic_code: Option<String>,

    /// Listing currency, e.g. USD
    #[arg(long)]
    pub currency: Option<String>,

    /// Market sector description, e.g. Equity
    #[arg(long)]
    pub market_sec_des: Option<String>,
}

impl From<MapArgs> for Query {
    fn from(args: MapArgs) -> Self {
        Query {
            id_type: args.id_type.into(),
            id_value: args.id_value,
            exch_code: args.exch_code,
            mic_code: args.mic_code,
            currency: args.currency,
            market_sec_des: args.market_sec_des,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BatchSource {
    File,
    Stdin,
    Json,
}
