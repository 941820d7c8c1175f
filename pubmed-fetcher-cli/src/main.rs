use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "get-papers-list",
    about = "Fetch PubMed papers with industry-affiliated authors",
    long_about = "Searches PubMed, flags authors whose affiliation looks non-academic \
                  (pharma, biotech, inc, corp, company) and writes the results as CSV"
)]
struct Cli {
    #[command(flatten)]
    fetch: commands::fetch::Fetch,

    /// Print progress and debug information
    #[arg(short, long)]
    debug: bool,

    /// API key for NCBI E-utilities
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "get-papers-list")]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "warn,pubmed_fetcher=debug,get_papers_list=debug"
    } else {
        "warn"
    };

    // Progress lines go to stdout unless the CSV does
    let (writer, ansi) = if cli.fetch.writes_to_stdout() {
        (BoxMakeWriter::new(io::stderr), io::stderr().is_terminal())
    } else {
        (BoxMakeWriter::new(io::stdout), io::stdout().is_terminal())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let api_key = cli.api_key.as_deref();
    let email = cli.email.as_deref();
    let tool = &cli.tool;
    cli.fetch.execute_with_config(api_key, email, tool).await
}
