mod news;
mod speak;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newsbrief")]
#[command(about = "Company news summaries with sentiment and topics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and summarize recent news for one company
    News {
        /// Company name to search for
        company: String,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compare sentiment distributions across companies
    Compare {
        /// Companies to compare (defaults to the watchlist)
        companies: Vec<String>,
    },
    /// Render text to an MP3 file
    Speak {
        /// Text to read aloud
        text: String,

        /// Output file
        #[arg(long, short)]
        out: PathBuf,

        /// Language code, overriding `NEWSBRIEF_TTS_LANG`
        #[arg(long)]
        lang: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = newsbrief_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::News { company, json } => news::run_news(&config, &company, json).await,
        Commands::Compare { companies } => news::run_compare(&config, &companies).await,
        Commands::Speak { text, out, lang } => {
            speak::run_speak(&config, &text, &out, lang.as_deref()).await
        }
    }
}
