use anyhow::Result;
use misconceptions::{config::Config, extractor::Language, pipeline};

/// Scrape both languages, then unify their IDs.
#[tokio::main]
async fn main() -> Result<()> {
    misconceptions::init_tracing();

    let config = Config::from_env()?;

    pipeline::scrape_language(&config, Language::English).await?;
    pipeline::scrape_language(&config, Language::Spanish).await?;

    let summary = pipeline::match_configured(&config)?;
    println!("\nUpdated files saved!\n{}", summary);
    Ok(())
}
