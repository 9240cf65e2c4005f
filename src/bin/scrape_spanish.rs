use anyhow::Result;
use misconceptions::{config::Config, extractor::Language, pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    misconceptions::init_tracing();

    let config = Config::from_env()?;
    pipeline::scrape_language(&config, Language::Spanish).await?;
    Ok(())
}
