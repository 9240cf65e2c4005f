use anyhow::Result;
use misconceptions::{config::Config, pipeline};

fn main() -> Result<()> {
    misconceptions::init_tracing();

    let config = Config::from_env()?;
    let summary = pipeline::match_configured(&config)?;
    println!("\nUpdated files saved!\n{}", summary);
    Ok(())
}
