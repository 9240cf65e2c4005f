use anyhow::{Context, Result, anyhow};
use misconceptions::{extractor::Language, fetcher, pipeline, probe};

/// Print the DOM shape of the first page for a language (`en` by default).
#[tokio::main]
async fn main() -> Result<()> {
    misconceptions::init_tracing();

    let language: Language = match std::env::args().nth(1) {
        Some(arg) => arg.parse().map_err(|e: String| anyhow!(e))?,
        None => Language::English,
    };

    let source = pipeline::pages(language)
        .first()
        .ok_or_else(|| anyhow!("no pages configured for {}", language))?;

    let page = fetcher::fetch(source.url)
        .await
        .with_context(|| format!("failed to fetch {}", source.url))?;
    println!(
        "{} ({} bytes, fetched {})\n",
        page.url_final,
        page.body_raw.len(),
        page.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let report = probe::probe_page(&page.body_utf8, language.profile());
    println!("{}", report);
    Ok(())
}
