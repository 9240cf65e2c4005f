use crate::fetcher::{decode::process_response, errors::FetchError, types::PageResponse};
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, header::HeaderValue};
use tracing::{info, instrument};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB

/// Wikipedia serves the same markup to browsers and bots, but the lists were
/// always scraped as a desktop browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                HeaderValue::from_static(
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                ),
            );
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

/// Fetch a page and decode it to UTF-8.
///
/// There is no retry: a failed fetch is returned to the caller, which
/// aborts the run.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str) -> Result<PageResponse, FetchError> {
    let parsed_url = url::Url::parse(url)?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let final_url = response.url().clone();
    let status = response.status();
    let headers = response.headers().clone();

    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    let content_type = headers
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
        return Err(FetchError::UnsupportedContentType(content_type));
    }

    let body_bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    // Content-Length may be missing on chunked responses
    if body_bytes.len() as u64 > MAX_BODY_SIZE {
        return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
    }

    let page = process_response(final_url, status, headers, body_bytes, &content_type)?;
    info!(
        "Fetched {} (status: {}, charset: {:?}, size: {} bytes)",
        page.url_final,
        page.status,
        page.charset,
        page.body_utf8.len()
    );
    Ok(page)
}
