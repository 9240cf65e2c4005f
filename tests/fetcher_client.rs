use misconceptions::fetcher::{Charset, FetchError, USER_AGENT, fetch};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wiki/List"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(
                    "<html><head><title>List</title></head><body><ul><li>Bats are not blind</li></ul></body></html>"
                        .as_bytes(),
                )
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/wiki/List", mock_server.uri());
    let result = fetch(&url).await.unwrap();

    assert!(result.status.is_success());
    assert!(result.body_utf8.contains("Bats are not blind"));
    assert_eq!(result.charset, Charset::Utf8);
    assert_eq!(result.url_final.as_str(), url);
}

#[tokio::test]
async fn test_fetch_sends_browser_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wiki/List"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes("<html><body>ok</body></html>".as_bytes())
                .insert_header("Content-Type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/wiki/List", mock_server.uri());
    let result = fetch(&url).await.unwrap();
    assert!(result.body_utf8.contains("ok"));
}

#[tokio::test]
async fn test_fetch_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notfound"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/notfound", mock_server.uri());
    let result = fetch(&url).await;

    match result {
        Err(err @ FetchError::Http { .. }) => {
            assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
        }
        _ => panic!("Expected HTTP 404 error"),
    }
}

#[tokio::test]
async fn test_fetch_redirect() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wiki/Old_title"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/wiki/New_title"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wiki/New_title"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes("<html><body>Moved page</body></html>".as_bytes())
                .insert_header("Content-Type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/wiki/Old_title", mock_server.uri());
    let result = fetch(&url).await.unwrap();

    assert!(result.body_utf8.contains("Moved page"));
    assert!(result.url_final.as_str().ends_with("/wiki/New_title"));
}

#[tokio::test]
async fn test_fetch_gzip_compression() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let original_content = "<html><body><ul><li>Los murciélagos no son ciegos</li></ul></body></html>";

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(original_content.as_bytes()).unwrap();
    let compressed_data = encoder.finish().unwrap();

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gzipped"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(compressed_data)
                .insert_header("Content-Type", "text/html; charset=utf-8")
                .insert_header("Content-Encoding", "gzip"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/gzipped", mock_server.uri());
    let result = fetch(&url).await.unwrap();

    assert!(result.body_utf8.contains("Los murciélagos no son ciegos"));
}

#[tokio::test]
async fn test_fetch_latin1_page_is_decoded() {
    let mock_server = MockServer::start().await;

    // "Napoleón" in ISO-8859-1
    let body = b"<html><body>Napole\xf3n</body></html>".to_vec();

    Mock::given(method("GET"))
        .and(path("/latin1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(body)
                .insert_header("Content-Type", "text/html; charset=iso-8859-1"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/latin1", mock_server.uri());
    let result = fetch(&url).await.unwrap();

    assert!(result.body_utf8.contains("Napoleón"));
    assert_eq!(result.charset, Charset::Windows1252);
}

#[tokio::test]
async fn test_fetch_unsupported_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF])
                .insert_header("Content-Type", "image/jpeg"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/image", mock_server.uri());
    let result = fetch(&url).await;

    match result {
        Err(FetchError::UnsupportedContentType(content_type)) => {
            assert_eq!(content_type, "image/jpeg");
        }
        _ => panic!("Expected UnsupportedContentType error"),
    }
}

#[tokio::test]
async fn test_fetch_body_too_large() {
    let mock_server = MockServer::start().await;

    let large_body = "x".repeat(6 * 1024 * 1024);

    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(large_body.as_bytes())
                .insert_header("Content-Type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/large", mock_server.uri());
    let result = fetch(&url).await;

    match result {
        Err(FetchError::BodyTooLarge(size)) => {
            assert_eq!(size, 6 * 1024 * 1024);
        }
        _ => panic!("Expected BodyTooLarge error"),
    }
}

#[tokio::test]
async fn test_fetch_invalid_url() {
    let result = fetch("not-a-valid-url").await;

    match result {
        Err(FetchError::InvalidUrl(_)) => {}
        _ => panic!("Expected InvalidUrl error"),
    }
}
