use std::fs;

use scraper::Html;

use crate::extractor::profile::{ENGLISH, SPANISH};
use crate::extractor::{extract_page, extract_records};

const EN_URL: &str = "https://en.wikipedia.org/wiki/List_of_common_misconceptions_about_history";
const ES_URL: &str = "https://es.wikipedia.org/wiki/Anexo:Falsos_mitos";

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_english_page() {
    let records = extract_page(&fixture("english.html"), EN_URL, "History", &ENGLISH);

    assert_eq!(records.len(), 3);

    assert_eq!(
        records[0].text,
        "Julius Caesar was not born via caesarean section. Such a procedure would have been fatal to the mother."
    );
    assert_eq!(records[0].category, "Ancient history");
    assert_eq!(records[0].source_url, format!("{}#Ancient_history", EN_URL));

    // sub-bullets are not records of their own, but their text stays in the parent item
    assert!(records[1].text.starts_with("Vikings did not wear horned helmets in battle."));
    assert!(records[1].text.contains("Wagner"));

    assert_eq!(records[2].category, "Modern history");
    assert!(records[2].text.starts_with("Napoleon was not especially short"));
}

#[test]
fn test_english_records_respect_filters() {
    let records = extract_page(&fixture("english.html"), EN_URL, "History", &ENGLISH);

    for record in &records {
        assert!(record.text.chars().count() > 20);
        assert!(!record.text.starts_with("Main article:"));
        assert!(!record.text.starts_with("Further information:"));
        assert!(!record.text.contains("[1]"));
        assert_ne!(record.category, "See also");
        assert_ne!(record.category, "References");
    }
    assert!(!records.iter().any(|r| r.text.starts_with("Nested detail")));
    assert!(!records.iter().any(|r| r.text.starts_with("Lead list")));
}

#[test]
fn test_extract_spanish_page() {
    let records = extract_page(&fixture("spanish.html"), ES_URL, "Falsos mitos", &SPANISH);

    let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts.len(), 3, "unexpected records: {:?}", texts);

    assert_eq!(
        texts[0],
        "Napoleón Bonaparte no era bajo: medía alrededor de 1,69 metros, una estatura normal en su época."
    );
    assert_eq!(texts[1], "Los vikingos no usaban cascos con cuernos.");
    assert!(texts[2].starts_with("Los murciélagos no son ciegos"));

    assert_eq!(records[0].category, "Historia");
    assert_eq!(records[2].category, "Ciencia y naturaleza");
    assert_eq!(records[2].source_url, format!("{}#Ciencia_y_naturaleza", ES_URL));

    assert!(!texts.iter().any(|t| t.contains("ISBN")));
    assert!(!records.iter().any(|r| r.category == "Bibliografía"));
}

#[test]
fn test_missing_container_yields_nothing() {
    let html = "<html><body><h2>Heading</h2><ul><li>An item that would otherwise be long enough</li></ul></body></html>";
    let records = extract_page(html, EN_URL, "History", &ENGLISH);
    assert!(records.is_empty());
}

#[test]
fn test_items_are_yielded_in_document_order() {
    let document = Html::parse_document(&fixture("english.html"));
    let mut records = extract_records(&document, EN_URL, &ENGLISH);

    let first = records.next().unwrap();
    assert!(first.text.starts_with("Julius Caesar"));
    let rest: Vec<_> = records.collect();
    assert_eq!(rest.len(), 2);
}

#[test]
fn test_malformed_html() {
    let html = r#"<div id="mw-content-text"><h2>Broken<ul><li>Unclosed item with enough text in it<li>Second unclosed item with text"#;
    // html5ever recovers; the only requirement is no panic and clean output
    for record in extract_page(html, EN_URL, "History", &ENGLISH) {
        assert!(record.text.chars().count() > 20);
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract_page(&html, EN_URL, "History", &ENGLISH);
            let _ = extract_page(&html, ES_URL, "Falsos mitos", &SPANISH);
        }

        #[test]
        fn test_items_always_pass_filters(
            items in proptest::collection::vec("[a-zA-Z ^:\\[\\]0-9]{0,60}", 0..8),
        ) {
            let body: String = items.iter().map(|i| format!("<li>{}</li>", i)).collect();
            let html = format!(r#"<div id="mw-content-text"><h2>Topic</h2><ul>{}</ul></div>"#, body);
            for record in extract_page(&html, EN_URL, "History", &ENGLISH) {
                prop_assert!(record.text.chars().count() > 20);
                prop_assert!(!record.text.starts_with('^'));
                prop_assert!(!record.text.starts_with("Main article:"));
            }
        }
    }
}
