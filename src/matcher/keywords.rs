//! Named entities and concepts that anchor a cross-language match.

use std::collections::BTreeSet;

/// Canonical (English) token and every surface form that signals it, in
/// English and Spanish. Matching is by lower-case substring, so short forms
/// such as `bat` or `luna` also fire inside longer words.
pub static KEYWORD_DICTIONARY: &[(&str, &[&str])] = &[
    ("einstein", &["einstein"]),
    ("napoleon", &["napoleon", "napoleón"]),
    ("viking", &["viking", "vikingo"]),
    ("caesar", &["caesar", "césar"]),
    ("columbus", &["columbus", "colón"]),
    ("galileo", &["galileo"]),
    ("coca-cola", &["coca-cola"]),
    ("pepsi", &["pepsi"]),
    ("adidas", &["adidas"]),
    ("netflix", &["netflix"]),
    ("chevrolet", &["chevrolet"]),
    ("ar-15", &["ar-15"]),
    ("bermuda", &["bermuda", "bermudas"]),
    ("everest", &["everest"]),
    ("sahara", &["sahara", "sáhara"]),
    ("great wall", &["great wall", "gran muralla"]),
    ("mozart", &["mozart"]),
    ("beethoven", &["beethoven"]),
    ("shakespeare", &["shakespeare"]),
    ("hemingway", &["hemingway"]),
    ("vitamin", &["vitamin", "vitamina"]),
    ("sugar", &["sugar", "azúcar"]),
    ("caffeine", &["caffeine", "cafeína"]),
    ("alcohol", &["alcohol"]),
    ("chocolate", &["chocolate"]),
    ("dinosaur", &["dinosaur", "dinosaurio"]),
    ("evolution", &["evolution", "evolución"]),
    ("black hole", &["black hole", "agujero negro"]),
    ("gravity", &["gravity", "gravedad"]),
    ("goldfish", &["goldfish", "pez dorado"]),
    ("chameleon", &["chameleon", "camaleon"]),
    ("bat", &["bat", "murciélago"]),
    ("shark", &["shark", "tiburón"]),
    ("penguin", &["penguin", "pingüino"]),
    ("ostrich", &["ostrich", "avestruz"]),
    ("venus", &["venus"]),
    ("mars", &["mars", "marte"]),
    ("moon", &["moon", "luna"]),
    ("santa claus", &["santa claus", "papá noel"]),
    ("nova", &["nova"]),
];

/// Canonical keywords found in a text. Ordered, so iteration and debug
/// output are deterministic.
pub type KeywordSet = BTreeSet<&'static str>;

pub fn extract_keywords(text: &str) -> KeywordSet {
    let lower = text.to_lowercase();
    KEYWORD_DICTIONARY
        .iter()
        .filter(|(_, forms)| forms.iter().any(|form| lower.contains(form)))
        .map(|(canonical, _)| *canonical)
        .collect()
}
