use crate::extractor::profile::LanguageProfile;

/// Whether a heading names a structural section whose lists are not content.
pub fn is_structural_section(heading: &str, profile: &LanguageProfile) -> bool {
    heading.is_empty() || profile.skip_sections.contains(&heading)
}

/// Whether a cleaned list item should be dropped.
pub fn should_reject(text: &str, profile: &LanguageProfile) -> bool {
    if text.chars().count() <= profile.min_text_len {
        return true;
    }

    if profile
        .skip_prefixes
        .iter()
        .any(|prefix| text.starts_with(prefix))
    {
        return true;
    }

    if let Some(window) = profile.isbn_window {
        let head: String = text.chars().take(window).collect();
        if head.contains("ISBN") {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::profile::{ENGLISH, SPANISH};

    #[test]
    fn test_reject_short_items() {
        // exactly 20 characters is still too short
        assert!(should_reject("abcdefghijklmnopqrst", &ENGLISH));
        assert!(!should_reject("abcdefghijklmnopqrstu", &ENGLISH));
        assert!(should_reject("abcdefghijklmnopqrstu", &SPANISH));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 20 characters, 25 bytes
        let text = "ñññññáéíóú0123456789";
        assert_eq!(text.chars().count(), 20);
        assert!(should_reject(text, &ENGLISH));
    }

    #[test]
    fn test_reject_cross_reference_prefixes() {
        assert!(should_reject(
            "Main article: Common misconceptions about history",
            &ENGLISH
        ));
        assert!(should_reject("^ Smith, John (2004). A Book Title.", &ENGLISH));
        assert!(should_reject(
            "Artículo principal: Mitos sobre la Edad Media en Europa",
            &SPANISH
        ));
        assert!(!should_reject(
            "Napoleon was not especially short for a Frenchman of his time.",
            &ENGLISH
        ));
    }

    #[test]
    fn test_reject_isbn_only_near_start_in_spanish() {
        let citation = "García, Juan (1999). Mitos. Madrid: Alianza. ISBN 978-84-206-0000-0.";
        assert!(should_reject(citation, &SPANISH));
        assert!(!should_reject(citation, &ENGLISH));

        let late = format!("{} ISBN 978-84-206-0000-0", "a".repeat(60));
        assert!(!should_reject(&late, &SPANISH));
    }

    #[test]
    fn test_structural_sections() {
        assert!(is_structural_section("See also", &ENGLISH));
        assert!(is_structural_section("Bibliografía", &SPANISH));
        assert!(is_structural_section("", &SPANISH));
        assert!(!is_structural_section("History", &ENGLISH));
        // lists are language specific
        assert!(!is_structural_section("Referencias", &ENGLISH));
    }
}
