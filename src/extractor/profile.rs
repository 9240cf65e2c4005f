use std::fmt;
use std::str::FromStr;

/// Per-language scraping rules.
///
/// English and Spanish Wikipedia lay out their misconception lists the same
/// way but differ in boilerplate section names, cross-reference phrasing and
/// how much noise leaks into list items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    pub language: Language,
    /// Items must be strictly longer than this many characters.
    pub min_text_len: usize,
    /// Suffix the edit link leaves in heading text.
    pub edit_suffix: &'static str,
    /// Headings whose lists are navigation or references, not content.
    pub skip_sections: &'static [&'static str],
    /// Items starting with one of these are cross-references.
    pub skip_prefixes: &'static [&'static str],
    /// Reject items mentioning ISBN within this many leading characters.
    pub isbn_window: Option<usize>,
    /// Skip items nested inside a `.reflist` block.
    pub skip_reflist: bool,
    /// Prefer the `mw:PageProp/toc` meta element as the search area.
    pub toc_meta_area: bool,
}

pub static ENGLISH: LanguageProfile = LanguageProfile {
    language: Language::English,
    min_text_len: 20,
    edit_suffix: "[edit]",
    skip_sections: &["See also", "References", "External links", "Notes", "Contents"],
    skip_prefixes: &["Main article:", "^", "See also:", "Further information:"],
    isbn_window: None,
    skip_reflist: true,
    toc_meta_area: false,
};

pub static SPANISH: LanguageProfile = LanguageProfile {
    language: Language::Spanish,
    min_text_len: 30,
    edit_suffix: "[editar]",
    skip_sections: &[
        "Véase también",
        "Referencias",
        "Enlaces externos",
        "Notas",
        "Contenido",
        "Leer más",
        "Bibliografía",
    ],
    skip_prefixes: &["Artículo principal:", "^", "Véase también:", "Más información:"],
    isbn_window: Some(50),
    skip_reflist: false,
    toc_meta_area: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" => Ok(Language::Spanish),
            other => Err(format!("unknown language '{}', expected 'en' or 'es'", other)),
        }
    }
}
