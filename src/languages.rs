use serde::Serialize;

/// Languages offered in the UI selectors, in display order
const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Fixed code -> display name table, built once at startup and shared read-only.
///
/// Only used to populate UI choices; requests are not checked against it.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    entries: Vec<Language>,
}

impl LanguageTable {
    pub fn builtin() -> Self {
        Self {
            entries: SUPPORTED_LANGUAGES
                .iter()
                .map(|&(code, name)| Language { code, name })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.entries.iter()
    }

    pub fn name(&self, code: &str) -> Option<&'static str> {
        self.entries.iter().find(|l| l.code == code).map(|l| l.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mapping_is_injective() {
        let table = LanguageTable::builtin();
        let codes: HashSet<_> = table.iter().map(|l| l.code).collect();
        let names: HashSet<_> = table.iter().map(|l| l.name).collect();
        assert_eq!(codes.len(), table.len());
        assert_eq!(names.len(), table.len());
    }

    #[test]
    fn lookup() {
        let table = LanguageTable::builtin();
        assert_eq!(table.len(), 13);
        assert_eq!(table.name("en"), Some("English"));
        assert_eq!(table.name("es"), Some("Spanish"));
        assert_eq!(table.name("tr"), Some("Turkish"));
        assert_eq!(table.name("xx"), None);
        assert_eq!(table.iter().next().map(|l| l.code), Some("en"));
    }
}
