use std::collections::HashSet;

/// Language codes accepted out of the box. Translation and speech each get
/// their own catalog; both start from this list unless overridden.
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "en", "te", "hi", "fr", "es", "de", "zh-CN", "ja", "ru", "ar", "ko", "it", "pt", "tr", "nl",
    "bn", "ta", "ml", "gu", "mr", "pa",
];

/// Immutable set of supported language codes for one endpoint.
///
/// Built once at startup and shared read-only. Membership is exact-match,
/// so region-qualified tags like `zh-CN` must be given verbatim.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    codes: HashSet<String>,
}

impl LanguageCatalog {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated code list, e.g. `"en,fr,zh-CN"`.
    pub fn from_csv(csv: &str) -> Self {
        Self::new(
            csv.split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty()),
        )
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGES.iter().copied())
    }
}
