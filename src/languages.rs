//! The locale codes a store listing can be translated into, mapped to the
//! human-readable language names used when phrasing translation prompts.

/// Supported locale codes paired with the English name of the language.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("am", "Amharic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("en_AU", "English (Australia)"),
    ("en_GB", "English (Great Britain)"),
    ("en_US", "English (USA)"),
    ("es", "Spanish"),
    ("es_419", "Spanish (Latin America and Caribbean)"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt_BR", "Portuguese (Brazil)"),
    ("pt_PT", "Portuguese (Portugal)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh_CN", "Chinese (China)"),
    ("zh_TW", "Chinese (Taiwan)"),
];

/// Look up the human-readable name for a locale code.
///
/// Returns `None` for codes outside the table; callers are expected to
/// treat that as a hard error before doing any work.
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn common_codes_resolve() {
        assert_eq!(language_name("fr"), Some("French"));
        assert_eq!(language_name("de"), Some("German"));
        assert_eq!(language_name("ja"), Some("Japanese"));
    }

    #[test]
    fn regional_codes_resolve() {
        assert_eq!(language_name("zh_CN"), Some("Chinese (China)"));
        assert_eq!(language_name("pt_BR"), Some("Portuguese (Brazil)"));
        assert_eq!(
            language_name("es_419"),
            Some("Spanish (Latin America and Caribbean)")
        );
    }

    #[test]
    fn source_language_is_in_the_table() {
        assert_eq!(language_name("en"), Some("English"));
    }

    #[test]
    fn unknown_code_returns_none() {
        assert_eq!(language_name("xx"), None);
        assert_eq!(language_name(""), None);
        assert_eq!(language_name("FR"), None);
    }

    #[test]
    fn table_has_55_entries() {
        assert_eq!(LANGUAGES.len(), 55);
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = LANGUAGES.iter().map(|(c, _)| *c).collect();
        assert_eq!(codes.len(), LANGUAGES.len());
    }
}
