use once_cell::sync::Lazy;
use regex::Regex;

static OPEN_DOUBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(^|[\s\-—(\[])""#).expect("pattern compiles"));
static OPEN_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[\s\-—(\[])'").expect("pattern compiles"));
static NUMBER_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)-(\d+)").expect("pattern compiles"));

/// Curly quotes, em/en dashes and ellipses for display text.
///
/// A quote is opening when it starts the text or follows whitespace, a
/// dash or an opening bracket; every other quote closes (which also turns
/// apostrophes into U+2019).
pub fn format_smart_quotes(text: &str) -> String {
    let result = OPEN_DOUBLE.replace_all(text, "${1}\u{201C}");
    let result = result.replace('"', "\u{201D}");

    let result = OPEN_SINGLE.replace_all(&result, "${1}\u{2018}");
    let result = result.replace('\'', "\u{2019}");

    let result = result.replace("---", "\u{2014}").replace("--", "\u{2014}");
    let result = NUMBER_RANGE.replace_all(&result, "${1}\u{2013}${2}");

    result.replace("...", "\u{2026}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_quotes_open_and_close() {
        assert_eq!(
            format_smart_quotes(r#""Modern governance" matters"#),
            "\u{201C}Modern governance\u{201D} matters"
        );
        assert_eq!(
            format_smart_quotes(r#"from "Can you survive?" to "How quickly?""#),
            "from \u{201C}Can you survive?\u{201D} to \u{201C}How quickly?\u{201D}"
        );
    }

    #[test]
    fn apostrophes_become_right_single_quotes() {
        assert_eq!(format_smart_quotes("UAE's transition"), "UAE\u{2019}s transition");
        assert_eq!(format_smart_quotes("'quoted'"), "\u{2018}quoted\u{2019}");
    }

    #[test]
    fn dashes_and_ranges() {
        assert_eq!(format_smart_quotes("a -- b"), "a \u{2014} b");
        assert_eq!(format_smart_quotes("a --- b"), "a \u{2014} b");
        assert_eq!(format_smart_quotes("pages 10-20"), "pages 10\u{2013}20");
        assert_eq!(format_smart_quotes("192A-192C"), "192A-192C");
    }

    #[test]
    fn ellipsis() {
        assert_eq!(format_smart_quotes("wait..."), "wait\u{2026}");
    }

    #[test]
    fn plain_text_is_unchanged() {
        let text = "What is Operational Resilience and Why Does it Matter?";
        assert_eq!(format_smart_quotes(text), text);
    }
}
