//! Identifier quoting
//!
//! Table and column names are the only caller input interpolated into query
//! text. Each dotted segment is wrapped in the dialect's quote character.
//!
//! Quote characters embedded inside a segment are not escaped; identifiers
//! containing them are passed through as-is.

/// Quote a possibly schema-qualified identifier
///
/// Empty segments are dropped and one surrounding pair of quote characters
/// is stripped from every segment first, so quoting is idempotent.
pub fn quote_identifier(identifier: &str, quote: char) -> String {
    identifier
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let segment = segment.strip_prefix(quote).unwrap_or(segment);
            let segment = segment.strip_suffix(quote).unwrap_or(segment);
            let mut quoted = String::with_capacity(segment.len() + 2);
            quoted.push(quote);
            quoted.push_str(segment);
            quoted.push(quote);
            quoted
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_dotted() {
        assert_eq!(quote_identifier("t", '`'), "`t`");
        assert_eq!(quote_identifier("db.t", '`'), "`db`.`t`");
        assert_eq!(quote_identifier("ks.t", '"'), "\"ks\".\"t\"");
    }

    #[test]
    fn test_idempotent() {
        let once = quote_identifier("a.b.c", '`');
        assert_eq!(once, "`a`.`b`.`c`");
        assert_eq!(quote_identifier(&once, '`'), once);
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(quote_identifier(".a..b.", '`'), "`a`.`b`");
        assert_eq!(quote_identifier("", '`'), "");
    }

    #[test]
    fn test_other_dialect_quotes_untouched() {
        // only the dialect's own quote character is stripped
        assert_eq!(quote_identifier("\"a\"", '`'), "`\"a\"`");
    }
}
