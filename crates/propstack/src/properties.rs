//! Minimal parser for line-oriented `key=value` property text.
//!
//! Supports the classic format: `#` and `!` comment lines, blank lines, `=`
//! or `:` separators, whitespace trimmed around keys and values. A line with
//! no separator is a key with an empty value. Repeated keys within one text
//! resolve to the last occurrence. Escape sequences and line continuations
//! are not supported.

use std::collections::HashMap;

/// Parse `text` and merge its entries into `table`, overwriting on
/// duplicate keys.
pub(crate) fn parse_into(text: &str, table: &mut HashMap<String, String>) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (key, value) = match line.find(['=', ':']) {
            Some(pos) => (line[..pos].trim_end(), line[pos + 1..].trim_start()),
            None => (line, ""),
        };
        if key.is_empty() {
            continue;
        }
        table.insert(key.to_owned(), value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> HashMap<String, String> {
        let mut table = HashMap::new();
        parse_into(text, &mut table);
        table
    }

    #[test]
    fn test_basic_pairs() {
        let table = parse("a=1\nb = two\nc: three\n");
        assert_eq!(table["a"], "1");
        assert_eq!(table["b"], "two");
        assert_eq!(table["c"], "three");
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let table = parse("# comment\n! also a comment\n\n  \nkey=value\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table["key"], "value");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let table = parse("k=first\nk=second\n");
        assert_eq!(table["k"], "second");
    }

    #[test]
    fn test_no_separator_is_empty_value() {
        let table = parse("flagonly\n");
        assert_eq!(table["flagonly"], "");
    }

    #[test]
    fn test_value_may_contain_separator() {
        let table = parse("url=http://example.com:8500/path\n");
        assert_eq!(table["url"], "http://example.com:8500/path");
    }
}
