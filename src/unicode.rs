/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::borrow::Cow;

use crate::record::Record;

/// Placeholder `UnicodeData.txt` uses as the name of every Cc character.
pub const CONTROL: &str = "<control>";

/// One line of the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub codepoint: &'a str,
    pub display_name: &'a str,
}

impl<'a> Entry<'a> {
    /// True when the name came from the alternate field instead of field 1.
    pub fn is_substituted(&self, record: &Record<'a>) -> bool {
        record.name() == CONTROL && !record.alt_name().is_empty()
    }
}

impl<'a> From<&Record<'a>> for Entry<'a> {
    fn from(record: &Record<'a>) -> Entry<'a> {
        Entry {
            codepoint: record.codepoint(),
            display_name: display_name(record.name(), record.alt_name()),
        }
    }
}

/// Control characters have no real name, so fall back to the Unicode 1.0
/// name when there is one. Everything else keeps its own name.
pub fn display_name<'a>(name: &'a str, alt_name: &'a str) -> &'a str {
    match (name, alt_name) {
        (CONTROL, alt) if !alt.is_empty() => alt,
        (name, _) => name,
    }
}

/// Backslash-escapes `"` and `\` so the name can sit inside a double-quoted
/// literal. Borrows when there is nothing to escape, which is every name in
/// the published data.
pub fn escape_name(name: &str) -> Cow<'_, str> {
    let mut escaped = String::new();
    let mut start = 0;

    for (i, c) in name.char_indices() {
        if c != '"' && c != '\\' {
            continue;
        }
        escaped.push_str(&name[start..i]);
        escaped.push('\\');
        escaped.push(c);
        start = i + 1;
    }

    if start == 0 {
        Cow::Borrowed(name)
    } else {
        escaped.push_str(&name[start..]);
        Cow::Owned(escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_is_kept() {
        assert_eq!(display_name("LATIN CAPITAL LETTER A", ""), "LATIN CAPITAL LETTER A");
    }

    #[test]
    fn non_control_ignores_alt_name() {
        assert_eq!(display_name("LATIN SMALL LETTER DOTLESS I", "LATIN SMALL LETTER I DOTLESS"),
                   "LATIN SMALL LETTER DOTLESS I");
    }

    #[test]
    fn control_uses_alt_name() {
        assert_eq!(display_name(CONTROL, "NULL"), "NULL");
    }

    #[test]
    fn control_without_alt_name_stays_placeholder() {
        assert_eq!(display_name(CONTROL, ""), CONTROL);
    }

    #[test]
    fn control_match_is_exact() {
        assert_eq!(display_name("<control> ", "NULL"), "<control> ");
        assert_eq!(display_name("<CONTROL>", "NULL"), "<CONTROL>");
    }

    #[test]
    fn entry_from_record() {
        let r = Record::parse("0009;<control>;Cc;0;S;;;;;N;CHARACTER TABULATION;;;;", 1).unwrap();
        let e = Entry::from(&r);
        assert_eq!(e.codepoint, "0009");
        assert_eq!(e.display_name, "CHARACTER TABULATION");
        assert!(e.is_substituted(&r));
    }

    #[test]
    fn alt_name_equal_to_placeholder_still_counts() {
        let r = Record::parse("0001;<control>;Cc;0;BN;;;;;N;<control>;;;;", 1).unwrap();
        let e = Entry::from(&r);
        assert_eq!(e.display_name, CONTROL);
        assert!(e.is_substituted(&r));

        let r = Record::parse("0001;<control>;Cc;0;BN;;;;;N;;;;;", 1).unwrap();
        assert!(!Entry::from(&r).is_substituted(&r));
    }

    #[test]
    fn escape_leaves_plain_names_borrowed() {
        match escape_name("LATIN CAPITAL LETTER A") {
            Cow::Borrowed(s) => assert_eq!(s, "LATIN CAPITAL LETTER A"),
            Cow::Owned(_) => panic!("nothing to escape"),
        }
    }

    #[test]
    fn escape_quotes_and_backslashes() {
        assert_eq!(escape_name(r#"SAY "HI""#), r#"SAY \"HI\""#);
        assert_eq!(escape_name(r"BACK\SLASH"), r"BACK\\SLASH");
        assert_eq!(escape_name(r#"\""#), r#"\\\""#);
    }
}
