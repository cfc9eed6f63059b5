use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a lowercase letter or digit followed by an uppercase letter, or the last two letters of
/// an uppercase run followed by a lowercase letter or digit.
static WORD_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z0-9])([A-Z])|([A-Z])([A-Z])([a-z0-9])")
        .expect("word boundary pattern is a valid regular expression")
});

/// Splits a camel or pascal cased name into lowercase words joined by `separator`.
///
/// Boundaries are found in a single left-to-right pass, and characters consumed by one boundary
/// are not considered for the next one.
pub(crate) fn split_words(name: &str, separator: char) -> String {
    let replacement = format!("${{1}}${{3}}{}${{2}}${{4}}${{5}}", separator);
    let split: Cow<'_, str> = WORD_BOUNDARY.replace_all(name, replacement.as_str());
    split.to_ascii_lowercase()
}

pub(crate) fn to_pascal_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut uppercase_next = true;

    for ch in name.chars() {
        if ch == '_' {
            uppercase_next = true
        } else if uppercase_next {
            result.push(ch.to_ascii_uppercase());
            uppercase_next = false;
        } else {
            result.push(ch.to_ascii_lowercase());
        }
    }

    result
}

pub(crate) fn uppercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(name.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

pub(crate) fn lowercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(name.len());
            result.push(first.to_ascii_lowercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

#[test]
fn split_words_at_case_changes() {
    assert_eq!(split_words("myVarName", '_'), "my_var_name");
    assert_eq!(split_words("MyVarName", '-'), "my-var-name");
    assert_eq!(split_words("version2Beta", '_'), "version2_beta");
    assert_eq!(split_words("var", '_'), "var");
    assert_eq!(split_words("A", '_'), "a");
}

#[test]
fn split_words_after_acronym() {
    assert_eq!(split_words("getHTTPResponse", '_'), "get_http_response");
    assert_eq!(split_words("XMLParser", '_'), "xml_parser");
    assert_eq!(split_words("parseXML", '_'), "parse_xml");
    // 'B' is consumed by the first boundary, so 'BC' + 'd' is not split again.
    assert_eq!(split_words("aBCd", '_'), "a_bcd");
}

#[test]
fn pascal_case_from_snake_case() {
    assert_eq!(to_pascal_case("my_var_name"), "MyVarName");
    assert_eq!(to_pascal_case("my_var_2d"), "MyVar2d");
    assert_eq!(to_pascal_case("mY_VAR"), "MyVar");
    assert_eq!(to_pascal_case("a"), "A");
}

#[test]
fn first_character_case() {
    assert_eq!(uppercase_first("myVar"), "MyVar");
    assert_eq!(lowercase_first("MyVar"), "myVar");
    assert_eq!(uppercase_first(""), "");
    assert_eq!(lowercase_first("ÄBC"), "ÄBC");
}
