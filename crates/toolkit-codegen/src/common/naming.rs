//! Naming utilities shared by both emitters.
//!
//! Catalogue names arrive in `SCREAMING_SNAKE_CASE` (identifiers, tool
//! names) and `kebab-or-snake` slugs; generated declarations need
//! `PascalCase` type names and valid module identifiers.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::common::naming::{to_camel_case, to_pascal_case};
//!
//! assert_eq!(to_pascal_case("SEND_MESSAGE"), "SendMessage");
//! assert_eq!(to_camel_case("SEND_MESSAGE"), "sendMessage");
//! ```

/// Converts a name to `PascalCase`, splitting on any non-alphanumeric
/// separator and normalizing segment case.
///
/// # Examples
///
/// ```
/// use toolkit_codegen::common::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("SLACK_SEND_MESSAGE"), "SlackSendMessage");
/// assert_eq!(to_pascal_case("google-drive"), "GoogleDrive");
/// assert_eq!(to_pascal_case("hello"), "Hello");
/// ```
#[must_use]
pub fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
            })
        })
        .collect()
}

/// Converts a name to `camelCase`.
///
/// # Examples
///
/// ```
/// use toolkit_codegen::common::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("SEND_MESSAGE"), "sendMessage");
/// assert_eq!(to_camel_case("slack"), "slack");
/// ```
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_lowercase().to_string() + chars.as_str()
    })
}

/// Converts a catalogue name to a valid declaration identifier in both
/// target languages.
///
/// Maps separator characters to underscores and prefixes a leading digit.
/// Catalogue identifiers are not guaranteed to be identifiers in the
/// target grammars (`2CHAT` is a real-world shape), and a generated
/// `export const 2CHAT` or `class 2CHAT:` would not parse.
///
/// # Examples
///
/// ```
/// use toolkit_codegen::common::naming::declaration_ident;
///
/// assert_eq!(declaration_ident("SLACK"), "SLACK");
/// assert_eq!(declaration_ident("2CHAT"), "_2CHAT");
/// assert_eq!(declaration_ident("E-COMMERCE"), "E_COMMERCE");
/// ```
#[must_use]
pub fn declaration_ident(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Converts a toolkit slug to a valid module identifier.
///
/// Lowercases the slug, maps separator characters to underscores, and
/// prefixes a leading digit so the result is importable in both target
/// languages.
///
/// # Examples
///
/// ```
/// use toolkit_codegen::common::naming::module_name;
///
/// assert_eq!(module_name("slack"), "slack");
/// assert_eq!(module_name("google-drive"), "google_drive");
/// assert_eq!(module_name("2chat"), "_2chat");
/// ```
#[must_use]
pub fn module_name(slug: &str) -> String {
    declaration_ident(&slug.to_ascii_lowercase())
}

/// Collapses a description into a single documentation line.
///
/// Schema descriptions may contain newlines or comment terminators that
/// would break the surrounding doc-comment syntax.
#[must_use]
pub fn doc_line(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("SEND_MESSAGE"), "SendMessage");
        assert_eq!(to_pascal_case("send_message"), "SendMessage");
        assert_eq!(to_pascal_case("google-drive"), "GoogleDrive");
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("SEND_MESSAGE"), "sendMessage");
        assert_eq!(to_camel_case("GET_USER_DATA"), "getUserData");
        assert_eq!(to_camel_case("hello"), "hello");
    }

    #[test]
    fn test_declaration_ident() {
        assert_eq!(declaration_ident("SLACK"), "SLACK");
        assert_eq!(declaration_ident("2CHAT"), "_2CHAT");
        assert_eq!(declaration_ident("E-COMMERCE"), "E_COMMERCE");
        assert_eq!(declaration_ident(""), "_");
    }

    #[test]
    fn test_module_name() {
        assert_eq!(module_name("slack"), "slack");
        assert_eq!(module_name("google-drive"), "google_drive");
        assert_eq!(module_name("My.Weird Slug"), "my_weird_slug");
        assert_eq!(module_name("2chat"), "_2chat");
    }

    #[test]
    fn test_doc_line_collapses_whitespace() {
        assert_eq!(doc_line("Send a\nmessage\tto Slack"), "Send a message to Slack");
    }

    #[test]
    fn test_doc_line_escapes_comment_terminator() {
        assert_eq!(doc_line("tricky */ comment"), "tricky *\\/ comment");
    }
}
