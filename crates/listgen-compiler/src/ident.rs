//! Identifier derivation.
//!
//! A list file's name becomes its Go identifier: drop the extension, split
//! the stem on `-`, upper-case the first ASCII letter of each segment, and
//! join the segments back together.

use listgen_core::IdentifierName;

/// Separator between words in a list file stem.
const SEGMENT_DELIMITER: char = '-';

/// Derives the identifier for a list file name.
///
/// Only the final extension is removed (`a.b.txt` has stem `a.b`). A leading
/// dot does not start an extension, so `.hidden` keeps its whole name as the
/// stem. Characters after the first in each segment are left as they are.
///
/// # Examples
///
/// ```
/// use listgen_compiler::derive_identifier;
///
/// assert_eq!(derive_identifier("static-lists.go").as_str(), "StaticLists");
/// assert_eq!(derive_identifier("a-b-c.txt").as_str(), "ABC");
/// ```
#[must_use]
pub fn derive_identifier(file_name: &str) -> IdentifierName {
    let stem = strip_extension(file_name);
    let name: String = stem
        .split(SEGMENT_DELIMITER)
        .map(capitalize_first)
        .collect();
    IdentifierName::new(name)
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(segment.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(derive_identifier("colors.txt").as_str(), "Colors");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(derive_identifier("user-agents").as_str(), "UserAgents");
    }

    #[test]
    fn test_only_final_extension_removed() {
        assert_eq!(derive_identifier("header-names.v2.txt").as_str(), "HeaderNames.v2");
    }

    #[test]
    fn test_dotfile_keeps_name() {
        assert_eq!(derive_identifier(".hidden").as_str(), ".hidden");
    }

    #[test]
    fn test_rest_of_segment_untouched() {
        assert_eq!(derive_identifier("http-XHeaders.txt").as_str(), "HttpXHeaders");
    }

    #[test]
    fn test_non_alphabetic_leading_chars_pass_through() {
        assert_eq!(derive_identifier("2fa-codes.txt").as_str(), "2faCodes");
        assert_eq!(derive_identifier("_private-list.txt").as_str(), "_privateList");
    }

    #[test]
    fn test_empty_segments_vanish() {
        assert_eq!(derive_identifier("a--b.txt").as_str(), "AB");
        assert!(derive_identifier("-.txt").is_empty());
    }

    #[test]
    fn test_non_ascii_left_alone() {
        assert_eq!(derive_identifier("élan-vital.txt").as_str(), "élanVital");
    }

    #[test]
    fn test_derivation_is_pure() {
        assert_eq!(
            derive_identifier("cache-keys.txt"),
            derive_identifier("cache-keys.txt")
        );
    }
}
