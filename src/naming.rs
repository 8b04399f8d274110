//! Identifier naming
//!
//! Turns raw UI names (`myButton-02`, `btn-primary`, `my.name`) into C# constant
//! names (`MY_BUTTON_02`, `BTN_PRIMARY`, `MY_NAME`), shortens names that are
//! too long, and cleans up free text typed in for namespaces and class names.

use regex::Regex;
use std::sync::OnceLock;

/// Words are an uppercase letter with trailing lowercase letters, a run of
/// lowercase letters, or a run of digits. Everything else separates words.
fn const_name_word_regex() -> &'static Regex {
    static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    WORD_REGEX.get_or_init(|| {
        Regex::new(r"[A-Z][a-z]*|[a-z]+|[0-9]+").expect("word pattern is a valid regex")
    })
}

/// Convert a raw name to an upper snake case constant name.
///
/// Returns an empty string when `raw` contains no letters or digits, callers
/// treat that as "nothing to emit". A name whose first word is a number gets a
/// leading `_` so it stays a legal C# identifier.
///
/// # Examples
/// ```
/// use uitk_string_gen::naming::normalize_to_const_name;
///
/// assert_eq!(normalize_to_const_name("myButton-02"), "MY_BUTTON_02");
/// assert_eq!(normalize_to_const_name("02-title"), "_02_TITLE");
/// assert_eq!(normalize_to_const_name("--"), "");
/// ```
pub fn normalize_to_const_name(raw: &str) -> String {
    let words: Vec<String> = const_name_word_regex()
        .find_iter(raw)
        .map(|m| m.as_str().to_ascii_uppercase())
        .collect();

    let name = words.join("_");
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name
    }
}

/// Shorten an identifier to at most `max_length` characters.
///
/// Names that already fit are returned unchanged. Longer names go through
/// progressively more aggressive steps until they fit:
/// 1. vowels after the first letter of each word are dropped (`LABEL` -> `LBL`)
/// 2. every word but the last is reduced to its initial (`LGN_BTTN_LBL` -> `LB_LBL`)
/// 3. the result is cut at `max_length` and trailing underscores are removed
///
/// The result is never empty and never starts with a digit. A `max_length` of
/// zero is treated as one.
pub fn abbreviate(name: &str, max_length: usize) -> String {
    let max_length = max_length.max(1);
    if name.chars().count() <= max_length {
        return name.to_string();
    }

    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let words: Vec<&str> = cleaned.split('_').filter(|w| !w.is_empty()).collect();
    let Some(first_word) = words.first() else {
        return "_".to_string();
    };

    let prefix = if cleaned.starts_with('_') || first_word.starts_with(|c: char| c.is_ascii_digit()) {
        "_"
    } else {
        ""
    };

    let compact: Vec<String> = words.iter().map(|w| strip_inner_vowels(w)).collect();
    let candidate = format!("{}{}", prefix, compact.join("_"));
    if candidate.len() <= max_length {
        return candidate;
    }

    let Some((last, rest)) = compact.split_last() else {
        return "_".to_string();
    };
    let initials: String = rest.iter().filter_map(|w| w.chars().next()).collect();
    let candidate = if initials.is_empty() {
        format!("{}{}", prefix, last)
    } else {
        format!("{}{}_{}", prefix, initials, last)
    };
    if candidate.len() <= max_length {
        return candidate;
    }

    // Everything is ASCII at this point, byte slicing is safe
    let truncated = candidate[..max_length].trim_end_matches('_');
    if truncated.is_empty() {
        "_".to_string()
    } else {
        truncated.to_string()
    }
}

fn strip_inner_vowels(word: &str) -> String {
    let mut chars = word.chars();
    let mut result = String::with_capacity(word.len());
    if let Some(first) = chars.next() {
        result.push(first);
    }
    result.extend(chars.filter(|c| !matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')));
    result
}

/// Filter user supplied text down to something usable as a namespace or type name.
///
/// Keeps letters, ASCII digits, `_` and, when `allow_periods` is set, `.`. Leading
/// digits and periods are dropped, as are trailing periods. Returns an empty
/// string if nothing valid is left.
pub fn sanitize_free_text(raw: &str, allow_periods: bool) -> String {
    let mut result = String::with_capacity(raw.len());

    for c in raw.chars() {
        // Digits are decimal only, C# rejects `²` or `½` in identifiers
        let allowed = c.is_alphabetic() || c.is_ascii_digit() || c == '_' || (allow_periods && c == '.');
        if !allowed {
            continue;
        }
        if result.is_empty() && (c.is_ascii_digit() || c == '.') {
            continue;
        }
        result.push(c);
    }

    let trimmed_len = result.trim_end_matches('.').len();
    result.truncate(trimmed_len);
    result
}

/// Whether `name` is a non-empty ASCII identifier made of letters, digits and `_`
/// that does not start with a digit.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// C# reserved keywords. Contextual keywords (`var`, `async`, ...) are legal
/// identifiers and are not listed.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Whether `name` is a C# reserved keyword and needs `@` to be used as an identifier
pub fn is_reserved_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
