//! C# constants class emitter
//!
//! Renders one static class of `public const string` fields inside a
//! namespace. The output depends only on the inputs, so regenerating from the
//! same assets produces byte-identical files.

use crate::dedup::ConstantEntry;

/// First line of every generated file
pub const PROVENANCE_COMMENT: &str =
    "// This file was generated by uitk-string-gen. Do not edit it by hand.";

/// Extension of generated source files
pub const SOURCE_EXTENSION: &str = "cs";

const CLASS_INDENT: &str = "    ";
const FIELD_INDENT: &str = "        ";

/// Render the generated class.
///
/// Fields follow the order of `entries`. Values go through
/// [`escape_string_literal`], identifiers are written as given.
///
/// # Examples
/// ```
/// use uitk_string_gen::cs::emitter::render_class;
/// use uitk_string_gen::dedup::assign_unique;
///
/// let table = assign_unique([("BTN_PRIMARY", "btn-primary")]);
/// let source = render_class("Game.UI", "MainMenuClasses", table.entries());
/// assert!(source.contains("        public const string BTN_PRIMARY = \"btn-primary\";\n"));
/// ```
pub fn render_class(namespace: &str, class_name: &str, entries: &[ConstantEntry]) -> String {
    let mut source = String::with_capacity(entries.len() * 50 + 200);

    source.push_str(PROVENANCE_COMMENT);
    source.push('\n');
    source.push_str(&format!("namespace {}\n", namespace));
    source.push_str("{\n");
    source.push_str(&format!("{}public static class {}\n", CLASS_INDENT, class_name));
    source.push_str(&format!("{}{{\n", CLASS_INDENT));

    for entry in entries {
        source.push_str(&format!(
            "{}public const string {} = \"{}\";\n",
            FIELD_INDENT,
            entry.identifier,
            escape_string_literal(&entry.value)
        ));
    }

    source.push_str(&format!("{}}}\n", CLASS_INDENT));
    source.push_str("}\n");
    source
}

/// Escape a value for a regular (non-verbatim) C# string literal.
///
/// `\` and `"` get a backslash, `\n`, `\r` and `\t` use their short escapes,
/// and every other control character as well as the Unicode line and
/// paragraph separators (which C# treats as new lines) become `\uXXXX`.
pub fn escape_string_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                escaped.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(identifier: &str, value: &str) -> ConstantEntry {
        ConstantEntry {
            identifier: identifier.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_render_class_layout() {
        let entries = vec![entry("BTN_PRIMARY", "btn-primary"), entry("TITLE", "title")];
        let source = render_class("UIToolKitStrings", "MainMenuClasses", &entries);

        let expected = "\
// This file was generated by uitk-string-gen. Do not edit it by hand.
namespace UIToolKitStrings
{
    public static class MainMenuClasses
    {
        public const string BTN_PRIMARY = \"btn-primary\";
        public const string TITLE = \"title\";
    }
}
";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_render_class_without_fields() {
        let source = render_class("UIToolKitStrings", "EmptyStrings", &[]);
        assert!(source.contains("    public static class EmptyStrings\n    {\n    }\n"));
        assert!(!source.contains("const"));
    }

    #[test]
    fn test_field_order_follows_entries() {
        let entries = vec![entry("Z", "z"), entry("A", "a"), entry("M", "m")];
        let source = render_class("Ns", "Order", &entries);
        let z = source.find("Z =").unwrap();
        let a = source.find("A =").unwrap();
        let m = source.find("M =").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn test_escape_string_literal() {
        assert_eq!(escape_string_literal("btn-primary"), "btn-primary");
        assert_eq!(escape_string_literal(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string_literal(r"C:\ui"), r"C:\\ui");
        assert_eq!(escape_string_literal("a\nb\tc\r"), r"a\nb\tc\r");
        assert_eq!(escape_string_literal("bell\u{7}"), r"bell\u0007");
        assert_eq!(escape_string_literal("line\u{2028}sep"), r"line\u2028sep");
        assert_eq!(escape_string_literal("ünï"), "ünï");
    }
}
