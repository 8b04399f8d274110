//! Selector name extraction
//!
//! A light regex pass over raw USS text. Only the simple selector right before
//! a rule's `{` is picked up, so `.panel .title {` yields `title` and
//! `.button:hover {` yields nothing. That is enough for generating name
//! constants and does not need a real stylesheet parser.

use regex::Regex;
use std::sync::OnceLock;

fn selector_regex() -> &'static Regex {
    static SELECTOR_REGEX: OnceLock<Regex> = OnceLock::new();
    SELECTOR_REGEX.get_or_init(|| {
        Regex::new(r"[#.]([a-zA-Z0-9_-]+)\s*\{").expect("selector pattern is a valid regex")
    })
}

/// Collect the names of class (`.name {`) and id (`#name {`) selectors in
/// the order they appear. Duplicates are kept.
pub fn extract_style_class_names(style_sheet_text: &str) -> Vec<String> {
    selector_regex()
        .captures_iter(style_sheet_text)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_USS_CONTENT: &str = r#"
.my-class {
    color: red;
    background-color: blue;
}

#my-id {
    width: 100px;
    height: 50px;
}

.another-class,
.multiple-class {
    margin: 10px;
}

.nested .child-class {
    font-size: 14px;
}

.parent > .direct-child{
    border: 1px solid black;
}

.hover:hover {
    opacity: 0.8;
}

Button {
    background-color: #007acc;
}
"#;

    #[test]
    fn test_class_and_id_selectors_in_document_order() {
        let names = extract_style_class_names(TEST_USS_CONTENT);
        assert_eq!(
            names,
            vec!["my-class", "my-id", "multiple-class", "child-class", "direct-child"]
        );
    }

    #[test]
    fn test_same_name_as_class_and_id_is_kept_twice() {
        let names = extract_style_class_names(".btn-primary { color: red; } #btn-primary { color: blue; }");
        assert_eq!(names, vec!["btn-primary", "btn-primary"]);
    }

    #[test]
    fn test_whitespace_between_name_and_brace() {
        let names = extract_style_class_names(".spaced\n\t  {\n}\n.tight{}");
        assert_eq!(names, vec!["spaced", "tight"]);
    }

    #[test]
    fn test_colors_and_pseudo_classes_do_not_match() {
        let content = "Label:hover { color: #ff0000; }\n.a:focus { -unity-font-style: bold; }";
        assert!(extract_style_class_names(content).is_empty());
    }

    #[test]
    fn test_empty_and_unmatched_input() {
        assert!(extract_style_class_names("").is_empty());
        assert!(extract_style_class_names("this is not a stylesheet").is_empty());
        assert!(extract_style_class_names(".unterminated").is_empty());
    }
}
