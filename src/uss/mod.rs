//! USS stylesheet support
pub mod selector_extractor;

pub use selector_extractor::extract_style_class_names;
