//! UXML (Unity UI markup) support
//!
//! Parses UXML documents into a small element tree with quick-xml and collects
//! the `name` attribute of every visual element.

pub mod element_tree;
pub mod name_extractor;

pub use element_tree::{ElementNode, parse_markup};
pub use name_extractor::extract_element_names;
