//! Syntax check for generated C#
//!
//! Parses emitted source with tree-sitter-c-sharp before it is written, so a
//! value that slipped through escaping never lands on disk as broken code.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::error::{GeneratorError, GeneratorResult};

/// Tree-sitter node kind for field declarations
///
/// Example: `public const string TITLE = "title";`
const FIELD_DECLARATION: &str = "field_declaration";

/// tree-sitter based C# syntax checker
pub struct CsSyntaxChecker {
    parser: Parser,
}

impl std::fmt::Debug for CsSyntaxChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsSyntaxChecker")
            .field("parser", &"<Parser>")
            .finish()
    }
}

impl CsSyntaxChecker {
    pub fn new() -> GeneratorResult<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_c_sharp::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| GeneratorError::TreeSitterLanguage {
                message: format!("Failed to set C# language: {}", e),
            })?;

        Ok(Self { parser })
    }

    /// Fail with [`GeneratorError::SyntaxCheck`] pointing at the first error
    /// or missing node (1-based line and column).
    pub fn check(&mut self, class_name: &str, source: &str) -> GeneratorResult<()> {
        let tree = self.parse(class_name, source)?;
        let root = tree.root_node();
        if !root.has_error() {
            return Ok(());
        }

        let position = find_first_error(root)
            .map(|node| node.start_position())
            .unwrap_or_else(|| root.start_position());

        Err(GeneratorError::SyntaxCheck {
            class_name: class_name.to_string(),
            line: position.row + 1,
            column: position.column + 1,
        })
    }

    /// Number of field declarations in `source`
    pub fn count_field_declarations(&mut self, source: &str) -> GeneratorResult<usize> {
        let tree = self.parse("<source>", source)?;
        Ok(count_nodes_of_kind(tree.root_node(), FIELD_DECLARATION))
    }

    fn parse(&mut self, class_name: &str, source: &str) -> GeneratorResult<Tree> {
        // Only returns None without a language or after a cancelled parse
        self.parser
            .parse(source, None)
            .ok_or_else(|| GeneratorError::SyntaxCheck {
                class_name: class_name.to_string(),
                line: 1,
                column: 1,
            })
    }
}

/// Check generated C# source with a fresh checker
pub fn check_csharp_source(class_name: &str, source: &str) -> GeneratorResult<()> {
    CsSyntaxChecker::new()?.check(class_name, source)
}

fn find_first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.has_error() || child.is_missing() {
                if let Some(found) = find_first_error(child) {
                    return Some(found);
                }
            }
        }
    }
    None
}

fn count_nodes_of_kind(node: Node, kind: &str) -> usize {
    let own = usize::from(node.kind() == kind);
    let mut count = own;
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            count += count_nodes_of_kind(child, kind);
        }
    }
    count
}
