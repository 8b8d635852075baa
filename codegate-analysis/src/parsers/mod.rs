//! Parser capability layer — tree-sitter behind a small seam.
//!
//! "Given source text, produce a queryable syntax/diagnostic tree." Rule
//! logic never selects grammars or touches tree-sitter construction; it
//! receives a [`ParsedUnit`] and walks nodes.

pub mod diagnostics;
pub mod project;

pub use diagnostics::{Diagnostic, DiagnosticSeverity};
pub use project::SourceProject;

use std::cell::RefCell;

use codegate_core::FileType;
use tree_sitter::{Node, Parser, Tree};

thread_local! {
    static PARSER: RefCell<Parser> = RefCell::new(Parser::new());
}

fn grammar_for(file_type: FileType, path: &str) -> Option<tree_sitter::Language> {
    match file_type {
        FileType::Ts => {
            if path.ends_with(".tsx") {
                Some(tree_sitter_typescript::LANGUAGE_TSX.into())
            } else {
                Some(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            }
        }
        FileType::Js => Some(tree_sitter_javascript::LANGUAGE.into()),
        _ => None,
    }
}

/// One parsed source unit: path, source text, and the syntax tree.
#[derive(Debug)]
pub struct ParsedUnit {
    pub path: String,
    pub file_type: FileType,
    pub source: String,
    pub tree: Tree,
}

impl ParsedUnit {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text of a node. Falls back to empty on non-UTF8 slices,
    /// which cannot occur for trees parsed from a `&str`.
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// 1-based line/column of a node's start.
    pub fn position_of(&self, node: Node<'_>) -> (u32, u32) {
        let point = node.start_position();
        (point.row as u32 + 1, point.column as u32 + 1)
    }

    /// Collect ERROR/MISSING diagnostics for this unit.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        diagnostics::collect(self.root(), &self.source)
    }
}

/// Parse source text for a supported file type.
///
/// Returns `None` when the type has no grammar or the parser yields no
/// tree; callers degrade to a parse-failure issue, never a panic.
pub fn parse(code: &str, file_type: FileType, path: &str) -> Option<ParsedUnit> {
    let grammar = grammar_for(file_type, path)?;
    PARSER.with(|parser| {
        let mut parser = parser.borrow_mut();
        parser.set_language(&grammar).ok()?;
        let tree = parser.parse(code, None)?;
        Some(ParsedUnit {
            path: path.to_string(),
            file_type,
            source: code.to_string(),
            tree,
        })
    })
}

/// Depth-first pre-order visit of every node in a subtree.
pub fn walk<'tree>(node: Node<'tree>, visit: &mut impl FnMut(Node<'tree>)) {
    visit(node);
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            walk(child, visit);
        }
    }
}

/// Whether any ancestor of `node` has the given kind.
pub fn has_ancestor(node: Node<'_>, kind: &str) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.kind() == kind {
            return true;
        }
        current = parent.parent();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typescript() {
        let unit = parse("const x: number = 1;", FileType::Ts, "snippet-0.ts").unwrap();
        assert_eq!(unit.root().kind(), "program");
        assert!(!unit.root().has_error());
    }

    #[test]
    fn parses_tsx_when_path_says_so() {
        let unit = parse(
            "export const App = () => <div>hello</div>;",
            FileType::Ts,
            "app.tsx",
        )
        .unwrap();
        assert!(!unit.root().has_error());
    }

    #[test]
    fn unsupported_types_have_no_tree() {
        assert!(parse("datasource db {}", FileType::Prisma, "schema.prisma").is_none());
    }

    #[test]
    fn walk_visits_every_node() {
        let unit = parse("function f() { return 1; }", FileType::Js, "f.js").unwrap();
        let mut count = 0usize;
        walk(unit.root(), &mut |_| count += 1);
        assert!(count > 5);
    }
}
