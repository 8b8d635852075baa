//! Error-tolerant diagnostics: ERROR/MISSING nodes become diagnostics.

use tree_sitter::Node;

/// Diagnostic severity as reported by the syntax provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// One provider diagnostic with a 1-based position.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

/// Collect diagnostics for every ERROR or MISSING node in the tree.
pub fn collect(root: Node<'_>, source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    collect_into(root, source, &mut diagnostics);
    diagnostics
}

fn collect_into(node: Node<'_>, source: &str, out: &mut Vec<Diagnostic>) {
    if node.is_missing() {
        let point = node.start_position();
        out.push(Diagnostic {
            severity: DiagnosticSeverity::Error,
            message: format!("Missing {}", node.kind()),
            line: point.row as u32 + 1,
            column: point.column as u32 + 1,
        });
    } else if node.is_error() {
        let point = node.start_position();
        let snippet = node
            .utf8_text(source.as_bytes())
            .unwrap_or("")
            .lines()
            .next()
            .unwrap_or("");
        out.push(Diagnostic {
            severity: DiagnosticSeverity::Error,
            message: format!("Syntax error near '{}'", snippet.trim()),
            line: point.row as u32 + 1,
            column: point.column as u32 + 1,
        });
        // Do not descend: children of an ERROR node would duplicate it.
        return;
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect_into(child, source, out);
        }
    }
}
