//! Small helpers over the tree-sitter-ruby syntax tree

use tree_sitter::Node;

/// Source text covered by a node
pub(crate) fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Statements of a program, class or module body, in source order.
///
/// Skips the `name` and `superclass` fields of a scope and flattens the
/// `body_statement` wrapper used by recent grammar versions.
pub(crate) fn body_statements<'t>(scope: Node<'t>) -> Vec<Node<'t>> {
    let mut statements = Vec::new();
    let mut cursor = scope.walk();
    if !cursor.goto_first_child() {
        return statements;
    }

    loop {
        let node = cursor.node();
        let is_header = matches!(cursor.field_name(), Some("name" | "superclass"));
        if node.is_named() && !is_header {
            if node.kind() == "body_statement" {
                let mut inner = node.walk();
                statements.extend(node.named_children(&mut inner));
            } else {
                statements.push(node);
            }
        }
        if !cursor.goto_next_sibling() {
            break;
        }
    }

    statements
}

/// Named arguments of a call, empty when the call has none
pub(crate) fn call_arguments<'t>(call: Node<'t>) -> Vec<Node<'t>> {
    match call.child_by_field_name("arguments") {
        Some(arguments) => {
            let mut cursor = arguments.walk();
            let named: Vec<Node<'t>> = arguments.named_children(&mut cursor).collect();
            named
        }
        None => Vec::new(),
    }
}

/// Method name carried by a symbol, string or bare name node
///
/// `:foo`, `:"foo"`, `"foo"`, `'foo'` and `foo` all give `foo`. Interpolated
/// strings and anything else give `None`.
pub(crate) fn literal_name(node: Node<'_>, source: &str) -> Option<String> {
    let text = node_text(node, source);
    let name = match node.kind() {
        "simple_symbol" | "hash_key_symbol" => text.trim_start_matches(':'),
        "delimited_symbol" | "string" => {
            let mut cursor = node.walk();
            if node
                .named_children(&mut cursor)
                .any(|child| child.kind() == "interpolation")
            {
                return None;
            }
            text.trim_start_matches(':').trim_matches(|c| c == '"' || c == '\'')
        }
        "identifier" | "constant" | "setter" | "operator" => text,
        _ => return None,
    };

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Innermost error or missing node under `node`, in source order
///
/// An error node usually wraps the whole enclosing declaration, so the search
/// keeps descending while a child still carries the problem.
pub(crate) fn first_problem(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    let deeper = children
        .into_iter()
        .filter(|child| child.is_error() || child.is_missing() || child.has_error())
        .find_map(first_problem);

    match deeper {
        Some(problem) => Some(problem),
        None if node.is_error() || node.is_missing() => Some(node),
        None => None,
    }
}

/// Node kinds whose children are statements
const STATEMENT_CONTAINERS: &[&str] = &[
    "program",
    "body_statement",
    "class",
    "module",
    "begin",
    "then",
    "else",
    "elsif",
    "ensure",
    "do_block",
    "block_body",
    "parenthesized_statements",
];

/// An `end` keyword that closes nothing
///
/// The grammar can recover from a surplus `end` without an error node by
/// reading it as a bare identifier statement, or by leaving the keyword
/// directly under the program.
pub(crate) fn stray_end<'t>(node: Node<'t>, source: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    let is_container = STATEMENT_CONTAINERS.contains(&node.kind());

    for child in children {
        if is_container && is_end_statement(node, child, source) {
            return Some(child);
        }
        if let Some(found) = stray_end(child, source) {
            return Some(found);
        }
    }
    None
}

fn is_end_statement(parent: Node<'_>, child: Node<'_>, source: &str) -> bool {
    if child.is_named() {
        child.kind() == "identifier" && node_text(child, source) == "end"
    } else {
        // `class`, `module` and `begin` own their closing keyword
        child.kind() == "end" && matches!(parent.kind(), "program" | "body_statement")
    }
}

/// Human-readable description of a problem node
pub(crate) fn describe_problem(node: Node<'_>, source: &str) -> String {
    if node.is_missing() {
        return format!("missing `{}`", node.kind());
    }

    let snippet: String = node_text(node, source)
        .lines()
        .next()
        .unwrap_or("")
        .chars()
        .take(40)
        .collect();
    if snippet.trim().is_empty() {
        "unexpected syntax".to_string()
    } else {
        format!("unexpected syntax near `{}`", snippet.trim())
    }
}
