//! Declaration walker for Ruby syntax trees
//!
//! Visits class and module bodies in source order and tracks the visibility
//! rules Ruby applies to instance methods declared there.

use super::syntax::{body_statements, call_arguments, literal_name, node_text};
use pmc_domain::FileSymbols;
use pmc_domain::constants::SCOPE_SEPARATOR;
use std::collections::{BTreeMap, BTreeSet};
use tree_sitter::Node;

/// Visibility of an instance method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Visibility named by a modifier keyword, if it is one
    fn from_modifier(name: &str) -> Option<Self> {
        match name {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            // module_function copies the method to the singleton and makes the
            // instance method private
            "private" | "module_function" => Some(Self::Private),
            _ => None,
        }
    }
}

/// Hook methods Ruby always defines as private
const ALWAYS_PRIVATE: &[&str] = &[
    "initialize",
    "initialize_copy",
    "initialize_clone",
    "initialize_dup",
    "respond_to_missing?",
];

/// Statement wrappers that stay in the enclosing class body
const NESTED_BODIES: &[&str] = &[
    "begin",
    "body_statement",
    "if",
    "unless",
    "then",
    "else",
    "elsif",
];

/// Methods declared in one class body and their current visibility
#[derive(Debug)]
struct ScopeState {
    default: Visibility,
    methods: BTreeMap<String, Visibility>,
}

impl ScopeState {
    fn new() -> Self {
        Self {
            default: Visibility::Public,
            methods: BTreeMap::new(),
        }
    }

    /// Declare (or redeclare) a method
    fn define(&mut self, name: String, visibility: Option<Visibility>) {
        let visibility = if ALWAYS_PRIVATE.contains(&name.as_str()) {
            Visibility::Private
        } else {
            visibility.unwrap_or(self.default)
        };
        self.methods.insert(name, visibility);
    }

    /// Declare `new_name` as a copy of `old_name`, keeping its visibility
    ///
    /// Falls back to the default visibility when `old_name` is not declared
    /// in this body.
    fn alias(&mut self, new_name: String, old_name: &str, forced: Option<Visibility>) {
        let inherited = self.methods.get(old_name).copied();
        self.define(new_name, forced.or(inherited));
    }

    /// Change the visibility of an already declared method
    fn set_visibility(&mut self, name: &str, visibility: Visibility) {
        if let Some(current) = self.methods.get_mut(name) {
            *current = visibility;
        }
    }

    fn public_methods(self) -> impl Iterator<Item = String> {
        self.methods
            .into_iter()
            .filter(|(_, visibility)| *visibility == Visibility::Public)
            .map(|(name, _)| name)
    }
}

/// Collects the public surface of every class and module in one file
pub(crate) struct DeclarationWalker<'a> {
    source: &'a str,
    ignored_methods: &'a BTreeSet<String>,
    symbols: FileSymbols,
}

impl<'a> DeclarationWalker<'a> {
    pub(crate) fn new(path: &str, source: &'a str, ignored_methods: &'a BTreeSet<String>) -> Self {
        Self {
            source,
            ignored_methods,
            symbols: FileSymbols::new(path),
        }
    }

    /// Walk the whole program and return the file's symbol table
    pub(crate) fn walk(mut self, program: Node<'_>) -> FileSymbols {
        self.walk_body(program, None);
        self.symbols
    }

    fn walk_body(&mut self, body: Node<'_>, scope: Option<&str>) {
        let mut state = ScopeState::new();

        for statement in body_statements(body) {
            self.visit_statement(statement, scope, &mut state);
        }

        if let Some(scope) = scope {
            for method in state.public_methods() {
                if !self.ignored_methods.contains(&method) {
                    self.symbols.add_method(scope, method);
                }
            }
        }
    }

    fn visit_statement(
        &mut self,
        statement: Node<'_>,
        scope: Option<&str>,
        state: &mut ScopeState,
    ) {
        match statement.kind() {
            "class" | "module" => self.open_scope(statement, scope),
            kind if NESTED_BODIES.contains(&kind) => {
                for nested in nested_statements(statement) {
                    self.visit_statement(nested, scope, state);
                }
            }
            "if_modifier" | "unless_modifier" => {
                if let Some(body) = statement.child_by_field_name("body") {
                    self.visit_statement(body, scope, state);
                }
            }
            // Top-level definitions are private methods of Object
            _ if scope.is_none() => {}
            "method" => {
                if let Some(name) = self.method_name(statement) {
                    state.define(name, None);
                }
            }
            "identifier" => {
                if let Some(visibility) =
                    Visibility::from_modifier(node_text(statement, self.source))
                {
                    state.default = visibility;
                }
            }
            "call" | "method_call" => self.apply_call(statement, state, None),
            "alias" => {
                let new_name = statement
                    .child_by_field_name("name")
                    .and_then(|node| literal_name(node, self.source));
                let old_name = statement
                    .child_by_field_name("alias")
                    .and_then(|node| literal_name(node, self.source));
                if let Some(new_name) = new_name {
                    state.alias(new_name, old_name.as_deref().unwrap_or_default(), None);
                }
            }
            // singleton_method, singleton_class and everything else do not
            // contribute instance methods
            _ => {}
        }
    }

    fn open_scope(&mut self, node: Node<'_>, enclosing: Option<&str>) {
        let Some(name_node) = node.child_by_field_name("name") else {
            return;
        };
        let name = qualify(enclosing, node_text(name_node, self.source));
        if name.is_empty() {
            return;
        }

        self.symbols.declare_class(&name);
        self.walk_body(node, Some(&name));
    }

    fn method_name(&self, method: Node<'_>) -> Option<String> {
        method
            .child_by_field_name("name")
            .map(|node| node_text(node, self.source).to_string())
            .filter(|name| !name.is_empty())
    }

    /// Handle a receiver-less call inside a class body.
    ///
    /// `forced` is set when the call is itself the argument of a visibility
    /// modifier, as in `private attr_reader :token`.
    fn apply_call(&self, call: Node<'_>, state: &mut ScopeState, forced: Option<Visibility>) {
        if call.child_by_field_name("receiver").is_some() {
            return;
        }
        let Some(method) = call.child_by_field_name("method") else {
            return;
        };
        let arguments = call_arguments(call);
        let method = node_text(method, self.source);

        if let Some(visibility) = Visibility::from_modifier(method) {
            if arguments.is_empty() {
                state.default = visibility;
            }
            for argument in arguments {
                self.apply_modifier_argument(argument, state, visibility);
            }
            return;
        }

        match method {
            "attr_reader" | "attr" => {
                for name in self.literal_names(&arguments) {
                    state.define(name, forced);
                }
            }
            "attr_writer" => {
                for name in self.literal_names(&arguments) {
                    state.define(format!("{name}="), forced);
                }
            }
            "attr_accessor" => {
                for name in self.literal_names(&arguments) {
                    state.define(format!("{name}="), forced);
                    state.define(name, forced);
                }
            }
            "alias_method" => {
                let mut names = arguments
                    .iter()
                    .map(|node| literal_name(*node, self.source));
                if let Some(Some(new_name)) = names.next() {
                    let old_name = names.next().flatten().unwrap_or_default();
                    state.alias(new_name, &old_name, forced);
                }
            }
            _ => {}
        }
    }

    fn apply_modifier_argument(
        &self,
        argument: Node<'_>,
        state: &mut ScopeState,
        visibility: Visibility,
    ) {
        match argument.kind() {
            "method" => {
                if let Some(name) = self.method_name(argument) {
                    state.define(name, Some(visibility));
                }
            }
            "call" | "method_call" => self.apply_call(argument, state, Some(visibility)),
            _ => {
                if let Some(name) = literal_name(argument, self.source) {
                    state.set_visibility(&name, visibility);
                }
            }
        }
    }

    fn literal_names(&self, arguments: &[Node<'_>]) -> Vec<String> {
        arguments
            .iter()
            .filter_map(|node| literal_name(*node, self.source))
            .collect()
    }
}

/// Statements of a `begin` block or conditional, skipping the condition
///
/// `then`, `else` and `elsif` branches are returned as statements themselves
/// and are expanded when visited.
fn nested_statements<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut statements = Vec::new();
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return statements;
    }

    loop {
        let child = cursor.node();
        if child.is_named() && cursor.field_name() != Some("condition") {
            statements.push(child);
        }
        if !cursor.goto_next_sibling() {
            break;
        }
    }

    statements
}

/// Qualify a scope name with its lexical parent.
///
/// A leading `::` anchors the name at top level.
fn qualify(enclosing: Option<&str>, name: &str) -> String {
    if let Some(absolute) = name.strip_prefix(SCOPE_SEPARATOR) {
        return absolute.to_string();
    }
    match enclosing {
        Some(parent) => format!("{parent}{SCOPE_SEPARATOR}{name}"),
        None => name.to_string(),
    }
}
