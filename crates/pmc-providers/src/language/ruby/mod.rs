//! Ruby symbol extractor backed by tree-sitter-ruby.
//!
//! Recognizes `class`/`module` scopes (qualified with `::` when nested), `def`
//! instance methods, `attr_*` accessors, `alias`/`alias_method`, and the
//! `public`/`protected`/`private`/`module_function` modifiers in both their
//! bare and argument forms. Singleton methods (`def self.x`, `class << self`)
//! are not part of the instance surface.

mod syntax;
mod walker;

use pmc_domain::constants::RUBY_SOURCE_EXTENSION;
use pmc_domain::error::{Error, Result};
use pmc_domain::{FileSymbols, SourceFile, SymbolExtractor};
use std::collections::BTreeSet;
use tracing::debug;
use walker::DeclarationWalker;

/// Ruby symbol extractor
///
/// A fresh parser is created per file, so one extractor can be shared by
/// every worker thread.
#[derive(Clone)]
pub struct RubySymbolExtractor {
    language: tree_sitter::Language,
}

impl Default for RubySymbolExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RubySymbolExtractor {
    /// Create a new Ruby symbol extractor
    pub fn new() -> Self {
        Self {
            language: tree_sitter_ruby::LANGUAGE.into(),
        }
    }

    /// Parse code with tree-sitter
    fn parse(&self, file: &SourceFile) -> Result<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| Error::internal(format!("Failed to set tree-sitter language: {e:?}")))?;

        parser
            .parse(&file.content, None)
            .ok_or_else(|| Error::file_parse(&file.path, 1, 1, "tree-sitter parsing failed"))
    }
}

impl SymbolExtractor for RubySymbolExtractor {
    fn language(&self) -> &'static str {
        "ruby"
    }

    fn extension(&self) -> &'static str {
        RUBY_SOURCE_EXTENSION
    }

    fn extract(
        &self,
        file: &SourceFile,
        ignored_methods: &BTreeSet<String>,
    ) -> Result<FileSymbols> {
        let tree = self.parse(file)?;
        let root = tree.root_node();

        if root.has_error() {
            let (line, column, message) = match syntax::first_problem(root) {
                Some(node) => {
                    let position = node.start_position();
                    (
                        position.row + 1,
                        position.column + 1,
                        syntax::describe_problem(node, &file.content),
                    )
                }
                None => (1, 1, "syntax error".to_string()),
            };
            return Err(Error::file_parse(&file.path, line, column, message));
        }
        if let Some(node) = syntax::stray_end(root, &file.content) {
            let position = node.start_position();
            return Err(Error::file_parse(
                &file.path,
                position.row + 1,
                position.column + 1,
                "unexpected `end`",
            ));
        }

        let symbols = DeclarationWalker::new(&file.path, &file.content, ignored_methods).walk(root);
        debug!(
            path = %file.path,
            classes = symbols.classes.len(),
            "Extracted Ruby declarations"
        );
        Ok(symbols)
    }
}
