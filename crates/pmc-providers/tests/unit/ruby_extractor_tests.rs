//! Unit tests for the Ruby symbol extractor

use pmc_domain::{Error, FileSymbols, SourceFile, SymbolExtractor};
use pmc_providers::RubySymbolExtractor;
use std::collections::BTreeSet;

fn extract(content: &str) -> FileSymbols {
    extract_ignoring(content, &[])
}

fn extract_ignoring(content: &str, ignored: &[&str]) -> FileSymbols {
    let ignored: BTreeSet<String> = ignored.iter().map(|m| m.to_string()).collect();
    RubySymbolExtractor::new()
        .extract(&SourceFile::new("lib/sample.rb", content), &ignored)
        .expect("sample should parse")
}

fn methods(symbols: &FileSymbols, class_name: &str) -> Vec<String> {
    symbols
        .methods(class_name)
        .unwrap_or_else(|| panic!("class {class_name} should be declared"))
        .iter()
        .cloned()
        .collect()
}

#[test]
fn test_extractor_metadata() {
    let extractor = RubySymbolExtractor::new();
    assert_eq!(extractor.language(), "ruby");
    assert_eq!(extractor.extension(), "rb");
    assert!(extractor.handles("app/models/user.rb"));
    assert!(!extractor.handles("app/models/user.py"));
    assert!(!extractor.handles("Rakefile"));
}

#[test]
fn test_public_methods_of_simple_class() {
    let symbols = extract(
        r#"
class Foo
  def bar
  end

  def baz(a, b = 1)
    a + b
  end
end
"#,
    );

    assert_eq!(symbols.path, "lib/sample.rb");
    assert_eq!(methods(&symbols, "Foo"), vec!["bar", "baz"]);
}

#[test]
fn test_bare_visibility_modifiers() {
    let symbols = extract(
        r#"
class Account
  def balance; end

  protected

  def compare(other); end

  private

  def recalculate; end

  public

  def deposit(amount); end
end
"#,
    );

    assert_eq!(methods(&symbols, "Account"), vec!["balance", "deposit"]);
}

#[test]
fn test_visibility_with_symbol_arguments() {
    let symbols = extract(
        r#"
class Session
  def token; end
  def refresh; end
  def expire; end

  private :refresh, "expire"
end
"#,
    );

    assert_eq!(methods(&symbols, "Session"), vec!["token"]);
}

#[test]
fn test_public_with_symbol_argument_republishes_method() {
    let symbols = extract(
        r#"
class Session
  private

  def token; end

  public :token
end
"#,
    );

    assert_eq!(methods(&symbols, "Session"), vec!["token"]);
}

#[test]
fn test_inline_private_def() {
    let symbols = extract(
        r#"
class Worker
  def perform; end

  private def retry_later
  end

  def status; end
end
"#,
    );

    assert_eq!(methods(&symbols, "Worker"), vec!["perform", "status"]);
}

#[test]
fn test_attribute_accessors() {
    let symbols = extract(
        r#"
class User
  attr_reader :id
  attr_writer :password
  attr_accessor :name, :email

  private

  attr_reader :secret
end
"#,
    );

    assert_eq!(
        methods(&symbols, "User"),
        vec!["email", "email=", "id", "name", "name=", "password="]
    );
}

#[test]
fn test_aliases_declare_new_names() {
    let symbols = extract(
        r#"
class Report
  def render; end
  alias_method :to_s, :render
  alias call render
end
"#,
    );

    assert_eq!(methods(&symbols, "Report"), vec!["call", "render", "to_s"]);
}

#[test]
fn test_alias_of_private_method_stays_private() {
    let symbols = extract(
        r#"
class Report
  private

  def helper; end

  public

  alias_method :exposed, :helper
  alias shown helper

  def render; end
end
"#,
    );

    assert_eq!(methods(&symbols, "Report"), vec!["render"]);
}

#[test]
fn test_alias_of_public_method_stays_public_after_private() {
    let symbols = extract(
        r#"
class Report
  def render; end

  private

  alias_method :to_s, :render
  alias call render

  def helper; end
end
"#,
    );

    assert_eq!(methods(&symbols, "Report"), vec!["call", "render", "to_s"]);
}

#[test]
fn test_alias_of_unknown_method_uses_current_visibility() {
    let symbols = extract(
        r#"
class Child < Parent
  alias_method :inherited_copy, :from_parent

  private

  alias_method :hidden_copy, :from_parent
end
"#,
    );

    assert_eq!(methods(&symbols, "Child"), vec!["inherited_copy"]);
}

#[test]
fn test_initialize_and_hook_methods_are_private() {
    let symbols = extract(
        r#"
class Collection
  def initialize(items)
    @items = items
  end

  def initialize_copy(other); end
  def initialize_dup(other); end
  def initialize_clone(other); end
  def respond_to_missing?(name, include_private = false); end

  def each; end
end
"#,
    );

    assert_eq!(methods(&symbols, "Collection"), vec!["each"]);
}

#[test]
fn test_methods_inside_begin_and_conditionals_belong_to_the_class() {
    let symbols = extract(
        r#"
class Adapter
  begin
    def in_begin; end
  end

  if RUBY_VERSION >= "3.0"
    def modern; end
  elsif RUBY_VERSION >= "2.7"
    def transitional; end
  else
    def legacy; end
  end

  unless defined?(JRUBY_VERSION)
    def native; end
  end

  def guarded; end if true
end
"#,
    );

    assert_eq!(
        methods(&symbols, "Adapter"),
        vec!["guarded", "in_begin", "legacy", "modern", "native", "transitional"]
    );
}

#[test]
fn test_visibility_modifier_inside_conditional_applies_to_class_body() {
    let symbols = extract(
        r#"
class Adapter
  if true
    private
  end

  def hidden; end
end
"#,
    );

    assert!(methods(&symbols, "Adapter").is_empty());
}

#[test]
fn test_class_inside_top_level_conditional_is_declared() {
    let symbols = extract(
        r#"
unless defined?(Compat)
  class Compat
    def call; end
  end
end
"#,
    );

    assert_eq!(methods(&symbols, "Compat"), vec!["call"]);
}

#[test]
fn test_operator_predicate_and_setter_names() {
    let symbols = extract(
        r#"
class Money
  def ==(other); end
  def [](index); end
  def zero?; end
  def normalize!; end
  def amount=(value); end
end
"#,
    );

    assert_eq!(
        methods(&symbols, "Money"),
        vec!["==", "[]", "amount=", "normalize!", "zero?"]
    );
}

#[test]
fn test_singleton_methods_are_not_instance_methods() {
    let symbols = extract(
        r#"
class Factory
  def self.build; end

  class << self
    def create; end
  end

  def call; end
end
"#,
    );

    assert_eq!(methods(&symbols, "Factory"), vec!["call"]);
}

#[test]
fn test_nested_scopes_are_qualified() {
    let symbols = extract(
        r#"
module Billing
  def self.configure; end

  def helper; end

  class Invoice < Base
    def total; end
  end

  class Line::Item
    def price; end
  end

  class ::TopLevel
    def run; end
  end
end
"#,
    );

    let names: Vec<&String> = symbols.classes.keys().collect();
    assert_eq!(
        names,
        vec!["Billing", "Billing::Invoice", "Billing::Line::Item", "TopLevel"]
    );
    assert_eq!(methods(&symbols, "Billing"), vec!["helper"]);
    assert_eq!(methods(&symbols, "Billing::Invoice"), vec!["total"]);
    assert_eq!(methods(&symbols, "Billing::Line::Item"), vec!["price"]);
    assert_eq!(methods(&symbols, "TopLevel"), vec!["run"]);
}

#[test]
fn test_each_scope_starts_public() {
    let symbols = extract(
        r#"
class Outer
  private

  class Inner
    def visible; end
  end

  def hidden; end
end
"#,
    );

    assert!(methods(&symbols, "Outer").is_empty());
    assert_eq!(methods(&symbols, "Outer::Inner"), vec!["visible"]);
}

#[test]
fn test_module_function_makes_instance_methods_private() {
    let symbols = extract(
        r#"
module Helpers
  def exposed; end

  module_function

  def format_name; end
end
"#,
    );

    assert_eq!(methods(&symbols, "Helpers"), vec!["exposed"]);
}

#[test]
fn test_reopened_class_in_one_file_is_unioned() {
    let symbols = extract(
        r#"
class Foo
  def a; end
end

class Foo
  def b; end
end
"#,
    );

    assert_eq!(symbols.classes.len(), 1);
    assert_eq!(methods(&symbols, "Foo"), vec!["a", "b"]);
}

#[test]
fn test_empty_class_is_still_declared() {
    let symbols = extract("class Marker\nend\n");

    assert!(symbols.methods("Marker").is_some_and(BTreeSet::is_empty));
}

#[test]
fn test_top_level_methods_are_ignored() {
    let symbols = extract(
        r#"
def helper; end

private

def other; end
"#,
    );

    assert!(symbols.is_empty());
}

#[test]
fn test_ignored_methods_are_not_extracted() {
    let symbols = extract_ignoring(
        r#"
class Foo
  def bar; end
  def to_s; end
  attr_reader :inspect
end
"#,
        &["to_s", "inspect"],
    );

    assert_eq!(methods(&symbols, "Foo"), vec!["bar"]);
}

#[test]
fn test_source_is_never_evaluated() {
    let symbols = extract(
        r#"
File.delete("/etc/passwd")
system("rm -rf /")

class Safe
  define_method(:dynamic) { 1 }
  def static; end
end
"#,
    );

    assert_eq!(methods(&symbols, "Safe"), vec!["static"]);
}

#[test]
fn test_unterminated_class_is_a_parse_error() {
    let result = RubySymbolExtractor::new().extract(
        &SourceFile::new("lib/broken.rb", "class Broken\n  def oops\n"),
        &BTreeSet::new(),
    );

    match result {
        Err(Error::FileParse { path, line, .. }) => {
            assert_eq!(path, "lib/broken.rb");
            assert!(line >= 1);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_error_points_at_the_broken_statement() {
    let result = RubySymbolExtractor::new().extract(
        &SourceFile::new(
            "lib/ledger.rb",
            "class Ledger\n  def balance; end\n\n  def total\n    compute(1, 2\n  end\nend\n",
        ),
        &BTreeSet::new(),
    );

    match result {
        Err(Error::FileParse { line, .. }) => assert!(line >= 4, "reported line {line}"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_stray_end_is_a_parse_error() {
    let result = RubySymbolExtractor::new().extract(
        &SourceFile::new("lib/broken.rb", "class Foo\nend\nend\n"),
        &BTreeSet::new(),
    );

    let error = result.expect_err("stray end should not parse");
    assert!(error.is_recoverable());
    match error {
        Error::FileParse { line, .. } => assert_eq!(line, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

