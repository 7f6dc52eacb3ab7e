//! Provider registration planner for TypeScript host modules.
//!
//! The host file is parsed with tree-sitter. The planner then locates the
//! object passed to `@NgModule(...)` and returns two insertions: an import
//! statement after the last existing import, and the class symbol appended
//! to the `providers` array (created when absent).

use std::path::Path;

use tracing::{debug, instrument};
use tree_sitter::{Node, Parser, Tree};

use blueprint_core::{
    application::{ApplicationError, ports::ProviderPlanner},
    domain::{ImportDescriptor, InsertChange, ModuleEdit},
    error::BlueprintResult,
};

const DECORATOR: &str = "NgModule";
const PROVIDERS: &str = "providers";

/// Tree-sitter backed [`ProviderPlanner`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptPlanner;

impl TypeScriptPlanner {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderPlanner for TypeScriptPlanner {
    #[instrument(skip_all, fields(host = %host.display()))]
    fn plan(
        &self,
        host: &Path,
        source: &str,
        descriptor: &ImportDescriptor,
    ) -> BlueprintResult<ModuleEdit> {
        let tree = parse(host, source)?;
        let root = tree.root_node();
        let src = source.as_bytes();

        let config = module_config(root, src).ok_or_else(|| mismatch(
            host,
            "an @NgModule({ ... }) decorator with an object literal argument",
        ))?;

        let providers = provider_change(host, config, source, descriptor.symbol())?;
        let import = import_change(root, descriptor);
        debug!(
            import_at = import.pos,
            provider_changes = providers.len(),
            "Registration planned"
        );

        Ok(providers
            .into_iter()
            .fold(ModuleEdit::new(host).with_change(import), ModuleEdit::with_change))
    }
}

fn parse(host: &Path, source: &str) -> BlueprintResult<Tree> {
    let parse_error = |reason: String| ApplicationError::ModuleParse {
        path: host.to_path_buf(),
        reason,
    };

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .map_err(|e| parse_error(format!("failed to load TypeScript grammar: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| parse_error("parser returned no syntax tree".into()))?;

    let root = tree.root_node();
    if root.has_error() {
        // Deepest error node: an outer ERROR often spans the whole statement.
        let at = descendants(root)
            .filter(|n| n.is_error() || n.is_missing())
            .last()
            .unwrap_or(root)
            .start_position();
        return Err(parse_error(format!(
            "syntax error at line {}, column {}",
            at.row + 1,
            at.column + 1
        ))
        .into());
    }

    Ok(tree)
}

/// Pre-order walk over every node under `root`, in source order.
fn descendants<'t>(root: Node<'t>) -> impl Iterator<Item = Node<'t>> {
    let mut stack = vec![root];
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
        Some(node)
    })
}

fn text<'s>(node: Node<'_>, src: &'s [u8]) -> &'s str {
    node.utf8_text(src).unwrap_or_default()
}

/// The object literal passed to the first `@NgModule(...)` decorator.
fn module_config<'t>(root: Node<'t>, src: &[u8]) -> Option<Node<'t>> {
    let call = descendants(root)
        .filter(|n| n.kind() == "decorator")
        .filter_map(|d| d.named_child(0))
        .find(|expr| {
            expr.kind() == "call_expression"
                && expr.child_by_field_name("function").is_some_and(|f| {
                    let name = text(f, src);
                    name == DECORATOR || name.ends_with(&format!(".{DECORATOR}"))
                })
        })?;

    let arg = call.child_by_field_name("arguments")?.named_child(0)?;
    (arg.kind() == "object").then_some(arg)
}

fn non_comment_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}

fn property_name<'s>(pair: Node<'_>, src: &'s [u8]) -> Option<&'s str> {
    let key = pair.child_by_field_name("key")?;
    Some(text(key, src).trim_matches(|c| c == '\'' || c == '"'))
}

/// Leading whitespace of the line containing byte `pos`.
fn line_indent(source: &str, pos: usize) -> &str {
    let line_start = source[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..];
    let width = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..width]
}

/// Separator before a new trailing element: a newline at the previous
/// element's indent when the list already spans lines.
fn separator(source: &str, open: Node<'_>, last: Node<'_>) -> String {
    if last.start_position().row > open.start_position().row {
        format!(",\n{}", line_indent(source, last.start_byte()))
    } else {
        ", ".to_string()
    }
}

fn provider_change(
    host: &Path,
    config: Node<'_>,
    source: &str,
    symbol: &str,
) -> BlueprintResult<Vec<InsertChange>> {
    let src = source.as_bytes();
    let properties = non_comment_children(config);

    // A spread or a shorthand `providers` would be overridden by an appended key.
    let opaque = properties.iter().any(|p| {
        p.kind() == "spread_element"
            || (p.kind() == "shorthand_property_identifier" && text(*p, src) == PROVIDERS)
    });
    if opaque {
        return Err(mismatch(host, "`providers` to be an array literal"));
    }

    let providers = properties
        .iter()
        .find(|p| p.kind() == "pair" && property_name(**p, src) == Some(PROVIDERS));

    let description = format!("Add {symbol} to providers");
    let Some(pair) = providers else {
        let entry = format!("{PROVIDERS}: [{symbol}]");
        let change = match properties.last() {
            None => InsertChange::new(config.start_byte() + 1, entry, description),
            Some(last) => InsertChange::new(
                last.end_byte(),
                format!("{}{entry}", separator(source, config, *last)),
                description,
            ),
        };
        return Ok(vec![change]);
    };

    let array = pair
        .child_by_field_name("value")
        .filter(|v| v.kind() == "array")
        .ok_or_else(|| mismatch(host, "`providers` to be an array literal"))?;

    let Some(last) = non_comment_children(array).last().copied() else {
        return Ok(vec![InsertChange::new(
            array.start_byte() + 1,
            symbol,
            description,
        )]);
    };

    // `A, // note` keeps annotating `A`: the new entry goes on the next line.
    if let Some(comment) = trailing_line_comment(array, last, src) {
        let between = &source[last.end_byte()..comment.start_byte()];
        let entry = InsertChange::new(
            comment.end_byte(),
            format!("\n{}{symbol}", line_indent(source, last.start_byte())),
            description.clone(),
        );
        if between.contains(',') {
            return Ok(vec![entry]);
        }
        return Ok(vec![InsertChange::new(last.end_byte(), ",", description), entry]);
    }

    Ok(vec![InsertChange::new(
        last.end_byte(),
        format!("{}{symbol}", separator(source, array, last)),
        description,
    )])
}

/// A `//` comment following `last` on the same line inside `array`.
fn trailing_line_comment<'t>(array: Node<'t>, last: Node<'t>, src: &[u8]) -> Option<Node<'t>> {
    let mut cursor = array.walk();
    let row = last.end_position().row;
    array
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "comment" && n.start_byte() >= last.end_byte())
        .find(|n| n.start_position().row == row && text(*n, src).starts_with("//"))
}

fn import_change(root: Node<'_>, descriptor: &ImportDescriptor) -> InsertChange {
    let statement = descriptor.import_statement();
    let description = format!("Import {}", descriptor.symbol());

    let mut cursor = root.walk();
    let last_import = root
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "import_statement")
        .last();

    match last_import {
        Some(node) => InsertChange::new(node.end_byte(), format!("\n{statement}"), description),
        None => InsertChange::new(0, format!("{statement}\n"), description),
    }
}

fn mismatch(host: &Path, expected: &str) -> blueprint_core::error::BlueprintError {
    ApplicationError::StructuralMismatch {
        path: host.to_path_buf(),
        expected: expected.to_string(),
    }
    .into()
}
