//! Emission routines, one per node type.
//!
//! Each routine receives the generator, the node, and the node's parent (if
//! any) and writes the node's SCSS to the printer, recursing into children
//! through [`Generator::print`] with itself as their parent.

use scssgen_ast::{Node, NodeKind, Value};

use crate::registry::EmitFn;
use crate::{format_number, CodegenError, Generator};

type Emitted = Result<(), CodegenError>;

/// Parents under which an `Identifier` names a Sass variable and prints with `$`.
const VARIABLE_CONTEXTS: &[NodeKind] = &[
    NodeKind::Assignment,
    NodeKind::AssignmentPattern,
    NodeKind::AtReturn,
    NodeKind::CallExpression,
    NodeKind::IfStatement,
    NodeKind::LogicalExpression,
    NodeKind::RestPattern,
    NodeKind::SassFunction,
    NodeKind::SassFunctionCall,
    NodeKind::SassList,
    NodeKind::SassMapProperty,
    NodeKind::SassMixin,
    NodeKind::SassMixinCall,
];

pub(crate) fn routine(kind: NodeKind) -> EmitFn {
    match kind {
        NodeKind::StyleSheet => style_sheet,
        NodeKind::Comment => comment,
        NodeKind::Newline => newline,
        NodeKind::Identifier => identifier,
        NodeKind::SassString => sass_string,
        NodeKind::SassNumber => sass_number,
        NodeKind::SassBoolean => sass_boolean,
        NodeKind::SassColor => sass_color,
        NodeKind::SassValue => sass_value,
        NodeKind::SassList => sass_list,
        NodeKind::SassMap => sass_map,
        NodeKind::SassMapProperty => sass_map_property,
        NodeKind::Assignment => assignment,
        NodeKind::AssignmentPattern => assignment_pattern,
        NodeKind::RestPattern => rest_pattern,
        NodeKind::Declaration => declaration,
        NodeKind::Rule => rule,
        NodeKind::AtRule => at_rule,
        NodeKind::BlockStatement => block_statement,
        NodeKind::CallExpression => call_expression,
        NodeKind::SassFunctionCall => sass_function_call,
        NodeKind::SassFunction => sass_function,
        NodeKind::SassMixin => sass_mixin,
        NodeKind::SassMixinCall => sass_mixin_call,
        NodeKind::AtContent => at_content,
        NodeKind::AtReturn => at_return,
        NodeKind::IfStatement => if_statement,
        NodeKind::LogicalExpression => logical_expression,
        NodeKind::SassImport => sass_import,
        NodeKind::SassModule => sass_module,
    }
}

// =========================================================================
// Shared helpers
// =========================================================================

/// Statements one per line. A run of assignments is followed by a blank
/// line when a different kind of statement comes next.
///
/// Children that print nothing are dropped first, as are trailing
/// `Newline`s, so neither leaves a blank line behind.
fn body(gen: &mut Generator, parent: &Node, items: &[&Node]) -> Emitted {
    let mut items: Vec<&Node> = items.iter().copied().filter(|item| !is_silent(item)).collect();
    while items.last().is_some_and(|last| last.is(NodeKind::Newline)) {
        items.pop();
    }

    for (i, item) in items.iter().enumerate() {
        gen.print(item, Some(parent))?;
        let Some(next) = items.get(i + 1) else {
            break;
        };
        gen.printer().maybe_newline();
        if item.is(NodeKind::Assignment)
            && !next.is(NodeKind::Assignment)
            && !next.is(NodeKind::Newline)
        {
            gen.printer().newline();
        }
    }
    Ok(())
}

/// A `Comment` with no text renders nothing.
fn is_silent(node: &Node) -> bool {
    if !node.is(NodeKind::Comment) {
        return false;
    }
    match node.get("value") {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

/// `a, b, c` with no trailing separator.
fn separated(gen: &mut Generator, parent: &Node, items: &[&Node]) -> Emitted {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            gen.printer().token(',');
            gen.printer().space();
        }
        gen.print(item, Some(parent))?;
    }
    Ok(())
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn value<'n>(gen: &Generator, node: &'n Node) -> Result<&'n Value, CodegenError> {
    node.get("value")
        .ok_or_else(|| gen.malformed(node, "value", "missing value".into()))
}

// =========================================================================
// Structure
// =========================================================================

fn style_sheet(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let children = gen.children(node, "children")?;
    body(gen, node, &children)
}

fn block_statement(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let statements = gen.children(node, "body")?;
    gen.printer().block_start();
    body(gen, node, &statements)?;
    gen.printer().block_end();
    Ok(())
}

fn comment(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let Some(text) = gen.opt_string(node, "value")? else {
        return Ok(());
    };
    let p = gen.printer();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            p.newline();
        }
        p.token("//");
        if !line.is_empty() {
            p.space();
            p.token(line);
        }
    }
    Ok(())
}

fn newline(gen: &mut Generator, _node: &Node, _parent: Option<&Node>) -> Emitted {
    gen.printer().newline();
    Ok(())
}

fn rule(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let selectors = gen.strings(node, "selectors")?;
    let declarations = gen.children(node, "declarations")?;

    let p = gen.printer();
    p.token(selectors.join(", "));
    p.space();
    p.block_start();
    body(gen, node, &declarations)?;
    gen.printer().block_end();
    Ok(())
}

fn at_rule(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let name = gen.string(node, "name")?;
    let media = gen.opt_string(node, "media")?.filter(|m| !m.is_empty());
    let children = gen.children(node, "children")?;

    let p = gen.printer();
    p.token('@');
    p.token(name);
    if let Some(media) = media {
        p.space();
        p.token(media);
    }
    if children.is_empty() {
        return Ok(());
    }
    p.space();
    p.block_start();
    body(gen, node, &children)?;
    gen.printer().block_end();
    Ok(())
}

fn declaration(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let property = gen.string(node, "property")?;
    let p = gen.printer();
    p.token(property);
    p.token(':');
    p.space();

    match value(gen, node)? {
        Value::String(raw) => gen.printer().token(raw),
        Value::Node(call)
            if call.is(NodeKind::CallExpression) || call.is(NodeKind::SassFunctionCall) =>
        {
            gen.print(call, Some(node))?;
        }
        other => {
            return Err(gen.malformed(
                node,
                "value",
                format!(
                    "expected a string or call expression, found {}",
                    other.describe()
                ),
            ));
        }
    }

    let p = gen.printer();
    if Generator::flag(node, "important") {
        p.space();
        p.token("!important");
    }
    p.token(';');
    Ok(())
}

// =========================================================================
// Variables and values
// =========================================================================

fn identifier(gen: &mut Generator, node: &Node, parent: Option<&Node>) -> Emitted {
    let name = gen.string(node, "name")?;
    let p = gen.printer();
    if parent.is_some_and(|parent| VARIABLE_CONTEXTS.contains(&parent.kind())) {
        p.token('$');
    }
    p.token(name);
    Ok(())
}

fn assignment(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let id = gen.child(node, "id")?;
    let init = gen.child(node, "init")?;

    gen.print(id, Some(node))?;
    gen.printer().token(':');
    gen.printer().space();
    gen.print(init, Some(node))?;

    let p = gen.printer();
    if Generator::flag(node, "default") {
        p.space();
        p.token("!default");
    }
    if Generator::flag(node, "global") {
        p.space();
        p.token("!global");
    }
    p.token(';');
    Ok(())
}

fn assignment_pattern(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let left = gen.child(node, "left")?;
    let right = gen.child(node, "right")?;
    gen.print(left, Some(node))?;
    gen.printer().token(':');
    gen.printer().space();
    gen.print(right, Some(node))
}

fn rest_pattern(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let id = gen.child(node, "id")?;
    gen.print(id, Some(node))?;
    gen.printer().token("...");
    Ok(())
}

fn sass_string(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let value = gen.string(node, "value")?;
    gen.printer().token(quote(value));
    Ok(())
}

fn sass_number(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let Some(n) = value(gen, node)?.as_number() else {
        return Err(gen.malformed(node, "value", "expected a number".into()));
    };
    gen.printer().token(format_number(n));
    Ok(())
}

fn sass_boolean(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let Some(b) = value(gen, node)?.as_bool() else {
        return Err(gen.malformed(node, "value", "expected a boolean".into()));
    };
    gen.printer().token(b);
    Ok(())
}

fn sass_color(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let value = gen.string(node, "value")?;
    gen.printer().token(value);
    Ok(())
}

fn sass_value(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let value = value(gen, node)?;
    raw(gen, node, value)
}

/// Pass-through rendering for `SassValue`.
fn raw(gen: &mut Generator, owner: &Node, value: &Value) -> Emitted {
    match value {
        Value::Null => {}
        Value::Bool(b) => gen.printer().token(b),
        Value::Number(n) => gen.printer().token(format_number(*n)),
        Value::String(s) => gen.printer().token(s),
        Value::Node(child) => gen.print(child, Some(owner))?,
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    gen.printer().token(',');
                    gen.printer().space();
                }
                raw(gen, owner, item)?;
            }
        }
    }
    Ok(())
}

fn sass_list(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let elements = gen.children(node, "elements")?;
    gen.printer().token('(');
    separated(gen, node, &elements)?;
    gen.printer().token(')');
    Ok(())
}

fn sass_map(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let properties = gen.children(node, "properties")?;
    if properties.is_empty() {
        gen.printer().token("()");
        return Ok(());
    }

    gen.printer().block_start_with("(");
    for (i, property) in properties.iter().enumerate() {
        gen.print(property, Some(node))?;
        if i + 1 < properties.len() {
            gen.printer().token(',');
            gen.printer().newline();
        }
    }
    gen.printer().block_end_with(")");
    Ok(())
}

fn sass_map_property(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let key = gen.child(node, "key")?;
    let value = gen.child(node, "value")?;
    let quoted = Generator::flag(node, "quoted");

    if quoted {
        gen.printer().token('\'');
    }
    gen.print(key, None)?;
    if quoted {
        gen.printer().token('\'');
    }
    gen.printer().token(':');
    gen.printer().space();
    gen.print(value, Some(node))
}

fn logical_expression(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let left = gen.child(node, "left")?;
    let operator = gen.string(node, "operator")?;
    let right = gen.child(node, "right")?;

    gen.print(left, Some(node))?;
    gen.printer().space();
    gen.printer().token(operator);
    gen.printer().space();
    gen.print(right, Some(node))
}

// =========================================================================
// Functions and mixins
// =========================================================================

fn call_expression(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let callee = gen.child(node, "callee")?;
    let arguments = gen.children(node, "arguments")?;
    gen.print(callee, None)?;
    gen.printer().token('(');
    separated(gen, node, &arguments)?;
    gen.printer().token(')');
    Ok(())
}

fn sass_function_call(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let id = gen.child(node, "id")?;
    let params = gen.children(node, "params")?;
    gen.print(id, None)?;
    gen.printer().token('(');
    separated(gen, node, &params)?;
    gen.printer().token(')');
    Ok(())
}

fn sass_function(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let id = gen.child(node, "id")?;
    let params = gen.children(node, "params")?;
    let body = gen.child(node, "body")?;

    gen.printer().token("@function");
    gen.printer().space();
    gen.print(id, None)?;
    gen.printer().token('(');
    separated(gen, node, &params)?;
    gen.printer().token(')');
    gen.printer().space();
    gen.print(body, Some(node))
}

fn sass_mixin(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let id = gen.child(node, "id")?;
    let params = gen.children(node, "params")?;
    let body = gen.child(node, "body")?;

    gen.printer().token("@mixin");
    gen.printer().space();
    gen.print(id, None)?;
    if !params.is_empty() {
        gen.printer().token('(');
        separated(gen, node, &params)?;
        gen.printer().token(')');
    }
    gen.printer().space();
    gen.print(body, Some(node))
}

fn sass_mixin_call(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let id = gen.child(node, "id")?;
    let params = gen.children(node, "params")?;
    let body = gen.opt_child(node, "body")?;

    gen.printer().token("@include");
    gen.printer().space();
    gen.print(id, None)?;
    if !params.is_empty() {
        gen.printer().token('(');
        separated(gen, node, &params)?;
        gen.printer().token(')');
    }
    if let Some(body) = body {
        gen.printer().space();
        gen.print(body, Some(node))?;
    }
    gen.printer().token(';');
    Ok(())
}

fn at_content(gen: &mut Generator, _node: &Node, _parent: Option<&Node>) -> Emitted {
    let p = gen.printer();
    p.maybe_newline();
    p.token("@content;");
    Ok(())
}

fn at_return(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let argument = gen.child(node, "argument")?;
    gen.printer().maybe_newline();
    gen.printer().token("@return");
    gen.printer().space();
    gen.print(argument, Some(node))?;
    gen.printer().token(';');
    Ok(())
}

// =========================================================================
// Control flow and modules
// =========================================================================

fn if_statement(gen: &mut Generator, node: &Node, parent: Option<&Node>) -> Emitted {
    let test = gen.child(node, "test")?;
    let consequent = gen.child(node, "consequent")?;
    let alternate = gen.opt_child(node, "alternate")?;

    // The alternate of another `@if` continues its `@else if` chain.
    let keyword = if parent.is_some_and(|parent| parent.is(NodeKind::IfStatement)) {
        "if"
    } else {
        "@if"
    };
    gen.printer().token(keyword);
    gen.printer().space();
    gen.print(test, Some(node))?;
    gen.printer().space();
    gen.print(consequent, Some(node))?;

    if let Some(alternate) = alternate {
        gen.printer().space();
        gen.printer().token("@else");
        gen.printer().space();
        gen.print(alternate, Some(node))?;
    }
    Ok(())
}

fn sass_import(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let path = gen.string(node, "path")?;
    let p = gen.printer();
    p.token("@import");
    p.space();
    p.token(quote(path));
    p.token(';');
    Ok(())
}

fn sass_module(gen: &mut Generator, node: &Node, _parent: Option<&Node>) -> Emitted {
    let path = gen.string(node, "path")?;
    let namespace = gen.opt_string(node, "namespace")?;
    let p = gen.printer();
    p.token("@use");
    p.space();
    p.token(quote(path));
    if let Some(namespace) = namespace {
        p.space();
        p.token("as");
        p.space();
        p.token(namespace);
    }
    p.token(';');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, generate_with_parent};
    use pretty_assertions::assert_eq;
    use scssgen_ast::{builders as b, fields};

    fn ident(name: &str) -> Node {
        b::identifier(fields! { name: name }).unwrap()
    }

    fn string(value: &str) -> Node {
        b::sass_string(fields! { value: value }).unwrap()
    }

    fn number(value: f64) -> Node {
        b::sass_number(fields! { value: value }).unwrap()
    }

    fn decl(property: &str, value: &str) -> Node {
        b::declaration(fields! { property: property, value: value }).unwrap()
    }

    fn assign(name: &str, init: Node) -> Node {
        b::assignment(fields! { id: ident(name), init: init }).unwrap()
    }

    fn block(body: Vec<Node>) -> Node {
        b::block_statement(fields! { body: body }).unwrap()
    }

    fn sheet(children: Vec<Node>) -> Node {
        b::style_sheet(fields! { children: children }).unwrap()
    }

    fn logical(left: Node, operator: &str, right: Node) -> Node {
        b::logical_expression(fields! { left: left, operator: operator, right: right }).unwrap()
    }

    fn render(node: &Node) -> String {
        generate(node).unwrap()
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    #[test]
    fn test_identifier_bare_without_parent() {
        assert_eq!(render(&ident("x")), "x");
    }

    #[test]
    fn test_identifier_in_variable_context() {
        let parent = assign("x", number(1.0));
        assert_eq!(generate_with_parent(&ident("x"), Some(&parent)).unwrap(), "$x");
    }

    #[test]
    fn test_identifier_outside_variable_context() {
        let parent = b::rule(fields! { selectors: vec![".a"], declarations: Vec::<Node>::new() })
            .unwrap();
        assert_eq!(generate_with_parent(&ident("x"), Some(&parent)).unwrap(), "x");
    }

    #[test]
    fn test_call_name_bare_arguments_prefixed() {
        let call = b::call_expression(fields! {
            callee: ident("rgba"),
            arguments: vec![ident("color"), number(0.5)],
        })
        .unwrap();
        assert_eq!(render(&call), "rgba($color, 0.5)");
    }

    // =========================================================================
    // Comments and blank lines
    // =========================================================================

    #[test]
    fn test_comment_lines() {
        let node = b::comment(fields! { value: "Shades\n\ngenerated" }).unwrap();
        assert_eq!(render(&node), "// Shades\n//\n// generated");
    }

    #[test]
    fn test_empty_comments_emit_nothing() {
        let empty = b::comment(fields! { value: "" }).unwrap();
        let absent = b::comment(fields! {}).unwrap();
        let null = b::comment(fields! { value: Value::Null }).unwrap();
        assert_eq!(render(&empty), "");
        assert_eq!(render(&absent), "");
        assert_eq!(render(&null), "");
    }

    #[test]
    fn test_empty_comment_leaves_no_blank_line() {
        let rule = b::rule(fields! {
            selectors: vec![".a"],
            declarations: vec![
                decl("color", "red"),
                b::comment(fields! { value: "" }).unwrap(),
                decl("margin", "0"),
            ],
        })
        .unwrap();
        assert_eq!(render(&rule), ".a {\n  color: red;\n  margin: 0;\n}");
    }

    #[test]
    fn test_trailing_empty_comment_after_assignment() {
        let node = b::sass_mixin(fields! {
            id: ident("m"),
            body: block(vec![
                assign("a", number(1.0)),
                b::comment(fields! { value: "" }).unwrap(),
            ]),
        })
        .unwrap();
        assert_eq!(render(&node), "@mixin m {\n  $a: 1;\n}");

        let node = sheet(vec![assign("a", number(1.0)), b::comment(fields! {}).unwrap()]);
        assert_eq!(render(&node), "$a: 1;");
    }

    #[test]
    fn test_empty_comment_keeps_assignment_run() {
        let node = sheet(vec![
            assign("a", number(1.0)),
            b::comment(fields! { value: "" }).unwrap(),
            assign("b", number(2.0)),
        ]);
        assert_eq!(render(&node), "$a: 1;\n$b: 2;");
    }

    #[test]
    fn test_trailing_newline_in_block_is_dropped() {
        let rule = b::rule(fields! {
            selectors: vec![".a"],
            declarations: vec![decl("color", "red"), b::newline(fields! {}).unwrap()],
        })
        .unwrap();
        assert_eq!(render(&rule), ".a {\n  color: red;\n}");
    }

    #[test]
    fn test_comment_indented_in_block() {
        let rule = b::rule(fields! {
            selectors: vec![".a"],
            declarations: vec![b::comment(fields! { value: "one\ntwo" }).unwrap()],
        })
        .unwrap();
        assert_eq!(render(&rule), ".a {\n  // one\n  // two\n}");
    }

    #[test]
    fn test_explicit_newline() {
        let node = sheet(vec![
            b::sass_import(fields! { path: "a" }).unwrap(),
            b::newline(fields! {}).unwrap(),
            b::sass_import(fields! { path: "b" }).unwrap(),
        ]);
        assert_eq!(render(&node), "@import 'a';\n\n@import 'b';");
    }

    // =========================================================================
    // Values
    // =========================================================================

    #[test]
    fn test_string_quoting() {
        assert_eq!(render(&string("md")), "'md'");
        assert_eq!(render(&string("it's")), "'it\\'s'");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&number(16.0)), "16");
        assert_eq!(render(&number(0.25)), "0.25");
        assert_eq!(render(&b::sass_boolean(fields! { value: false }).unwrap()), "false");
        assert_eq!(render(&b::sass_color(fields! { value: "#0f62fe" }).unwrap()), "#0f62fe");
    }

    #[test]
    fn test_large_numbers_render_exactly() {
        assert_eq!(render(&number(1e20)), "100000000000000000000");
        assert_eq!(render(&number(-1e19)), "-10000000000000000000");
    }

    #[test]
    fn test_multiline_raw_declaration_is_indented() {
        let rule = b::rule(fields! {
            selectors: vec![".grid"],
            declarations: vec![decl("grid-template-areas", "'head head'\n'nav main'")],
        })
        .unwrap();
        assert_eq!(
            render(&rule),
            ".grid {\n  grid-template-areas: 'head head'\n  'nav main';\n}"
        );
    }

    #[test]
    fn test_raw_value() {
        let raw = b::sass_value(fields! { value: "map-get($theme, 'ui-01')" }).unwrap();
        assert_eq!(render(&raw), "map-get($theme, 'ui-01')");

        let list = b::sass_value(fields! {
            value: vec![Value::from(1), Value::from("px"), Value::from(ident("gap"))],
        })
        .unwrap();
        assert_eq!(render(&list), "1, px, gap");
    }

    #[test]
    fn test_nested_lists() {
        let inner = b::sass_list(fields! { elements: vec![number(1.0), number(2.0)] }).unwrap();
        let outer = b::sass_list(fields! { elements: vec![ident("a"), inner] }).unwrap();
        assert_eq!(render(&outer), "($a, (1, 2))");
    }

    #[test]
    fn test_map_assignment() {
        let prop = |key: &str, value: &str| {
            b::sass_map_property(fields! { key: ident(key), value: b::sass_value(fields! { value: value }).unwrap() })
                .unwrap()
        };
        let map = b::sass_map(fields! {
            properties: vec![prop("sm", "0.5rem"), prop("md", "1rem")],
        })
        .unwrap();
        let node = assign("spacing", map);
        assert_eq!(render(&node), "$spacing: (\n  sm: 0.5rem,\n  md: 1rem\n);");
    }

    #[test]
    fn test_quoted_map_key_and_variable_value() {
        let prop = b::sass_map_property(fields! {
            key: ident("ui-01"),
            value: ident("gray-10"),
            quoted: true,
        })
        .unwrap();
        assert_eq!(render(&prop), "'ui-01': $gray-10");
    }

    #[test]
    fn test_empty_map() {
        let map = b::sass_map(fields! { properties: Vec::<Node>::new() }).unwrap();
        assert_eq!(render(&map), "()");
    }

    #[test]
    fn test_assignment_flags() {
        let node = b::assignment(fields! {
            id: ident("prefix"),
            init: string("bx"),
            default: true,
            global: true,
        })
        .unwrap();
        assert_eq!(render(&node), "$prefix: 'bx' !default !global;");
    }

    // =========================================================================
    // Declarations and rules
    // =========================================================================

    #[test]
    fn test_single_rule() {
        let rule = b::rule(fields! { selectors: vec![".box"], declarations: vec![decl("color", "red")] })
            .unwrap();
        assert_eq!(render(&rule), ".box {\n  color: red;\n}");
    }

    #[test]
    fn test_multiple_selectors_and_nesting() {
        let inner = b::rule(fields! { selectors: vec!["&:hover"], declarations: vec![decl("opacity", "1")] })
            .unwrap();
        let rule = b::rule(fields! {
            selectors: vec![".a", ".b"],
            declarations: vec![decl("opacity", "0.5"), inner],
        })
        .unwrap();
        assert_eq!(
            render(&rule),
            ".a, .b {\n  opacity: 0.5;\n  &:hover {\n    opacity: 1;\n  }\n}"
        );
    }

    #[test]
    fn test_declaration_with_call_and_important() {
        let call = b::sass_function_call(fields! {
            id: ident("rem"),
            params: vec![number(16.0)],
        })
        .unwrap();
        let node = b::declaration(fields! { property: "padding", value: call, important: true })
            .unwrap();
        assert_eq!(render(&node), "padding: rem(16) !important;");
    }

    #[test]
    fn test_declaration_rejects_other_nodes() {
        let node = b::declaration(fields! { property: "content", value: string("x") }).unwrap();
        let rule = b::rule(fields! { selectors: vec![".a"], declarations: vec![node] }).unwrap();
        match generate(&rule).unwrap_err() {
            CodegenError::MalformedChildShape {
                type_name,
                field,
                message,
                path,
            } => {
                assert_eq!(type_name, "Declaration");
                assert_eq!(field, "value");
                assert_eq!(message, "expected a string or call expression, found SassString node");
                assert_eq!(path, "Rule > Declaration");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_at_rule() {
        let node = b::at_rule(fields! {
            name: "media",
            media: "(min-width: 0)",
            children: Vec::<Node>::new(),
        })
        .unwrap();
        assert_eq!(render(&node), "@media (min-width: 0)");
    }

    #[test]
    fn test_at_rule_with_children() {
        let rule = b::rule(fields! { selectors: vec![".a"], declarations: vec![decl("display", "none")] })
            .unwrap();
        let node = b::at_rule(fields! {
            name: "media",
            media: "print",
            children: vec![rule],
        })
        .unwrap();
        assert_eq!(render(&node), "@media print {\n  .a {\n    display: none;\n  }\n}");
    }

    #[test]
    fn test_at_rule_without_prelude() {
        let node = b::at_rule(fields! {
            name: "font-face",
            children: vec![decl("font-display", "swap")],
        })
        .unwrap();
        assert_eq!(render(&node), "@font-face {\n  font-display: swap;\n}");
    }

    // =========================================================================
    // Functions, mixins, control flow
    // =========================================================================

    #[test]
    fn test_function_declaration() {
        let base = b::assignment_pattern(fields! { left: ident("base"), right: number(16.0) })
            .unwrap();
        let ret = b::at_return(fields! {
            argument: logical(ident("px"), "/", ident("base")),
        })
        .unwrap();
        let node = b::sass_function(fields! {
            id: ident("rem"),
            params: vec![ident("px"), base],
            body: block(vec![ret]),
        })
        .unwrap();
        assert_eq!(
            render(&node),
            "@function rem($px, $base: 16) {\n  @return $px / $base;\n}"
        );
    }

    #[test]
    fn test_mixin_without_params() {
        let node = b::sass_mixin(fields! {
            id: ident("reset"),
            body: block(vec![decl("margin", "0")]),
        })
        .unwrap();
        assert_eq!(render(&node), "@mixin reset {\n  margin: 0;\n}");
    }

    #[test]
    fn test_mixin_with_rest_and_content() {
        let rest = b::rest_pattern(fields! { id: ident("args") }).unwrap();
        let node = b::sass_mixin(fields! {
            id: ident("wrap"),
            params: vec![rest],
            body: block(vec![b::at_content(fields! {}).unwrap()]),
        })
        .unwrap();
        assert_eq!(render(&node), "@mixin wrap($args...) {\n  @content;\n}");
    }

    #[test]
    fn test_mixin_call_forms() {
        let bare = b::sass_mixin_call(fields! { id: ident("reset") }).unwrap();
        assert_eq!(render(&bare), "@include reset;");

        let with_block = b::sass_mixin_call(fields! {
            id: ident("respond"),
            params: vec![string("md")],
            body: block(vec![decl("display", "flex")]),
        })
        .unwrap();
        assert_eq!(render(&with_block), "@include respond('md') {\n  display: flex;\n};");
    }

    #[test]
    fn test_if_else_chain() {
        let test = |n: f64| logical(ident("size"), "==", number(n));
        let nested = b::if_statement(fields! {
            test: test(2.0),
            consequent: block(vec![decl("width", "2rem")]),
            alternate: block(vec![decl("width", "3rem")]),
        })
        .unwrap();
        let node = b::if_statement(fields! {
            test: test(1.0),
            consequent: block(vec![decl("width", "1rem")]),
            alternate: nested,
        })
        .unwrap();
        assert_eq!(
            render(&node),
            "@if $size == 1 {\n  width: 1rem;\n} @else if $size == 2 {\n  width: 2rem;\n} @else {\n  width: 3rem;\n}"
        );
    }

    #[test]
    fn test_nested_if_in_block_is_not_chained() {
        let inner = b::if_statement(fields! {
            test: b::sass_boolean(fields! { value: true }).unwrap(),
            consequent: block(vec![decl("a", "b")]),
        })
        .unwrap();
        let outer = b::if_statement(fields! {
            test: ident("flag"),
            consequent: block(vec![inner]),
        })
        .unwrap();
        assert_eq!(
            render(&outer),
            "@if $flag {\n  @if true {\n    a: b;\n  }\n}"
        );
    }

    #[test]
    fn test_imports_and_modules() {
        let node = sheet(vec![
            b::sass_import(fields! { path: "vendor/reset" }).unwrap(),
            b::sass_module(fields! { path: "sass:math" }).unwrap(),
            b::sass_module(fields! { path: "../colors", namespace: "colors" }).unwrap(),
        ]);
        assert_eq!(
            render(&node),
            "@import 'vendor/reset';\n@use 'sass:math';\n@use '../colors' as colors;"
        );
    }

    // =========================================================================
    // Grouped assignments
    // =========================================================================

    #[test]
    fn test_assignment_run_followed_by_rule() {
        let rule = b::rule(fields! { selectors: vec![".a"], declarations: vec![decl("color", "red")] })
            .unwrap();
        let node = sheet(vec![assign("a", number(1.0)), assign("b", number(2.0)), rule]);
        assert_eq!(render(&node), "$a: 1;\n$b: 2;\n\n.a {\n  color: red;\n}");
    }

    #[test]
    fn test_lone_assignment_has_no_trailing_blank() {
        assert_eq!(render(&sheet(vec![assign("a", number(1.0))])), "$a: 1;");
    }

    #[test]
    fn test_assignment_before_newline_is_not_doubled() {
        let node = sheet(vec![
            assign("a", number(1.0)),
            b::newline(fields! {}).unwrap(),
            b::sass_import(fields! { path: "x" }).unwrap(),
        ]);
        assert_eq!(render(&node), "$a: 1;\n\n@import 'x';");
    }

    #[test]
    fn test_interleaved_assignments() {
        let node = sheet(vec![
            assign("a", number(1.0)),
            b::sass_import(fields! { path: "x" }).unwrap(),
            assign("b", number(2.0)),
            assign("c", number(3.0)),
        ]);
        assert_eq!(render(&node), "$a: 1;\n\n@import 'x';\n$b: 2;\n$c: 3;");
    }

    #[test]
    fn test_assignments_grouped_inside_blocks() {
        let node = b::sass_mixin(fields! {
            id: ident("theme"),
            body: block(vec![assign("bg", ident("ui-01")), decl("color", "red")]),
        })
        .unwrap();
        assert_eq!(
            render(&node),
            "@mixin theme {\n  $bg: $ui-01;\n\n  color: red;\n}"
        );
    }
}
