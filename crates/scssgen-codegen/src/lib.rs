//! scssgen Code Generator
//!
//! Walks a validated scssgen tree depth-first and renders SCSS source. Each
//! node's kind is looked up in the [`registry`], whose emission routine
//! writes tokens to a [`Printer`] and recurses into children, passing the
//! current node down as their parent.
//!
//! ```text
//! Node tree → generate() → registry::definition(kind).emit → Printer → String
//! ```

mod emit;
pub mod printer;
pub mod registry;

use scssgen_ast::{Node, UnknownNodeType, Value};

pub use printer::Printer;
pub use registry::TypeDefinition;

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodegenError {
    #[error(transparent)]
    UnknownNodeType(#[from] UnknownNodeType),

    #[error("malformed `{type_name}.{field}` at {path}: {message}")]
    MalformedChildShape {
        type_name: &'static str,
        field: &'static str,
        message: String,
        path: String,
    },
}

/// Formatting options for a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// One level of indentation.
    pub indent: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
        }
    }
}

impl GenerateOptions {
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }
}

/// Drives one generation pass: owns the printer and the path of node types
/// from the root to the node being emitted.
pub struct Generator {
    printer: Printer,
    path: Vec<&'static str>,
}

impl Generator {
    pub fn new(options: &GenerateOptions) -> Self {
        Self {
            printer: Printer::new(options.indent.clone()),
            path: Vec::new(),
        }
    }

    /// Emit `node` through its registered routine, with `parent` as context.
    pub fn print(&mut self, node: &Node, parent: Option<&Node>) -> Result<(), CodegenError> {
        let def = registry::definition(node.kind())?;
        self.path.push(def.name);
        tracing::trace!(kind = def.name, depth = self.path.len(), "emit");
        (def.emit)(self, node, parent)?;
        self.path.pop();
        Ok(())
    }

    pub fn printer(&mut self) -> &mut Printer {
        &mut self.printer
    }

    pub fn finish(self) -> String {
        self.printer.finish()
    }

    fn malformed(&self, node: &Node, field: &'static str, message: String) -> CodegenError {
        CodegenError::MalformedChildShape {
            type_name: node.type_name(),
            field,
            message,
            path: self.path.join(" > "),
        }
    }

    fn child<'n>(&self, node: &'n Node, field: &'static str) -> Result<&'n Node, CodegenError> {
        self.opt_child(node, field)?
            .ok_or_else(|| self.malformed(node, field, "missing child node".into()))
    }

    fn opt_child<'n>(
        &self,
        node: &'n Node,
        field: &'static str,
    ) -> Result<Option<&'n Node>, CodegenError> {
        match node.get(field) {
            None => Ok(None),
            Some(Value::Node(child)) => Ok(Some(child.as_ref())),
            Some(other) => Err(self.malformed(
                node,
                field,
                format!("expected a node, found {}", other.describe()),
            )),
        }
    }

    /// Child nodes of a list field; an omitted optional list is empty.
    fn children<'n>(
        &self,
        node: &'n Node,
        field: &'static str,
    ) -> Result<Vec<&'n Node>, CodegenError> {
        let Some(value) = node.get(field) else {
            return Ok(Vec::new());
        };
        let Some(items) = value.as_list() else {
            return Err(self.malformed(
                node,
                field,
                format!("expected a list, found {}", value.describe()),
            ));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_node().ok_or_else(|| {
                    self.malformed(
                        node,
                        field,
                        format!("element {i}: expected a node, found {}", item.describe()),
                    )
                })
            })
            .collect()
    }

    fn string<'n>(&self, node: &'n Node, field: &'static str) -> Result<&'n str, CodegenError> {
        self.opt_string(node, field)?
            .ok_or_else(|| self.malformed(node, field, "missing string".into()))
    }

    fn opt_string<'n>(
        &self,
        node: &'n Node,
        field: &'static str,
    ) -> Result<Option<&'n str>, CodegenError> {
        match node.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(self.malformed(
                node,
                field,
                format!("expected a string, found {}", other.describe()),
            )),
        }
    }

    fn strings<'n>(
        &self,
        node: &'n Node,
        field: &'static str,
    ) -> Result<Vec<&'n str>, CodegenError> {
        let items = node.get(field).and_then(Value::as_list).unwrap_or(&[]);
        items
            .iter()
            .map(|item| {
                item.as_str().ok_or_else(|| {
                    self.malformed(
                        node,
                        field,
                        format!("expected a string, found {}", item.describe()),
                    )
                })
            })
            .collect()
    }

    fn flag(node: &Node, field: &str) -> bool {
        node.get(field).and_then(Value::as_bool).unwrap_or(false)
    }
}

/// Render `root` to SCSS.
pub fn generate(root: &Node) -> Result<String, CodegenError> {
    generate_with_options(root, None, &GenerateOptions::default())
}

/// Render `root` as if it were a child of `parent`.
pub fn generate_with_parent(root: &Node, parent: Option<&Node>) -> Result<String, CodegenError> {
    generate_with_options(root, parent, &GenerateOptions::default())
}

pub fn generate_with_options(
    root: &Node,
    parent: Option<&Node>,
    options: &GenerateOptions,
) -> Result<String, CodegenError> {
    tracing::debug!(root = root.type_name(), "generating scss");
    let mut generator = Generator::new(options);
    generator.print(root, parent)?;
    let output = generator.finish();
    tracing::debug!(bytes = output.len(), "generated scss");
    Ok(output)
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        // `+ 0.0` turns `-0` into `0`.
        format!("{:.0}", n + 0.0)
    } else {
        format!("{n}")
    }
}
