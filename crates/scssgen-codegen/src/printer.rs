//! Token sink for generated SCSS.
//!
//! Tracks two pieces of cursor state: the block depth and whether the cursor
//! sits at the start of a line. Indentation is written lazily, right before
//! the first token of a line, so blank lines never carry trailing spaces.
//!
//! One printer serves one generation pass; it is consumed by [`Printer::finish`].

use std::fmt::Display;

pub struct Printer {
    buf: String,
    indent: String,
    depth: usize,
    at_line_start: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new("  ")
    }
}

impl Printer {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            buf: String::new(),
            indent: indent.into(),
            depth: 0,
            at_line_start: true,
        }
    }

    /// Append a literal token. Non-string values are stringified.
    ///
    /// Lines after an embedded `\n` are indented to the current depth.
    pub fn token(&mut self, value: impl Display) {
        let text = value.to_string();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            if !line.is_empty() {
                self.write_indent();
                self.buf.push_str(line);
            }
        }
    }

    /// Append a single space, unless at the start of a line or right after
    /// another space.
    pub fn space(&mut self) {
        if self.at_line_start || self.buf.ends_with(' ') {
            return;
        }
        self.buf.push(' ');
    }

    pub fn newline(&mut self) {
        self.buf.push('\n');
        self.at_line_start = true;
    }

    /// End the current line if anything has been written on it.
    pub fn maybe_newline(&mut self) {
        if !self.at_line_start {
            self.newline();
        }
    }

    /// `{` + newline, then one level deeper.
    pub fn block_start(&mut self) {
        self.block_start_with("{");
    }

    pub fn block_start_with(&mut self, open: &str) {
        self.token(open);
        self.newline();
        self.depth += 1;
    }

    /// Close the current line, step one level out, then `}`.
    pub fn block_end(&mut self) {
        self.block_end_with("}");
    }

    pub fn block_end_with(&mut self, close: &str) {
        self.maybe_newline();
        self.depth = self.depth.saturating_sub(1);
        self.token(close);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            for _ in 0..self.depth {
                self.buf.push_str(&self.indent);
            }
            self.at_line_start = false;
        }
    }
}
