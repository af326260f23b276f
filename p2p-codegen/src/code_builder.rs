//! Code builder utility for generating properly indented C++ boilerplate.

/// Indentation unit used by every generated source file.
pub const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use project2plugin_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .block_with_close("void Foo() {", "}", |b| b.line("Bar();"))
///     .build();
///
/// assert_eq!(code, "void Foo() {\n    Bar();\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// `#pragma once`
    pub fn pragma_once(self) -> Self {
        self.line("#pragma once")
    }

    /// `#include "<header>"`
    pub fn include(self, header: &str) -> Self {
        self.line(&include_directive(header))
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

/// A quoted include directive without trailing newline.
pub fn include_directive(header: &str) -> String {
    format!("#include \"{}\"", header)
}
