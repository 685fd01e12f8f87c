//! Source Writer
//!
//! An indentation-aware text sink. Indentation is written lazily: the first
//! write on a fresh line is prefixed with the current indent, so blank lines
//! never carry trailing whitespace.
//!
//! Blocks are entered through [`SourceWriter::begin_scope`], which returns an
//! [`IndentScope`] guard. Dropping the guard pops exactly the level it pushed,
//! whether the block finished normally, returned early with `?`, or unwound.
//!
//! ```
//! use scriptalias_emitter::SourceWriter;
//!
//! let mut writer = SourceWriter::new();
//! writer.write("{");
//! {
//!     let mut body = writer.begin_scope();
//!     body.write("Run();");
//! }
//! writer.write("}");
//! assert_eq!(writer.as_str(), "{\n    Run();\n}");
//! ```

use std::ops::{Deref, DerefMut};

use scriptalias_common::NewLineKind;

use crate::options::GeneratorOptions;

pub struct SourceWriter {
    output: String,
    indent_level: u32,
    indent_width: u32,
    new_line: NewLineKind,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::with_format(4, NewLineKind::LineFeed)
    }

    pub fn with_format(indent_width: u32, new_line: NewLineKind) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            new_line,
            at_line_start: true,
        }
    }

    pub fn from_options(options: &GeneratorOptions) -> Self {
        Self::with_format(options.indent_width, options.new_line)
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Write text on the current line. `text` must not contain line breaks;
    /// use [`write_lines`](Self::write_lines) for multi-line text.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.push_indent();
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    pub fn write_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.write(ch.encode_utf8(&mut buf));
    }

    pub fn write_space(&mut self) {
        self.write_char(' ');
    }

    /// End the current line.
    pub fn write_line(&mut self) {
        self.output.push_str(self.new_line.as_str());
        self.at_line_start = true;
    }

    /// Write multi-line text, indenting every line at the current level.
    ///
    /// Lines are separated with this writer's newline; no newline is written
    /// after the last line.
    pub fn write_lines(&mut self, text: &str) {
        for (i, line) in text.lines().enumerate() {
            if i > 0 {
                self.write_line();
            }
            self.write(line);
        }
    }

    fn push_indent(&mut self) {
        let width = (self.indent_level * self.indent_width) as usize;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    // =========================================================================
    // Indentation
    // =========================================================================

    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Enter a block: indent one level and start a new line.
    ///
    /// The returned guard derefs to the writer. When it is dropped the level
    /// is popped and the current line is ended.
    pub fn begin_scope(&mut self) -> IndentScope<'_> {
        self.increase_indent();
        self.write_line();
        IndentScope { writer: self }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Spaces per indentation level.
    pub fn indent_width(&self) -> u32 {
        self.indent_width
    }

    pub fn new_line(&self) -> NewLineKind {
        self.new_line
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for one indentation level opened by [`SourceWriter::begin_scope`].
pub struct IndentScope<'a> {
    writer: &'a mut SourceWriter,
}

impl Deref for IndentScope<'_> {
    type Target = SourceWriter;

    fn deref(&self) -> &SourceWriter {
        self.writer
    }
}

impl DerefMut for IndentScope<'_> {
    fn deref_mut(&mut self) -> &mut SourceWriter {
        self.writer
    }
}

impl Drop for IndentScope<'_> {
    fn drop(&mut self) {
        self.writer.decrease_indent();
        self.writer.write_line();
    }
}

#[cfg(test)]
#[path = "tests/source_writer_tests.rs"]
mod tests;
