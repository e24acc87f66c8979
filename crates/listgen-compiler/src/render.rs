//! Rendering Go source.
//!
//! [`Renderer`] turns each [`GeneratedDeclaration`] into one line of Go and
//! assembles the full file text. The layout is fixed:
//!
//! ```text
//! package cachesnake
//!
//! var Colors [3]string = [3]string{ "red", "green", "blue" }
//!
//! var Empty [0]string = [0]string{ }
//!
//! ```

use std::fmt::Write;

use listgen_core::{CompileConfig, ContainerShape, GeneratedDeclaration};

/// Renders declarations and output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    container: ContainerShape,
    escape: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            container: ContainerShape::FixedArray,
            escape: true,
        }
    }
}

impl Renderer {
    /// Creates a renderer with the given container shape and escaping.
    #[must_use]
    pub const fn new(container: ContainerShape, escape: bool) -> Self {
        Self { container, escape }
    }

    /// Creates a renderer matching a [`CompileConfig`].
    #[must_use]
    pub const fn from_config(config: &CompileConfig) -> Self {
        Self::new(config.container, config.escape)
    }

    /// Renders one declaration as a single line (no terminator).
    ///
    /// # Examples
    ///
    /// ```
    /// use listgen_compiler::Renderer;
    /// use listgen_core::{GeneratedDeclaration, IdentifierName, InputList};
    ///
    /// let list = InputList::new("colors.txt", vec!["red".into(), "green".into(), "blue".into()]);
    /// let decl = GeneratedDeclaration::new(IdentifierName::new("Colors"), list);
    /// assert_eq!(
    ///     Renderer::default().render_declaration(&decl),
    ///     r#"var Colors [3]string = [3]string{ "red", "green", "blue" }"#
    /// );
    /// ```
    #[must_use]
    pub fn render_declaration(&self, decl: &GeneratedDeclaration) -> String {
        let mut line = match self.container {
            ContainerShape::FixedArray => {
                let n = decl.length();
                format!("var {} [{n}]string = [{n}]string{{", decl.name())
            }
            ContainerShape::Slice => format!("var {} = []string{{", decl.name()),
        };

        for (i, element) in decl.elements().iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push_str(" \"");
            if self.escape {
                escape_go_into(&mut line, element);
            } else {
                line.push_str(element);
            }
            line.push('"');
        }

        line.push_str(" }");
        line
    }

    /// Renders a whole output file: the header, a blank line, then each
    /// declaration followed by a blank line.
    #[must_use]
    pub fn render_source(&self, header: &str, decls: &[GeneratedDeclaration]) -> String {
        let mut out = String::new();
        out.push_str(header);
        out.push_str("\n\n");
        for decl in decls {
            out.push_str(&self.render_declaration(decl));
            out.push_str("\n\n");
        }
        out
    }
}

/// Escapes `value` for use inside a double-quoted Go string literal.
///
/// # Examples
///
/// ```
/// use listgen_compiler::escape_go_string;
///
/// assert_eq!(escape_go_string(r#"say "hi"\n"#), r#"say \"hi\"\\n"#);
/// assert_eq!(escape_go_string("tab\there"), r"tab\there");
/// ```
#[must_use]
pub fn escape_go_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    escape_go_into(&mut out, value);
    out
}

fn escape_go_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\u{0B}' => out.push_str("\\v"),
            // Go rejects a BOM anywhere but the start of a file
            '\u{FEFF}' => out.push_str("\\ufeff"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
}
