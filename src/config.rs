//! Emission configuration

use crate::consts::*;
use crate::error::{Error, Result};

/// Settings that shape the emitted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Spaces per nesting level
    pub indent: usize,
    /// Body text for constructors and class methods
    pub placeholder: String,
    /// Render declaration docs as block comments
    pub emit_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            emit_docs: true,
        }
    }
}

impl Config {
    /// Defaults overridden by `OOPGEN_INDENT`, `OOPGEN_PLACEHOLDER` and `OOPGEN_NO_DOCS`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(indent) = std::env::var(ENV_INDENT) {
            config.indent = indent
                .trim()
                .parse()
                .map_err(|_| Error::config_error(format!("{} must be a number, got '{}'", ENV_INDENT, indent)))?;
        }
        if let Ok(placeholder) = std::env::var(ENV_PLACEHOLDER) {
            config.placeholder = placeholder;
        }
        if std::env::var(ENV_NO_DOCS).is_ok() {
            config.emit_docs = false;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn without_docs(mut self) -> Self {
        self.emit_docs = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.indent == 0 || self.indent > MAX_INDENT {
            return Err(Error::config_error(format!(
                "indent must be between 1 and {}, got {}",
                MAX_INDENT, self.indent
            )));
        }
        if self.placeholder.contains('\n') {
            return Err(Error::config_error("placeholder must be a single line"));
        }
        Ok(())
    }

    /// Whitespace for `depth` nesting levels
    pub(crate) fn indent_str(&self, depth: usize) -> String {
        " ".repeat(self.indent * depth)
    }
}
