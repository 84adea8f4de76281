//! Source emission for reviewed programs.
//!
//! An [`Emitter`] walks a [`Program`] once and produces target-language text.
//! Classes that fail their conformance review, and interfaces with a cyclic
//! `extends` chain, come out as a `// ERROR` comment block instead of code.
//! That failure stays local: every other declaration is emitted normally.
//!
//! Emission keeps no state between passes. Running it twice over the same
//! program yields identical text.

mod class;
mod context;
mod interface;
mod members;

pub use context::{EmissionContext, NameTable};

use crate::config::Config;
use crate::model::*;

/// Where a method is declared, which decides between a body and a bare signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberContext {
    Class,
    Interface,
}

/// One emission pass over a program
pub struct Emitter<'a> {
    program: &'a Program,
    config: &'a Config,
    ctx: EmissionContext,
}

impl<'a> Emitter<'a> {
    pub fn new(program: &'a Program, config: &'a Config) -> Self {
        Self { program, config, ctx: EmissionContext::for_program(program) }
    }

    /// Emit every top-level declaration. Scaffolds and fragments are skipped.
    pub fn emit(mut self) -> String {
        log::debug!(
            "emit start: classes={} interfaces={} fragments={}",
            self.program.classes.len(),
            self.program.interfaces.len(),
            self.program.fragments.len()
        );
        let program = self.program;
        let mut units: Vec<String> = Vec::new();
        for class in program.classes.iter().filter(|c| !c.is_scaffold) {
            let text = self.emit_class(class);
            if !text.is_empty() {
                units.push(text);
            }
        }
        for interface in program.interfaces.iter().filter(|i| !i.is_scaffold) {
            let text = self.emit_interface(interface);
            if !text.is_empty() {
                units.push(text);
            }
        }
        log::debug!("emit end: {} units", units.len());
        if units.is_empty() {
            return String::new();
        }
        let mut out = units.join("\n\n");
        out.push('\n');
        out
    }

    /// The per-pass naming state, for callers emitting declarations piecemeal
    pub fn context(&self) -> &EmissionContext {
        &self.ctx
    }

    fn doc_lines(&self, doc: Option<&str>) -> Vec<String> {
        let Some(doc) = doc.filter(|d| self.config.emit_docs && !d.trim().is_empty()) else {
            return Vec::new();
        };
        let mut lines = vec!["/**".to_string()];
        for line in doc.lines() {
            if line.trim().is_empty() {
                lines.push(" *".to_string());
            } else {
                lines.push(format!(" * {}", line.replace("*/", "*&#47;")));
            }
        }
        lines.push(" */".to_string());
        lines
    }

    fn indent_lines(&self, lines: Vec<String>, depth: usize) -> Vec<String> {
        let pad = self.config.indent_str(depth);
        lines
            .into_iter()
            .map(|l| if l.is_empty() { l } else { format!("{}{}", pad, l) })
            .collect()
    }

    /// Body of a class or interface: non-empty groups separated by a blank line
    fn body_lines(&self, groups: Vec<Vec<String>>) -> Vec<String> {
        let mut body: Vec<String> = Vec::new();
        for group in groups.into_iter().filter(|g| !g.is_empty()) {
            if !body.is_empty() {
                body.push(String::new());
            }
            body.extend(group);
        }
        self.indent_lines(body, 1)
    }
}

/// Join lines into a text block, dropping trailing whitespace
fn finish(lines: Vec<String>) -> String {
    lines.iter().map(|l| l.trim_end()).collect::<Vec<_>>().join("\n")
}

/// Emit a whole program with a fresh emission context
pub fn emit_program(program: &Program, config: &Config) -> String {
    Emitter::new(program, config).emit()
}
