//! Conformance review of a program before emission.
//!
//! A class conforms when every method name required by each interface it
//! implements is declared by the class itself or by its immediate superclass.
//! Only names are compared; parameter lists and return types are not. Only
//! one level of superclass is inspected: a method declared by a grandparent
//! does not satisfy an obligation.
//!
//! Library declarations are trust boundaries. A library superclass contributes
//! no methods and a library interface requires none.

use std::fmt;

use crate::model::*;
use crate::registry::naming::{naming_warnings, NamingWarning};

mod class;
mod interface;

pub use class::check_class;
pub use interface::resolve_extends;

pub type ReviewResult<T> = Result<T, ConformanceError>;

/// Methods one interface requires that the class does not provide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceFailure {
    pub interface: String,
    pub missing: Vec<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    #[error("class '{class}' does not implement [{}] required by [{}]", missing_methods(.failures).join(", "), failing_interfaces(.failures).join(", "))]
    MissingMethods {
        class: String,
        superclass: Option<String>,
        failures: Vec<InterfaceFailure>,
    },
    #[error("interface '{interface}' has a cyclic extends chain: {}", .cycle.join(" -> "))]
    CyclicExtends { interface: String, cycle: Vec<String> },
}

/// Union of missing method names, in order of first appearance
fn missing_methods(failures: &[InterfaceFailure]) -> Vec<String> {
    let mut all: Vec<String> = Vec::new();
    for name in failures.iter().flat_map(|f| f.missing.iter()) {
        if !all.contains(name) {
            all.push(name.clone());
        }
    }
    all
}

fn failing_interfaces(failures: &[InterfaceFailure]) -> Vec<String> {
    failures.iter().map(|f| f.interface.clone()).collect()
}

impl ConformanceError {
    /// Name of the declaration the diagnostic replaces
    pub fn declaration(&self) -> &str {
        match self {
            ConformanceError::MissingMethods { class, .. } => class,
            ConformanceError::CyclicExtends { interface, .. } => interface,
        }
    }

    /// Every method name missing across all failing interfaces
    pub fn missing(&self) -> Vec<String> {
        match self {
            ConformanceError::MissingMethods { failures, .. } => missing_methods(failures),
            ConformanceError::CyclicExtends { .. } => Vec::new(),
        }
    }

    /// Diagnostic text emitted in place of the declaration, one `//` comment per line
    pub fn diagnostic_lines(&self) -> Vec<String> {
        match self {
            ConformanceError::MissingMethods { class, superclass, failures } => {
                let mut lines = vec![
                    "// ERROR: Not all the methods of the implemented interfaces are defined".to_string(),
                    format!("// Missing methods: {}", missing_methods(failures).join(", ")),
                    format!("// Interfaces: {}", failing_interfaces(failures).join(", ")),
                    format!("// Class: {}", class),
                ];
                if let Some(superclass) = superclass {
                    lines.push(format!("// Superclass: {}", superclass));
                }
                lines
            }
            ConformanceError::CyclicExtends { interface, cycle } => vec![
                "// ERROR: Cyclic interface inheritance".to_string(),
                format!("// Cycle: {}", cycle.join(" -> ")),
                format!("// Interface: {}", interface),
            ],
        }
    }
}

/// Everything the review found for a program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewReport {
    pub conformance: Vec<ConformanceError>,
    pub naming: Vec<NamingWarning>,
}

impl ReviewReport {
    pub fn is_clean(&self) -> bool {
        self.conformance.is_empty() && self.naming.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.conformance.is_empty()
    }
}

impl fmt::Display for ReviewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for warning in &self.naming {
            writeln!(f, "warning: {}", warning)?;
        }
        for error in &self.conformance {
            writeln!(f, "error: {}", error)?;
        }
        Ok(())
    }
}

/// Review every placed, non-library declaration of a program
pub fn review(program: &Program) -> ReviewReport {
    log::debug!("review start: classes={} interfaces={}", program.classes.len(), program.interfaces.len());
    let mut report = ReviewReport { conformance: Vec::new(), naming: naming_warnings(program) };
    for class in program.classes.iter().filter(|c| !c.is_library && !c.is_scaffold) {
        if let Err(e) = check_class(program, class) {
            report.conformance.push(e);
        }
    }
    for interface in program.interfaces.iter().filter(|i| !i.is_library && !i.is_scaffold) {
        if let Err(e) = resolve_extends(program, interface) {
            report.conformance.push(e);
        }
    }
    log::debug!(
        "review end: {} conformance errors, {} naming warnings",
        report.conformance.len(),
        report.naming.len()
    );
    report
}
