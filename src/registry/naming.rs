//! Identifier and package grammar checks.
//!
//! These feed the editor's inline warnings. A bad name never blocks emission.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::model::*;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex"));
static PACKAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)+$").expect("package regex"));

pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// A dotted lowercase path of at least two segments
pub fn is_valid_package(name: &str) -> bool {
    PACKAGE.is_match(name)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),
    #[error("'{0}' is not a valid package name")]
    InvalidPackage(String),
}

/// The name field a warning belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSlot {
    Class(String),
    Interface(String),
    Package { owner: String },
    Field { owner: String },
    Parameter { owner: String },
    Method { owner: String },
    Constant { owner: String },
}

impl fmt::Display for NameSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSlot::Class(name) => write!(f, "class '{}'", name),
            NameSlot::Interface(name) => write!(f, "interface '{}'", name),
            NameSlot::Package { owner } => write!(f, "package of '{}'", owner),
            NameSlot::Field { owner } => write!(f, "field in '{}'", owner),
            NameSlot::Parameter { owner } => write!(f, "parameter in '{}'", owner),
            NameSlot::Method { owner } => write!(f, "method in '{}'", owner),
            NameSlot::Constant { owner } => write!(f, "constant in '{}'", owner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingWarning {
    pub slot: NameSlot,
    pub error: NamingError,
}

impl fmt::Display for NamingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.slot, self.error)
    }
}

/// Collect a warning for every name field that fails its grammar
pub fn naming_warnings(program: &Program) -> Vec<NamingWarning> {
    let mut collector = NamingCollector { owner: String::new(), warnings: Vec::new() };
    collector.visit_program(program);
    collector.warnings
}

struct NamingCollector {
    owner: String,
    warnings: Vec<NamingWarning>,
}

impl NamingCollector {
    fn check_identifier(&mut self, name: &str, slot: NameSlot) {
        if !is_valid_identifier(name) {
            self.warnings.push(NamingWarning { slot, error: NamingError::InvalidIdentifier(name.to_string()) });
        }
    }

    fn check_package(&mut self, package: Option<&str>) {
        if let Some(package) = package {
            if !is_valid_package(package) {
                self.warnings.push(NamingWarning {
                    slot: NameSlot::Package { owner: self.owner.clone() },
                    error: NamingError::InvalidPackage(package.to_string()),
                });
            }
        }
    }
}

impl DeclVisitor for NamingCollector {
    fn visit_class_decl(&mut self, class: &ClassDecl) {
        if class.is_scaffold {
            return;
        }
        self.owner = class.name.clone();
        self.check_identifier(&class.name, NameSlot::Class(class.name.clone()));
        self.check_package(class.package_name());
        walk_class_decl(self, class);
    }

    fn visit_interface_decl(&mut self, interface: &InterfaceDecl) {
        if interface.is_scaffold {
            return;
        }
        self.owner = interface.name.clone();
        self.check_identifier(&interface.name, NameSlot::Interface(interface.name.clone()));
        self.check_package(interface.package_name());
        walk_interface_decl(self, interface);
    }

    /// Fragments have no owner to report against; they are checked once placed
    fn visit_fragment(&mut self, _fragment: &Fragment) {}

    fn visit_field_decl(&mut self, field: &FieldDecl) {
        self.check_identifier(&field.name, NameSlot::Field { owner: self.owner.clone() });
    }

    fn visit_method_decl(&mut self, method: &MethodDecl) {
        self.check_identifier(&method.name, NameSlot::Method { owner: self.owner.clone() });
        walk_method_decl(self, method);
    }

    fn visit_parameter(&mut self, parameter: &ParameterDecl) {
        self.check_identifier(&parameter.name, NameSlot::Parameter { owner: self.owner.clone() });
    }

    fn visit_constant_decl(&mut self, constant: &ConstantDecl) {
        self.check_identifier(&constant.name, NameSlot::Constant { owner: self.owner.clone() });
    }
}
