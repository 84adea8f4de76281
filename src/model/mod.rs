//! Declaration model for assembled object-oriented programs
//!
//! The model is a plain tree: a [`Program`] owns every class and interface
//! declaration, and each declaration owns its members. Cross references
//! (superclass, implemented and extended interfaces, class/interface types)
//! are stored as names and resolved against the program on demand, so an edit
//! anywhere never leaves a dangling link behind.

mod nodes;
mod reconcile;
mod visitor;

pub use nodes::*;
pub use reconcile::*;
pub use visitor::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::registry::names_equal;

/// One of the two disjoint identifier pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Class,
    Interface,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Class => f.write_str("class"),
            Namespace::Interface => f.write_str("interface"),
        }
    }
}

/// Index of a class declaration inside its [`Program`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(usize);

/// Index of an interface declaration inside its [`Program`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceId(usize);

impl ClassId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl InterfaceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identity of any named top-level declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclId {
    Class(ClassId),
    Interface(InterfaceId),
}

impl DeclId {
    pub fn namespace(self) -> Namespace {
        match self {
            DeclId::Class(_) => Namespace::Class,
            DeclId::Interface(_) => Namespace::Interface,
        }
    }
}

impl From<ClassId> for DeclId {
    fn from(id: ClassId) -> Self {
        DeclId::Class(id)
    }
}

impl From<InterfaceId> for DeclId {
    fn from(id: InterfaceId) -> Self {
        DeclId::Interface(id)
    }
}

/// The full collection of declarations being edited
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    pub classes: Vec<ClassDecl>,
    pub interfaces: Vec<InterfaceDecl>,
    /// Members not attached to any class or interface
    pub fragments: Vec<Fragment>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a program snapshot from its JSON form
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serialize the program snapshot as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn add_class(&mut self, class: ClassDecl) -> ClassId {
        self.classes.push(class);
        ClassId(self.classes.len() - 1)
    }

    pub fn add_interface(&mut self, interface: InterfaceDecl) -> InterfaceId {
        self.interfaces.push(interface);
        InterfaceId(self.interfaces.len() - 1)
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassDecl> {
        self.classes.get(id.0)
    }

    pub fn class_mut(&mut self, id: ClassId) -> Option<&mut ClassDecl> {
        self.classes.get_mut(id.0)
    }

    pub fn interface(&self, id: InterfaceId) -> Option<&InterfaceDecl> {
        self.interfaces.get(id.0)
    }

    pub fn interface_mut(&mut self, id: InterfaceId) -> Option<&mut InterfaceDecl> {
        self.interfaces.get_mut(id.0)
    }

    pub fn class_ids(&self) -> impl Iterator<Item = ClassId> {
        (0..self.classes.len()).map(ClassId)
    }

    pub fn interface_ids(&self) -> impl Iterator<Item = InterfaceId> {
        (0..self.interfaces.len()).map(InterfaceId)
    }

    /// Resolve a class reference by name. Scaffolds never resolve.
    pub fn find_class(&self, name: &str) -> Option<ClassId> {
        self.classes.iter().position(|c| !c.is_scaffold && names_equal(&c.name, name)).map(ClassId)
    }

    /// Resolve an interface reference by name. Scaffolds never resolve.
    pub fn find_interface(&self, name: &str) -> Option<InterfaceId> {
        self.interfaces.iter().position(|d| !d.is_scaffold && names_equal(&d.name, name)).map(InterfaceId)
    }

    pub fn find(&self, namespace: Namespace, name: &str) -> Option<DeclId> {
        match namespace {
            Namespace::Class => self.find_class(name).map(DeclId::Class),
            Namespace::Interface => self.find_interface(name).map(DeclId::Interface),
        }
    }

    /// Name of a declaration, if the id is still valid
    pub fn name_of(&self, id: DeclId) -> Option<&str> {
        match id {
            DeclId::Class(c) => self.class(c).map(|c| c.name.as_str()),
            DeclId::Interface(i) => self.interface(i).map(|i| i.name.as_str()),
        }
    }

    pub fn is_scaffold(&self, id: DeclId) -> bool {
        match id {
            DeclId::Class(c) => self.class(c).is_some_and(|c| c.is_scaffold),
            DeclId::Interface(i) => self.interface(i).is_some_and(|i| i.is_scaffold),
        }
    }

    /// Names of every placed declaration in a namespace, paired with their ids
    pub fn placed(&self, namespace: Namespace) -> Vec<(DeclId, &str)> {
        match namespace {
            Namespace::Class => self
                .classes
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_scaffold)
                .map(|(i, c)| (DeclId::Class(ClassId(i)), c.name.as_str()))
                .collect(),
            Namespace::Interface => self
                .interfaces
                .iter()
                .enumerate()
                .filter(|(_, d)| !d.is_scaffold)
                .map(|(i, d)| (DeclId::Interface(InterfaceId(i)), d.name.as_str()))
                .collect(),
        }
    }
}
