use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry::names_equal;

// Types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    Boolean,
}

impl PrimitiveKind {
    /// Target-language keyword for this primitive
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Boolean => "boolean",
        }
    }
}

/// Reference to a type from a field, parameter, return or constant slot.
///
/// Class and interface references are by name only; they are resolved against
/// the [`Program`](super::Program) whenever they are needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    String,
    Class(String),
    Interface(String),
}

impl TypeRef {
    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class(name.into())
    }

    pub fn interface(name: impl Into<String>) -> Self {
        TypeRef::Interface(name.into())
    }
}

impl From<PrimitiveKind> for TypeRef {
    fn from(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive(kind)
    }
}

// Modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// Keyword for this visibility; package-private has none
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::PackagePrivate => "",
            Visibility::Private => "private",
        }
    }
}

// Members
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDecl {
    pub name: String,
    pub visibility: Visibility,
    #[serde(rename = "type")]
    pub type_ref: Option<TypeRef>,
    pub doc: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, visibility: Visibility, type_ref: impl Into<TypeRef>) -> Self {
        Self { name: name.into(), visibility, type_ref: Some(type_ref.into()), doc: None }
    }

    /// Whether the field carries everything needed to be emitted
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.type_ref.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: Option<TypeRef>,
}

impl ParameterDecl {
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self { name: name.into(), type_ref: Some(type_ref.into()) }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructorDecl {
    /// `None` renders as `public`
    pub visibility: Option<Visibility>,
    pub parameters: Vec<ParameterDecl>,
    pub doc: Option<String>,
}

impl ConstructorDecl {
    pub fn new(parameters: Vec<ParameterDecl>) -> Self {
        Self { visibility: None, parameters, doc: None }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDecl {
    pub name: String,
    pub visibility: Visibility,
    pub parameters: Vec<ParameterDecl>,
    /// `None` means `void`
    pub return_type: Option<TypeRef>,
    pub doc: Option<String>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterDecl) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returning(mut self, type_ref: impl Into<TypeRef>) -> Self {
        self.return_type = Some(type_ref.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: Option<TypeRef>,
    pub value: String,
    pub doc: Option<String>,
}

impl ConstantDecl {
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>, value: impl Into<String>) -> Self {
        Self { name: name.into(), type_ref: Some(type_ref.into()), value: value.into(), doc: None }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.type_ref.is_some() && !self.value.is_empty()
    }
}

// Type declarations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassDecl {
    pub name: String,
    pub is_library: bool,
    /// Palette instance not yet placed in the program
    pub is_scaffold: bool,
    pub package: Option<String>,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldDecl>,
    pub constructors: Vec<ConstructorDecl>,
    pub methods: Vec<MethodDecl>,
    pub doc: Option<String>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn library(name: impl Into<String>, package: Option<&str>) -> Self {
        Self {
            name: name.into(),
            is_library: true,
            package: package.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Add an implemented interface, keeping the list a set
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        let interface = interface.into();
        if !self.interfaces.iter().any(|i| names_equal(i, &interface)) {
            self.interfaces.push(interface);
        }
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| m.name.as_str())
    }

    /// Superclass name, ignoring an empty socket
    pub fn superclass_name(&self) -> Option<&str> {
        filled(self.superclass.as_deref())
    }

    /// Implemented interface names, ignoring empty sockets and repeats
    pub fn implemented(&self) -> impl Iterator<Item = &str> {
        distinct(&self.interfaces)
    }

    pub fn package_name(&self) -> Option<&str> {
        filled(self.package.as_deref())
    }
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceDecl {
    pub name: String,
    pub is_library: bool,
    pub is_scaffold: bool,
    pub package: Option<String>,
    pub extends: Vec<String>,
    pub constants: Vec<ConstantDecl>,
    pub methods: Vec<MethodDecl>,
    pub doc: Option<String>,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn library(name: impl Into<String>, package: Option<&str>) -> Self {
        Self {
            name: name.into(),
            is_library: true,
            package: package.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn extends(mut self, interface: impl Into<String>) -> Self {
        let interface = interface.into();
        if !self.extends.iter().any(|i| names_equal(i, &interface)) {
            self.extends.push(interface);
        }
        self
    }

    pub fn with_constant(mut self, constant: ConstantDecl) -> Self {
        self.constants.push(constant);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| m.name.as_str())
    }

    /// Extended interface names, ignoring empty sockets and repeats
    pub fn extended(&self) -> impl Iterator<Item = &str> {
        distinct(&self.extends)
    }

    pub fn package_name(&self) -> Option<&str> {
        filled(self.package.as_deref())
    }
}

impl fmt::Display for InterfaceDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interface {}", self.name)
    }
}

/// A socket left empty in the editor arrives as an empty or blank name
fn filled(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

/// Filled names in order, keeping the first spelling of each normalized name.
/// Snapshots may carry repeats the builders would have refused.
fn distinct(names: &[String]) -> impl Iterator<Item = &str> {
    names.iter().enumerate().filter_map(move |(i, name)| {
        let name = filled(Some(name.as_str()))?;
        (!names[..i].iter().any(|earlier| names_equal(earlier, name))).then_some(name)
    })
}

/// A member declaration the editor holds outside of any class or interface.
/// Fragments are part of the snapshot but never produce output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fragment", rename_all = "lowercase")]
pub enum Fragment {
    Field(FieldDecl),
    Parameter(ParameterDecl),
    Constructor(ConstructorDecl),
    Method(MethodDecl),
    Constant(ConstantDecl),
}
