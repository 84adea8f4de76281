//! Name registry for the class and interface namespaces
//!
//! Names are compared under a normalized equality: surrounding whitespace is
//! ignored and comparison is case-insensitive. `Shape`, ` shape ` and `SHAPE`
//! are the same name. Each namespace is checked on its own, so a class and an
//! interface may share a name.
//!
//! [`propose_name`] turns a candidate into a collision-free name by bumping a
//! trailing number (`Shape` → `Shape2` → `Shape3`). [`rename`] applies an
//! accepted name and rewrites every reference to the old one before returning.

pub mod naming;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::REGISTRY_MAX_RENAME_STEPS;
use crate::model::*;

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no {namespace} named '{name}'")]
    UnknownDeclaration { namespace: Namespace, name: String },
    #[error("{0:?} does not refer to a declaration in this program")]
    StaleId(DeclId),
}

static TRAILING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)(\d+)$").expect("trailing number regex"));

/// Canonical text of a name: trimmed and lowercased
pub fn normalize(name: &str) -> String {
    trim_name(name).to_lowercase()
}

/// Normalized name equality
pub fn names_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Strip surrounding whitespace (non-breaking spaces included)
pub fn trim_name(name: &str) -> &str {
    name.trim()
}

/// Next candidate after a collision: `Foo` → `Foo2`, `Foo2` → `Foo3`, `Foo09` → `Foo10`
fn bump(name: &str) -> String {
    if let Some(caps) = TRAILING_NUMBER.captures(name) {
        if let Some(n) = caps[2].parse::<u128>().ok().and_then(|n| n.checked_add(1)) {
            return format!("{}{}", &caps[1], n);
        }
    }
    format!("{}2", name)
}

/// Propose a collision-free name for a declaration in `namespace`.
///
/// `excluding` is the declaration being named, so it never collides with
/// itself. Scaffold declarations skip the uniqueness check altogether.
pub fn propose_name(program: &Program, candidate: &str, namespace: Namespace, excluding: Option<DeclId>) -> String {
    let mut name = trim_name(candidate).to_string();
    if excluding.is_some_and(|id| program.is_scaffold(id)) {
        return name;
    }
    let taken: Vec<String> = program
        .placed(namespace)
        .into_iter()
        .filter(|(id, _)| Some(*id) != excluding)
        .map(|(_, n)| normalize(n))
        .collect();
    let mut steps = 0;
    while taken.contains(&normalize(&name)) {
        name = bump(&name);
        steps += 1;
        if steps >= REGISTRY_MAX_RENAME_STEPS {
            log::warn!("gave up looking for a free {} name after {} steps: '{}'", namespace, steps, name);
            break;
        }
    }
    if !names_equal(&name, candidate) {
        log::debug!("{} name '{}' taken, proposing '{}'", namespace, trim_name(candidate), name);
    }
    name
}

/// Rename the declaration currently called `old` in `namespace`.
///
/// Returns the accepted name, which may differ from `new` when it collides.
pub fn rename(program: &mut Program, namespace: Namespace, old: &str, new: &str) -> RegistryResult<String> {
    let id = program.find(namespace, old).ok_or_else(|| RegistryError::UnknownDeclaration {
        namespace,
        name: trim_name(old).to_string(),
    })?;
    rename_decl(program, id, new)
}

/// Rename a declaration by id and rewrite every reference to its old name.
///
/// Renaming a scaffold changes its name alone; placed references are left as they are.
pub fn rename_decl(program: &mut Program, id: DeclId, new: &str) -> RegistryResult<String> {
    let namespace = id.namespace();
    let old = program.name_of(id).ok_or(RegistryError::StaleId(id))?.to_string();
    let accepted = propose_name(program, new, namespace, Some(id));

    match id {
        DeclId::Class(c) => {
            if let Some(class) = program.class_mut(c) {
                class.name = accepted.clone();
            }
        }
        DeclId::Interface(i) => {
            if let Some(interface) = program.interface_mut(i) {
                interface.name = accepted.clone();
            }
        }
    }

    // Scaffold renames touch only the scaffold
    if program.is_scaffold(id) {
        log::debug!("renamed scaffold {} '{}' to '{}'", namespace, old, accepted);
        return Ok(accepted);
    }

    let mut rewriter = ReferenceRewriter { namespace, old: normalize(&old), new: &accepted, rewritten: 0 };
    rewriter.visit_program_mut(program);
    log::debug!(
        "renamed {} '{}' to '{}' ({} references rewritten)",
        namespace,
        old,
        accepted,
        rewriter.rewritten
    );
    Ok(accepted)
}

/// Rewrites references in one namespace from a normalized old name to a new one
struct ReferenceRewriter<'a> {
    namespace: Namespace,
    old: String,
    new: &'a str,
    rewritten: usize,
}

impl ReferenceRewriter<'_> {
    fn rewrite(&mut self, name: &mut String) {
        if normalize(name) == self.old {
            *name = self.new.to_string();
            self.rewritten += 1;
        }
    }
}

impl DeclVisitorMut for ReferenceRewriter<'_> {
    fn visit_superclass_mut(&mut self, name: &mut String) {
        if self.namespace == Namespace::Class {
            self.rewrite(name);
        }
    }

    fn visit_interface_name_mut(&mut self, name: &mut String) {
        if self.namespace == Namespace::Interface {
            self.rewrite(name);
        }
    }

    fn visit_type_ref_mut(&mut self, type_ref: &mut TypeRef) {
        match (self.namespace, type_ref) {
            (Namespace::Class, TypeRef::Class(name)) | (Namespace::Interface, TypeRef::Interface(name)) => {
                self.rewrite(name)
            }
            _ => {}
        }
    }
}
