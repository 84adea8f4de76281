use super::{ClassDecl, InterfaceDecl};

/// Socket cardinalities reported by the structural editor.
///
/// The editor shows or hides its "extends", "implements" and "package" slots
/// from these counts; they are authoritative for the optional parts of a
/// declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SocketCounts {
    /// 0 or 1 for classes; any count for interface `extends`
    pub extends: usize,
    pub interfaces: usize,
    /// 0 or 1
    pub package: usize,
}

/// Bring a class in line with the editor's socket counts.
///
/// Slots beyond a count are dropped; slots the count allows but the
/// declaration does not fill stay empty.
pub fn reconcile_class(mut class: ClassDecl, counts: SocketCounts) -> ClassDecl {
    if counts.extends == 0 {
        class.superclass = None;
    }
    class.interfaces.truncate(counts.interfaces);
    if counts.package == 0 {
        class.package = None;
    }
    class
}

/// Bring an interface in line with the editor's socket counts
pub fn reconcile_interface(mut interface: InterfaceDecl, counts: SocketCounts) -> InterfaceDecl {
    interface.extends.truncate(counts.extends);
    if counts.package == 0 {
        interface.package = None;
    }
    interface
}
