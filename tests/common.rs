// Common test utilities
#![allow(dead_code)]

use oopgen::model::*;

/// Route library logging through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `Shape` requires `area` and `perimeter`; `Named` requires `name`
pub fn shapes_program() -> Program {
    let mut program = Program::new();
    program.add_interface(
        InterfaceDecl::new("Shape")
            .with_method(MethodDecl::new("area").returning(PrimitiveKind::Double))
            .with_method(MethodDecl::new("perimeter").returning(PrimitiveKind::Double)),
    );
    program.add_interface(InterfaceDecl::new("Named").with_method(MethodDecl::new("name").returning(TypeRef::String)));
    program
}

/// A scaffold class, as held by the editor palette
pub fn scaffold_class(name: &str) -> ClassDecl {
    ClassDecl { is_scaffold: true, ..ClassDecl::new(name) }
}

/// A scaffold interface, as held by the editor palette
pub fn scaffold_interface(name: &str) -> InterfaceDecl {
    InterfaceDecl { is_scaffold: true, ..InterfaceDecl::new(name) }
}

/// Every class or interface name referenced anywhere in the program, declared names excluded
pub fn referenced_names(program: &Program, namespace: Namespace) -> Vec<String> {
    struct Collector {
        namespace: Namespace,
        names: Vec<String>,
    }

    impl DeclVisitor for Collector {
        fn visit_class_decl(&mut self, class: &ClassDecl) {
            match self.namespace {
                Namespace::Class => self.names.extend(class.superclass.clone()),
                Namespace::Interface => self.names.extend(class.interfaces.iter().cloned()),
            }
            walk_class_decl(self, class);
        }

        fn visit_interface_decl(&mut self, interface: &InterfaceDecl) {
            if self.namespace == Namespace::Interface {
                self.names.extend(interface.extends.iter().cloned());
            }
            walk_interface_decl(self, interface);
        }

        fn visit_type_ref(&mut self, type_ref: &TypeRef) {
            match (self.namespace, type_ref) {
                (Namespace::Class, TypeRef::Class(n)) | (Namespace::Interface, TypeRef::Interface(n)) => {
                    self.names.push(n.clone())
                }
                _ => {}
            }
        }
    }

    let mut collector = Collector { namespace, names: Vec::new() };
    collector.visit_program(program);
    collector.names
}
