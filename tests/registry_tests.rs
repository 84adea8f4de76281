mod common;

use common::{init_logging, referenced_names, scaffold_class, scaffold_interface};
use oopgen::model::*;
use oopgen::registry::{propose_name, rename, rename_decl, RegistryError};

#[test]
fn free_name_is_returned_trimmed() {
    init_logging();
    let mut program = Program::new();
    program.add_class(ClassDecl::new("Circle"));
    assert_eq!(propose_name(&program, "  Square ", Namespace::Class, None), "Square");
}

#[test]
fn taken_name_gets_a_two_appended() {
    let mut program = Program::new();
    program.add_class(ClassDecl::new("Shape"));
    assert_eq!(propose_name(&program, "Shape", Namespace::Class, None), "Shape2");
    assert_eq!(propose_name(&program, "SHAPE", Namespace::Class, None), "SHAPE2");
}

#[test]
fn trailing_number_keeps_counting_until_free() {
    let mut program = Program::new();
    for name in ["Node9", "Node10", "Node11"] {
        program.add_class(ClassDecl::new(name));
    }
    assert_eq!(propose_name(&program, "Node9", Namespace::Class, None), "Node12");
}

#[test]
fn namespaces_do_not_collide_with_each_other() {
    let mut program = Program::new();
    program.add_class(ClassDecl::new("Shape"));
    assert_eq!(propose_name(&program, "Shape", Namespace::Interface, None), "Shape");
}

#[test]
fn scaffolds_neither_block_nor_get_blocked() {
    let mut program = Program::new();
    program.add_class(ClassDecl::new("Shape"));
    let scaffold = program.add_class(scaffold_class("Shape"));
    assert_eq!(propose_name(&program, "Shape", Namespace::Class, Some(scaffold.into())), "Shape");

    let mut program = Program::new();
    program.add_interface(scaffold_interface("Drawable"));
    assert_eq!(propose_name(&program, "Drawable", Namespace::Interface, None), "Drawable");
}

#[test]
fn declaration_does_not_collide_with_itself() {
    let mut program = Program::new();
    let id = program.add_class(ClassDecl::new("Shape"));
    assert_eq!(propose_name(&program, "shape", Namespace::Class, Some(id.into())), "shape");
}

#[test]
fn rename_rewrites_every_class_reference() {
    init_logging();
    let mut program = Program::new();
    program.add_class(ClassDecl::new("Point").with_method(MethodDecl::new("copy").returning(TypeRef::class("Point"))));
    program.add_class(
        ClassDecl::new("Circle")
            .extends("point ")
            .with_field(FieldDecl::new("center", Visibility::Private, TypeRef::class("POINT")))
            .with_constructor(ConstructorDecl::new(vec![ParameterDecl::new("c", TypeRef::class("Point"))])),
    );
    program.add_interface(
        InterfaceDecl::new("Movable")
            .with_constant(ConstantDecl::new("ORIGIN", TypeRef::class("Point"), "null"))
            .with_method(MethodDecl::new("moveTo").with_parameter(ParameterDecl::new("p", TypeRef::class("Point")))),
    );
    program.fragments.push(Fragment::Field(FieldDecl::new("loose", Visibility::Public, TypeRef::class("Point"))));

    let accepted = rename(&mut program, Namespace::Class, "Point", "Vector").unwrap();
    assert_eq!(accepted, "Vector");
    assert_eq!(program.classes[0].name, "Vector");

    let references = referenced_names(&program, Namespace::Class);
    assert_eq!(references.len(), 7);
    assert!(references.iter().all(|r| r == "Vector"), "{:?}", references);
}

#[test]
fn rename_leaves_the_other_namespace_alone() {
    let mut program = Program::new();
    program.add_class(ClassDecl::new("Shape"));
    program.add_interface(InterfaceDecl::new("Shape"));
    program.add_class(ClassDecl::new("Square").extends("Shape").implements("Shape"));

    rename(&mut program, Namespace::Interface, "Shape", "Polygon").unwrap();
    assert_eq!(program.classes[0].name, "Shape");
    assert_eq!(program.classes[1].superclass.as_deref(), Some("Shape"));
    assert_eq!(program.classes[1].interfaces, vec!["Polygon"]);
}

#[test]
fn rename_follows_interface_extends() {
    let mut program = Program::new();
    program.add_interface(InterfaceDecl::new("Drawable"));
    program.add_interface(InterfaceDecl::new("Shape").extends("Drawable"));
    program.add_class(
        ClassDecl::new("Canvas")
            .with_method(MethodDecl::new("draw").with_parameter(ParameterDecl::new("d", TypeRef::interface("drawable")))),
    );

    rename(&mut program, Namespace::Interface, "Drawable", "Paintable").unwrap();
    let references = referenced_names(&program, Namespace::Interface);
    assert_eq!(references, vec!["Paintable", "Paintable"]);
}

#[test]
fn rename_onto_a_taken_name_is_adjusted() {
    let mut program = Program::new();
    program.add_class(ClassDecl::new("Circle"));
    program.add_class(ClassDecl::new("Ellipse"));
    program.add_class(ClassDecl::new("Ring").extends("Circle"));

    let accepted = rename(&mut program, Namespace::Class, "Circle", "Ellipse").unwrap();
    assert_eq!(accepted, "Ellipse2");
    assert_eq!(program.classes[2].superclass.as_deref(), Some("Ellipse2"));
}

#[test]
fn rename_unknown_declaration_fails() {
    let mut program = Program::new();
    let err = rename(&mut program, Namespace::Class, "Ghost", "Spirit").unwrap_err();
    assert_eq!(err, RegistryError::UnknownDeclaration { namespace: Namespace::Class, name: "Ghost".into() });
}

#[test]
fn rename_decl_by_id_matches_rename_by_name() {
    let mut program = Program::new();
    let id = program.add_interface(InterfaceDecl::new("Sized"));
    program.add_class(ClassDecl::new("Box").implements("Sized"));

    let accepted = rename_decl(&mut program, id.into(), "Measured").unwrap();
    assert_eq!(accepted, "Measured");
    assert_eq!(program.classes[0].interfaces, vec!["Measured"]);
}

#[test]
fn renaming_a_scaffold_leaves_placed_references_alone() {
    let mut program = Program::new();
    program.add_class(ClassDecl::new("Shape"));
    let scaffold = program.add_class(scaffold_class("Shape"));
    program.add_class(
        ClassDecl::new("Square")
            .extends("Shape")
            .with_field(FieldDecl::new("twin", Visibility::Private, TypeRef::class("Shape"))),
    );

    let accepted = rename_decl(&mut program, scaffold.into(), "Polygon").unwrap();
    assert_eq!(accepted, "Polygon");
    assert_eq!(program.classes[1].name, "Polygon");
    assert_eq!(program.classes[0].name, "Shape");
    assert_eq!(program.classes[2].superclass.as_deref(), Some("Shape"));
    assert_eq!(referenced_names(&program, Namespace::Class), vec!["Shape", "Shape"]);
}

#[test]
fn scaffold_names_are_not_renamable_by_name() {
    let mut program = Program::new();
    program.add_interface(scaffold_interface("Drawable"));
    let err = rename(&mut program, Namespace::Interface, "Drawable", "Paintable").unwrap_err();
    assert!(matches!(err, RegistryError::UnknownDeclaration { .. }));
    assert_eq!(program.interfaces[0].name, "Drawable");
}
