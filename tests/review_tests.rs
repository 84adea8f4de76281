mod common;

use common::{init_logging, shapes_program};
use oopgen::model::*;
use oopgen::review::{check_class, resolve_extends, review, ConformanceError, InterfaceFailure};

fn check(program: &Program, class: &str) -> Result<(), ConformanceError> {
    let id = program.find_class(class).unwrap();
    check_class(program, program.class(id).unwrap())
}

#[test]
fn class_declaring_every_method_conforms() {
    init_logging();
    let mut program = shapes_program();
    program.add_class(
        ClassDecl::new("Square")
            .implements("Shape")
            .with_method(MethodDecl::new("area"))
            .with_method(MethodDecl::new("perimeter")),
    );
    assert_eq!(check(&program, "Square"), Ok(()));
}

#[test]
fn signatures_are_not_compared() {
    let mut program = shapes_program();
    program.add_class(
        ClassDecl::new("Square")
            .implements("Shape")
            .with_method(MethodDecl::new("area").with_parameter(ParameterDecl::new("unit", TypeRef::String)))
            .with_method(MethodDecl::new("perimeter").returning(PrimitiveKind::Int)),
    );
    assert_eq!(check(&program, "Square"), Ok(()));
}

#[test]
fn immediate_superclass_supplies_methods() {
    let mut program = shapes_program();
    program.add_class(ClassDecl::new("Base").with_method(MethodDecl::new("area")));
    program.add_class(
        ClassDecl::new("Square")
            .extends("Base")
            .implements("Shape")
            .with_method(MethodDecl::new("perimeter")),
    );
    assert_eq!(check(&program, "Square"), Ok(()));
}

#[test]
fn grandparent_methods_do_not_count() {
    let mut program = Program::new();
    program.add_interface(InterfaceDecl::new("I").with_method(MethodDecl::new("m")));
    program.add_class(ClassDecl::new("A").with_method(MethodDecl::new("m")));
    program.add_class(ClassDecl::new("B").extends("A"));
    program.add_class(ClassDecl::new("C").extends("B").implements("I"));

    let err = check(&program, "C").unwrap_err();
    assert_eq!(
        err,
        ConformanceError::MissingMethods {
            class: "C".into(),
            superclass: Some("B".into()),
            failures: vec![InterfaceFailure { interface: "I".into(), missing: vec!["m".into()] }],
        }
    );
}

#[test]
fn every_failing_interface_is_reported() {
    let mut program = shapes_program();
    program.add_class(
        ClassDecl::new("Label")
            .implements("Shape")
            .implements("Named")
            .with_method(MethodDecl::new("area")),
    );
    let err = check(&program, "Label").unwrap_err();
    assert_eq!(err.missing(), vec!["perimeter", "name"]);
    assert_eq!(
        err.diagnostic_lines(),
        vec![
            "// ERROR: Not all the methods of the implemented interfaces are defined",
            "// Missing methods: perimeter, name",
            "// Interfaces: Shape, Named",
            "// Class: Label",
        ]
    );
}

#[test]
fn interfaces_are_checked_independently() {
    let mut program = shapes_program();
    program.add_class(
        ClassDecl::new("Tag")
            .implements("Shape")
            .implements("Named")
            .with_method(MethodDecl::new("name")),
    );
    let err = check(&program, "Tag").unwrap_err();
    match err {
        ConformanceError::MissingMethods { failures, .. } => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].interface, "Shape");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn extended_interfaces_add_no_obligations() {
    let mut program = Program::new();
    program.add_interface(InterfaceDecl::new("Base").with_method(MethodDecl::new("hidden")));
    program.add_interface(InterfaceDecl::new("Child").extends("Base").with_method(MethodDecl::new("shown")));
    program.add_class(ClassDecl::new("Impl").implements("Child").with_method(MethodDecl::new("shown")));
    assert_eq!(check(&program, "Impl"), Ok(()));
}

#[test]
fn library_declarations_are_trust_boundaries() {
    let mut program = Program::new();
    program.add_interface(InterfaceDecl::library("Runnable", Some("java.lang")));
    program.add_class(ClassDecl::library("Thread", Some("java.lang")));
    program.add_interface(InterfaceDecl::new("Task").with_method(MethodDecl::new("run")));
    program.add_class(ClassDecl::new("Job").implements("Runnable"));
    program.add_class(ClassDecl::new("Worker").extends("Thread").implements("Task"));

    assert_eq!(check(&program, "Job"), Ok(()));
    assert!(check(&program, "Worker").is_err());
}

#[test]
fn unknown_references_contribute_nothing() {
    init_logging();
    let mut program = shapes_program();
    program.add_class(ClassDecl::new("Orphan").extends("Missing").implements("Ghost"));
    assert_eq!(check(&program, "Orphan"), Ok(()));
}

#[test]
fn extends_chain_resolves_depth_first() {
    let mut program = Program::new();
    program.add_interface(InterfaceDecl::new("Top").extends("Left").extends("Right"));
    program.add_interface(InterfaceDecl::new("Left").extends("Root"));
    program.add_interface(InterfaceDecl::new("Right").extends("Root"));
    program.add_interface(InterfaceDecl::new("Root"));
    let order = resolve_extends(&program, &program.interfaces[0]).unwrap();
    assert_eq!(order, vec!["Left", "Root", "Right"]);
}

#[test]
fn cyclic_extends_is_an_error() {
    let mut program = Program::new();
    program.add_interface(InterfaceDecl::new("A").extends("B"));
    program.add_interface(InterfaceDecl::new("B").extends("A"));
    let err = resolve_extends(&program, &program.interfaces[0]).unwrap_err();
    assert_eq!(err.declaration(), "A");
    assert_eq!(
        err.diagnostic_lines(),
        vec!["// ERROR: Cyclic interface inheritance", "// Cycle: A -> B -> A", "// Interface: A"]
    );
}

#[test]
fn review_collects_conformance_and_naming() {
    init_logging();
    let mut program = shapes_program();
    program.add_class(ClassDecl::new("Good").implements("Named").with_method(MethodDecl::new("name")));
    program.add_class(ClassDecl::new("Bad").implements("Named"));
    program.add_class(ClassDecl::new("my class").in_package("Geo"));
    program.add_interface(InterfaceDecl::new("X").extends("Y"));
    program.add_interface(InterfaceDecl::new("Y").extends("X"));

    let report = review(&program);
    assert!(report.has_errors());
    let failing: Vec<&str> = report.conformance.iter().map(|e| e.declaration()).collect();
    assert_eq!(failing, vec!["Bad", "X", "Y"]);
    assert_eq!(report.naming.len(), 2);

    let text = report.to_string();
    assert!(text.contains("warning: class 'my class'"), "{}", text);
    assert!(text.contains("error: class 'Bad' does not implement [name] required by [Named]"), "{}", text);
}

#[test]
fn review_skips_scaffolds_and_libraries() {
    let mut program = shapes_program();
    program.add_class(ClassDecl { is_scaffold: true, ..ClassDecl::new("Draft").implements("Shape") });
    program.add_class(ClassDecl { is_library: true, ..ClassDecl::new("Vendor").implements("Shape") });
    assert!(review(&program).is_clean());
}

#[test]
fn scaffold_declarations_do_not_resolve() {
    init_logging();
    let mut program = Program::new();
    program.add_interface(InterfaceDecl {
        is_scaffold: true,
        ..InterfaceDecl::new("Runnable").with_method(MethodDecl::new("run"))
    });
    program.add_class(ClassDecl { is_scaffold: true, ..ClassDecl::new("Base").with_method(MethodDecl::new("area")) });
    program.add_interface(InterfaceDecl::new("Shape").with_method(MethodDecl::new("area")));
    program.add_class(ClassDecl::new("Job").implements("Runnable"));
    program.add_class(ClassDecl::new("Square").extends("Base").implements("Shape"));

    assert_eq!(check(&program, "Job"), Ok(()));
    let err = check(&program, "Square").unwrap_err();
    assert_eq!(err.missing(), vec!["area"]);
}

#[test]
fn repeated_interfaces_are_reported_once() {
    let mut program = shapes_program();
    program.add_class(ClassDecl {
        interfaces: vec!["Named".into(), "named".into()],
        ..ClassDecl::new("Tag")
    });
    let err = check(&program, "Tag").unwrap_err();
    assert_eq!(err.diagnostic_lines()[2], "// Interfaces: Named");
}
