use super::{ConformanceError, InterfaceFailure, ReviewResult};
use crate::model::{ClassDecl, Program};

/// Check that a class provides every method name its interfaces require.
///
/// The class's own methods and those of its immediate superclass count;
/// anything further up the hierarchy does not. Each interface is checked on
/// its own.
pub fn check_class(program: &Program, class: &ClassDecl) -> ReviewResult<()> {
    if class.implemented().next().is_none() {
        return Ok(());
    }

    let mut inherited: Vec<&str> = class.method_names().collect();
    if let Some(superclass) = class.superclass_name() {
        inherited.extend(superclass_methods(program, &class.name, superclass));
    }

    let mut failures = Vec::new();
    for interface in class.implemented() {
        let mut missing: Vec<String> = Vec::new();
        for required in required_methods(program, &class.name, interface) {
            if !inherited.contains(&required) && !missing.iter().any(|m| m == required) {
                missing.push(required.to_string());
            }
        }
        if !missing.is_empty() {
            failures.push(InterfaceFailure { interface: interface.to_string(), missing });
        }
    }

    if failures.is_empty() {
        return Ok(());
    }
    let error = ConformanceError::MissingMethods {
        class: class.name.clone(),
        superclass: class.superclass_name().map(str::to_string),
        failures,
    };
    log::debug!("conformance failure: {}", error);
    Err(error)
}

/// Method names declared directly by the superclass. Library and unresolved
/// superclasses contribute nothing.
fn superclass_methods<'p>(program: &'p Program, class: &str, superclass: &str) -> Vec<&'p str> {
    match program.find_class(superclass).and_then(|id| program.class(id)) {
        Some(s) if s.is_library => Vec::new(),
        Some(s) => s.method_names().collect(),
        None => {
            log::warn!("class '{}' extends unknown class '{}'", class, superclass);
            Vec::new()
        }
    }
}

/// Method names an implemented interface declares itself. Extended interfaces
/// are not consulted.
fn required_methods<'p>(program: &'p Program, class: &str, interface: &str) -> Vec<&'p str> {
    match program.find_interface(interface).and_then(|id| program.interface(id)) {
        Some(i) if i.is_library => Vec::new(),
        Some(i) => i.method_names().collect(),
        None => {
            log::warn!("class '{}' implements unknown interface '{}'", class, interface);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    fn shapes() -> Program {
        let mut program = Program::new();
        program.add_interface(
            InterfaceDecl::new("Shape")
                .with_method(MethodDecl::new("area"))
                .with_method(MethodDecl::new("perimeter")),
        );
        program.add_interface(InterfaceDecl::new("Named").with_method(MethodDecl::new("name")));
        program
    }

    #[test]
    fn class_without_interfaces_conforms() {
        let program = shapes();
        assert!(check_class(&program, &ClassDecl::new("Plain").extends("Base")).is_ok());
    }

    #[test]
    fn each_interface_reports_its_own_missing_methods() {
        let program = shapes();
        let class = ClassDecl::new("Square")
            .implements("Shape")
            .implements("Named")
            .with_method(MethodDecl::new("area"));
        match check_class(&program, &class) {
            Err(ConformanceError::MissingMethods { failures, superclass, .. }) => {
                assert_eq!(superclass, None);
                assert_eq!(
                    failures,
                    vec![
                        InterfaceFailure { interface: "Shape".into(), missing: vec!["perimeter".into()] },
                        InterfaceFailure { interface: "Named".into(), missing: vec!["name".into()] },
                    ]
                );
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn library_interface_requires_nothing() {
        let mut program = shapes();
        program.add_interface(
            InterfaceDecl { is_library: true, ..InterfaceDecl::new("Runnable") }.with_method(MethodDecl::new("run")),
        );
        let class = ClassDecl::new("Task").implements("Runnable");
        assert!(check_class(&program, &class).is_ok());
    }

    #[test]
    fn library_superclass_contributes_nothing() {
        let mut program = shapes();
        program.add_class(ClassDecl { is_library: true, ..ClassDecl::new("Base") }.with_method(MethodDecl::new("name")));
        let class = ClassDecl::new("Thing").extends("Base").implements("Named");
        let err = check_class(&program, &class).unwrap_err();
        assert_eq!(err.missing(), vec!["name".to_string()]);
    }
}
