use super::{ConformanceError, ReviewResult};
use crate::model::{InterfaceDecl, Program};
use crate::registry::{names_equal, normalize};

/// Resolve the transitive `extends` set of an interface.
///
/// Names come back in depth-first declaration order, each once. Library and
/// unknown interfaces appear in the set but are not descended into. A chain
/// that leads back to an interface already on the path is reported as
/// [`ConformanceError::CyclicExtends`].
pub fn resolve_extends(program: &Program, interface: &InterfaceDecl) -> ReviewResult<Vec<String>> {
    let mut walk = ExtendsWalk { program, path: vec![interface.name.clone()], seen: Vec::new(), order: Vec::new() };
    walk.descend(interface).map_err(|cycle| {
        let error = ConformanceError::CyclicExtends { interface: interface.name.clone(), cycle };
        log::debug!("conformance failure: {}", error);
        error
    })?;
    Ok(walk.order)
}

struct ExtendsWalk<'p> {
    program: &'p Program,
    path: Vec<String>,
    seen: Vec<String>,
    order: Vec<String>,
}

impl<'p> ExtendsWalk<'p> {
    /// Returns the offending chain when a cycle is found
    fn descend(&mut self, interface: &InterfaceDecl) -> Result<(), Vec<String>> {
        for parent in interface.extended() {
            if let Some(start) = self.path.iter().position(|p| names_equal(p, parent)) {
                let mut cycle = self.path[start..].to_vec();
                cycle.push(parent.to_string());
                return Err(cycle);
            }
            let key = normalize(parent);
            if self.seen.contains(&key) {
                continue;
            }
            self.seen.push(key);
            self.order.push(parent.to_string());

            let program = self.program;
            match program.find_interface(parent).and_then(|id| program.interface(id)) {
                Some(decl) if !decl.is_library => {
                    self.path.push(parent.to_string());
                    self.descend(decl)?;
                    self.path.pop();
                }
                Some(_) => {}
                None => log::warn!("interface '{}' extends unknown interface '{}'", interface.name, parent),
            }
        }
        Ok(())
    }
}
