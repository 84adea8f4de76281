use std::collections::{HashMap, HashSet};

use crate::consts::RESERVED_WORDS;
use crate::model::Program;
use crate::registry::normalize;

/// Maps declared names to safe, distinct target identifiers.
///
/// The first request for a name fixes its spelling for the rest of the pass;
/// later requests (any case, any padding) get the same answer.
#[derive(Debug, Clone)]
pub struct NameTable {
    reserved: HashSet<&'static str>,
    assigned: HashMap<String, String>,
    used: HashSet<String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self {
            reserved: RESERVED_WORDS.iter().copied().collect(),
            assigned: HashMap::new(),
            used: HashSet::new(),
        }
    }

    /// Safe name for `name`, assigned on first use
    pub fn get_name(&mut self, name: &str) -> String {
        let key = normalize(name);
        if let Some(safe) = self.assigned.get(&key) {
            return safe.clone();
        }
        let safe = self.distinct_name(name);
        self.assigned.insert(key, safe.clone());
        safe
    }

    fn distinct_name(&mut self, name: &str) -> String {
        let base = safe_name(name);
        let mut candidate = base.clone();
        let mut i = 1;
        while self.used.contains(&candidate) || self.reserved.contains(candidate.as_str()) {
            i += 1;
            candidate = format!("{}{}", base, i);
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace characters that cannot appear in an identifier
fn safe_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return "unnamed".to_string();
    }
    let mut safe: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if safe.starts_with(|c: char| c.is_ascii_digit()) {
        safe.insert_str(0, "my_");
    }
    safe
}

/// Per-pass state of one emission.
///
/// Created fresh for every pass and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct EmissionContext {
    pub classes: NameTable,
    pub interfaces: NameTable,
}

impl EmissionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose tables already hold every placed declaration's own
    /// spelling, in program order. A reference never respells a declaration.
    pub fn for_program(program: &Program) -> Self {
        let mut ctx = Self::new();
        for class in program.classes.iter().filter(|c| !c.is_scaffold) {
            ctx.class_name(&class.name);
        }
        for interface in program.interfaces.iter().filter(|i| !i.is_scaffold) {
            ctx.interface_name(&interface.name);
        }
        ctx
    }

    pub fn class_name(&mut self, name: &str) -> String {
        self.classes.get_name(name)
    }

    pub fn interface_name(&mut self, name: &str) -> String {
        self.interfaces.get_name(name)
    }
}
