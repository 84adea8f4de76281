use super::{finish, Emitter, MemberContext};
use crate::model::ClassDecl;
use crate::review::check_class;

impl Emitter<'_> {
    /// Emit one class.
    ///
    /// A library class becomes an import. A class failing its conformance
    /// review becomes the review diagnostic.
    pub fn emit_class(&mut self, class: &ClassDecl) -> String {
        if class.is_library {
            return self.library_import(class);
        }
        if let Err(error) = check_class(self.program, class) {
            log::info!("{} not emitted: {}", class, error);
            return error.diagnostic_lines().join("\n");
        }

        let name = self.ctx.class_name(&class.name);
        let mut lines = Vec::new();
        if let Some(package) = class.package_name() {
            lines.push(format!("package {};", package));
        }
        lines.extend(self.doc_lines(class.doc.as_deref()));

        let mut header = format!("public class {}", name);
        if let Some(superclass) = class.superclass_name() {
            header.push_str(" extends ");
            header.push_str(&self.ctx.class_name(superclass));
        }
        let interfaces: Vec<String> = class.implemented().map(|i| self.ctx.interface_name(i)).collect();
        if !interfaces.is_empty() {
            header.push_str(" implements ");
            header.push_str(&interfaces.join(", "));
        }
        header.push_str(" {");
        lines.push(header);

        let fields: Vec<String> = class.fields.iter().flat_map(|f| self.field_lines(f)).collect();
        let mut constructors = Vec::new();
        for constructor in &class.constructors {
            constructors.extend(self.constructor_lines(&name, constructor));
        }
        let mut methods = Vec::new();
        for method in &class.methods {
            methods.extend(self.method_lines(method, MemberContext::Class));
        }
        lines.extend(self.body_lines(vec![fields, constructors, methods]));
        lines.push("}".to_string());
        finish(lines)
    }

    /// `import <package>.<Name>;`, or an error comment when the package is missing
    fn library_import(&mut self, class: &ClassDecl) -> String {
        let name = self.ctx.class_name(&class.name);
        match class.package_name() {
            Some(package) => format!("import {}.{};", package, name),
            None => {
                log::warn!("library class '{}' has no package", class.name);
                format!("// ERROR: Cannot create library import with no package specified - {}", name)
            }
        }
    }
}
