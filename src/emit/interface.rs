use super::{finish, Emitter, MemberContext};
use crate::model::InterfaceDecl;
use crate::review::resolve_extends;

impl Emitter<'_> {
    /// Emit one interface. Library interfaces produce nothing at all.
    pub fn emit_interface(&mut self, interface: &InterfaceDecl) -> String {
        if interface.is_library {
            return String::new();
        }
        if let Err(error) = resolve_extends(self.program, interface) {
            log::info!("{} not emitted: {}", interface, error);
            return error.diagnostic_lines().join("\n");
        }

        let name = self.ctx.interface_name(&interface.name);
        let mut lines = Vec::new();
        if let Some(package) = interface.package_name() {
            lines.push(format!("package {};", package));
        }
        lines.extend(self.doc_lines(interface.doc.as_deref()));

        let mut header = format!("public interface {}", name);
        let extended: Vec<String> = interface.extended().map(|i| self.ctx.interface_name(i)).collect();
        if !extended.is_empty() {
            header.push_str(" extends ");
            header.push_str(&extended.join(", "));
        }
        header.push_str(" {");
        lines.push(header);

        let constants: Vec<String> = interface.constants.iter().flat_map(|c| self.constant_lines(c)).collect();
        let mut methods = Vec::new();
        for method in &interface.methods {
            methods.extend(self.method_lines(method, MemberContext::Interface));
        }
        lines.extend(self.body_lines(vec![constants, methods]));
        lines.push("}".to_string());
        finish(lines)
    }
}
