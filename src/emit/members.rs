use super::{finish, Emitter, MemberContext};
use crate::model::*;

/// Keyword plus separating space, or nothing for package-private
fn visibility_prefix(visibility: Visibility) -> String {
    match visibility.keyword() {
        "" => String::new(),
        keyword => format!("{} ", keyword),
    }
}

impl Emitter<'_> {
    pub(super) fn type_token(&mut self, type_ref: &TypeRef) -> String {
        match type_ref {
            TypeRef::Primitive(kind) => kind.keyword().to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Class(name) => self.ctx.class_name(name),
            TypeRef::Interface(name) => self.ctx.interface_name(name),
        }
    }

    /// `<type> <name>` pairs; parameters missing a name or type are left out
    pub fn emit_parameters(&mut self, parameters: &[ParameterDecl]) -> String {
        let mut rendered = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            if let (Some(t), false) = (&parameter.type_ref, parameter.name.is_empty()) {
                rendered.push(format!("{} {}", self.type_token(t), parameter.name));
            }
        }
        rendered.join(", ")
    }

    pub(super) fn field_lines(&mut self, field: &FieldDecl) -> Vec<String> {
        let Some(type_ref) = field.type_ref.as_ref().filter(|_| field.is_complete()) else {
            return Vec::new();
        };
        let mut lines = self.doc_lines(field.doc.as_deref());
        let ty = self.type_token(type_ref);
        lines.push(format!("{}{} {};", visibility_prefix(field.visibility), ty, field.name));
        lines
    }

    pub(super) fn constructor_lines(&mut self, class_name: &str, constructor: &ConstructorDecl) -> Vec<String> {
        let visibility = match constructor.visibility {
            None | Some(Visibility::PackagePrivate) => Visibility::Public,
            Some(v) => v,
        };
        let mut lines = self.doc_lines(constructor.doc.as_deref());
        let params = self.emit_parameters(&constructor.parameters);
        lines.push(format!("{}{}({}) {{", visibility_prefix(visibility), class_name, params));
        lines.push(format!("{}{}", self.config.indent_str(1), self.config.placeholder));
        lines.push("}".to_string());
        lines
    }

    pub(super) fn method_lines(&mut self, method: &MethodDecl, context: MemberContext) -> Vec<String> {
        if method.name.is_empty() {
            return Vec::new();
        }
        let mut lines = self.doc_lines(method.doc.as_deref());
        let ret = match &method.return_type {
            Some(t) => self.type_token(t),
            None => "void".to_string(),
        };
        let params = self.emit_parameters(&method.parameters);
        let signature = format!("{}{} {}({})", visibility_prefix(method.visibility), ret, method.name, params);
        match context {
            MemberContext::Class => {
                lines.push(format!("{} {{", signature));
                lines.push(format!("{}{}", self.config.indent_str(1), self.config.placeholder));
                lines.push("}".to_string());
            }
            MemberContext::Interface => lines.push(format!("{};", signature)),
        }
        lines
    }

    pub(super) fn constant_lines(&mut self, constant: &ConstantDecl) -> Vec<String> {
        let Some(type_ref) = constant.type_ref.as_ref().filter(|_| constant.is_complete()) else {
            return Vec::new();
        };
        let mut lines = self.doc_lines(constant.doc.as_deref());
        let ty = self.type_token(type_ref);
        lines.push(format!("{} {} = {};", ty, constant.name, constant.value));
        lines
    }

    /// A field on its own; empty when the name or type is missing
    pub fn emit_field(&mut self, field: &FieldDecl) -> String {
        let lines = self.field_lines(field);
        finish(lines)
    }

    /// A constructor named after the class that owns it
    pub fn emit_constructor(&mut self, class_name: &str, constructor: &ConstructorDecl) -> String {
        let class_name = self.ctx.class_name(class_name);
        let lines = self.constructor_lines(&class_name, constructor);
        finish(lines)
    }

    pub fn emit_method(&mut self, method: &MethodDecl, context: MemberContext) -> String {
        let lines = self.method_lines(method, context);
        finish(lines)
    }

    /// A constant on its own; empty unless name, type and value are all set
    pub fn emit_constant(&mut self, constant: &ConstantDecl) -> String {
        let lines = self.constant_lines(constant);
        finish(lines)
    }
}
