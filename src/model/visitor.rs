use super::*;

/// Read-only traversal over a [`Program`].
///
/// Each method defaults to the matching `walk_*` function, so an
/// implementation overrides the nodes it cares about and calls the walker to
/// keep descending.
pub trait DeclVisitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_class_decl(&mut self, class: &ClassDecl) {
        walk_class_decl(self, class);
    }

    fn visit_interface_decl(&mut self, interface: &InterfaceDecl) {
        walk_interface_decl(self, interface);
    }

    fn visit_field_decl(&mut self, field: &FieldDecl) {
        if let Some(t) = &field.type_ref {
            self.visit_type_ref(t);
        }
    }

    fn visit_constructor_decl(&mut self, constructor: &ConstructorDecl) {
        for parameter in &constructor.parameters {
            self.visit_parameter(parameter);
        }
    }

    fn visit_method_decl(&mut self, method: &MethodDecl) {
        walk_method_decl(self, method);
    }

    fn visit_parameter(&mut self, parameter: &ParameterDecl) {
        if let Some(t) = &parameter.type_ref {
            self.visit_type_ref(t);
        }
    }

    fn visit_constant_decl(&mut self, constant: &ConstantDecl) {
        if let Some(t) = &constant.type_ref {
            self.visit_type_ref(t);
        }
    }

    fn visit_fragment(&mut self, fragment: &Fragment) {
        walk_fragment(self, fragment);
    }

    fn visit_type_ref(&mut self, _type_ref: &TypeRef) {}
}

pub fn walk_program<V: DeclVisitor + ?Sized>(visitor: &mut V, program: &Program) {
    for class in &program.classes {
        visitor.visit_class_decl(class);
    }
    for interface in &program.interfaces {
        visitor.visit_interface_decl(interface);
    }
    for fragment in &program.fragments {
        visitor.visit_fragment(fragment);
    }
}

pub fn walk_fragment<V: DeclVisitor + ?Sized>(visitor: &mut V, fragment: &Fragment) {
    match fragment {
        Fragment::Field(f) => visitor.visit_field_decl(f),
        Fragment::Parameter(p) => visitor.visit_parameter(p),
        Fragment::Constructor(c) => visitor.visit_constructor_decl(c),
        Fragment::Method(m) => visitor.visit_method_decl(m),
        Fragment::Constant(c) => visitor.visit_constant_decl(c),
    }
}

pub fn walk_class_decl<V: DeclVisitor + ?Sized>(visitor: &mut V, class: &ClassDecl) {
    for field in &class.fields {
        visitor.visit_field_decl(field);
    }
    for constructor in &class.constructors {
        visitor.visit_constructor_decl(constructor);
    }
    for method in &class.methods {
        visitor.visit_method_decl(method);
    }
}

pub fn walk_interface_decl<V: DeclVisitor + ?Sized>(visitor: &mut V, interface: &InterfaceDecl) {
    for constant in &interface.constants {
        visitor.visit_constant_decl(constant);
    }
    for method in &interface.methods {
        visitor.visit_method_decl(method);
    }
}

pub fn walk_method_decl<V: DeclVisitor + ?Sized>(visitor: &mut V, method: &MethodDecl) {
    for parameter in &method.parameters {
        visitor.visit_parameter(parameter);
    }
    if let Some(t) = &method.return_type {
        visitor.visit_type_ref(t);
    }
}

/// Mutable traversal over every name reference slot in a [`Program`].
///
/// Fragments are walked too: a loose member still points at declarations and
/// must follow renames like attached ones.
pub trait DeclVisitorMut {
    fn visit_program_mut(&mut self, program: &mut Program) {
        for class in &mut program.classes {
            self.visit_class_decl_mut(class);
        }
        for interface in &mut program.interfaces {
            self.visit_interface_decl_mut(interface);
        }
        for fragment in &mut program.fragments {
            self.visit_fragment_mut(fragment);
        }
    }

    fn visit_fragment_mut(&mut self, fragment: &mut Fragment) {
        match fragment {
            Fragment::Field(f) => self.visit_field_decl_mut(f),
            Fragment::Parameter(p) => self.visit_parameter_mut(p),
            Fragment::Constructor(c) => {
                for p in &mut c.parameters {
                    self.visit_parameter_mut(p);
                }
            }
            Fragment::Method(m) => self.visit_method_decl_mut(m),
            Fragment::Constant(c) => self.visit_constant_decl_mut(c),
        }
    }

    fn visit_class_decl_mut(&mut self, class: &mut ClassDecl) {
        if let Some(superclass) = &mut class.superclass {
            self.visit_superclass_mut(superclass);
        }
        for interface in &mut class.interfaces {
            self.visit_interface_name_mut(interface);
        }
        for field in &mut class.fields {
            self.visit_field_decl_mut(field);
        }
        for constructor in &mut class.constructors {
            for parameter in &mut constructor.parameters {
                self.visit_parameter_mut(parameter);
            }
        }
        for method in &mut class.methods {
            self.visit_method_decl_mut(method);
        }
    }

    fn visit_interface_decl_mut(&mut self, interface: &mut InterfaceDecl) {
        for extended in &mut interface.extends {
            self.visit_interface_name_mut(extended);
        }
        for constant in &mut interface.constants {
            self.visit_constant_decl_mut(constant);
        }
        for method in &mut interface.methods {
            self.visit_method_decl_mut(method);
        }
    }

    fn visit_field_decl_mut(&mut self, field: &mut FieldDecl) {
        if let Some(t) = &mut field.type_ref {
            self.visit_type_ref_mut(t);
        }
    }

    fn visit_method_decl_mut(&mut self, method: &mut MethodDecl) {
        for parameter in &mut method.parameters {
            self.visit_parameter_mut(parameter);
        }
        if let Some(t) = &mut method.return_type {
            self.visit_type_ref_mut(t);
        }
    }

    fn visit_parameter_mut(&mut self, parameter: &mut ParameterDecl) {
        if let Some(t) = &mut parameter.type_ref {
            self.visit_type_ref_mut(t);
        }
    }

    fn visit_constant_decl_mut(&mut self, constant: &mut ConstantDecl) {
        if let Some(t) = &mut constant.type_ref {
            self.visit_type_ref_mut(t);
        }
    }

    /// The superclass slot of a class
    fn visit_superclass_mut(&mut self, _name: &mut String) {}

    /// An implemented or extended interface slot
    fn visit_interface_name_mut(&mut self, _name: &mut String) {}

    fn visit_type_ref_mut(&mut self, _type_ref: &mut TypeRef) {}
}
