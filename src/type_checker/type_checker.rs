use tracing::debug;

use crate::{
    ast::{
        ast::{Exp, ExpSeq, Ident, Prog, Stmt, StmtSeq},
        visitor::Visitor,
    },
    environment::Environment,
    errors::errors::TypecheckerError,
};

use super::types::Type;

/// Infers a `Type` for every expression and checks each statement against
/// the types of the variables in scope.
#[derive(Debug, Default)]
pub struct TypeChecker {
    env: Environment<Type>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            env: Environment::new(),
        }
    }

    /// The declared type of a variable visible in the current scope.
    pub fn fetch_variable_type(&self, name: &str) -> Option<&Type> {
        self.env.lookup(name)
    }

    fn check_exp(&mut self, expected: &Type, exp: &Exp) -> Result<Type, TypecheckerError> {
        let found = exp.accept(self)?;
        expected.check_equal(&found)
    }

    fn check_binary(
        &mut self,
        operand: Type,
        result: Type,
        left: &Exp,
        right: &Exp,
    ) -> Result<Type, TypecheckerError> {
        self.check_exp(&operand, left)?;
        self.check_exp(&operand, right)?;
        Ok(result)
    }

    fn undeclared(ident: &Ident) -> TypecheckerError {
        TypecheckerError::UndeclaredVariable {
            name: ident.name.clone(),
            position: ident.position,
        }
    }
}

impl Visitor for TypeChecker {
    type Output = Type;
    type Error = TypecheckerError;

    fn visit_prog(&mut self, stmts: &StmtSeq) -> Result<(), Self::Error> {
        stmts.accept(self)
    }

    fn visit_single_stmt(&mut self, stmt: &Stmt) -> Result<(), Self::Error> {
        stmt.accept(self)
    }

    fn visit_more_stmt(&mut self, first: &Stmt, rest: &StmtSeq) -> Result<(), Self::Error> {
        first.accept(self)?;
        rest.accept(self)
    }

    fn visit_assign_stmt(&mut self, ident: &Ident, exp: &Exp) -> Result<(), Self::Error> {
        let found = exp.accept(self)?;
        let declared = self
            .env
            .lookup(&ident.name)
            .ok_or_else(|| TypeChecker::undeclared(ident))?;
        declared.check_equal(&found)?;
        Ok(())
    }

    fn visit_var_stmt(&mut self, ident: &Ident, exp: &Exp) -> Result<(), Self::Error> {
        let ty = exp.accept(self)?;
        debug!("declaring {}: {}", ident.name, ty);

        if !self.env.declare(&ident.name, ty) {
            return Err(TypecheckerError::AlreadyDeclared {
                name: ident.name.clone(),
                position: ident.position,
            });
        }
        Ok(())
    }

    fn visit_for_each_stmt(
        &mut self,
        ident: &Ident,
        exp: &Exp,
        block: &StmtSeq,
    ) -> Result<(), Self::Error> {
        let elem = exp.accept(self)?.get_list_elem_type()?.clone();

        self.env.enter_scope();
        self.env.declare(&ident.name, elem);
        let result = block.accept(self);
        self.env.exit_scope();

        result
    }

    fn visit_print_stmt(&mut self, exp: &Exp) -> Result<(), Self::Error> {
        exp.accept(self)?;
        Ok(())
    }

    fn visit_single_exp(&mut self, exp: &Exp) -> Result<Type, Self::Error> {
        Ok(Type::list_of(exp.accept(self)?))
    }

    fn visit_more_exp(&mut self, first: &Exp, rest: &ExpSeq) -> Result<Type, Self::Error> {
        let elem = first.accept(self)?;
        let list = rest.accept(self)?;
        elem.check_equal(list.get_list_elem_type()?)?;
        Ok(list)
    }

    fn visit_add(&mut self, left: &Exp, right: &Exp) -> Result<Type, Self::Error> {
        self.check_binary(Type::Int, Type::Int, left, right)
    }

    fn visit_mul(&mut self, left: &Exp, right: &Exp) -> Result<Type, Self::Error> {
        self.check_binary(Type::Int, Type::Int, left, right)
    }

    fn visit_and(&mut self, left: &Exp, right: &Exp) -> Result<Type, Self::Error> {
        self.check_binary(Type::Bool, Type::Bool, left, right)
    }

    fn visit_eq(&mut self, left: &Exp, right: &Exp) -> Result<Type, Self::Error> {
        let expected = left.accept(self)?;
        self.check_exp(&expected, right)?;
        Ok(Type::Bool)
    }

    fn visit_prefix(&mut self, left: &Exp, right: &Exp) -> Result<Type, Self::Error> {
        let elem = left.accept(self)?;
        let list = right.accept(self)?;
        list.get_list_elem_type()?.check_equal(&elem)?;
        Ok(list)
    }

    fn visit_sign(&mut self, exp: &Exp) -> Result<Type, Self::Error> {
        self.check_exp(&Type::Int, exp)
    }

    fn visit_not(&mut self, exp: &Exp) -> Result<Type, Self::Error> {
        self.check_exp(&Type::Bool, exp)
    }

    fn visit_int_literal(&mut self, _value: i64) -> Result<Type, Self::Error> {
        Ok(Type::Int)
    }

    fn visit_bool_literal(&mut self, _value: bool) -> Result<Type, Self::Error> {
        Ok(Type::Bool)
    }

    fn visit_list_literal(&mut self, exps: &ExpSeq) -> Result<Type, Self::Error> {
        exps.accept(self)
    }

    fn visit_ident(&mut self, ident: &Ident) -> Result<Type, Self::Error> {
        self.env
            .lookup(&ident.name)
            .cloned()
            .ok_or_else(|| TypeChecker::undeclared(ident))
    }
}

/// Type checks a whole program in a fresh global scope.
pub fn type_check(prog: &Prog) -> Result<TypeChecker, TypecheckerError> {
    let mut type_checker = TypeChecker::new();
    prog.accept(&mut type_checker)?;
    Ok(type_checker)
}
