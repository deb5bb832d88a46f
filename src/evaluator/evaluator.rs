use std::io::Write;

use tracing::debug;

use crate::{
    ast::{
        ast::{Exp, ExpSeq, Ident, Stmt, StmtSeq},
        visitor::Visitor,
    },
    environment::Environment,
    errors::errors::InterpreterError,
};

use super::value::{ListValue, Value};

/// Runs a program, writing what `print` produces to `out`.
///
/// Integer arithmetic wraps on overflow, and `&&` does not evaluate its right
/// operand when the left one is false.
pub struct Evaluator<W> {
    env: Environment<Value>,
    out: W,
}

impl<W: Write> Evaluator<W> {
    pub fn new(out: W) -> Self {
        Evaluator {
            env: Environment::new(),
            out,
        }
    }

    pub fn fetch_variable(&self, name: &str) -> Option<&Value> {
        self.env.lookup(name)
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn eval_int(&mut self, exp: &Exp) -> Result<i64, InterpreterError> {
        Ok(exp.accept(self)?.as_int()?)
    }

    fn eval_bool(&mut self, exp: &Exp) -> Result<bool, InterpreterError> {
        Ok(exp.accept(self)?.as_bool()?)
    }

    fn undeclared(ident: &Ident) -> InterpreterError {
        InterpreterError::UndeclaredVariable {
            name: ident.name.clone(),
            position: ident.position,
        }
    }
}

impl<W: Write> Visitor for Evaluator<W> {
    type Output = Value;
    type Error = InterpreterError;

    fn visit_prog(&mut self, stmts: &StmtSeq) -> Result<(), Self::Error> {
        stmts.accept(self)?;
        self.out.flush()?;
        Ok(())
    }

    fn visit_single_stmt(&mut self, stmt: &Stmt) -> Result<(), Self::Error> {
        stmt.accept(self)
    }

    fn visit_more_stmt(&mut self, first: &Stmt, rest: &StmtSeq) -> Result<(), Self::Error> {
        first.accept(self)?;
        rest.accept(self)
    }

    fn visit_assign_stmt(&mut self, ident: &Ident, exp: &Exp) -> Result<(), Self::Error> {
        let value = exp.accept(self)?;
        self.env
            .update(&ident.name, value)
            .ok_or_else(|| Evaluator::<W>::undeclared(ident))?;
        Ok(())
    }

    fn visit_var_stmt(&mut self, ident: &Ident, exp: &Exp) -> Result<(), Self::Error> {
        let value = exp.accept(self)?;
        debug!("{} = {}", ident.name, value);

        if !self.env.declare(&ident.name, value) {
            return Err(InterpreterError::AlreadyDeclared {
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
        let iterable = exp.accept(self)?;

        for item in iterable.as_list()? {
            self.env.enter_scope();
            self.env.declare(&ident.name, item.clone());
            let result = block.accept(self);
            self.env.exit_scope();
            result?;
        }

        Ok(())
    }

    fn visit_print_stmt(&mut self, exp: &Exp) -> Result<(), Self::Error> {
        let value = exp.accept(self)?;
        writeln!(self.out, "{}", value)?;
        Ok(())
    }

    fn visit_single_exp(&mut self, exp: &Exp) -> Result<Value, Self::Error> {
        Ok(Value::List(ListValue::new(vec![exp.accept(self)?])))
    }

    fn visit_more_exp(&mut self, first: &Exp, rest: &ExpSeq) -> Result<Value, Self::Error> {
        let head = first.accept(self)?;
        let tail = rest.accept(self)?;
        Ok(Value::List(tail.as_list()?.prepend(head)))
    }

    fn visit_add(&mut self, left: &Exp, right: &Exp) -> Result<Value, Self::Error> {
        let left = self.eval_int(left)?;
        Ok(Value::Int(left.wrapping_add(self.eval_int(right)?)))
    }

    fn visit_mul(&mut self, left: &Exp, right: &Exp) -> Result<Value, Self::Error> {
        let left = self.eval_int(left)?;
        Ok(Value::Int(left.wrapping_mul(self.eval_int(right)?)))
    }

    fn visit_and(&mut self, left: &Exp, right: &Exp) -> Result<Value, Self::Error> {
        if !self.eval_bool(left)? {
            return Ok(Value::Bool(false));
        }
        Ok(Value::Bool(self.eval_bool(right)?))
    }

    fn visit_eq(&mut self, left: &Exp, right: &Exp) -> Result<Value, Self::Error> {
        let left = left.accept(self)?;
        Ok(Value::Bool(left == right.accept(self)?))
    }

    fn visit_prefix(&mut self, left: &Exp, right: &Exp) -> Result<Value, Self::Error> {
        let head = left.accept(self)?;
        let tail = right.accept(self)?;
        Ok(Value::List(tail.as_list()?.prepend(head)))
    }

    fn visit_sign(&mut self, exp: &Exp) -> Result<Value, Self::Error> {
        Ok(Value::Int(self.eval_int(exp)?.wrapping_neg()))
    }

    fn visit_not(&mut self, exp: &Exp) -> Result<Value, Self::Error> {
        Ok(Value::Bool(!self.eval_bool(exp)?))
    }

    fn visit_int_literal(&mut self, value: i64) -> Result<Value, Self::Error> {
        Ok(Value::Int(value))
    }

    fn visit_bool_literal(&mut self, value: bool) -> Result<Value, Self::Error> {
        Ok(Value::Bool(value))
    }

    fn visit_list_literal(&mut self, exps: &ExpSeq) -> Result<Value, Self::Error> {
        exps.accept(self)
    }

    fn visit_ident(&mut self, ident: &Ident) -> Result<Value, Self::Error> {
        self.env
            .lookup(&ident.name)
            .cloned()
            .ok_or_else(|| Evaluator::<W>::undeclared(ident))
    }
}
