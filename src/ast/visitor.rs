//! Double dispatch over the AST.
//!
//! Every node shape has exactly one `visit_*` method, and `accept` is an
//! exhaustive `match`, so a new shape cannot be added without every traversal
//! handling it. The type checker and the evaluator are both visitors; they
//! differ only in their `Output` (`Type` or `Value`) and `Error`.
//!
//! Traversal order is fixed by each implementation, but the ones in this crate
//! all visit operands left to right and the first statement of a sequence
//! before the rest.

use super::ast::{Exp, ExpSeq, Ident, Prog, Stmt, StmtSeq};

pub trait Visitor {
    /// What an expression produces.
    type Output;
    type Error;

    fn visit_prog(&mut self, stmts: &StmtSeq) -> Result<(), Self::Error>;

    fn visit_single_stmt(&mut self, stmt: &Stmt) -> Result<(), Self::Error>;
    fn visit_more_stmt(&mut self, first: &Stmt, rest: &StmtSeq) -> Result<(), Self::Error>;

    fn visit_assign_stmt(&mut self, ident: &Ident, exp: &Exp) -> Result<(), Self::Error>;
    fn visit_var_stmt(&mut self, ident: &Ident, exp: &Exp) -> Result<(), Self::Error>;
    fn visit_for_each_stmt(
        &mut self,
        ident: &Ident,
        exp: &Exp,
        block: &StmtSeq,
    ) -> Result<(), Self::Error>;
    fn visit_print_stmt(&mut self, exp: &Exp) -> Result<(), Self::Error>;

    fn visit_single_exp(&mut self, exp: &Exp) -> Result<Self::Output, Self::Error>;
    fn visit_more_exp(&mut self, first: &Exp, rest: &ExpSeq) -> Result<Self::Output, Self::Error>;

    fn visit_add(&mut self, left: &Exp, right: &Exp) -> Result<Self::Output, Self::Error>;
    fn visit_mul(&mut self, left: &Exp, right: &Exp) -> Result<Self::Output, Self::Error>;
    fn visit_and(&mut self, left: &Exp, right: &Exp) -> Result<Self::Output, Self::Error>;
    fn visit_eq(&mut self, left: &Exp, right: &Exp) -> Result<Self::Output, Self::Error>;
    fn visit_prefix(&mut self, left: &Exp, right: &Exp) -> Result<Self::Output, Self::Error>;
    fn visit_sign(&mut self, exp: &Exp) -> Result<Self::Output, Self::Error>;
    fn visit_not(&mut self, exp: &Exp) -> Result<Self::Output, Self::Error>;

    fn visit_int_literal(&mut self, value: i64) -> Result<Self::Output, Self::Error>;
    fn visit_bool_literal(&mut self, value: bool) -> Result<Self::Output, Self::Error>;
    fn visit_list_literal(&mut self, exps: &ExpSeq) -> Result<Self::Output, Self::Error>;
    fn visit_ident(&mut self, ident: &Ident) -> Result<Self::Output, Self::Error>;
}

impl Prog {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_prog(&self.0)
    }
}

impl StmtSeq {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self {
            StmtSeq::Single(stmt) => visitor.visit_single_stmt(stmt),
            StmtSeq::More(first, rest) => visitor.visit_more_stmt(first, rest),
        }
    }
}

impl Stmt {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self {
            Stmt::Assign(ident, exp) => visitor.visit_assign_stmt(ident, exp),
            Stmt::Var(ident, exp) => visitor.visit_var_stmt(ident, exp),
            Stmt::ForEach(ident, exp, block) => visitor.visit_for_each_stmt(ident, exp, block),
            Stmt::Print(exp) => visitor.visit_print_stmt(exp),
        }
    }
}

impl ExpSeq {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            ExpSeq::Single(exp) => visitor.visit_single_exp(exp),
            ExpSeq::More(first, rest) => visitor.visit_more_exp(first, rest),
        }
    }
}

impl Exp {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            Exp::Add(left, right) => visitor.visit_add(left, right),
            Exp::Mul(left, right) => visitor.visit_mul(left, right),
            Exp::And(left, right) => visitor.visit_and(left, right),
            Exp::Eq(left, right) => visitor.visit_eq(left, right),
            Exp::Prefix(left, right) => visitor.visit_prefix(left, right),
            Exp::Sign(exp) => visitor.visit_sign(exp),
            Exp::Not(exp) => visitor.visit_not(exp),
            Exp::IntLiteral(value) => visitor.visit_int_literal(*value),
            Exp::BoolLiteral(value) => visitor.visit_bool_literal(*value),
            Exp::ListLiteral(exps) => visitor.visit_list_literal(exps),
            Exp::Ident(ident) => visitor.visit_ident(ident),
        }
    }
}
