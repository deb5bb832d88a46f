use crate::Position;

/// A variable occurrence, kept with where it appears for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub position: Position,
}

impl Ident {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Ident {
            name: name.into(),
            position,
        }
    }
}

/// Expression shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Exp {
    Add(Box<Exp>, Box<Exp>),
    Mul(Box<Exp>, Box<Exp>),
    And(Box<Exp>, Box<Exp>),
    Eq(Box<Exp>, Box<Exp>),
    /// `head :: tail`
    Prefix(Box<Exp>, Box<Exp>),
    /// Unary minus.
    Sign(Box<Exp>),
    Not(Box<Exp>),
    IntLiteral(i64),
    BoolLiteral(bool),
    ListLiteral(ExpSeq),
    Ident(Ident),
}

/// A non-empty, comma separated list of expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpSeq {
    Single(Box<Exp>),
    More(Box<Exp>, Box<ExpSeq>),
}

/// Statement shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(Ident, Exp),
    Var(Ident, Exp),
    ForEach(Ident, Exp, StmtSeq),
    Print(Exp),
}

/// A non-empty, semicolon separated list of statements.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtSeq {
    Single(Box<Stmt>),
    More(Box<Stmt>, Box<StmtSeq>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prog(pub StmtSeq);

impl Exp {
    pub fn binary(make: fn(Box<Exp>, Box<Exp>) -> Exp, left: Exp, right: Exp) -> Exp {
        make(Box::new(left), Box::new(right))
    }
}

impl ExpSeq {
    /// Builds a sequence from its items, in order. Returns `None` when empty.
    pub fn from_items(items: Vec<Exp>) -> Option<ExpSeq> {
        let mut items = items.into_iter().rev();
        let mut seq = ExpSeq::Single(Box::new(items.next()?));
        for exp in items {
            seq = ExpSeq::More(Box::new(exp), Box::new(seq));
        }
        Some(seq)
    }
}

impl StmtSeq {
    /// Builds a sequence from its items, in order. Returns `None` when empty.
    pub fn from_items(items: Vec<Stmt>) -> Option<StmtSeq> {
        let mut items = items.into_iter().rev();
        let mut seq = StmtSeq::Single(Box::new(items.next()?));
        for stmt in items {
            seq = StmtSeq::More(Box::new(stmt), Box::new(seq));
        }
        Some(seq)
    }
}
