use std::fmt::{Debug, Formatter};
use num_bigint::BigUint;
use crate::compiler::lexer::Token;

/// How many arrays and maps may enclose each other, counting constant references.
pub const MAX_NESTING_DEPTH: usize = 256;

#[derive(Clone, PartialEq)]
pub enum Expr {
    Number(BigUint),
    Array(Vec<Expr>),
    /// Entries in source order. Duplicate keys are kept here and resolved by the evaluator.
    Map(Vec<(Token, Expr)>),
    ConstRef(Token),
}

impl Debug for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "0x{:x}", value),
            Expr::Array(elements) => write!(f, "array({})", elements.iter()
                .map(|element| format!("{:?}", element))
                .collect::<Vec<String>>().join(", ")),
            Expr::Map(fields) => write!(f, "{{ {}}}", fields.iter()
                .map(|(name, field)| format!("{} = {:?}; ", name.source(), field))
                .collect::<Vec<String>>().join("")),
            Expr::ConstRef(name) => write!(f, "?[{}]", name.source()),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ConstDecl {
    pub name: Token,
    pub expr: Expr,
}

impl Debug for ConstDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "var {} = {:?}", self.name.source(), self.expr)
    }
}

#[derive(Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<ConstDecl>,
    pub root: Expr,
}

impl Debug for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for decl in &self.declarations {
            writeln!(f, "{:?}", decl)?;
        }

        write!(f, "{:?}", self.root)
    }
}
