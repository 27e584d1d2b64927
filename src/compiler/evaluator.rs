use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use indexmap::IndexMap;
use num_bigint::BigUint;
use crate::compiler::ast::{ConstDecl, Expr, Program, MAX_NESTING_DEPTH};
use crate::compiler::lexer::{Token, TokenPos};
#[allow(unused)]
use crate::println_debug;


/// A fully evaluated value, ready to be written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Integer(BigUint),
    Array(Vec<Value>),
    Table(IndexMap<String, Value>),
}

impl Value {
    /// Number of arrays and tables enclosing the innermost integer.
    pub fn depth(&self) -> usize {
        match self {
            Value::Integer(_) => 0,
            Value::Array(elements) => 1 + elements.iter().map(Value::depth).max().unwrap_or(0),
            Value::Table(fields) => 1 + fields.values().map(Value::depth).max().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    DuplicateConstant {
        pos: TokenPos,
        name: String,
    },
    UnknownConstant {
        pos: TokenPos,
        name: String,
    },
    TooDeep {
        pos: TokenPos,
        name: String,
        limit: usize,
    },
}

impl EvalError {
    pub fn get_pos(&self) -> TokenPos {
        match self {
            EvalError::DuplicateConstant { pos, .. } => *pos,
            EvalError::UnknownConstant { pos, .. } => *pos,
            EvalError::TooDeep { pos, .. } => *pos,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EvalError::DuplicateConstant { name, .. } => name,
            EvalError::UnknownConstant { name, .. } => name,
            EvalError::TooDeep { name, .. } => name,
        }
    }
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::DuplicateConstant { pos, name } => write!(f, "{} Constant '{}' is already declared", pos, name),
            EvalError::UnknownConstant { pos, name } => write!(f, "{} Unknown constant '?[{}]'", pos, name),
            EvalError::TooDeep { pos, name, limit } => write!(f, "{} Inserting constant '{}' here nests values deeper than {} levels", pos, name, limit),
        }
    }
}

impl std::error::Error for EvalError {}

type EvalResult<T> = Result<T, EvalError>;

/// Resolves constants in declaration order, then evaluates the root value.
///
/// A reference only sees constants declared before it, so forward and self
/// references fail as unknown constants.
pub struct Evaluator {
    constants: IndexMap<String, Value>,
    depths: HashMap<String, usize>,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator {
            constants: IndexMap::new(),
            depths: HashMap::new(),
        }
    }

    pub fn evaluate_program(&mut self, program: &Program) -> EvalResult<Value> {
        for decl in &program.declarations {
            self.declare_constant(decl)?;
        }

        self.evaluate_expr(&program.root)
    }

    fn declare_constant(&mut self, decl: &ConstDecl) -> EvalResult<()> {
        let name = decl.name.source();

        if self.constants.contains_key(name) {
            return Err(EvalError::DuplicateConstant { pos: *decl.name.start(), name: name.to_owned() });
        }

        let value = self.evaluate_expr(&decl.expr)?;
        println_debug!("Declared constant {} = {:?}", name, value);

        self.depths.insert(name.to_owned(), value.depth());
        self.constants.insert(name.to_owned(), value);
        Ok(())
    }

    pub fn evaluate_expr(&self, expr: &Expr) -> EvalResult<Value> {
        self.evaluate_nested(expr, 0)
    }

    /// `level` is the number of arrays and maps enclosing `expr`.
    fn evaluate_nested(&self, expr: &Expr, level: usize) -> EvalResult<Value> {
        match expr {
            Expr::Number(value) => Ok(Value::Integer(value.clone())),
            Expr::Array(elements) => elements.iter()
                .map(|element| self.evaluate_nested(element, level + 1))
                .collect::<EvalResult<Vec<Value>>>()
                .map(Value::Array),
            Expr::Map(fields) => {
                let mut table: IndexMap<String, Value> = IndexMap::with_capacity(fields.len());

                for (name, field) in fields {
                    let value = self.evaluate_nested(field, level + 1)?;

                    // A repeated key moves to the position of its last occurrence
                    table.shift_remove(name.source());
                    table.insert(name.source().to_owned(), value);
                }

                Ok(Value::Table(table))
            },
            Expr::ConstRef(name) => self.resolve_constant(name, level),
        }
    }

    fn resolve_constant(&self, name: &Token, level: usize) -> EvalResult<Value> {
        let value = self.constants.get(name.source())
            .ok_or_else(|| EvalError::UnknownConstant { pos: *name.start(), name: name.source().to_owned() })?;

        let depth = self.depths.get(name.source()).copied().unwrap_or(0);

        if level + depth > MAX_NESTING_DEPTH {
            return Err(EvalError::TooDeep { pos: *name.start(), name: name.source().to_owned(), limit: MAX_NESTING_DEPTH });
        }

        Ok(value.clone())
    }

    pub fn constants(&self) -> &IndexMap<String, Value> {
        &self.constants
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
