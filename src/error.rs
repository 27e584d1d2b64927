use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use crate::compiler::evaluator::EvalError;
use crate::compiler::lexer::LexerError;
use crate::compiler::parser::ParseError;

/// Any failure of a translation run.
#[derive(Debug)]
pub enum Error {
    Lexer(LexerError),
    Parser(ParseError),
    Eval(EvalError),

    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    Internal(String),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Lexer(_) | Error::Parser(_) | Error::Eval(_) => 1,
            Error::ReadInput { .. } | Error::WriteOutput { .. } => 2,
            Error::Internal(_) => 3,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Lexer(err) => write!(f, "Syntax error: {}", err),
            Error::Parser(err) => write!(f, "Syntax error: {}", err),
            Error::Eval(err) => write!(f, "Constant evaluation error: {}", err),
            Error::ReadInput { path, source } => write!(f, "Failed to read input file '{}': {}", path.to_string_lossy(), source),
            Error::WriteOutput { path, source } => write!(f, "Failed to write output file '{}': {}", path.to_string_lossy(), source),
            Error::Internal(message) => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lexer(err) => Some(err),
            Error::Parser(err) => Some(err),
            Error::Eval(err) => Some(err),
            Error::ReadInput { source, .. } | Error::WriteOutput { source, .. } => Some(source),
            Error::Internal(_) => None,
        }
    }
}

impl From<LexerError> for Error {
    fn from(err: LexerError) -> Self {
        Error::Lexer(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parser(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}
