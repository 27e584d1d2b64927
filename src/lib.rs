pub mod util;
pub mod compiler;
pub mod error;

use std::any::Any;
use std::path::PathBuf;
use clap::Parser as ClapParser;
use crate::compiler::ast::Program;
use crate::compiler::evaluator::{Evaluator, Value};
use crate::compiler::lexer::Lexer;
use crate::compiler::parser::Parser;
use crate::compiler::writer::TomlWriter;
pub use crate::error::Error;

#[derive(ClapParser, Debug)]
#[clap(author, version, about = "Translates the configuration language into TOML", long_about = None)]
pub struct Config {
    #[clap(short, long, help = "Input file")]
    pub input: PathBuf,
    #[clap(short, long, help = "Output TOML file, overwritten if it exists")]
    pub output: PathBuf,

    #[clap(short, long, help = "Print verbose log output")]
    pub verbose: bool,
}

/// Lexes and parses `source` into a program.
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = Lexer::new(source).tokenize()?;
    Ok(Parser::new(tokens).parse()?)
}

/// Lexes, parses and evaluates `source`.
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let program = parse(source)?;
    Ok(Evaluator::new().evaluate_program(&program)?)
}

/// Writes `value` as a TOML document.
pub fn emit(value: &Value) -> Result<String, Error> {
    let mut out = Vec::new();

    TomlWriter::new().write_document(value, &mut out)
        .map_err(|err| Error::Internal(err.to_string()))?;

    String::from_utf8(out).map_err(|err| Error::Internal(err.to_string()))
}

/// Translates `source` into TOML text.
pub fn translate(source: &str) -> Result<String, Error> {
    emit(&evaluate(source)?)
}

/// Extracts the message of a caught panic.
pub fn describe_panic(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("translation panicked")
    }
}

/// Reads `config.input`, translates it and writes `config.output`.
///
/// The output file is only touched once the whole translation succeeded.
pub fn run(config: &Config) -> Result<(), Error> {
    let source = std::fs::read_to_string(&config.input)
        .map_err(|source| Error::ReadInput { path: config.input.clone(), source })?;
    println_verbose!(config, "Read {} bytes from {}", source.len(), config.input.to_string_lossy());

    let tokens = Lexer::new(&source).tokenize()?;
    println_verbose!(config, "Scanned {} tokens", tokens.len());

    let program = Parser::new(tokens).parse()?;
    println_verbose!(config, "Parsed {} constant declarations", program.declarations.len());

    let mut evaluator = Evaluator::new();
    let value = evaluator.evaluate_program(&program)?;
    println_verbose!(config, "Evaluated constants: {}", evaluator.constants().keys().cloned().collect::<Vec<String>>().join(", "));

    let toml = emit(&value)?;

    std::fs::write(&config.output, &toml)
        .map_err(|source| Error::WriteOutput { path: config.output.clone(), source })?;
    println_verbose!(config, "Wrote {} bytes to {}", toml.len(), config.output.to_string_lossy());

    Ok(())
}
