#![allow(clippy::module_inception)]

//! Front end for a small expression language: a byte-level tokenizer and a
//! Pratt parser that builds an AST while collecting syntax diagnostics.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use ast::ast::Program;
pub use lexer::lexer::Lexer;
pub use parser::parser::{parse, Parser};
