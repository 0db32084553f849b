//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Byte-at-a-time scanning with a single byte of lookahead
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Illegal bytes, which become `Illegal` tokens instead of errors

pub mod lexer;
pub mod tokens;
