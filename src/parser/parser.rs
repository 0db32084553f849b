//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level loop.
//! The parser owns its lexer and looks at exactly two tokens at a time:
//! the current token and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Diagnostics never stop the parse; they are collected in order and can be
/// read back with [`Parser::errors`] once [`Parser::parse_program`] returns.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// The token under examination
    current_token: Token,
    /// The single token of lookahead
    peek_token: Token,
    /// Diagnostics recorded so far, in order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over `lexer`.
    ///
    /// Both token slots are filled and the lookup tables are populated before
    /// this returns, so the parser is immediately ready for `parse_program`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Shifts the lookahead into the current slot and pulls a fresh lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
        trace!("advanced to {}", self.current_token);
    }

    /// Advances if the lookahead is `expected_kind`.
    ///
    /// # Returns
    ///
    /// The new current token on success. Otherwise records an
    /// `UnexpectedToken` diagnostic, leaves the position untouched and
    /// returns `None`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Some(self.current_token.clone())
        } else {
            self.record(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                got: self.peek_token.kind,
            });
            None
        }
    }

    /// Appends a diagnostic to the error list.
    pub fn record(&mut self, error: ErrorImpl) {
        let error = Error::new(error);
        debug!("syntax error: {}", error);
        self.errors.push(error);
    }

    /// Binding power of the current token, `Lowest` if it is not an operator.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current_token.kind)
    }

    /// Binding power of the lookahead token, `Lowest` if it is not an operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek_token.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail to parse are left out of the program; their
    /// diagnostics stay in [`Parser::errors`]. The loop advances after every
    /// statement whether or not it parsed, so malformed input cannot stall it.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed program: {} statements, {} errors",
            statements.len(),
            self.errors.len()
        );

        Program { statements }
    }

    /// Rendered diagnostics, in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// The diagnostics themselves, for callers that want more than the message.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }
}

/// Parses a source string into a program.
///
/// This is the main entry point for parsing. It creates a lexer and a parser
/// and runs the parser to the end of input.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, whose `errors()` must be checked before trusting the program
/// - The (possibly partial) Program
pub fn parse(source: impl Into<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
