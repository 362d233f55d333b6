//! Parser state and token-stream consumption.
//!
//! This module contains the main Parser struct shared by the grammar
//! routines in `stmt` and `expr`. The parser walks the token sequence with
//! a single token of lookahead and no backtracking, and carries the run's
//! symbol table, which the declaration and expression routines use for the
//! semantic checks performed in the same pass.

use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{stmt::parse_program, types::VarType};

/// The parser structure that maintains analysis state.
///
/// Holds the token stream, the cursor into it, and the single global-scope
/// symbol table built while parsing the declarations section. Each analysis
/// run owns its own instance; nothing persists between runs.
pub struct Parser {
    /// The list of tokens to parse, terminated by an EOF sentinel
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Name of each declared variable mapped to its declared type
    symbols: HashMap<String, VarType>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// The token vector must end with the EOF sentinel appended by
    /// `tokenize`; the cursor never advances past it.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            symbols: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Expects the current token to be one of the given kinds, advancing
    /// past it on success.
    ///
    /// Reaching the EOF sentinel yields the distinct end-of-input fault;
    /// any other kind outside the expected set yields the unexpected-token
    /// fault. Either way the cursor does not move.
    pub fn expect(&mut self, expected: &[TokenKind]) -> Result<Token, Error> {
        let token = self.current_token().clone();

        if token.kind == TokenKind::EOF {
            Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: Self::expected_repr(expected),
                },
                token.span.start,
            ))
        } else if expected.contains(&token.kind) {
            self.pos += 1;
            Ok(token)
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.lexeme.clone(),
                    expected: Self::expected_repr(expected),
                },
                token.span.start,
            ))
        }
    }

    fn expected_repr(expected: &[TokenKind]) -> String {
        expected
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Registers a declaration. A name may be declared at most once.
    pub fn declare_variable(
        &mut self,
        name: String,
        var_type: VarType,
        position: Position,
    ) -> Result<(), Error> {
        if self.symbols.contains_key(&name) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared { variable: name },
                position,
            ));
        }

        self.symbols.insert(name, var_type);
        Ok(())
    }

    /// Certifies that a variable was declared and returns its type.
    pub fn expect_variable(&self, name: &str, position: Position) -> Result<VarType, Error> {
        match self.symbols.get(name) {
            Some(var_type) => Ok(*var_type),
            None => Err(Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: name.to_string(),
                },
                position,
            )),
        }
    }

    /// Returns the symbol table built by this run.
    pub fn symbols(&self) -> &HashMap<String, VarType> {
        &self.symbols
    }
}

/// Validates a token sequence against the grammar and the semantic rules.
///
/// This is the main entry point for the analysis. Success is silent; the
/// first fault encountered aborts the run and is returned as the error, so
/// the caller receives at most one fault of one kind.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (whose symbol table holds the declarations seen)
/// - `None` on success, or the fault that stopped the run
pub fn parse(tokens: Vec<Token>) -> (Parser, Option<Error>) {
    let mut parser = Parser::new(tokens);
    let error = parse_program(&mut parser).err();
    (parser, error)
}
