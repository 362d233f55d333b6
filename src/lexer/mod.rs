//! Lexical analysis module for the analyzer.
//!
//! This module contains the lexer (scanner) that converts source code
//! into a sequence of tokens for parsing. It handles:
//!
//! - Tokenization via an ordered list of recognizers (priority dispatch)
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
