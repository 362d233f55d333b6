//! Parser and semantic analyzer for the token sequence.
//!
//! This module validates the token stream against the language grammar by
//! recursive descent, with one routine per grammar rule and a single token
//! of lookahead. There is no AST: the semantic checks run in the same pass
//! as the syntactic ones. It handles:
//!
//! - The program skeleton (declarations section, then the algorithm)
//! - Command parsing (assignment, read, print, conditional, loop, block)
//! - Bottom-up type inference over arithmetic expressions
//! - Declaration tracking in a single global-scope symbol table

pub mod expr;
pub mod parser;
pub mod stmt;
pub mod types;
