use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Which analysis phase a fault belongs to. The kinds are mutually
/// exclusive and each is terminal for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Lexical,
    Syntax,
    Semantic,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
        }
    }

    pub fn fault_kind(&self) -> FaultKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => FaultKind::Lexical,
            ErrorImpl::UnexpectedToken { .. } => FaultKind::Syntax,
            ErrorImpl::UnexpectedEndOfInput { .. } => FaultKind::Syntax,
            ErrorImpl::VariableNotDeclared { .. } => FaultKind::Semantic,
            ErrorImpl::VariableAlreadyDeclared { .. } => FaultKind::Semantic,
            ErrorImpl::TypeMismatch { .. } => FaultKind::Semantic,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected one of [{}]",
                token, expected
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Ran out of tokens, expected one of [{}]",
                expected
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::TypeMismatch {
                variable,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Variable `{}` has type `{}`, received `{}`",
                variable, expected, received
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("unexpected token {token:?}, expected one of [{expected}]")]
    UnexpectedToken { token: String, expected: String },
    #[error("unexpected end of input, expected one of [{expected}]")]
    UnexpectedEndOfInput { expected: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("type of variable {variable:?} is {expected}, does not match {received}")]
    TypeMismatch {
        variable: String,
        expected: String,
        received: String,
    },
}
