//! Unit tests for error handling.
//!
//! This module contains tests for error types, fault classification and
//! error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, FaultKind};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "?".to_string(),
        },
        Position(10, Rc::new("test.al".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.al".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "FIM".to_string(),
            expected: "Identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_lexical_fault_kind() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "#".to_string(),
        },
        Position(0, Rc::new("test.al".to_string())),
    );

    assert_eq!(error.fault_kind(), FaultKind::Lexical);
}

#[test]
fn test_syntax_fault_kinds() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "FIM".to_string(),
            expected: "Identifier".to_string(),
        },
        Position(0, Rc::new("test.al".to_string())),
    );
    assert_eq!(error.fault_kind(), FaultKind::Syntax);

    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "Algoritmo".to_string(),
        },
        Position(0, Rc::new("test.al".to_string())),
    );
    assert_eq!(error.fault_kind(), FaultKind::Syntax);
    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_semantic_fault_kinds() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "Z".to_string(),
        },
        Position(0, Rc::new("test.al".to_string())),
    );
    assert_eq!(error.fault_kind(), FaultKind::Semantic);
    assert_eq!(error.get_error_name(), "VariableNotDeclared");

    let error = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "X".to_string(),
        },
        Position(0, Rc::new("test.al".to_string())),
    );
    assert_eq!(error.fault_kind(), FaultKind::Semantic);
    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");

    let error = Error::new(
        ErrorImpl::TypeMismatch {
            variable: "X".to_string(),
            expected: "INT".to_string(),
            received: "REAL".to_string(),
        },
        Position(0, Rc::new("test.al".to_string())),
    );
    assert_eq!(error.fault_kind(), FaultKind::Semantic);
    assert_eq!(error.get_error_name(), "TypeMismatch");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "?".to_string(),
        },
        Position(0, Rc::new("test.al".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::TypeMismatch {
            variable: "X".to_string(),
            expected: "INT".to_string(),
            received: "REAL".to_string(),
        },
        Position(0, Rc::new("test.al".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => {
            assert!(suggestion.contains("X"));
            assert!(suggestion.contains("INT"));
            assert!(suggestion.contains("REAL"));
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_impl_display() {
    let error_impl = ErrorImpl::VariableNotDeclared {
        variable: "Z".to_string(),
    };

    assert_eq!(error_impl.to_string(), "variable \"Z\" not declared");
}
