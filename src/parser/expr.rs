use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, types::VarType};

/// expr := '(' expr ')' | operand [op expr]
/// operand := int | float | var
///
/// Returns the type inferred bottom-up for the whole expression.
pub fn parse_arithmetic_expr(parser: &mut Parser) -> Result<VarType, Error> {
    if parser.current_token_kind() == TokenKind::OpenParen {
        parser.expect(&[TokenKind::OpenParen])?;
        let inner = parse_arithmetic_expr(parser)?;
        parser.expect(&[TokenKind::CloseParen])?;

        // A parenthesization threads the inner type up unchanged.
        return Ok(inner);
    }

    let operand = parser.expect(&[
        TokenKind::IntLiteral,
        TokenKind::FloatLiteral,
        TokenKind::Identifier,
    ])?;

    let left = match operand.kind {
        TokenKind::IntLiteral => VarType::Int,
        TokenKind::FloatLiteral => VarType::Float,
        _ => parser.expect_variable(&operand.lexeme, operand.span.start.clone())?,
    };

    if matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash
    ) {
        let operator = parser.expect(&[
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
        ])?;
        let right = parse_arithmetic_expr(parser)?;

        // Two integer sides stay integer under +, - and *. Division, or a
        // float on either side, promotes the result to float.
        if left == VarType::Int && right == VarType::Int && operator.kind != TokenKind::Slash {
            return Ok(VarType::Int);
        }

        return Ok(VarType::Float);
    }

    Ok(left)
}

/// relexpr := expr relop expr [boolop relexpr]
pub fn parse_relational_expr(parser: &mut Parser) -> Result<(), Error> {
    // Comparing an integer side against a float side is allowed.
    parse_arithmetic_expr(parser)?;
    parser.expect(&[
        TokenKind::Equal,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::LessEquals,
        TokenKind::GreaterEquals,
        TokenKind::NotEquals,
    ])?;
    parse_arithmetic_expr(parser)?;

    if matches!(
        parser.current_token_kind(),
        TokenKind::And | TokenKind::Or
    ) {
        parser.expect(&[TokenKind::And, TokenKind::Or])?;
        parse_relational_expr(parser)?;
    }

    Ok(())
}
