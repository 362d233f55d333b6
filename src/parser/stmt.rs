use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_arithmetic_expr, parse_relational_expr},
    parser::Parser,
    types::VarType,
};

/// program := ':' DECLARACOES {declaration} ':' ALGORITMO {command}
pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(&[TokenKind::Delimiter])?;
    parser.expect(&[TokenKind::Declaracoes])?;

    while parser.current_token_kind() == TokenKind::Identifier {
        parse_declaration(parser)?;
    }

    parser.expect(&[TokenKind::Delimiter])?;
    parser.expect(&[TokenKind::Algoritmo])?;

    while parser.has_tokens() {
        parse_command(parser)?;
    }

    Ok(())
}

/// declaration := var ':' (INT | REAL)
fn parse_declaration(parser: &mut Parser) -> Result<(), Error> {
    let name = parser.expect(&[TokenKind::Identifier])?;
    parser.expect(&[TokenKind::Delimiter])?;
    let type_token = parser.expect(&[TokenKind::Int, TokenKind::Real])?;

    let var_type = if type_token.kind == TokenKind::Int {
        VarType::Int
    } else {
        VarType::Float
    };

    parser.declare_variable(name.lexeme, var_type, name.span.start)
}

/// command := ATRIBUIR expr A var
///          | LER var
///          | IMPRIMIR (var | STRING)
///          | SE relexpr ENTAO command
///          | ENQUANTO relexpr command
///          | INICIO {command} FIM
///
/// SE and ENQUANTO bind exactly one command; a multi-command branch or
/// loop body needs an explicit INICIO..FIM block.
pub fn parse_command(parser: &mut Parser) -> Result<(), Error> {
    let command = parser.expect(&[
        TokenKind::Atribuir,
        TokenKind::Ler,
        TokenKind::Imprimir,
        TokenKind::Se,
        TokenKind::Enquanto,
        TokenKind::Inicio,
    ])?;

    match command.kind {
        TokenKind::Atribuir => {
            let received = parse_arithmetic_expr(parser)?;
            parser.expect(&[TokenKind::A])?;
            let target = parser.expect(&[TokenKind::Identifier])?;
            let declared = parser.expect_variable(&target.lexeme, target.span.start.clone())?;

            // The inferred type must equal the declared type exactly; there
            // is no implicit widening or narrowing.
            if declared != received {
                return Err(Error::new(
                    ErrorImpl::TypeMismatch {
                        variable: target.lexeme,
                        expected: declared.to_string(),
                        received: received.to_string(),
                    },
                    target.span.start,
                ));
            }

            Ok(())
        }
        TokenKind::Ler => {
            let target = parser.expect(&[TokenKind::Identifier])?;
            parser.expect_variable(&target.lexeme, target.span.start)?;
            Ok(())
        }
        TokenKind::Imprimir => {
            let argument = parser.expect(&[TokenKind::Identifier, TokenKind::StringLiteral])?;

            // A string literal prints as-is; an identifier must be declared.
            if argument.kind == TokenKind::Identifier {
                parser.expect_variable(&argument.lexeme, argument.span.start)?;
            }

            Ok(())
        }
        TokenKind::Se => {
            parse_relational_expr(parser)?;
            parser.expect(&[TokenKind::Entao])?;
            parse_command(parser)
        }
        TokenKind::Enquanto => {
            parse_relational_expr(parser)?;
            parse_command(parser)
        }
        _ => {
            // INICIO blocks may be empty or nested to any depth.
            while parser.has_tokens() && parser.current_token_kind() != TokenKind::Fim {
                parse_command(parser)?;
            }

            parser.expect(&[TokenKind::Fim])?;
            Ok(())
        }
    }
}
