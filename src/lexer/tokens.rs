use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("DECLARACOES", TokenKind::Declaracoes);
        map.insert("ALGORITMO", TokenKind::Algoritmo);
        map.insert("INT", TokenKind::Int);
        map.insert("REAL", TokenKind::Real);
        map.insert("ATRIBUIR", TokenKind::Atribuir);
        map.insert("A", TokenKind::A);
        map.insert("LER", TokenKind::Ler);
        map.insert("IMPRIMIR", TokenKind::Imprimir);
        map.insert("SE", TokenKind::Se);
        map.insert("ENTAO", TokenKind::Entao);
        map.insert("ENQUANTO", TokenKind::Enquanto);
        map.insert("INICIO", TokenKind::Inicio);
        map.insert("FIM", TokenKind::Fim);
        map
    };

    pub static ref BOOLEAN_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("E", TokenKind::And);
        map.insert("OU", TokenKind::Or);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    Identifier,

    Delimiter, // :

    OpenParen,
    CloseParen,

    Equal,         // =
    Less,          // <
    Greater,       // >
    LessEquals,    // <=
    GreaterEquals, // >=
    NotEquals,     // <>

    Plus,
    Dash,
    Star,
    Slash,

    And, // E
    Or,  // OU

    // Reserved
    Declaracoes,
    Algoritmo,
    Int,
    Real,
    Atribuir,
    A,
    Ler,
    Imprimir,
    Se,
    Entao,
    Enquanto,
    Inicio,
    Fim,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::IntLiteral,
            TokenKind::FloatLiteral,
            TokenKind::StringLiteral,
            TokenKind::Identifier,
        ]) {
            println!("{} ({})", self.kind, self.lexeme);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
