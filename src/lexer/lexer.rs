use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, BOOLEAN_LOOKUP, RESERVED_LOOKUP};

lazy_static! {
    // Anchored so a pattern can only ever match at the cursor.
    static ref INSIGNIFICANT: Regex = Regex::new(r"^(?:[ \t\r\n]+|%[^\r\n]*)").unwrap();
    static ref DIGITS: Regex = Regex::new("^[0-9]+").unwrap();
    static ref STRING: Regex = Regex::new(r"^'[^'\r\n]*'").unwrap();
    static ref WORD: Regex = Regex::new("^[A-Za-z]+").unwrap();
    static ref IDENTIFIER: Regex = Regex::new("^[A-Za-z][A-Za-z0-9]*").unwrap();
}

/// A recognizer inspects the unscanned remainder of the source and returns
/// a token, advancing the cursor only when it succeeds. A failed attempt
/// leaves the cursor where it was.
pub type Recognizer = fn(&mut Lexer) -> Option<Token>;

pub struct Lexer {
    recognizers: Vec<Recognizer>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            // Priority dispatch: the first recognizer that matches wins,
            // not the longest match across all of them. The order is part
            // of the language definition.
            recognizers: vec![
                number,
                string,
                delimiter,
                reserved_word,
                parenthesis,
                relational_operator,
                arithmetic_operator,
                boolean_operator,
                identifier,
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Commits a match: builds the token spanning the lexeme and moves the
    /// cursor past it.
    fn token(&mut self, kind: TokenKind, lexeme: String) -> Token {
        let span = self.span(lexeme.len());
        self.advance_n(lexeme.len());
        MK_TOKEN!(kind, lexeme, span)
    }

    /// A leading sign only belongs to a numeric literal when the previous
    /// token could not end an operand; after a literal or an identifier the
    /// sign is an infix operator instead.
    fn sign_allowed(&self) -> bool {
        !matches!(
            self.tokens.last().map(|token| token.kind),
            Some(TokenKind::IntLiteral)
                | Some(TokenKind::FloatLiteral)
                | Some(TokenKind::Identifier)
        )
    }

    /// Skips whitespace and `%` line comments. Neither ever yields a token.
    fn skip_insignificant(&mut self) {
        loop {
            let len = match INSIGNIFICANT.find(self.remainder()) {
                Some(matched) => matched.end(),
                None => break,
            };
            self.advance_n(len);
        }
    }
}

fn number(lexer: &mut Lexer) -> Option<Token> {
    let rest = lexer.remainder();
    let mut len = 0;

    if (rest.starts_with('+') || rest.starts_with('-')) && lexer.sign_allowed() {
        len += 1;
    }

    // No digit after an optional sign means no match at all.
    let digits = DIGITS.find(&rest[len..])?;
    len += digits.end();

    let mut kind = TokenKind::IntLiteral;

    if rest[len..].starts_with('.') {
        if let Some(fraction) = DIGITS.find(&rest[len + 1..]) {
            len += 1 + fraction.end();
            kind = TokenKind::FloatLiteral;
        }
        // A dot with no digit after it is left in the input: the literal
        // ends as an integer and the stranded dot faults on the next cycle.
    }

    let lexeme = rest[..len].to_string();
    Some(lexer.token(kind, lexeme))
}

fn string(lexer: &mut Lexer) -> Option<Token> {
    // The closing quote must appear before a line break or end of input;
    // otherwise this is a non-match and the opening quote, accepted by no
    // other recognizer, raises the lexical fault.
    let matched = STRING.find(lexer.remainder())?;
    let lexeme = matched.as_str().to_string();
    Some(lexer.token(TokenKind::StringLiteral, lexeme))
}

fn delimiter(lexer: &mut Lexer) -> Option<Token> {
    if lexer.remainder().starts_with(':') {
        Some(lexer.token(TokenKind::Delimiter, String::from(":")))
    } else {
        None
    }
}

fn reserved_word(lexer: &mut Lexer) -> Option<Token> {
    let word = WORD.find(lexer.remainder())?;
    let kind = *RESERVED_LOOKUP.get(word.as_str())?;
    let lexeme = word.as_str().to_string();
    Some(lexer.token(kind, lexeme))
}

fn parenthesis(lexer: &mut Lexer) -> Option<Token> {
    let peeked = lexer.remainder().chars().next();

    match peeked {
        Some('(') => Some(lexer.token(TokenKind::OpenParen, String::from("("))),
        Some(')') => Some(lexer.token(TokenKind::CloseParen, String::from(")"))),
        _ => None,
    }
}

fn relational_operator(lexer: &mut Lexer) -> Option<Token> {
    let rest = lexer.remainder();

    // Two-character forms before their one-character prefixes.
    let (kind, lexeme) = if rest.starts_with("<=") {
        (TokenKind::LessEquals, "<=")
    } else if rest.starts_with("<>") {
        (TokenKind::NotEquals, "<>")
    } else if rest.starts_with(">=") {
        (TokenKind::GreaterEquals, ">=")
    } else if rest.starts_with('=') {
        (TokenKind::Equal, "=")
    } else if rest.starts_with('<') {
        (TokenKind::Less, "<")
    } else if rest.starts_with('>') {
        (TokenKind::Greater, ">")
    } else {
        return None;
    };

    Some(lexer.token(kind, String::from(lexeme)))
}

fn arithmetic_operator(lexer: &mut Lexer) -> Option<Token> {
    let peeked = lexer.remainder().chars().next();

    let (kind, lexeme) = match peeked {
        Some('+') => (TokenKind::Plus, "+"),
        Some('-') => (TokenKind::Dash, "-"),
        Some('*') => (TokenKind::Star, "*"),
        Some('/') => (TokenKind::Slash, "/"),
        _ => return None,
    };

    Some(lexer.token(kind, String::from(lexeme)))
}

fn boolean_operator(lexer: &mut Lexer) -> Option<Token> {
    let word = WORD.find(lexer.remainder())?;
    let kind = *BOOLEAN_LOOKUP.get(word.as_str())?;
    let lexeme = word.as_str().to_string();
    Some(lexer.token(kind, lexeme))
}

fn identifier(lexer: &mut Lexer) -> Option<Token> {
    let matched = IDENTIFIER.find(lexer.remainder())?;
    let lexeme = matched.as_str().to_string();
    Some(lexer.token(TokenKind::Identifier, lexeme))
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let recognizers = lex.recognizers.clone();

    loop {
        lex.skip_insignificant();

        if lex.at_eof() {
            break;
        }

        let mut matched = false;

        for recognizer in recognizers.iter() {
            if let Some(token) = recognizer(&mut lex) {
                lex.push(token);
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: lex.at().to_string(),
                },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    let span = lex.span(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
