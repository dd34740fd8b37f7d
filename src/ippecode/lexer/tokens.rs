//! Token definitions for IPPeCode
//!
//! Tokenization happens in two steps. The logos derived [RawToken] recognises
//! the character level patterns, discarding blanks and comments and counting
//! newlines in its extras. Identifiers come out as a single `Word` kind and are
//! then split into opcodes and registers by the keyword table, so the whole
//! identifier is always classified (`PRINTLN` is one opcode, `MOVE` a register).
use logos::{Lexer, Logos, Skip};
use serde::Serialize;
use std::fmt;

use crate::ippecode::ast::Opcode;

/// Count newlines in the lexer extras; the run itself produces no token.
fn newline_callback(lex: &mut Lexer<RawToken>) -> Skip {
    lex.extras += lex.slice().len();
    Skip
}

/// Strip the delimiting quotes, keeping escape sequences as written.
fn string_callback(lex: &mut Lexer<RawToken>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_owned()
}

fn integer_callback(lex: &mut Lexer<RawToken>) -> String {
    canonical_integer(lex.slice())
}

/// Rewrite an integer literal the way converting it to a number and back
/// would: `+` dropped, leading zeros removed, `-0` becomes `0`.
pub fn canonical_integer(literal: &str) -> String {
    let (negative, digits) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}

/// Character level tokens produced by logos.
///
/// The extras hold the number of newlines consumed so far.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = usize)]
#[logos(skip r"[ \t]+")]
#[logos(skip r"#[^\n]*")]
pub enum RawToken {
    #[regex(r"\n+", newline_callback)]
    Newline,

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_owned())]
    Word(String),

    #[regex(r"[+\-]?[0-9]+", integer_callback)]
    Integer(String),

    #[regex(r"@\w+", |lex| lex.slice().to_owned())]
    Label(String),

    #[regex(r#""([^"\\]|\\.)*""#, string_callback)]
    Str(String),
}

/// Classified IPPeCode token, as consumed by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Token {
    Opcode(Opcode),
    Register(String),
    /// Decimal value in canonical form
    Integer(String),
    /// Label text including the leading `@`
    Label(String),
    /// String contents without the quotes
    #[serde(rename = "string")]
    Str(String),
}

impl Token {
    /// Lowercase name of the token kind, used by the simple token listing.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Opcode(_) => "opcode",
            Token::Register(_) => "register",
            Token::Integer(_) => "integer",
            Token::Label(_) => "label",
            Token::Str(_) => "string",
        }
    }

    /// Token value as reported in diagnostics.
    pub fn value(&self) -> &str {
        match self {
            Token::Opcode(op) => op.as_str(),
            Token::Register(text)
            | Token::Integer(text)
            | Token::Label(text)
            | Token::Str(text) => text,
        }
    }

    pub fn is_opcode(&self) -> bool {
        matches!(self, Token::Opcode(_))
    }
}

impl RawToken {
    /// Split identifiers into opcodes and registers; newlines carry no token.
    pub fn classify(self) -> Option<Token> {
        match self {
            RawToken::Newline => None,
            RawToken::Word(word) => Some(match Opcode::from_keyword(&word) {
                Some(op) => Token::Opcode(op),
                None => Token::Register(word),
            }),
            RawToken::Integer(value) => Some(Token::Integer(value)),
            RawToken::Label(label) => Some(Token::Label(label)),
            RawToken::Str(text) => Some(Token::Str(text)),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.kind_name(), self.value())
    }
}
