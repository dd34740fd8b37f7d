//! Implementation of the IPPeCode lexer
//!
//! Drives the logos lexer over the whole input and attaches line numbers to
//! the classified tokens.

use logos::Logos;
use serde::Serialize;
use std::ops::Range;

use crate::ippecode::error::LexError;
use crate::ippecode::lexer::tokens::{RawToken, Token};

/// A token together with the 1-based line it starts on and its byte range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
    pub span: Range<usize>,
}

/// Tokenize the whole source, failing on the first illegal character.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras + 1;
        match result {
            Ok(raw) => {
                if let Some(token) = raw.classify() {
                    tokens.push(Spanned {
                        token,
                        line,
                        span: lexer.span(),
                    });
                }
            }
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or('\0');
                return Err(LexError::new(character, line));
            }
        }
    }

    Ok(tokens)
}

/// Convenience function returning only the tokens, without positions.
pub fn tokenize_values(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize(source)?.into_iter().map(|s| s.token).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ippecode::ast::Opcode;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize_values("MOV a 1\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Opcode(Opcode::Mov),
                Token::Register("a".into()),
                Token::Integer("1".into())
            ]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("LABEL @start\n\n# comment\nJUMP @start\n").unwrap();
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 4, 4]);
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("PUSH  x").unwrap();
        assert_eq!(tokens[0].span, 0..4);
        assert_eq!(tokens[1].span, 6..7);
    }

    #[test]
    fn test_string_token() {
        let tokens = tokenize_values("PRINTLN \"hi there\"").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Opcode(Opcode::PrintLn),
                Token::Str("hi there".into())
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_a_register() {
        let tokens = tokenize_values("MOVE PRINTx mov").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Register("MOVE".into()),
                Token::Register("PRINTx".into()),
                Token::Register("mov".into())
            ]
        );
    }

    #[test]
    fn test_illegal_character_reports_line() {
        let err = tokenize("MOV a 1\nMOV b $\n").unwrap_err();
        assert_eq!(err, LexError::new('$', 2));
    }

    #[test]
    fn test_unterminated_string_is_illegal() {
        let err = tokenize("PRINT \"oops\n").unwrap_err();
        assert_eq!(err.character, '"');
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_carriage_return_is_illegal() {
        let err = tokenize("POP a\r\n").unwrap_err();
        assert_eq!(err, LexError::new('\r', 1));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("  \t# only a comment\n\n").unwrap(), vec![]);
    }
}
