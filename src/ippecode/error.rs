//! Error types for the compilation pipeline
//!
//! Both kinds are fatal: the first one raised stops the pipeline and nothing
//! is emitted. Each renders as a single diagnostic line of the form
//! `<Kind>: <detail> on line <N>`.

use std::fmt;

/// Raised by the lexer on a character that starts no token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub character: char,
    pub line: usize,
}

impl LexError {
    pub fn new(character: char, line: usize) -> Self {
        Self { character, line }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Illegal character: {:?} on line {}",
            self.character, self.line
        )
    }
}

impl std::error::Error for LexError {}

/// Raised by the parser when the tokens do not reduce to an instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Value of the offending token, `None` at end of input
    pub found: Option<String>,
    pub line: usize,
}

impl SyntaxError {
    pub fn unexpected(found: impl Into<String>, line: usize) -> Self {
        Self {
            found: Some(found.into()),
            line,
        }
    }

    pub fn end_of_input(line: usize) -> Self {
        Self { found: None, line }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(value) => write!(f, "Syntax error: '{}' on line {}", value, self.line),
            None => write!(f, "Syntax error: unexpected end of input on line {}", self.line),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Either failure of the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl CompileError {
    /// Line the diagnostic points at.
    pub fn line(&self) -> usize {
        match self {
            CompileError::Lex(err) => err.line,
            CompileError::Syntax(err) => err.line,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(err) => err.fmt(f),
            CompileError::Syntax(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Lex(err) => Some(err),
            CompileError::Syntax(err) => Some(err),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(err: LexError) -> Self {
        CompileError::Lex(err)
    }
}

impl From<SyntaxError> for CompileError {
    fn from(err: SyntaxError) -> Self {
        CompileError::Syntax(err)
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let err = LexError::new('$', 3);
        assert_eq!(err.to_string(), "Illegal character: '$' on line 3");
    }

    #[test]
    fn test_syntax_error_display() {
        assert_eq!(
            SyntaxError::unexpected("5", 2).to_string(),
            "Syntax error: '5' on line 2"
        );
        assert_eq!(
            SyntaxError::end_of_input(1).to_string(),
            "Syntax error: unexpected end of input on line 1"
        );
    }

    #[test]
    fn test_compile_error_wraps_both_kinds() {
        let lex: CompileError = LexError::new(',', 4).into();
        assert_eq!(lex.line(), 4);
        assert_eq!(lex.to_string(), "Illegal character: ',' on line 4");

        let syntax: CompileError = SyntaxError::unexpected("@x", 7).into();
        assert_eq!(syntax.line(), 7);
        assert!(std::error::Error::source(&syntax).is_some());
    }
}
