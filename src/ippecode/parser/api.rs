//! Public API for the parser.

use chumsky::prelude::*;
use log::trace;

use crate::ippecode::ast::Program;
use crate::ippecode::error::SyntaxError;
use crate::ippecode::lexer::{Spanned, Token};
use crate::ippecode::parser::combinators::{program, ParserError};

/// Parse lexed tokens into a program, numbering instructions in parse order.
///
/// Only the furthest failure is reported; nothing parsed before it survives.
pub fn parse(tokens: Vec<Spanned>) -> Result<Program, SyntaxError> {
    let values: Vec<Token> = tokens.iter().map(|s| s.token.clone()).collect();
    let records = program()
        .parse(values)
        .map_err(|errs| to_syntax_error(errs, &tokens))?;

    let mut result = Program::new();
    for record in records {
        let instruction = result.push(record.opcode, Some(record.dst), record.src1, record.src2);
        trace!("assembled {:?}", instruction);
    }
    Ok(result)
}

fn to_syntax_error(errs: Vec<ParserError>, tokens: &[Spanned]) -> SyntaxError {
    let last_line = tokens.last().map(|t| t.line).unwrap_or(1);
    let furthest = errs.into_iter().max_by_key(|e| e.span().start);

    match furthest {
        Some(err) => match (err.found(), tokens.get(err.span().start)) {
            (Some(found), Some(spanned)) => SyntaxError::unexpected(found.value(), spanned.line),
            (Some(found), None) => SyntaxError::unexpected(found.value(), last_line),
            (None, _) => SyntaxError::end_of_input(last_line),
        },
        None => SyntaxError::end_of_input(last_line),
    }
}
