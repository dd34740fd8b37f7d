//! Parser combinator functions for the IPPeCode grammar.

use chumsky::prelude::*;

use crate::ippecode::ast::{Opcode, Operand};
use crate::ippecode::lexer::Token;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// One reduced instruction before it is numbered into a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacRecord {
    pub opcode: Opcode,
    pub dst: Operand,
    pub src1: Option<Operand>,
    pub src2: Option<Operand>,
}

/// Helper: build the error for a token that does not fit the current slot
fn unexpected(span: std::ops::Range<usize>, found: Token) -> ParserError {
    Simple::expected_input_found(span, None, Some(found))
}

pub(crate) fn opcode() -> impl Parser<Token, Opcode, Error = ParserError> + Clone {
    filter_map(|span, tok| match tok {
        Token::Opcode(op) => Ok(op),
        other => Err(unexpected(span, other)),
    })
}

/// `dst : REGISTER | LABEL`
pub(crate) fn dst() -> impl Parser<Token, Operand, Error = ParserError> + Clone {
    filter_map(|span, tok| match tok {
        Token::Register(name) => Ok(Operand::variable(name)),
        Token::Label(name) => Ok(Operand::label(name)),
        other => Err(unexpected(span, other)),
    })
}

/// `src : REGISTER | INTEGER`, shared by `src1` and `src2`
pub(crate) fn src() -> impl Parser<Token, Operand, Error = ParserError> + Clone {
    filter_map(|span, tok| match tok {
        Token::Register(name) => Ok(Operand::variable(name)),
        Token::Integer(value) => Ok(Operand::integer(value)),
        other => Err(unexpected(span, other)),
    })
}

pub(crate) fn string_operand() -> impl Parser<Token, Operand, Error = ParserError> + Clone {
    filter_map(|span, tok| match tok {
        Token::Str(text) => Ok(Operand::string(text)),
        other => Err(unexpected(span, other)),
    })
}

/// Parse a single instruction in any of its four shapes.
///
/// Sources are taken greedily, so `OPCODE dst src1` followed by a register or
/// integer always becomes the three operand form. Once sources follow, `dst`
/// is typed as a variable even when it was written as a label.
pub(crate) fn tac() -> impl Parser<Token, TacRecord, Error = ParserError> + Clone {
    let string_form = string_operand().map(|text| (text, None, None));

    let operand_form = dst()
        .then(src().then(src().or_not()).or_not())
        .map(|(dst, sources)| match sources {
            Some((src1, src2)) => (Operand::variable(dst.value), Some(src1), src2),
            None => (dst, None, None),
        });

    opcode()
        .then(string_form.or(operand_form))
        .map(|(opcode, (dst, src1, src2))| TacRecord {
            opcode,
            dst,
            src1,
            src2,
        })
}

/// `program : tac+`, consuming the whole input
pub(crate) fn program() -> impl Parser<Token, Vec<TacRecord>, Error = ParserError> + Clone {
    tac().repeated().at_least(1).then_ignore(end())
}
