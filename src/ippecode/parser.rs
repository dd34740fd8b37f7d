//! Parser module for IPPeCode
//!
//! This module contains the grammar (chumsky combinators over the token
//! vector) and the entry points that turn its output into a
//! [Program](crate::ippecode::ast::Program).
//!
//! A program is one or more instructions. There is no statement separator:
//! an instruction ends where the next opcode token begins. Four shapes are
//! accepted, chosen purely by the operands that follow the opcode:
//!
//! ```text
//! OPCODE dst src1 src2
//! OPCODE dst src1
//! OPCODE dst            (dst: register or label)
//! OPCODE "string"
//! ```

pub mod api;
pub mod combinators;

pub use api::parse;
pub use combinators::TacRecord;

use crate::ippecode::ast::Program;
use crate::ippecode::error::CompileResult;

/// Main parser function that takes source text and returns the parsed program.
/// This is the primary entry point for compiling IPPeCode.
pub fn parse_program(source: &str) -> CompileResult<Program> {
    let tokens = crate::ippecode::lexer::tokenize(source)?;
    Ok(parse(tokens)?)
}
