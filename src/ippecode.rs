//! Main module for IPPeCode library functionality

pub mod ast;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

pub use ast::{Instruction, Operand, OperandType, Program};
pub use error::{CompileError, LexError, SyntaxError};
pub use processor::{process_source, OutputFormat, ProcessingError, ProcessingOptions};
