//! Lexer module for IPPeCode
//!
//! This module contains the tokenization logic, including token definitions
//! and the lexer implementation.
//!
//! Lexing is whole-input and fail-fast: the entire source is tokenized before
//! parsing starts, and the first character that starts no token aborts the run
//! with a [LexError](crate::ippecode::error::LexError).

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_values, Spanned};
pub use tokens::{canonical_integer, RawToken, Token};
