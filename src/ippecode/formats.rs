//! Output formats
//!
//! - [xml]: the schema-annotated program document, the compiler's artifact.
//! - [tokens]: token listings used for debugging the lexer.

pub mod tokens;
pub mod xml;

pub use tokens::{format_tokens_json, format_tokens_simple};
pub use xml::{escape_operand, serialize_program};
