//! # ippc
//!
//! A compiler front end for IPPeCode, a small three-address-code language.
//! Source text is tokenized, parsed into an ordered list of instructions and
//! serialized into a schema-annotated XML document.
//!
//! The stages live under [ippecode]:
//! - `lexer` turns the source into classified tokens (logos based).
//! - `parser` reduces the tokens into a [Program](ippecode::ast::Program) (chumsky based).
//! - `formats` renders a program (or a token listing) into its output form.
//! - `processor` chains the stages together for callers such as the `ippc` binary.
//!
//! [config] and [logger] carry the ambient setup shared by the binary.

pub mod config;
pub mod ippecode;
pub mod logger;
