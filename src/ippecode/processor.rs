//! File processing API for IPPeCode
//!
//! Chains the pipeline stages (tokenize, parse, serialize) and selects the
//! output format. Every stage runs on the fully buffered result of the one
//! before it, and the first failure ends the run with nothing produced.
//!
//! ## Example Usage
//!
//! ```rust
//! use ippc::ippecode::processor::{process_source, ProcessingOptions};
//!
//! let xml = process_source("MOV a 1\n", &ProcessingOptions::default()).unwrap();
//! assert!(xml.contains("<tac opcode=\"MOV\" order=\"1\">"));
//! ```

use log::debug;
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::ippecode::error::{CompileError, LexError, SyntaxError};
use crate::ippecode::formats::{format_tokens_json, format_tokens_simple, serialize_program};
use crate::ippecode::lexer::tokenize;
use crate::ippecode::parser::parse;

/// Path that stands for the standard streams instead of a file.
pub const STDIO_SENTINEL: &str = "-";

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xml,
    TokenSimple,
    TokenJson,
}

impl OutputFormat {
    /// Parse a format string like "xml" or "token-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "xml" => Ok(OutputFormat::Xml),
            "token-simple" => Ok(OutputFormat::TokenSimple),
            "token-json" => Ok(OutputFormat::TokenJson),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::TokenSimple => "token-simple",
            OutputFormat::TokenJson => "token-json",
        }
    }

    /// Get all available output formats
    pub fn available() -> Vec<OutputFormat> {
        vec![
            OutputFormat::Xml,
            OutputFormat::TokenSimple,
            OutputFormat::TokenJson,
        ]
    }
}

/// What to produce from a source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub format: OutputFormat,
    /// Program name for the root element; `None` uses the `&language;` placeholder
    pub name: Option<String>,
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    Compile(CompileError),
    InvalidFormat(String),
    Serialization(String),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Compile(err) => write!(f, "{}", err),
            ProcessingError::InvalidFormat(format) => write!(
                f,
                "Invalid format: {} (available: {})",
                format,
                OutputFormat::available()
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl From<CompileError> for ProcessingError {
    fn from(err: CompileError) -> Self {
        ProcessingError::Compile(err)
    }
}

impl From<LexError> for ProcessingError {
    fn from(err: LexError) -> Self {
        ProcessingError::Compile(err.into())
    }
}

impl From<SyntaxError> for ProcessingError {
    fn from(err: SyntaxError) -> Self {
        ProcessingError::Compile(err.into())
    }
}

/// Run the pipeline over a complete source text.
pub fn process_source(source: &str, options: &ProcessingOptions) -> Result<String, ProcessingError> {
    debug!("Tokenizing...");
    let tokens = tokenize(source)?;
    for spanned in &tokens {
        debug!("line {}: {}", spanned.line, spanned.token);
    }
    debug!("Tokenization complete ({} tokens)", tokens.len());

    match options.format {
        OutputFormat::TokenSimple => return Ok(format_tokens_simple(&tokens)),
        OutputFormat::TokenJson => {
            return format_tokens_json(&tokens)
                .map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        OutputFormat::Xml => {}
    }

    debug!("Parsing...");
    let program = parse(tokens)?.with_name(options.name.clone());
    debug!("Parsing complete ({} instructions)", program.len());

    let document = serialize_program(&program);
    debug!("{}", document);
    Ok(document)
}

/// Process an IPPeCode file according to the given options
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, options)
}

/// Read the whole input, from stdin when `input` is `-`.
pub fn read_input(input: &str) -> Result<String, ProcessingError> {
    if input == STDIO_SENTINEL {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| ProcessingError::IoError(e.to_string()))?;
        Ok(buffer)
    } else {
        fs::read_to_string(input)
            .map_err(|e| ProcessingError::IoError(format!("{}: {}", input, e)))
    }
}

/// Write a finished document, to stdout when `output` is `-`.
pub fn write_output(output: &str, content: &str) -> Result<(), ProcessingError> {
    if output == STDIO_SENTINEL {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| ProcessingError::IoError(e.to_string()))
    } else {
        debug!("Writing to {}", output);
        fs::write(output, content)
            .map_err(|e| ProcessingError::IoError(format!("{}: {}", output, e)))
    }
}
