//! Operand slots of an instruction

use serde::Serialize;
use std::fmt;

/// Value category of an operand, spelled as in the `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandType {
    Integer,
    String,
    Variable,
    Label,
}

impl OperandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperandType::Integer => "integer",
            OperandType::String => "string",
            OperandType::Variable => "variable",
            OperandType::Label => "label",
        }
    }
}

impl fmt::Display for OperandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operand value, always kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operand {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: OperandType,
}

impl Operand {
    pub fn new(value: impl Into<String>, kind: OperandType) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(name, OperandType::Variable)
    }

    pub fn label(name: impl Into<String>) -> Self {
        Self::new(name, OperandType::Label)
    }

    pub fn integer(value: impl Into<String>) -> Self {
        Self::new(value, OperandType::Integer)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::new(text, OperandType::String)
    }
}
