//! Opcode keyword table

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The fixed, case-sensitive set of IPPeCode operation mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Opcode {
    Mov,
    Label,
    Add,
    Sub,
    Mul,
    Div,
    ReadInt,
    ReadStr,
    Print,
    PrintLn,
    JumpIfEq,
    JumpIfLt,
    Jump,
    Call,
    Return,
    Push,
    Pop,
}

static KEYWORDS: Lazy<HashMap<&'static str, Opcode>> =
    Lazy::new(|| Opcode::ALL.iter().map(|op| (op.as_str(), *op)).collect());

impl Opcode {
    pub const ALL: [Opcode; 17] = [
        Opcode::Mov,
        Opcode::Label,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::ReadInt,
        Opcode::ReadStr,
        Opcode::Print,
        Opcode::PrintLn,
        Opcode::JumpIfEq,
        Opcode::JumpIfLt,
        Opcode::Jump,
        Opcode::Call,
        Opcode::Return,
        Opcode::Push,
        Opcode::Pop,
    ];

    /// Look up a whole identifier in the keyword table.
    ///
    /// Only an exact match counts: `PRINTLN` is an opcode, `MOVE` and `mov` are not.
    pub fn from_keyword(word: &str) -> Option<Opcode> {
        KEYWORDS.get(word).copied()
    }

    /// Source spelling, also used verbatim as the `opcode` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::Mov => "MOV",
            Opcode::Label => "LABEL",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::ReadInt => "READINT",
            Opcode::ReadStr => "READSTR",
            Opcode::Print => "PRINT",
            Opcode::PrintLn => "PRINTLN",
            Opcode::JumpIfEq => "JUMPIFEQ",
            Opcode::JumpIfLt => "JUMPIFLT",
            Opcode::Jump => "JUMP",
            Opcode::Call => "CALL",
            Opcode::Return => "RETURN",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_round_trips() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_keyword(op.as_str()), Some(op));
        }
    }

    #[test]
    fn test_keyword_match_is_exact() {
        assert_eq!(Opcode::from_keyword("mov"), None);
        assert_eq!(Opcode::from_keyword("Mov"), None);
        assert_eq!(Opcode::from_keyword("MOVE"), None);
        assert_eq!(Opcode::from_keyword("PRINTLN"), Some(Opcode::PrintLn));
        assert_eq!(Opcode::from_keyword("JUMP"), Some(Opcode::Jump));
    }

    #[test]
    fn test_serializes_as_keyword() {
        let json = serde_json::to_string(&Opcode::JumpIfLt).unwrap();
        assert_eq!(json, "\"JUMPIFLT\"");
    }
}
