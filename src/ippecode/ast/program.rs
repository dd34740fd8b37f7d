//! Program: the ordered instruction collection

use serde::Serialize;

use super::instruction::Instruction;
use super::opcode::Opcode;
use super::operand::Operand;

/// Stand-in for the program name; the XML emitter swaps the `$language$`
/// marker for the `&language;` entity after formatting.
pub const DEFAULT_NAME_PLACEHOLDER: &str = "$language$ Program";

/// A parsed program, assembled once and handed to an emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    /// Externally supplied name; `None` renders the placeholder.
    pub name: Option<String>,
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Append an instruction, numbering it after the ones already present.
    pub fn push(
        &mut self,
        opcode: Opcode,
        dst: Option<Operand>,
        src1: Option<Operand>,
        src2: Option<Operand>,
    ) -> &Instruction {
        let order = self.instructions.len() + 1;
        self.instructions.push(Instruction {
            opcode,
            order,
            dst,
            src1,
            src2,
        });
        &self.instructions[order - 1]
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Name attribute text before entity substitution.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_order() {
        let mut program = Program::new();
        program.push(Opcode::Label, Some(Operand::label("@a")), None, None);
        program.push(Opcode::Pop, Some(Operand::variable("x")), None, None);
        let last = program.push(Opcode::Jump, Some(Operand::label("@a")), None, None);
        assert_eq!(last.order, 3);

        let orders: Vec<usize> = program.instructions().iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_display_name() {
        let program = Program::new();
        assert_eq!(program.display_name(), "$language$ Program");

        let named = Program::new().with_name(Some("Foo".into()));
        assert_eq!(named.display_name(), "Foo");
    }
}
