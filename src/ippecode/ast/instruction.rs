//! A single three-address-code record

use serde::Serialize;

use super::opcode::Opcode;
use super::operand::Operand;

/// One parsed instruction.
///
/// Operand presence follows one of the grammar shapes: `dst` alone,
/// `dst src1`, or `dst src1 src2`. Which shape applies is decided by the
/// tokens that followed the opcode, never by the opcode itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub opcode: Opcode,
    /// 1-based position in the program
    pub order: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst: Option<Operand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src1: Option<Operand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src2: Option<Operand>,
}

impl Instruction {
    /// Operands in slot order, paired with their element names.
    pub fn operands(&self) -> impl Iterator<Item = (&'static str, &Operand)> {
        [("dst", &self.dst), ("src1", &self.src1), ("src2", &self.src2)]
            .into_iter()
            .filter_map(|(slot, operand)| operand.as_ref().map(|op| (slot, op)))
    }

    pub fn operand_count(&self) -> usize {
        self.operands().count()
    }
}
