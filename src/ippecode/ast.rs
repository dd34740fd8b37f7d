//! Instruction model for parsed IPPeCode programs
//!
//! A [Program] is an ordered list of [Instruction] records, each carrying up
//! to three [Operand] slots (`dst`, `src1`, `src2`). Order numbers are handed
//! out by [Program::push] and never change afterwards.

pub mod instruction;
pub mod opcode;
pub mod operand;
pub mod program;

pub use instruction::Instruction;
pub use opcode::Opcode;
pub use operand::{Operand, OperandType};
pub use program::{Program, DEFAULT_NAME_PLACEHOLDER};
