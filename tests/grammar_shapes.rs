//! Parameterised tests for the four instruction shapes and their failures

use ippc::ippecode::ast::{Opcode, OperandType};
use ippc::ippecode::error::{CompileError, SyntaxError};
use ippc::ippecode::parser::parse_program;
use rstest::rstest;

fn types(source: &str) -> Vec<Vec<OperandType>> {
    parse_program(source)
        .expect("program to parse")
        .instructions()
        .iter()
        .map(|tac| tac.operands().map(|(_, op)| op.kind).collect())
        .collect()
}

#[rstest]
#[case("ADD a b c", vec![OperandType::Variable, OperandType::Variable, OperandType::Variable])]
#[case("SUB a 1 -2", vec![OperandType::Variable, OperandType::Integer, OperandType::Integer])]
#[case("JUMPIFEQ @l x +7", vec![OperandType::Variable, OperandType::Variable, OperandType::Integer])]
#[case("MOV @l 1", vec![OperandType::Variable, OperandType::Integer])]
#[case("MOV a b", vec![OperandType::Variable, OperandType::Variable])]
#[case("READSTR s", vec![OperandType::Variable])]
#[case("CALL @f", vec![OperandType::Label])]
#[case("PRINT \"x\"", vec![OperandType::String])]
fn test_instruction_shapes(#[case] source: &str, #[case] expected: Vec<OperandType>) {
    assert_eq!(types(source), vec![expected]);
}

#[rstest]
#[case("MOV 1 a", "1", 1)]
#[case("MOV a @l", "@l", 1)]
#[case("PRINT \"a\" \"b\"", "b", 1)]
#[case("MOV a 1\n\nADD a b c d", "d", 3)]
#[case("x", "x", 1)]
#[case("@l MOV a 1", "@l", 1)]
#[case("PUSH \"s\" 5", "5", 1)]
fn test_rejected_sequences(#[case] source: &str, #[case] found: &str, #[case] line: usize) {
    match parse_program(source) {
        Err(CompileError::Syntax(err)) => assert_eq!(err, SyntaxError::unexpected(found, line)),
        other => panic!("expected syntax error for {:?}, got {:?}", source, other),
    }
}

#[rstest]
#[case("MOV a $", '$', 1)]
#[case("MOV a 1\n\n\nMOV b ,", ',', 4)]
#[case("POP a\r\n", '\r', 1)]
#[case("LABEL @ok\nJUMP !", '!', 2)]
fn test_illegal_characters(#[case] source: &str, #[case] character: char, #[case] line: usize) {
    match parse_program(source) {
        Err(CompileError::Lex(err)) => {
            assert_eq!(err.character, character);
            assert_eq!(err.line, line);
        }
        other => panic!("expected lex error for {:?}, got {:?}", source, other),
    }
}

#[rstest]
#[case("MOV")]
#[case("LABEL")]
#[case("ADD")]
#[case("SUB")]
#[case("MUL")]
#[case("DIV")]
#[case("READINT")]
#[case("READSTR")]
#[case("PRINT")]
#[case("PRINTLN")]
#[case("JUMPIFEQ")]
#[case("JUMPIFLT")]
#[case("JUMP")]
#[case("CALL")]
#[case("RETURN")]
#[case("PUSH")]
#[case("POP")]
fn test_every_opcode_is_recognised(#[case] keyword: &str) {
    let program = parse_program(&format!("{} x", keyword)).unwrap();
    let opcode = program.instructions()[0].opcode;
    assert_eq!(opcode.as_str(), keyword);
    assert_eq!(Opcode::from_keyword(keyword), Some(opcode));
}
