//! XML serialization of a parsed program
//!
//! The document is written by hand: a fixed declaration, the inline DOCTYPE
//! that acts as the schema, then the `program` element with one `tac` child
//! per instruction. Nesting is indented by two spaces per level and
//! text-only elements stay on a single line.
//!
//! ## Example
//!
//! ```text
//! <program name="&language; Program">
//!   <tac opcode="MOV" order="1">
//!     <dst type="variable">a</dst>
//!     <src1 type="integer">1</src1>
//!   </tac>
//! </program>
//! ```

use crate::ippecode::ast::{Instruction, Program};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

pub const DOCTYPE: &str = concat!(
    "<!DOCTYPE program [\n",
    "  <!ELEMENT program (tac+)>\n",
    "  <!ELEMENT tac (dst?,src1?,src2?)>\n",
    "  <!ELEMENT dst (#PCDATA)>\n",
    "  <!ELEMENT src1 (#PCDATA)>\n",
    "  <!ELEMENT src2 (#PCDATA)>\n",
    "  <!ATTLIST program name CDATA #IMPLIED>\n",
    "  <!ATTLIST tac opcode CDATA #REQUIRED>\n",
    "  <!ATTLIST tac order CDATA #REQUIRED>\n",
    "  <!ATTLIST dst type (integer|string|variable|label) #REQUIRED>\n",
    "  <!ATTLIST src1 type (integer|string|variable) #REQUIRED>\n",
    "  <!ATTLIST src2 type (integer|string|variable) #REQUIRED>\n",
    "  <!ENTITY language \"IPPeCode\">\n",
    "  <!ENTITY eol \"&#xA;\">\n",
    "  <!ENTITY lt \"&lt;\">\n",
    "  <!ENTITY gt \"&gt;\">\n",
    "]>\n"
);

/// Marker replaced by [LANGUAGE_ENTITY] once the body is formatted.
const LANGUAGE_MARKER: &str = "$language$";
const LANGUAGE_ENTITY: &str = "&language;";

const INDENT: &str = "  ";

/// Serialize a program to the complete XML document.
pub fn serialize_program(program: &Program) -> String {
    let mut body = String::new();
    let name = escape_attribute(program.display_name());

    // parsed programs always hold at least one instruction
    if program.is_empty() {
        body.push_str(&format!("<program name=\"{}\"/>\n", name));
    } else {
        body.push_str(&format!("<program name=\"{}\">\n", name));
        for instruction in program.instructions() {
            serialize_instruction(instruction, 1, &mut body);
        }
        body.push_str("</program>\n");
    }

    let mut document = String::with_capacity(XML_DECLARATION.len() + DOCTYPE.len() + body.len());
    document.push_str(XML_DECLARATION);
    document.push_str(DOCTYPE);
    document.push_str(&body.replace(LANGUAGE_MARKER, LANGUAGE_ENTITY));
    document
}

fn serialize_instruction(instruction: &Instruction, indent_level: usize, output: &mut String) {
    let indent = INDENT.repeat(indent_level);
    let open = format!(
        "{}<tac opcode=\"{}\" order=\"{}\"",
        indent,
        escape_attribute(instruction.opcode.as_str()),
        instruction.order
    );

    // only reachable through Program::push with no operands
    if instruction.operand_count() == 0 {
        output.push_str(&open);
        output.push_str("/>\n");
        return;
    }

    output.push_str(&open);
    output.push_str(">\n");

    let child_indent = INDENT.repeat(indent_level + 1);
    for (slot, operand) in instruction.operands() {
        let text = escape_operand(&operand.value);
        if text.is_empty() {
            output.push_str(&format!(
                "{}<{} type=\"{}\"/>\n",
                child_indent, slot, operand.kind
            ));
        } else {
            output.push_str(&format!(
                "{}<{} type=\"{}\">{}</{}>\n",
                child_indent, slot, operand.kind, text, slot
            ));
        }
    }

    output.push_str(&format!("{}</tac>\n", indent));
}

/// Escape an operand value for element content.
///
/// `&`, `<` and `>` go through two escaping passes, so `<` ends up as
/// `&amp;lt;`. The two-character sequence `\n` as written in the source (not a
/// line feed byte) becomes the `&eol;` entity reference.
pub fn escape_operand(text: &str) -> String {
    let once = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    once.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("\\n", "&eol;")
}

/// Escape an attribute value
fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
        .replace('>', "&gt;")
}
