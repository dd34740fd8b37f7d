//! Token listing formats
//!
//! `token-simple` prints one token per line prefixed with its line number;
//! `token-json` dumps the positioned tokens through serde.

use crate::ippecode::lexer::Spanned;

/// One `line: <kind:value>` entry per token.
pub fn format_tokens_simple(tokens: &[Spanned]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}: {}\n", t.line, t.token))
        .collect()
}

pub fn format_tokens_json(tokens: &[Spanned]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ippecode::lexer::tokenize;

    #[test]
    fn test_simple_listing() {
        let tokens = tokenize("MOV a 1\nPRINT \"x\"").unwrap();
        assert_eq!(
            format_tokens_simple(&tokens),
            "1: <opcode:MOV>\n1: <register:a>\n1: <integer:1>\n2: <opcode:PRINT>\n2: <string:x>\n"
        );
    }

    #[test]
    fn test_json_listing() {
        let tokens = tokenize("POP x").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&format_tokens_json(&tokens).unwrap()).unwrap();
        assert_eq!(json[0]["token"]["kind"], "opcode");
        assert_eq!(json[0]["token"]["value"], "POP");
        assert_eq!(json[1]["token"]["kind"], "register");
        assert_eq!(json[1]["line"], 1);
        assert_eq!(json[1]["span"]["start"], 4);
    }
}
