//! Literal decoding: turning a token's exact source spelling into the
//! semantic value an [`crate::ast::LiteralExpr`] carries.
//!
//! The lexer never looks at these rules - it only ever preserves source
//! spelling (see `wisp_lex`'s module doc) - so decoding lives entirely on
//! the parser side.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use wisp_util::Span;

use crate::error::{ParseException, ParseResult};

pub fn decode_integer(literal: &str, span: Span) -> ParseResult<BigInt> {
    let normalized = literal.strip_prefix('+').unwrap_or(literal);
    BigInt::from_str(normalized)
        .map_err(|err| ParseException::at(format!("invalid integer literal: {err}"), span))
}

pub fn decode_decimal(literal: &str, span: Span) -> ParseResult<BigDecimal> {
    let normalized = literal.strip_prefix('+').unwrap_or(literal);
    BigDecimal::from_str(normalized)
        .map_err(|err| ParseException::at(format!("invalid decimal literal: {err}"), span))
}

fn resolve_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{8}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'f' => Some('\u{c}'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Resolve escape sequences in `body` (already stripped of its surrounding
/// quotes). A recognized escape resolves to its character; an
/// unrecognized one is preserved verbatim as the two-character sequence;
/// a backslash with nothing following it is a parse failure.
pub fn decode_escapes(body: &str, span: Span) -> ParseResult<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => return Err(ParseException::at("unterminated escape sequence", span)),
            Some(next) => match resolve_escape(next) {
                Some(resolved) => out.push(resolved),
                None => {
                    out.push('\\');
                    out.push(next);
                }
            },
        }
    }
    Ok(out)
}

pub fn decode_string(literal: &str, span: Span) -> ParseResult<String> {
    let body = literal.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(literal);
    decode_escapes(body, span)
}

pub fn decode_character(literal: &str, span: Span) -> ParseResult<char> {
    let body = literal.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')).unwrap_or(literal);
    let decoded = decode_escapes(body, span)?;
    let mut chars = decoded.chars();
    let c = chars
        .next()
        .ok_or_else(|| ParseException::at("empty character literal", span))?;
    if chars.next().is_some() {
        return Err(ParseException::at(
            "character literal must contain exactly one character",
            span,
        ));
    }
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_escapes_in_strings() {
        let decoded = decode_string(r#""a\nb\tc""#, Span::DUMMY).unwrap();
        assert_eq!(decoded, "a\nb\tc");
    }

    #[test]
    fn preserves_unknown_escape_as_two_chars() {
        let decoded = decode_string(r#""\q""#, Span::DUMMY).unwrap();
        assert_eq!(decoded, "\\q");
    }

    #[test]
    fn rejects_unterminated_escape() {
        assert!(decode_string("\"a\\", Span::DUMMY).is_err());
    }

    #[test]
    fn decodes_character_escape() {
        assert_eq!(decode_character(r"'\n'", Span::DUMMY).unwrap(), '\n');
    }

    #[test]
    fn rejects_multi_character_body() {
        assert!(decode_character("'ab'", Span::DUMMY).is_err());
    }

    #[test]
    fn decodes_integer_with_leading_plus() {
        let value = decode_integer("+42", Span::DUMMY).unwrap();
        assert_eq!(value, BigInt::from(42));
    }

    #[test]
    fn decodes_exponent_decimal() {
        let value = decode_decimal("3.14e-2", Span::DUMMY).unwrap();
        assert_eq!(value, BigDecimal::from_str("0.0314").unwrap());
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn arbitrary_digit_strings_decode_to_the_same_bigint_as_from_str(digits in "[1-9][0-9]{0,20}") {
            let decoded = decode_integer(&digits, Span::DUMMY).unwrap();
            prop_assert_eq!(decoded, BigInt::from_str(&digits).unwrap());
        }

        #[test]
        fn an_unrecognized_escape_always_round_trips_as_two_characters(c in "[a-zA-Z]") {
            if !matches!(c.as_str(), "b" | "n" | "r" | "t" | "f") {
                let source = format!("\"\\{c}\"");
                let decoded = decode_string(&source, Span::DUMMY).unwrap();
                prop_assert_eq!(decoded, format!("\\{c}"));
            }
        }
    }
}
