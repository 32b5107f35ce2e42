//! Lexer - turns source text into an ordered token sequence.
//!
//! The top-level loop skips whitespace and line comments, then dispatches
//! on the next character to one of five token-shaped productions (number,
//! identifier, character literal, string literal, operator). Each
//! production is a small function written directly against [`Cursor`]'s
//! `has`/`peek`/`eat`/`emit` vocabulary rather than a regex engine:
//! `lex_number`/`lex_string`/etc. as direct-coded recursive functions
//! instead of a table-driven or regex-based lexer, since direct-coded
//! functions are easier to give precise error messages from, which matters
//! since every failure mode here is meant to be distinguishable.

use wisp_util::Span;

use crate::cursor::{CharClass, Cursor};
use crate::error::{LexException, LexResult};
use crate::token::{Token, TokenKind};

const ESCAPABLE: &[char] = &['b', 'n', 'r', 't', '\'', '"', '\\'];

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source) }
    }

    /// Lex the entire source into a token sequence. Stops at the first
    /// failure, reporting the byte offset at the failing position.
    pub fn tokenize(source: &'a str) -> LexResult<Vec<Token>> {
        let mut lexer = Self::new(source);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Produce the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        self.skip_whitespace_and_comments();
        self.cursor.emit(); // drop skipped text from the accumulator

        let start = self.cursor.offset();
        let Some(c) = self.cursor.current() else {
            return Ok(None);
        };

        let token = match c {
            c if c.is_ascii_digit() => self.lex_number(start)?,
            '+' | '-' if self.cursor.peek(&[CharClass::Exact(c), CharClass::Digit]) => {
                self.lex_number(start)?
            }
            c if c.is_alphabetic() || c == '_' => self.lex_identifier(start),
            '\'' => self.lex_character(start)?,
            '"' => self.lex_string(start)?,
            _ => self.lex_operator(start)?,
        };
        Ok(Some(token))
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.eat(&[CharClass::Whitespace]) {
                continue;
            }
            if self.cursor.peek(&[CharClass::Exact('/'), CharClass::Exact('/')]) {
                while self.cursor.has(0) && !self.cursor.peek(&[CharClass::Exact('\n')]) {
                    self.cursor.advance();
                }
                continue;
            }
            break;
        }
    }

    fn lex_number(&mut self, start: usize) -> LexResult<Token> {
        let _ = self.cursor.eat(&[CharClass::Exact('+')]) || self.cursor.eat(&[CharClass::Exact('-')]);

        let mut digits = 0;
        while self.cursor.eat(&[CharClass::Digit]) {
            digits += 1;
        }
        if digits == 0 {
            return Err(LexException::at("expected digits after sign", start));
        }

        let mut is_decimal = false;
        if self.cursor.peek(&[CharClass::Exact('.'), CharClass::Digit]) {
            is_decimal = true;
            self.cursor.advance(); // '.'
            while self.cursor.eat(&[CharClass::Digit]) {}
        }

        if self.cursor.peek(&[CharClass::Exact('e')]) || self.cursor.peek(&[CharClass::Exact('E')]) {
            is_decimal = true;
            self.cursor.advance();
            let _ = self.cursor.eat(&[CharClass::Exact('+')]) || self.cursor.eat(&[CharClass::Exact('-')]);
            let mut exp_digits = 0;
            while self.cursor.eat(&[CharClass::Digit]) {
                exp_digits += 1;
            }
            if exp_digits == 0 {
                return Err(LexException::at("expected digits in exponent", self.cursor.offset()));
            }
        }

        let literal = self.cursor.emit();
        let kind = if is_decimal { TokenKind::Decimal } else { TokenKind::Integer };
        Ok(Token::new(kind, literal, Span::new(start, self.cursor.offset())))
    }

    fn lex_identifier(&mut self, start: usize) -> Token {
        self.cursor.advance(); // the IdentStart character already matched by the dispatch
        while self.cursor.eat(&[CharClass::IdentCont]) {}
        let literal = self.cursor.emit();
        Token::new(TokenKind::Identifier, literal, Span::new(start, self.cursor.offset()))
    }

    /// Consume a backslash escape shared by character and string literals:
    /// backslash followed by exactly one of `b n r t ' " \`.
    fn lex_escape(&mut self) -> LexResult<()> {
        let escape_start = self.cursor.offset();
        self.cursor.advance(); // '\\'
        if !ESCAPABLE.iter().any(|&e| self.cursor.eat(&[CharClass::Exact(e)])) {
            return Err(LexException::at("invalid escape sequence", escape_start));
        }
        Ok(())
    }

    fn lex_character(&mut self, start: usize) -> LexResult<Token> {
        self.cursor.advance(); // opening '
        match self.cursor.current() {
            Some('\\') => self.lex_escape()?,
            Some(c) if CharClass::NotIn(&['\'', '\n', '\r', '\\']).matches(c) => {
                self.cursor.advance();
            }
            Some(_) | None => {
                return Err(LexException::at("invalid character literal body", self.cursor.offset()))
            }
        }
        if !self.cursor.eat(&[CharClass::Exact('\'')]) {
            return Err(LexException::at("unterminated character literal", self.cursor.offset()));
        }
        let literal = self.cursor.emit();
        Ok(Token::new(TokenKind::Character, literal, Span::new(start, self.cursor.offset())))
    }

    fn lex_string(&mut self, start: usize) -> LexResult<Token> {
        self.cursor.advance(); // opening "
        loop {
            match self.cursor.current() {
                Some('"') => {
                    self.cursor.advance();
                    break;
                }
                Some('\\') => self.lex_escape()?,
                Some('\n') | Some('\r') => {
                    return Err(LexException::at("newline in string literal", self.cursor.offset()))
                }
                Some(_) => self.cursor.advance(),
                None => return Err(LexException::at("unterminated string literal", self.cursor.offset())),
            }
        }
        let literal = self.cursor.emit();
        Ok(Token::new(TokenKind::String, literal, Span::new(start, self.cursor.offset())))
    }

    fn lex_operator(&mut self, start: usize) -> LexResult<Token> {
        let c = self.cursor.current().expect("dispatch only calls this with a character present");
        if matches!(c, '<' | '>' | '!' | '=') {
            self.cursor.advance();
            let _ = self.cursor.eat(&[CharClass::Exact('=')]);
        } else if !c.is_alphanumeric() && c != '_' && c != '\'' && c != '"' && !c.is_whitespace() {
            self.cursor.advance();
        } else {
            return Err(LexException::at(format!("unexpected character '{c}'"), start));
        }
        let literal = self.cursor.emit();
        Ok(Token::new(TokenKind::Operator, literal, Span::new(start, self.cursor.offset())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.literal.as_str()).collect()
    }

    #[test]
    fn lexes_a_let_statement() {
        let tokens = Lexer::tokenize("LET x = 1 + 2;").unwrap();
        assert_eq!(
            literals(&tokens),
            vec!["LET", "x", "=", "1", "+", "2", ";"]
        );
    }

    #[test]
    fn skips_line_comments() {
        let tokens = Lexer::tokenize("// hello\nLET x;").unwrap();
        assert_eq!(literals(&tokens), vec!["LET", "x", ";"]);
    }

    #[test]
    fn negative_zero_is_integer() {
        let tokens = Lexer::tokenize("-0").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].literal, "-0");
    }

    #[test]
    fn exponent_decimal_lexes_as_decimal() {
        let tokens = Lexer::tokenize("3.14e-2").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Decimal);
        assert_eq!(tokens[0].literal, "3.14e-2");
    }

    #[test]
    fn bare_sign_is_an_operator_not_a_number() {
        let tokens = Lexer::tokenize("x - y").unwrap();
        assert_eq!(literals(&tokens), vec!["x", "-", "y"]);
    }

    #[test]
    fn rejects_exponent_with_no_digits() {
        assert!(Lexer::tokenize("10e").is_err());
    }

    #[test]
    fn rejects_leading_dot_with_no_integer_part() {
        // '.' alone is lexed as an operator, and "1" never merges with a
        // leading-dot fraction - there is no number production for `.1`.
        let tokens = Lexer::tokenize(".1").unwrap();
        assert_eq!(literals(&tokens), vec![".", "1"]);
    }

    #[test]
    fn character_literal_round_trips_escapes() {
        for (src, expected) in [("'a'", "a"), ("'\\n'", "\\n"), ("'\\''", "\\'")] {
            let tokens = Lexer::tokenize(src).unwrap();
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].kind, TokenKind::Character);
            assert_eq!(&tokens[0].literal[1..tokens[0].literal.len() - 1], expected);
        }
    }

    #[test]
    fn string_literal_with_escape() {
        let tokens = Lexer::tokenize(r#""hi\nthere""#).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
    }

    #[test]
    fn newline_in_string_is_an_error() {
        assert!(Lexer::tokenize("\"hi\nthere\"").is_err());
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(Lexer::tokenize("\"hi").is_err());
    }

    #[test]
    fn two_char_operators() {
        let tokens = Lexer::tokenize("<= >= == != < > =").unwrap();
        assert_eq!(literals(&tokens), vec!["<=", ">=", "==", "!=", "<", ">", "="]);
    }

    #[test]
    fn punctuation_outside_the_operator_set_still_lexes_as_an_operator() {
        // The operator production is deliberately permissive: any
        // non-alphanumeric, non-underscore, non-quote, non-whitespace
        // character is consumed as a one-character operator token, even one
        // the parser will never recognize. Rejecting it is the parser's job.
        let tokens = Lexer::tokenize("@").unwrap();
        assert_eq!(literals(&tokens), vec!["@"]);
    }

    #[test]
    fn non_ascii_numeral_is_an_error() {
        // Not an ASCII digit (so it misses the number production) but still
        // alphanumeric by Unicode's definition, so it fails the operator
        // production's non-alphanumeric requirement.
        assert!(Lexer::tokenize("\u{660}").is_err());
    }

    #[test]
    fn identifier_allows_hyphen_continuation() {
        let tokens = Lexer::tokenize("my-var").unwrap();
        assert_eq!(literals(&tokens), vec!["my-var"]);
    }

    // -- Property-based tests - arbitrary inputs, not hand-picked fixtures --

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn arbitrary_identifier_strings_lex_to_one_identifier_token(input in "[a-zA-Z_][a-zA-Z0-9_]{0,30}") {
            let tokens = Lexer::tokenize(&input).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
            prop_assert_eq!(&tokens[0].literal, &input);
        }

        #[test]
        fn arbitrary_digit_strings_lex_to_one_integer_token(input in "[0-9]{1,20}") {
            let tokens = Lexer::tokenize(&input).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
            prop_assert_eq!(&tokens[0].literal, &input);
        }

        #[test]
        fn arbitrary_string_literal_bodies_round_trip_through_the_quotes(body in "[a-zA-Z0-9 ]{0,30}") {
            let source = format!("\"{body}\"");
            let tokens = Lexer::tokenize(&source).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::String);
            prop_assert_eq!(&tokens[0].literal[1..tokens[0].literal.len() - 1], body.as_str());
        }
    }
}
