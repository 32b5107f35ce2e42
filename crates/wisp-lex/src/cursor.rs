//! Cursor - the character stream the lexer drives.
//!
//! The lexer operates against a stream exposing `has(offset)`,
//! `peek(pattern...)`, `match(pattern...)` and `emit()`,
//! where each pattern is "a single-character regex" and a sequence of
//! patterns matches iff every position matches its pattern. [`CharClass`]
//! is the single-character-regex vocabulary the lexer actually needs (digit,
//! identifier characters, whitespace, an exact character, a negated set);
//! [`Cursor`] is the stream itself: byte-position tracking with an ASCII
//! fast path (`char_at`/`advance`), extended with the peek/match/emit
//! vocabulary the grammar is written against.

/// One "single-character regex" class from the lexer's grammar.
#[derive(Clone, Copy, Debug)]
pub enum CharClass {
    /// A specific character, e.g. the closing `'` of a character literal.
    Exact(char),
    /// `[0-9]`
    Digit,
    /// A letter or `_` - legal first character of an identifier.
    IdentStart,
    /// `[A-Za-z0-9_-]` - legal continuation character of an identifier.
    IdentCont,
    /// `[ \b\n\r\t]`
    Whitespace,
    /// Any character not in the given set, e.g. `[^'\n\r\\]`.
    NotIn(&'static [char]),
    /// Matches any character (used to require "there is a character here"
    /// without constraining which one, e.g. the body of a character literal
    /// before we know if it starts an escape).
    Any,
}

impl CharClass {
    pub(crate) fn matches(self, c: char) -> bool {
        match self {
            CharClass::Exact(expected) => c == expected,
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::IdentStart => c.is_alphabetic() || c == '_',
            CharClass::IdentCont => c.is_alphanumeric() || c == '_' || c == '-',
            CharClass::Whitespace => matches!(c, ' ' | '\u{8}' | '\n' | '\r' | '\t'),
            CharClass::NotIn(excluded) => !excluded.contains(&c),
            CharClass::Any => true,
        }
    }
}

/// A character stream over the source text, tracking a byte position and
/// the start of the token currently being accumulated.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    token_start: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, position: 0, token_start: 0 }
    }

    /// Current byte offset - used for error spans.
    pub fn offset(&self) -> usize {
        self.position
    }

    fn char_at(&self, byte_offset_from_here: usize) -> Option<char> {
        self.source[self.position..].get(byte_offset_from_here..)?.chars().next()
    }

    /// Is there a character `offset` *characters* ahead of the cursor?
    pub fn has(&self, offset: usize) -> bool {
        self.nth_char(offset).is_some()
    }

    fn nth_char(&self, n: usize) -> Option<char> {
        self.source[self.position..].chars().nth(n)
    }

    /// Does the character sequence starting at the cursor match `patterns`,
    /// one class per character, without consuming anything?
    pub fn peek(&self, patterns: &[CharClass]) -> bool {
        for (i, class) in patterns.iter().enumerate() {
            match self.nth_char(i) {
                Some(c) if class.matches(c) => continue,
                _ => return false,
            }
        }
        true
    }

    /// Like [`Cursor::peek`], but consumes the matched characters on
    /// success. Consumes nothing and returns `false` on a failed match.
    pub fn eat(&mut self, patterns: &[CharClass]) -> bool {
        if !self.peek(patterns) {
            return false;
        }
        for _ in patterns {
            self.advance();
        }
        true
    }

    /// Consume exactly one character, unconditionally. Does nothing at
    /// end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.nth_char(0) {
            self.position += c.len_utf8();
        }
    }

    /// The substring consumed since the last `emit` (or since the start of
    /// input, for the first token), and resets the accumulator so the next
    /// token starts fresh.
    pub fn emit(&mut self) -> &'a str {
        let text = &self.source[self.token_start..self.position];
        self.token_start = self.position;
        text
    }

    /// True once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn current(&self) -> Option<char> {
        self.nth_char(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_reports_characters_remaining() {
        let cursor = Cursor::new("ab");
        assert!(cursor.has(0));
        assert!(cursor.has(1));
        assert!(!cursor.has(2));
    }

    #[test]
    fn peek_checks_without_consuming() {
        let cursor = Cursor::new("42");
        assert!(cursor.peek(&[CharClass::Digit, CharClass::Digit]));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn eat_consumes_on_match_only() {
        let mut cursor = Cursor::new("-1");
        assert!(!cursor.eat(&[CharClass::Digit]));
        assert!(cursor.eat(&[CharClass::Exact('-'), CharClass::Digit]));
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn emit_resets_accumulator() {
        let mut cursor = Cursor::new("foo bar");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.emit(), "foo");
        cursor.advance();
        assert_eq!(cursor.emit(), " ");
    }
}
