//! wisp-lex - the lexical analysis stage of the wisp toolchain.
//!
//! ```text
//!  source text
//!       |
//!       v
//!  +----------+      skip whitespace / line comments
//!  |  Cursor  | <--- character-class peek/eat/emit vocabulary
//!  +----------+
//!       |
//!       v
//!  +----------+      number | identifier | character | string | operator
//!  |  Lexer   | ---> Token { kind, literal, span }
//!  +----------+
//!       |
//!       v
//!  token sequence, or a LexException at the first illegal character
//! ```
//!
//! The lexer never classifies keywords: `LET`, `IF`, `RETURN` and friends
//! are ordinary [`TokenKind::Identifier`] tokens whose literal text the
//! parser matches against. This keeps the token alphabet fixed at six kinds
//! regardless of how many keywords the language grows: keywords are just
//! identifiers that the parser treats specially.
//!
//! Number literals are tokenized but not decoded: a `Token`'s `literal`
//! field preserves the exact source spelling, and parsing that spelling
//! into a `BigInt`/`BigDecimal` is the parser's job (see `wisp-par`), not
//! this crate's.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::{LexException, LexResult};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
