//! Lexer for annotated source.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//! The token set covers the type-annotation grammar; everything else a statement may contain
//! still lexes (possibly as `Unexpected` fragments) so verbatim statements can be skipped.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Unexpected` tokens rather
//! than producing one error per character.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// Opening of an exact object type: `{|`
    #[token("{|")]
    BraceBarOpen,

    /// Closing of an exact object type: `|}`
    #[token("|}")]
    BarBraceClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token("?")]
    Question,

    #[token("|")]
    Pipe,

    #[token("&")]
    Amp,

    #[token("=")]
    Equals,

    #[token("=>")]
    Arrow,

    #[token(".")]
    Dot,

    #[token("...")]
    Ellipsis,

    #[token("*")]
    Star,

    #[token("-")]
    Minus,

    #[token("+")]
    Plus,

    /// String literal (double or single quoted), quotes included. An escaped
    /// line break continues the literal on the next line.
    #[regex(r#""(?:[^"\\\n]|\\(?:\r\n|.|\n))*""#)]
    #[regex(r"'(?:[^'\\\n]|\\(?:\r\n|.|\n))*'")]
    String,

    /// Template literal, only ever skipped.
    #[regex(r"`(?:[^`\\]|\\.)*`")]
    Template,

    #[regex(r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Number,

    #[regex(r"[0-9]+n")]
    BigInt,

    /// Identifiers and keywords alike. Keywords are contextual and checked by text.
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    /// Coalesced run of characters the lexer does not recognize.
    Unexpected,

    /// End of input. Never produced by the lexer, returned by lookahead past the last token.
    Eof,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace | SyntaxKind::LineComment | SyntaxKind::BlockComment
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, SyntaxKind::LineComment | SyntaxKind::BlockComment)
    }

    pub fn is_open_delimiter(self) -> bool {
        matches!(
            self,
            SyntaxKind::BraceOpen
                | SyntaxKind::BraceBarOpen
                | SyntaxKind::ParenOpen
                | SyntaxKind::BracketOpen
        )
    }

    pub fn is_close_delimiter(self) -> bool {
        matches!(
            self,
            SyntaxKind::BraceClose
                | SyntaxKind::BarBraceClose
                | SyntaxKind::ParenClose
                | SyntaxKind::BracketClose
        )
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output to coalesce consecutive lexer errors into single `Unexpected` tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                // Flush accumulated error span before emitting valid token
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        SyntaxKind::Unexpected,
                        range_to_text_range(start..end),
                    ));
                }

                let span = lexer.span();
                tokens.push(Token::new(kind, range_to_text_range(span)));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        SyntaxKind::Unexpected,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

/// Decode the contents of a quoted string token.
///
/// Handles the single-character escapes, `\xHH`, `\uXXXX` (surrogate pairs
/// included), `\u{X...}` and line continuations. A malformed escape keeps its
/// characters as written.
pub fn unquote(text: &str) -> String {
    let inner = text
        .get(1..text.len().saturating_sub(1))
        .unwrap_or_default();

    let mut out = String::with_capacity(inner.len());
    let mut rest = inner;
    while let Some(at) = rest.find('\\') {
        out.push_str(&rest[..at]);
        let escape = &rest[at + 1..];
        let (decoded, consumed) = decode_escape(escape);
        if let Some(c) = decoded {
            out.push(c);
        }
        rest = &escape[consumed..];
    }
    out.push_str(rest);
    out
}

/// Decode one escape sequence following a backslash. Returns the character
/// (`None` for a line continuation) and how many bytes were consumed.
fn decode_escape(escape: &str) -> (Option<char>, usize) {
    let Some(first) = escape.chars().next() else {
        return (None, 0);
    };
    let simple = match first {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        '0' if !escape[1..].starts_with(|c: char| c.is_ascii_digit()) => Some('\0'),
        _ => None,
    };
    if let Some(c) = simple {
        return (Some(c), 1);
    }

    match first {
        '\n' => (None, 1),
        '\r' if escape[1..].starts_with('\n') => (None, 2),
        '\r' => (None, 1),
        'x' => match hex_digits(&escape[1..], 2) {
            Some(code) => (char::from_u32(code), 3),
            None => (Some('x'), 1),
        },
        'u' => decode_unicode(escape),
        other => (Some(other), other.len_utf8()),
    }
}

/// `\uXXXX`, a `\uXXXX\uXXXX` surrogate pair, or `\u{X...}`.
fn decode_unicode(escape: &str) -> (Option<char>, usize) {
    let body = &escape[1..];
    if let Some(braced) = body.strip_prefix('{') {
        let Some(close) = braced.find('}') else {
            return (Some('u'), 1);
        };
        let code = u32::from_str_radix(&braced[..close], 16).ok();
        return match code.and_then(char::from_u32) {
            Some(c) if close > 0 => (Some(c), close + 3),
            _ => (Some('u'), 1),
        };
    }

    let Some(high) = hex_digits(body, 4) else {
        return (Some('u'), 1);
    };
    if (0xD800..0xDC00).contains(&high)
        && let Some(low_escape) = body[4..].strip_prefix("\\u")
        && let Some(low) = hex_digits(low_escape, 4)
        && (0xDC00..0xE000).contains(&low)
    {
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return (char::from_u32(code), 11);
    }
    (Some(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER)), 5)
}

/// Exactly `count` leading hex digits of `text`.
fn hex_digits(text: &str, count: usize) -> Option<u32> {
    let digits = text.get(..count)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
