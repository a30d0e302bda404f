//! Parser state machine and low-level operations.

use indexmap::IndexSet;
use rowan::{TextRange, TextSize};

use super::lexer::{SyntaxKind, Token, token_text};
use crate::Error;
use crate::ast::{Comment, CommentId, CommentKind, Identifier, Program};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Recursion limit used when the caller doesn't set one.
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

#[derive(Debug)]
pub struct ParseResult {
    pub program: Program,
    pub diagnostics: Diagnostics,
}

/// Comments are recorded as the parser steps over them and attached to the
/// next statement that starts.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) comments: Vec<Comment>,
    pub(super) pending_comments: Vec<CommentId>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    last_diagnostic_pos: Option<TextSize>,
    last_end: TextSize,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            comments: Vec::new(),
            pending_comments: Vec::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            last_end: TextSize::from(0),
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
            fatal_error: None,
        }
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<ParseResult, Error> {
        let mut program = self.parse_program();
        if let Some(err) = self.fatal_error.take() {
            return Err(err);
        }
        program.names = self.collect_names();
        program.comments = self.comments;
        Ok(ParseResult {
            program,
            diagnostics: self.diagnostics,
        })
    }

    /// Every identifier token in the source, statements skipped verbatim included.
    fn collect_names(&self) -> IndexSet<String> {
        self.tokens
            .iter()
            .filter(|t| t.kind == SyntaxKind::Ident)
            .map(|t| token_text(self.source, t).to_string())
            .collect()
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(super) fn eof(&self) -> bool {
        self.nth(0) == SyntaxKind::Eof
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    // ------------------------------------------------------------------------
    // Lookahead
    // ------------------------------------------------------------------------

    fn nth_index(&self, n: usize) -> Option<usize> {
        let mut count = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            if !self.tokens[pos].kind.is_trivia() {
                if count == n {
                    return Some(pos);
                }
                count += 1;
            }
            pos += 1;
        }
        None
    }

    /// LL(k) lookahead past trivia. Returns `Eof` past the last token.
    pub(super) fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_index(n)
            .map_or(SyntaxKind::Eof, |idx| self.tokens[idx].kind)
    }

    pub(super) fn nth_text(&self, n: usize) -> &'src str {
        self.nth_index(n)
            .map_or("", |idx| token_text(self.source, &self.tokens[idx]))
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.nth_text(0)
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.nth_index(0).map_or_else(
            || TextRange::empty(self.eof_offset()),
            |idx| self.tokens[idx].span,
        )
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Contextual keyword check.
    pub(super) fn at_keyword(&self, keyword: &str) -> bool {
        self.nth_is_keyword(0, keyword)
    }

    pub(super) fn nth_is_keyword(&self, n: usize, keyword: &str) -> bool {
        self.nth(n) == SyntaxKind::Ident && self.nth_text(n) == keyword
    }

    /// Whether a line break separates the last consumed token from the next one.
    pub(super) fn newline_ahead(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| {
                t.kind == SyntaxKind::LineComment || token_text(self.source, t).contains('\n')
            })
    }

    /// End offset of the last consumed non-trivia token.
    pub(super) fn prev_end(&self) -> TextSize {
        self.last_end
    }

    // ------------------------------------------------------------------------
    // Consumption
    // ------------------------------------------------------------------------

    /// Step over trivia, recording comments as pending.
    pub(super) fn skip_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos).copied() {
            if !token.kind.is_trivia() {
                break;
            }
            if token.kind.is_comment() {
                self.record_comment(token);
            }
            self.pos += 1;
        }
    }

    fn record_comment(&mut self, token: Token) {
        let text = token_text(self.source, &token);
        let (kind, body) = match token.kind {
            SyntaxKind::LineComment => (CommentKind::Line, &text[2..]),
            _ => (CommentKind::Block, &text[2..text.len() - 2]),
        };
        self.pending_comments.push(self.comments.len());
        self.comments.push(Comment {
            kind,
            text: body.to_string(),
            span: token.span,
            ignored: false,
        });
    }

    pub(super) fn take_pending_comments(&mut self) -> Vec<CommentId> {
        std::mem::take(&mut self.pending_comments)
    }

    pub(super) fn bump(&mut self) -> Token {
        self.skip_trivia();
        assert!(self.pos < self.tokens.len(), "bump called at EOF");
        let token = self.tokens[self.pos];
        self.pos += 1;
        self.last_end = token.span.end();
        token
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.at_keyword(keyword) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> Option<Token> {
        if self.at(kind) {
            return Some(self.bump());
        }
        self.error_msg(DiagnosticKind::ExpectedToken, what);
        None
    }

    pub(super) fn expect_keyword(&mut self, keyword: &str) -> Option<Token> {
        if self.at_keyword(keyword) {
            return Some(self.bump());
        }
        self.error_msg(DiagnosticKind::ExpectedToken, keyword);
        None
    }

    pub(super) fn expect_identifier(&mut self) -> Option<Identifier> {
        if !self.at(SyntaxKind::Ident) {
            self.error(DiagnosticKind::ExpectedIdentifier);
            return None;
        }
        let token = self.bump();
        Some(Identifier::new(token_text(self.source, &token), token.span))
    }

    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    pub(super) fn range_from(&self, start: TextSize) -> TextRange {
        TextRange::new(start, self.prev_end().max(start))
    }

    // ------------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------------

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        self.error_at(kind, range, message);
    }

    pub(super) fn error_at(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
    ) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    // ------------------------------------------------------------------------
    // Recursion
    // ------------------------------------------------------------------------

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
